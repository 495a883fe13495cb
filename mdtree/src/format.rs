//! Format trait definition
//!
//! Formats render a built [`Conversion`] as text for inspection. They are debugging views of the
//! semantic tree, not presentation output.

use crate::build::Conversion;
use crate::error::Error;
use std::collections::HashMap;

/// Trait for inspection formats
///
/// # Examples
///
/// ```ignore
/// struct KindsFormat;
///
/// impl Format for KindsFormat {
///     fn name(&self) -> &str {
///         "kinds"
///     }
///
///     fn serialize(&self, conversion: &Conversion) -> Result<String, Error> {
///         Ok(conversion.root.children.iter().map(|b| b.kind().to_string()).collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "treeviz", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Serialize a conversion into text
    fn serialize(&self, conversion: &Conversion) -> Result<String, Error>;

    /// Serialize a conversion, optionally using extra parameters.
    ///
    /// Formats without parameters can rely on the default implementation, which ignores them.
    fn serialize_with_params(
        &self,
        conversion: &Conversion,
        _params: &HashMap<String, String>,
    ) -> Result<String, Error> {
        self.serialize(conversion)
    }
}

/// Read a boolean parameter, `default` when absent.
pub fn bool_param(params: &HashMap<String, String>, key: &str, default: bool) -> bool {
    params
        .get(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes" | "y"))
        .unwrap_or(default)
}
