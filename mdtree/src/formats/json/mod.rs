//! JSON dump of a conversion
//!
//! Serializes the semantic tree through serde. Table cells appear twice, once per row in `body`
//! and once in the flat `children` list, mirroring the in-memory dual view.
//!
//! Parameters
//!     diagnostics: include the diagnostics list alongside the tree (default true)

use crate::build::Conversion;
use crate::error::Error;
use crate::format::{bool_param, Format};
use std::collections::HashMap;

pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON of the semantic tree"
    }

    fn serialize(&self, conversion: &Conversion) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(conversion)?)
    }

    fn serialize_with_params(
        &self,
        conversion: &Conversion,
        params: &HashMap<String, String>,
    ) -> Result<String, Error> {
        if bool_param(params, "diagnostics", true) {
            self.serialize(conversion)
        } else {
            Ok(serde_json::to_string_pretty(&conversion.root)?)
        }
    }
}
