//! Inspection formats
//!
//! Text renderings of a built tree, meant for looking at what the builders produced.

pub mod icons;
pub mod json;
pub mod treeviz;

pub use json::JsonFormat;
pub use treeviz::TreevizFormat;
