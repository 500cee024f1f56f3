//! Command implementations for OxiHuff CLI.

pub mod decode;
pub mod encode;

pub use decode::cmd_decode;
pub use encode::{EncodeOptions, cmd_encode};
