//! Host backed by Android `build.prop` and the Linux `/proc/net` tables.
//!
//! Lets the collector run as a native process on a device, or against a
//! captured copy of those files.

mod host;
pub mod parser;

pub use host::ProcfsHost;
pub use parser::ParseError;
