//! Test doubles for the collector.
//!
//! `MockHost` stands in for a device when testing field resolution and
//! report assembly. `MockFs` simulates `build.prop` and `/proc/net` so the
//! procfs-backed host can be tested without a real device.

mod filesystem;
mod host;
mod scenarios;

pub use filesystem::MockFs;
pub use host::MockHost;
