//! emvdeviceinfo - EMV 3-D Secure device parameter collection.
//!
//! Resolves a fixed catalog of device parameters (`C001`..`C010`) against a
//! read-only host view and serializes them into the `DV`/`DD`/`DPNA`/`SW`
//! JSON envelope.
//!
//! - `model` — field keys, error codes, per-field results
//! - `versions` — SDK level to release codename table
//! - `collector` — host abstraction, field resolution, procfs and mock hosts
//! - `report` — report assembly and serialization
//!
//! ```
//! use emvdeviceinfo::collector::MockHost;
//! use emvdeviceinfo::get_device_info;
//!
//! let json = get_device_info(&MockHost::typical_device());
//! assert!(json.starts_with(r#"{"DV":"1.0.0","DD":{"C001":"Android""#));
//! ```

pub mod collector;
pub mod model;
pub mod report;
pub mod versions;

pub use report::{Report, ReportBuilder, SecurityCheck, get_device_info};
