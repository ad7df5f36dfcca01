//! Device parameter collector.
//!
//! This module resolves each catalog field against a read-only view of the
//! host, with support for mocking so resolution can be tested off-device.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      FieldCollector                         │
//! │   C001 … C010  ──►  FetchResult::{Success, Failure}         │
//! │                            │                                │
//! │                     ┌──────▼──────┐                         │
//! │                     │ HostContext │ (trait)                 │
//! │                     └──────┬──────┘                         │
//! └────────────────────────────┼────────────────────────────────┘
//!                              │
//!              ┌───────────────┴───────────────┐
//!              │                               │
//!       ┌──────▼──────┐                 ┌──────▼──────┐
//!       │ ProcfsHost  │                 │  MockHost   │
//!       │ build.prop  │                 │  (Testing)  │
//!       │ /proc/net   │                 └─────────────┘
//!       └──────┬──────┘
//!              │
//!       ┌──────▼──────┐
//!       │ FileSystem  │ (trait: RealFs, MockFs)
//!       └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use emvdeviceinfo::collector::{FieldCollector, MockHost};
//! use emvdeviceinfo::model::{FetchResult, FieldKey};
//!
//! let host = MockHost::typical_device();
//! let collector = FieldCollector::new(&host);
//! assert_eq!(
//!     collector.resolve(FieldKey::IpAddress),
//!     FetchResult::Success("192.168.1.5".to_string())
//! );
//! ```

mod fields;
pub mod mock;
pub mod procfs;
pub mod traits;

pub use fields::FieldCollector;
pub use mock::{MockFs, MockHost};
pub use procfs::ProcfsHost;
pub use traits::{
    BuildInfo, ConnectivityError, FileSystem, HostContext, LinkProperties, Locale, RealFs,
};
