//! Abstractions over the host the collector runs on.
//!
//! `HostContext` is the single read-only view of the device that field
//! resolvers consult. `FileSystem` lets the procfs-backed host read
//! `build.prop` and `/proc/net/*` either from disk or from memory in tests.

use std::fmt;
use std::io;
use std::path::Path;

use crate::model::Permission;

/// Build metadata of the running system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildInfo {
    pub manufacturer: String,
    pub model: String,
    /// Release version string (e.g. "14"), `None` when the build does not report one.
    pub release: Option<String>,
    /// Numeric API level (e.g. 34).
    pub sdk_int: u32,
}

/// Default locale of the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub country: String,
}

impl Locale {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }
}

/// Link properties of the active network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkProperties {
    /// Interface name (e.g. "wlan0").
    pub interface: String,
    /// Textual host addresses in link order.
    pub addresses: Vec<String>,
}

/// The connectivity subsystem could not be queried.
#[derive(Debug)]
pub enum ConnectivityError {
    /// The subsystem does not exist on this host.
    Unavailable(String),
    /// I/O error reading network state.
    Io(io::Error),
}

impl fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityError::Unavailable(msg) => {
                write!(f, "connectivity unavailable: {}", msg)
            }
            ConnectivityError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ConnectivityError {}

impl From<io::Error> for ConnectivityError {
    fn from(e: io::Error) -> Self {
        ConnectivityError::Io(e)
    }
}

/// Read-only access to the device state needed by the field resolvers.
pub trait HostContext {
    /// Manufacturer, model and OS version metadata.
    fn build_info(&self) -> BuildInfo;

    /// Default locale.
    fn default_locale(&self) -> Locale;

    /// Whether `permission` has been granted to the caller.
    fn is_permission_granted(&self, permission: Permission) -> bool;

    /// Link properties of the currently active network.
    ///
    /// # Returns
    /// `Ok(None)` when there is no active network, `Err` when the
    /// connectivity subsystem itself cannot be queried.
    fn active_link(&self) -> Result<Option<LinkProperties>, ConnectivityError>;
}

/// Abstraction for read-only filesystem access.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Checks if a path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_fs_read_to_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.prop");
        std::fs::write(&path, "ro.product.model=Pixel 8\n").unwrap();

        let fs = RealFs::new();
        assert_eq!(
            fs.read_to_string(&path).unwrap(),
            "ro.product.model=Pixel 8\n"
        );
    }

    #[test]
    fn test_real_fs_exists() {
        let dir = tempfile::tempdir().unwrap();
        let fs = RealFs::new();
        assert!(fs.exists(dir.path()));
        assert!(!fs.exists(&dir.path().join("missing")));
        assert!(fs.read_to_string(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn test_connectivity_error_display() {
        let err = ConnectivityError::Unavailable("no route table".to_string());
        assert_eq!(err.to_string(), "connectivity unavailable: no route table");

        let err: ConnectivityError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(err.to_string().starts_with("I/O error"));
    }
}
