//! In-memory mock filesystem for testing the procfs-backed host.

use crate::collector::traits::FileSystem;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

/// In-memory filesystem for testing.
///
/// Stores files and their parent directories in memory, allowing tests to
/// simulate device states without reading a real `build.prop` or `/proc`.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    /// Map from path to file contents.
    files: HashMap<PathBuf, String>,
    /// Every ancestor directory of an added file.
    directories: HashSet<PathBuf>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    ///
    /// Parent directories are automatically created.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        let path = path.as_ref().to_path_buf();

        let mut parent = path.parent();
        while let Some(p) = parent {
            if !p.as_os_str().is_empty() {
                self.directories.insert(p.to_path_buf());
            }
            parent = p.parent();
        }

        self.files.insert(path, content.into());
    }

    /// Removes a file, simulating a node the host does not expose.
    pub fn remove_file(&mut self, path: impl AsRef<Path>) {
        self.files.remove(path.as_ref());
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("file not found: {:?}", path),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_fs_add_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/net/route", "Iface\tDestination\n");

        assert!(fs.exists(Path::new("/proc/net/route")));
        assert!(fs.exists(Path::new("/proc/net")));
        assert!(fs.exists(Path::new("/proc")));

        let content = fs.read_to_string(Path::new("/proc/net/route")).unwrap();
        assert_eq!(content, "Iface\tDestination\n");
    }

    #[test]
    fn test_mock_fs_missing_file() {
        let mut fs = MockFs::new();
        fs.add_file("/system/build.prop", "");
        fs.remove_file("/system/build.prop");

        let err = fs.read_to_string(Path::new("/system/build.prop")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(!fs.exists(Path::new("/system/build.prop")));
    }
}
