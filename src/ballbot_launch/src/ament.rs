//! Ament index lookup for installed ROS 2 packages

use std::path::{Path, PathBuf};

/// Installed package prefixes, in priority order.
///
/// Built from a colon-separated `AMENT_PREFIX_PATH`. Earlier prefixes win
/// when a package is installed more than once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmentIndex {
    prefixes: Vec<PathBuf>,
}

impl AmentIndex {
    /// Read prefixes from the `AMENT_PREFIX_PATH` environment variable.
    pub fn from_env() -> Self {
        match std::env::var("AMENT_PREFIX_PATH") {
            Ok(path) => Self::from_path(&path),
            Err(_) => {
                log::debug!("AMENT_PREFIX_PATH is not set, package lookups will fail");
                Self::default()
            }
        }
    }

    /// Create an index from a colon-separated prefix path string.
    pub fn from_path(path: &str) -> Self {
        let prefixes = path
            .split(':')
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }

    /// Returns the prefix that installed `package`, or `None` if not found.
    pub fn package_prefix(&self, package: &str) -> Option<&Path> {
        self.prefixes
            .iter()
            .find(|prefix| package_marker(prefix, package).is_file())
            .map(PathBuf::as_path)
    }

    /// Returns `<prefix>/share/<package>`.
    pub fn share_directory(&self, package: &str) -> Option<PathBuf> {
        self.package_prefix(package)
            .map(|prefix| prefix.join("share").join(package))
    }

    /// Returns `<prefix>/lib/<package>/<executable>` if the file exists.
    pub fn executable_path(&self, package: &str, executable: &str) -> Option<PathBuf> {
        let path = self
            .package_prefix(package)?
            .join("lib")
            .join(package)
            .join(executable);
        if path.is_file() {
            Some(path)
        } else {
            None
        }
    }
}

fn package_marker(prefix: &Path, package: &str) -> PathBuf {
    prefix
        .join("share")
        .join("ament_index")
        .join("resource_index")
        .join("packages")
        .join(package)
}
