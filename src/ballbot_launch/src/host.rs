//! Host environment probing
//!
//! Decides whether the launch runs under WSL, which picks the terminal
//! emulator that wraps the interactive nodes.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kernel identification file consulted by [`probe_default_host`].
pub const PROC_VERSION_PATH: &str = "/proc/version";

const WSL_MARKERS: &[&str] = &["microsoft", "wsl"];

/// Terminal prefix used on WSL hosts.
pub const WSL_TERMINAL_PREFIX: &str = "xterm -e";
/// Terminal prefix used on native Linux hosts.
pub const NATIVE_TERMINAL_PREFIX: &str = "gnome-terminal --";

/// Host classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Windows Subsystem for Linux
    Wsl,
    Native,
}

impl HostKind {
    /// Command prefix that opens a new terminal window for a node.
    pub fn terminal_prefix(self) -> &'static str {
        match self {
            HostKind::Wsl => WSL_TERMINAL_PREFIX,
            HostKind::Native => NATIVE_TERMINAL_PREFIX,
        }
    }

    /// Human-readable line describing the terminal decision.
    pub fn diagnostic(self) -> &'static str {
        match self {
            HostKind::Wsl => "Current system is WSL, use xterm as terminal",
            HostKind::Native => "Current system is not WSL, use gnome-terminal as terminal",
        }
    }
}

/// Classify a kernel version string.
pub fn classify_version_text(text: &str) -> HostKind {
    let lowered = text.to_lowercase();
    if WSL_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        HostKind::Wsl
    } else {
        HostKind::Native
    }
}

/// Probe the identification file at `path`.
///
/// Never fails: a missing file means a native host, and any other read
/// error is logged and treated the same way.
pub fn probe_host(path: &Path) -> HostKind {
    match std::fs::read(path) {
        Ok(bytes) => {
            let kind = classify_version_text(&String::from_utf8_lossy(&bytes));
            log::debug!("Classified host as {:?} from {}", kind, path.display());
            kind
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("{} not found, assuming native host", path.display());
            HostKind::Native
        }
        Err(e) => {
            log::warn!(
                "Failed to read {}: {}, assuming native host",
                path.display(),
                e
            );
            HostKind::Native
        }
    }
}

/// Probe `/proc/version`.
pub fn probe_default_host() -> HostKind {
    probe_host(Path::new(PROC_VERSION_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_classify_wsl2_kernel() {
        let text = "Linux version 5.15.90.1-microsoft-standard-WSL2 (oe-user@oe-host) (gcc 11.2.0)";
        assert_eq!(classify_version_text(text), HostKind::Wsl);
    }

    #[test]
    fn test_classify_wsl1_kernel() {
        let text = "Linux version 4.4.0-19041-Microsoft (Microsoft@Microsoft.com) (gcc 5.4.0)";
        assert_eq!(classify_version_text(text), HostKind::Wsl);
    }

    #[test]
    fn test_classify_markers_case_insensitive() {
        assert_eq!(classify_version_text("MICROSOFT"), HostKind::Wsl);
        assert_eq!(classify_version_text("custom-Wsl-build"), HostKind::Wsl);
    }

    #[test]
    fn test_classify_native_kernel() {
        let text = "Linux version 6.5.0-35-generic (buildd@lcy02-amd64-079) (gcc 12.3.0)";
        assert_eq!(classify_version_text(text), HostKind::Native);
    }

    #[test]
    fn test_classify_empty() {
        assert_eq!(classify_version_text(""), HostKind::Native);
    }

    #[test]
    fn test_probe_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let kind = probe_host(&dir.path().join("version"));
        assert_eq!(kind, HostKind::Native);
    }

    #[test]
    fn test_probe_wsl_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Linux version 5.10.16.3-microsoft-standard-WSL2").unwrap();
        file.flush().unwrap();

        assert_eq!(probe_host(file.path()), HostKind::Wsl);
    }

    #[test]
    fn test_probe_non_utf8_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Linux \xff\xfe version microsoft").unwrap();
        file.flush().unwrap();

        assert_eq!(probe_host(file.path()), HostKind::Wsl);
    }

    #[test]
    fn test_probe_directory_falls_back_to_native() {
        // Reading a directory fails with an error other than NotFound
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(probe_host(dir.path()), HostKind::Native);
    }

    #[test]
    fn test_terminal_prefixes() {
        assert_eq!(HostKind::Wsl.terminal_prefix(), "xterm -e");
        assert_eq!(HostKind::Native.terminal_prefix(), "gnome-terminal --");
    }

    #[test]
    fn test_diagnostics() {
        assert!(HostKind::Wsl.diagnostic().contains("is WSL"));
        assert!(HostKind::Native.diagnostic().contains("not WSL"));
    }
}
