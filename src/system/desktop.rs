//! Probes for the optional freedesktop helper executables.

use std::path::Path;

use super::{SystemInfo, memoize};

impl SystemInfo {
    /// Whether `xdg-open` is available for opening files and URLs.
    ///
    /// Only probed on X11-based Unix systems; elsewhere this is false
    /// without touching the filesystem. The probe runs at most once.
    pub fn has_xdg_open(&self) -> bool {
        self.is_x_window()
            && *memoize(&self.xdg_open, || {
                probe_executable(&self.props.unix_bin_dir.join("xdg-open"))
            })
    }

    /// Whether `xdg-mime` is available for MIME-type queries.
    pub fn has_xdg_mime(&self) -> bool {
        self.is_x_window()
            && *memoize(&self.xdg_mime, || {
                probe_executable(&self.props.unix_bin_dir.join("xdg-mime"))
            })
    }
}

#[cfg(unix)]
fn probe_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file() && metadata.permissions().mode() & 0o111 != 0,
        Err(err) => {
            log::debug!("{} not usable: {err}", path.display());
            false
        }
    }
}

#[cfg(not(unix))]
fn probe_executable(_path: &Path) -> bool {
    false
}
