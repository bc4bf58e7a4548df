//! Unix release-info lookup (`/etc/os-release`).
//!
//! Format reference: <https://www.freedesktop.org/software/systemd/man/os-release.html>

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use super::{SystemInfo, memoize};

impl SystemInfo {
    /// Distribution name from the release file (`NAME=`), e.g. `"Ubuntu"`.
    pub fn unix_release_name(&self) -> Option<&str> {
        self.release_info().get("NAME").map(String::as_str)
    }

    /// Distribution version from the release file (`VERSION=`).
    pub fn unix_release_version(&self) -> Option<&str> {
        self.release_info().get("VERSION").map(String::as_str)
    }

    /// Parsed release file, read at most once. Empty on non-Unix and
    /// macOS hosts and after any read failure.
    fn release_info(&self) -> &HashMap<String, String> {
        memoize(&self.os_release, || {
            if self.is_unix() && !self.is_mac() {
                read_release_file(&self.props.os_release_path)
            } else {
                HashMap::new()
            }
        })
    }
}

fn read_release_file(path: &Path) -> HashMap<String, String> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_release_info(&text),
        Err(err) => {
            debug!("could not read {}: {err}", path.display());
            HashMap::new()
        }
    }
}

/// Splits each line on the first `=`; the key must be non-empty and the
/// value is trimmed and unquoted. Pairs with a blank key or value are
/// dropped, as are lines without a separator.
fn parse_release_info(text: &str) -> HashMap<String, String> {
    let mut info = HashMap::new();
    for line in text.lines() {
        let Some(pos) = line.find('=') else { continue };
        if pos == 0 {
            continue;
        }
        let key = &line[..pos];
        let value = unquote(line[pos + 1..].trim());
        if key.trim().is_empty() || value.trim().is_empty() {
            continue;
        }
        info.insert(key.to_string(), value.to_string());
    }
    info
}

/// Strips one matching pair of surrounding double or single quotes.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
