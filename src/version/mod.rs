use crate::error::{HostInfoError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

pub mod macos;

/// Compares two version strings segment by segment.
///
/// Segments are split on `.`, `_` and `-` and compared numerically. A
/// missing segment counts as 0 (so `"10.10"` and `"10.10.0"` are equal),
/// and so does a segment that does not parse as a number. Total over all
/// inputs; never fails.
pub fn compare_version_numbers(a: &str, b: &str) -> Ordering {
    let left = segments(a);
    let right = segments(b);
    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Returns true if `actual` is the same version as `required` or newer.
pub fn version_at_least(actual: &str, required: &str) -> bool {
    compare_version_numbers(actual, required) != Ordering::Less
}

fn segments(version: &str) -> Vec<u64> {
    version
        .split(['.', '_', '-'])
        .map(|part| part.trim().parse().unwrap_or(0))
        .collect()
}

/// A validated dotted-numeric version.
///
/// Unlike [`compare_version_numbers`], parsing is strict: every segment
/// must be numeric. The derived ordering is lexicographic over the
/// components (`21` sorts before `21.0`); use [`Version::at_least`] for
/// the padded comparison where `21` and `21.0` are equivalent.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub components: Vec<u32>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            components: vec![major, minor, patch],
        }
    }

    pub fn major(&self) -> u32 {
        self.components.first().copied().unwrap_or(0)
    }

    pub fn minor(&self) -> Option<u32> {
        self.components.get(1).copied()
    }

    pub fn patch(&self) -> Option<u32> {
        self.components.get(2).copied()
    }

    /// Padded comparison: missing components count as 0.
    pub fn at_least(&self, other: &Version) -> bool {
        for i in 0..self.components.len().max(other.components.len()) {
            let l = self.components.get(i).copied().unwrap_or(0);
            let r = other.components.get(i).copied().unwrap_or(0);
            match l.cmp(&r) {
                Ordering::Equal => continue,
                Ordering::Greater => return true,
                Ordering::Less => return false,
            }
        }
        true
    }
}

impl FromStr for Version {
    type Err = HostInfoError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(HostInfoError::InvalidVersionFormat(s.to_string()));
        }

        let components: Result<Vec<u32>> = s
            .split('.')
            .map(|part| {
                part.parse::<u32>()
                    .map_err(|_| HostInfoError::InvalidVersionFormat(s.to_string()))
            })
            .collect();

        Ok(Version {
            components: components?,
        })
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}
