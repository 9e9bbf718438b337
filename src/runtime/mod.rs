//! Identity of the toolchain that compiled this binary.
//!
//! Rust has no runtime property for its own version, so `build.rs` captures
//! the `rustc -V` line and the target triple at build time. This module turns
//! those raw facts into a [`RuntimeInfo`], falling back to
//! [`UNKNOWN`](crate::versioning::UNKNOWN) for anything missing.

use thiserror::Error;

use crate::versioning::{OFFICIAL_VENDOR, UNKNOWN};

const BUILD_RUSTC_VERSION: Option<&str> = option_env!("HELLO_RUSTC_VERSION");
const BUILD_TARGET: Option<&str> = option_env!("HELLO_TARGET");

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("not a rustc version line: {0:?}")]
    NotRustc(String),
    #[error("rustc version line has no release: {0:?}")]
    MissingRelease(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RustcVersion {
    pub release: String,
    pub commit: Option<String>,
    pub description: Option<String>,
}

impl RustcVersion {
    pub fn vendor(&self) -> Option<&str> {
        match (&self.description, &self.commit) {
            (Some(desc), _) => Some(desc.as_str()),
            (None, Some(_)) => Some(OFFICIAL_VENDOR),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub version: String,
    pub vendor: String,
    pub target: String,
}

impl RuntimeInfo {
    /// Values captured when this crate was compiled.
    pub fn detect() -> Self {
        Self::from_probe(BUILD_RUSTC_VERSION, BUILD_TARGET)
    }

    pub fn from_probe(version_line: Option<&str>, target: Option<&str>) -> Self {
        let (version, vendor) = match non_empty(version_line).map(parse_rustc_version) {
            Some(Ok(parsed)) => {
                let vendor = parsed.vendor().map(str::to_string);
                (Some(parsed.release), vendor)
            }
            Some(Err(err)) => {
                tracing::warn!(error = %err, "ignoring unparsable rustc version");
                (None, None)
            }
            None => {
                tracing::debug!("no rustc version captured at build time");
                (None, None)
            }
        };

        Self {
            version: version.unwrap_or_else(|| UNKNOWN.to_string()),
            vendor: vendor.unwrap_or_else(|| UNKNOWN.to_string()),
            target: non_empty(target).unwrap_or(UNKNOWN).to_string(),
        }
    }
}

/// Parses the output of `rustc -V`, e.g.
/// `rustc 1.80.0 (051478957 2024-07-21) (Homebrew)`.
pub fn parse_rustc_version(line: &str) -> Result<RustcVersion, ProbeError> {
    let line = line.trim();
    let rest = line
        .strip_prefix("rustc ")
        .ok_or_else(|| ProbeError::NotRustc(line.to_string()))?;

    let rest = rest.trim_start();
    let (release, tail) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    if release.is_empty() || release.starts_with('(') {
        return Err(ProbeError::MissingRelease(line.to_string()));
    }

    let mut groups = paren_groups(tail).into_iter();
    Ok(RustcVersion {
        release: release.to_string(),
        commit: groups.next(),
        description: groups.next(),
    })
}

// Top-level `( ... )` groups, nesting respected, empty groups dropped.
fn paren_groups(s: &str) -> Vec<String> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut current = String::new();
    for ch in s.chars() {
        match ch {
            '(' => {
                if depth > 0 {
                    current.push(ch);
                }
                depth += 1;
            }
            ')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    let group = current.trim();
                    if !group.is_empty() {
                        groups.push(group.to_string());
                    }
                    current.clear();
                } else {
                    current.push(ch);
                }
            }
            _ if depth > 0 => current.push(ch),
            _ => {}
        }
    }
    groups
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_groups_stay_whole() {
        assert_eq!(
            paren_groups(" (abc 2024-01-01) (built (locally))"),
            vec!["abc 2024-01-01".to_string(), "built (locally)".to_string()]
        );
    }

    #[test]
    fn blank_probe_values_fall_back() {
        let info = RuntimeInfo::from_probe(Some("  "), Some(""));
        assert_eq!(info.version, UNKNOWN);
        assert_eq!(info.vendor, UNKNOWN);
        assert_eq!(info.target, UNKNOWN);
    }
}
