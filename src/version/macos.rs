//! macOS version part extraction and the fixed-width numeric codes some
//! consumers key resources off (`"10.9.5"` becomes `"1095"`).

/// Splits a dotted version string into exactly (major, minor, patch).
///
/// Missing trailing components pad with 0; a component that does not
/// parse as a number also becomes 0.
pub fn macos_version_parts(version: &str) -> (u32, u32, u32) {
    let mut parts = version.split('.').map(|part| part.parse().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

/// `"major.minor"` with both components normalized to numbers.
pub fn macos_major_version(version: &str) -> String {
    let (major, minor, _) = macos_version_parts(version);
    format!("{major}.{minor}")
}

/// Full version code: two-digit major, then minor and patch each clamped
/// to a single digit.
pub fn macos_version_code(version: &str) -> String {
    let (major, minor, patch) = macos_version_parts(version);
    format!("{major:02}{}{}", clamp_digit(minor), clamp_digit(patch))
}

/// Same as [`macos_version_code`] with the patch slot forced to 0.
pub fn macos_major_version_code(version: &str) -> String {
    let (major, minor, _) = macos_version_parts(version);
    format!("{major:02}{}0", clamp_digit(minor))
}

/// Minor code: two two-digit fields, minor then patch, no clamping.
pub fn macos_minor_version_code(version: &str) -> String {
    let (_, minor, patch) = macos_version_parts(version);
    format!("{minor:02}{patch:02}")
}

// Version codes reserve one digit per slot past the major component.
fn clamp_digit(number: u32) -> u32 {
    number.min(9)
}
