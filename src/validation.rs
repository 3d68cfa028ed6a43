//! Identifier validation for project, profile and monitor names.
//!
//! Monitor IDs show up in reports and event labels, and project names are
//! written into scaffolded files, so all of them share one conservative
//! character set.

use anyhow::{bail, Result};

/// Maximum allowed length for IDs (project, profile, monitor).
pub const MAX_ID_LENGTH: usize = 128;

/// Reserved names that cannot be used as IDs (case-insensitive).
const RESERVED_NAMES: &[&str] = &[".", "..", "con", "prn", "aux", "nul"];

/// Validates that an ID is usable as a project, profile or monitor name.
///
/// An ID is valid if it is non-empty, at most `MAX_ID_LENGTH` characters,
/// made only of ASCII alphanumerics, dashes and underscores, and not a
/// reserved name.
///
/// # Examples
///
/// ```
/// use vigil::validation::validate_id;
///
/// assert!(validate_id("api-health").is_ok());
/// assert!(validate_id("nightly_export").is_ok());
/// assert!(validate_id("").is_err());
/// assert!(validate_id("../etc").is_err());
/// ```
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("ID cannot be empty");
    }

    if id.len() > MAX_ID_LENGTH {
        bail!(
            "ID too long: {} characters (max {})",
            id.len(),
            MAX_ID_LENGTH
        );
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid_chars {
        bail!("ID '{id}' contains invalid characters. Use only alphanumeric characters, dashes (-), and underscores (_)");
    }

    if RESERVED_NAMES.contains(&id.to_lowercase().as_str()) {
        bail!("ID '{id}' uses a reserved name");
    }

    Ok(())
}

/// Turn an arbitrary name (usually a directory name) into a valid ID.
///
/// Invalid characters become dashes and the result is truncated to
/// `MAX_ID_LENGTH`. Returns `None` when nothing usable remains.
pub fn sanitize_id(raw: &str) -> Option<String> {
    let mapped: String = raw
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .take(MAX_ID_LENGTH)
        .collect();
    let trimmed = mapped.trim_matches('-').to_string();

    validate_id(&trimmed).ok().map(|_| trimmed)
}

/// Clap value parser for ID arguments.
pub fn clap_id_validator(s: &str) -> Result<String, String> {
    validate_id(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
