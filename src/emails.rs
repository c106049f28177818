//! Email input normalization
//!
//! Flattens `--email`/`--emails` values and an optional emails file into one
//! ordered, de-duplicated list.

use log::{debug, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::config::emails;
use crate::error::{Result, TfeError};

/// Split raw tokens on commas and whitespace, trim, drop empties and
/// duplicates (first occurrence wins) and tokens that cannot be an email.
pub fn parse_email_tokens<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for token in tokens {
        for candidate in token
            .as_ref()
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::trim)
            .filter(|c| !c.is_empty())
        {
            if !candidate.contains('@') {
                warn!("Ignoring '{}': not an email address", candidate);
                continue;
            }
            if seen.insert(candidate.to_string()) {
                result.push(candidate.to_string());
            } else {
                debug!("Skipping duplicate email {}", candidate);
            }
        }
    }

    result
}

/// Extract email tokens from an emails file's content
///
/// Blank lines and `#` comment lines are skipped.
pub fn file_tokens(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(emails::COMMENT_MARKER))
        .collect()
}

/// Check the emails file extension
pub fn validate_emails_file(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == emails::FILE_EXTENSION => Ok(()),
        _ => Err(TfeError::Input(format!(
            "emails file '{}' must have a .{} extension",
            path.display(),
            emails::FILE_EXTENSION
        ))),
    }
}

/// Collect the final email list from inline values and an optional file
///
/// Inline emails come first, followed by file emails.
pub fn collect_emails(inline: &[String], file: Option<&Path>) -> Result<Vec<String>> {
    if inline.is_empty() && file.is_none() {
        return Err(TfeError::Config(
            "no emails supplied; use --email/--emails or --emails-file".to_string(),
        ));
    }

    let mut tokens: Vec<String> = inline.to_vec();

    if let Some(path) = file {
        validate_emails_file(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            TfeError::Input(format!(
                "could not read emails file '{}': {}",
                path.display(),
                e
            ))
        })?;
        tokens.extend(file_tokens(&content).into_iter().map(str::to_string));
    }

    let emails = parse_email_tokens(&tokens);
    if emails.is_empty() {
        return Err(TfeError::Input("no valid emails provided".to_string()));
    }

    debug!("Normalized {} email(s): {:?}", emails.len(), emails);
    Ok(emails)
}
