#![deny(missing_docs)]

//! # Delimiter Templates
//!
//! Path variables and shadow directories are marked by a pair of delimiter
//! characters, configured as a short template such as `{var}` or `(group)`.
//! Only the first and last character of a template are significant.

use crate::error::{AppError, AppResult};

/// Fallback used when neither the user nor the caller provide a template.
pub const DEFAULT_PATH_VARS_TEMPLATE: &str = "{var}";

/// An ordered `(open, close)` delimiter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    /// Opening character.
    pub open: char,
    /// Closing character.
    pub close: char,
}

/// Resolves a user supplied template into its delimiter pair.
///
/// An absent or empty `user_template` falls back to `default_template`, which in
/// turn falls back to [`DEFAULT_PATH_VARS_TEMPLATE`].
///
/// # Examples
/// ```
/// use fsapi_core::template::resolve_template;
///
/// let d = resolve_template(Some("[id]"), "{var}").unwrap();
/// assert_eq!((d.open, d.close), ('[', ']'));
///
/// let d = resolve_template(None, "{var}").unwrap();
/// assert_eq!((d.open, d.close), ('{', '}'));
/// ```
pub fn resolve_template(
    user_template: Option<&str>,
    default_template: &str,
) -> AppResult<Delimiters> {
    let template = match user_template {
        Some(t) if !t.is_empty() => t,
        _ => return resolve_template(Some(default_template), DEFAULT_PATH_VARS_TEMPLATE),
    };

    let mut chars = template.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close)) => Ok(Delimiters { open, close }),
        _ => Err(AppError::TemplateParse(template.to_string())),
    }
}
