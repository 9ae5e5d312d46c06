//! Credential resolution
//!
//! A credential is usable only when it resolves to a non-empty value that is
//! not a template placeholder such as `your_gemini_api_key_here`. Resolution
//! happens once, when adapters are built.

/// Resolve a secret from a literal config value or an environment variable.
///
/// The literal wins when set; otherwise the named variable is read.
pub fn resolve_secret(literal: Option<&str>, env_name: &str) -> Option<String> {
    resolve_secret_with(literal, env_name, |name| std::env::var(name).ok())
}

/// [`resolve_secret`] with an injectable environment lookup
pub fn resolve_secret_with(
    literal: Option<&str>,
    env_name: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    let raw = match literal {
        Some(value) if !value.trim().is_empty() => Some(value.to_string()),
        _ if env_name.is_empty() => None,
        _ => lookup(env_name),
    }?;

    let value = raw.trim();
    if value.is_empty() || is_placeholder(value) {
        return None;
    }
    Some(value.to_string())
}

/// Whether a value is an unedited `.env` template placeholder
pub fn is_placeholder(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("your_") && lower.ends_with("_here")
}
