//! Version output parsing.

/// Extract the version token from version command output.
///
/// Only the first line is considered. The line is split on whitespace and the
/// second token is taken, which matches output shaped like
/// `Consul v1.9.3 (abcdef1)`. Every `v` in that token is then removed.
///
/// Tokens are separated by ASCII whitespace only. Returns `None` when the
/// output is empty, the first line has fewer than two tokens, or the token is
/// empty once its `v` characters are removed.
///
/// ```rust
/// use consul_version_fact::extract_version;
///
/// assert_eq!(extract_version("Consul v1.9.3\n"), Some("1.9.3".to_string()));
/// assert_eq!(extract_version("consul"), None);
/// ```
pub fn extract_version(output: &str) -> Option<String> {
    let first_line = output.lines().next()?;
    let token = first_line.split_ascii_whitespace().nth(1)?;
    let version = normalize(token);
    (!version.is_empty()).then_some(version)
}

/// Remove every `v` character from a version token.
///
/// This is not prefix stripping: `5.0v` becomes `5.0` and `devv2.0` becomes
/// `de2.0`. Applying it twice gives the same result as applying it once.
///
/// ```rust
/// use consul_version_fact::normalize;
///
/// assert_eq!(normalize("v1.9.3"), "1.9.3");
/// assert_eq!(normalize(&normalize("v1.9.3")), "1.9.3");
/// ```
pub fn normalize(token: &str) -> String {
    token.replace('v', "")
}
