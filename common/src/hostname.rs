//! Line cleaning and hostname validation.
//!
//! Input usually comes straight out of other tools (`sublist3r`, `amass`, `cat`), so
//! lines may carry colour codes and stray whitespace. [`clean`] strips those and
//! [`is_valid_hostname`] decides whether what is left looks like an FQDN.

use std::sync::LazyLock;

use fancy_regex::Regex;

/// An escape byte followed by either a single Fe control character or a CSI sequence
/// (`[`, parameter bytes, intermediate bytes, final byte).
const ANSI_ESCAPE_PATTERN: &str = r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])";

/// One or more `label.` groups followed by a 2-6 letter TLD-like label.
///
/// Labels are 1-63 alphanumerics or hyphens and may not start or end with a hyphen.
/// The pattern is searched, not anchored: trailing (or leading) garbage around a
/// hostname-shaped substring still validates the whole line.
///
/// This deliberately differs from a `^`-anchored search, which would reject
/// `-leading.example.com` and `bad_host.example.com`; both are accepted here.
/// Do not anchor it and do not turn it into a full-string match.
const HOSTNAME_PATTERN: &str = r"((?!-)[A-Za-z0-9-]{1,63}(?<!-)\.)+[A-Za-z]{2,6}";

static ANSI_ESCAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(ANSI_ESCAPE_PATTERN).ok());

static HOSTNAME: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(HOSTNAME_PATTERN).ok());

/// Removes ANSI escape sequences, newlines and surrounding whitespace from a raw line.
///
/// Never fails. A line without escape codes only gets trimmed.
pub fn clean(raw: &str) -> String {
    let stripped = match ANSI_ESCAPE.as_ref() {
        Some(re) => re
            .try_replacen(raw, 0, "")
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.to_string()),
        None => raw.to_string(),
    };

    stripped.replace('\n', "").trim().to_string()
}

/// Checks whether `hostname` contains something shaped like an FQDN.
///
/// Accepts `&str` or `Option<&str>`; `None` is never valid.
///
/// ```
/// use massres_common::hostname::is_valid_hostname;
///
/// assert!(is_valid_hostname("sub.example.com"));
/// assert!(!is_valid_hostname("not_a_host!!"));
/// assert!(!is_valid_hostname(None::<&str>));
/// ```
pub fn is_valid_hostname<'a>(hostname: impl Into<Option<&'a str>>) -> bool {
    let Some(hostname) = hostname.into() else {
        return false;
    };

    match HOSTNAME.as_ref() {
        Some(re) => re.is_match(hostname).unwrap_or(false),
        None => false,
    }
}
