use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Number of credential characters left readable after redaction.
const VISIBLE_CHARS: usize = 8;

/// Redacts the credential of every `Authorization: <scheme> <credential>`
/// occurrence in `line`, keeping a short prefix of it.
pub fn redact_authorization(line: &str) -> Cow<'_, str> {
    lazy_static! {
        static ref AUTH_RE: Regex =
            Regex::new(r"(?i)(authorization):\s*(\w+)\s+(\S+)").expect("regex is valid");
    }

    AUTH_RE.replace_all(line, |caps: &Captures<'_>| {
        let visible: String = caps[3].chars().take(VISIBLE_CHARS).collect();
        format!("{}: {} {visible}***", &caps[1], &caps[2])
    })
}
