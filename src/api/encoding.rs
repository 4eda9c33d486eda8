use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt::{Display, Formatter, Result};

// Based on https://docs.rs/percent-encoding/1.0.1/src/percent_encoding/lib.rs.html#104
// WHATWG Spec: https://url.spec.whatwg.org/#percent-encoded-bytes
// `&`, `=` and `%` are added so a key or value can never split a pair.
// Brackets stay readable: Zendesk spells its cursor params `page[size]`.
const QUERY_ENCODE_SET: AsciiSet = CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'+')
    .add(b'&')
    .add(b'=')
    .add(b'%');

/// Wrapper that escapes arguments for URL query segments.
pub struct QueryArg<A: Display>(pub A);

impl<A: Display> Display for QueryArg<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        utf8_percent_encode(&format!("{}", self.0), &QUERY_ENCODE_SET).fmt(f)
    }
}
