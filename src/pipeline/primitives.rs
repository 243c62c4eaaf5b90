//! Base64/alignment primitives and the [`Pipeline`] builder itself.

use base64::Engine;

use crate::error::{ChainError, Result};
use crate::pipeline::catalogue;

/// Base64-decode a byte stream.
pub const B64D: &str = "convert.base64-decode";
/// Base64-encode a byte stream.
pub const B64E: &str = "convert.base64-encode";
/// Quoted-printable-encode a byte stream.
pub const QPE: &str = "convert.quoted-printable-encode";
/// `convert.iconv.855.UTF7`, used for its side effect of stripping `=` bytes.
pub const REMOVE_EQUAL: &str = "convert.iconv.855.UTF7";
/// `convert.iconv.UCS-4.UCS-4LE`, used for its 4-byte-unit byte-swap effect.
pub const SWAP4: &str = "convert.iconv.UCS-4.UCS-4LE";

/// An ordered, append-only sequence of stream filter names.
///
/// Entries are never reordered or removed once pushed; a catalogue fragment
/// may itself be a `|`-joined chain of several iconv names and is stored as
/// a single entry, matching how the entries are produced in
/// [`catalogue::fragment`]. [`Pipeline::render`] joins every entry with `|`.
#[derive(Debug, Default, Clone)]
pub struct Pipeline(Vec<String>);

impl Pipeline {
    /// An empty pipeline.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a filter (or `|`-joined catalogue fragment) to the pipeline.
    ///
    /// Returns `&mut Self` so calls can be chained, the idiomatic stand-in
    /// for the reference implementation's `/` operator overload.
    pub fn push(&mut self, filter: impl Into<String>) -> &mut Self {
        self.0.push(filter.into());
        self
    }

    /// Render the pipeline as a single `|`-joined filter chain string.
    pub fn render(&self) -> String {
        self.0.join("|")
    }

    /// Iterate over every individual filter name, flattening any
    /// catalogue-fragment entries that embed their own `|`-joins.
    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|entry| entry.split('|'))
    }
}

/// Standard base64-encode `bytes`.
pub fn b64_encode(bytes: &[u8]) -> Vec<u8> {
    base64::engine::general_purpose::STANDARD
        .encode(bytes)
        .into_bytes()
}

/// Standard base64-encode `bytes`, then strip any trailing `=` padding.
pub fn b64_encode_stripped(bytes: &[u8]) -> Vec<u8> {
    let mut encoded = b64_encode(bytes);
    while encoded.last() == Some(&b'=') {
        encoded.pop();
    }
    encoded
}

/// Smallest integer `>= value` that is divisible by `div`.
pub fn align_value(value: usize, div: usize) -> usize {
    value + (div - value % div) % div
}

/// Append `pad` to `input` until its length is a multiple of `n`.
pub fn align_right(input: &[u8], n: usize, pad: u8) -> Vec<u8> {
    let target = align_value(input.len(), n);
    let mut out = input.to_vec();
    out.resize(target, pad);
    out
}

/// Prepend `pad` to `input` until its length is a multiple of `n`.
pub fn align_left(input: &[u8], n: usize, pad: u8) -> Vec<u8> {
    let target = align_value(input.len(), n);
    let mut out = vec![pad; target - input.len()];
    out.extend_from_slice(input);
    out
}

/// Append `fragment(c) | B64D | B64E` to the pipeline.
///
/// Net effect on the decoded stream: prepend `c` to the stream's
/// base64-encoded form and re-decode (possible `=`-boundary artefacts, left
/// to the caller — see [`push_char_safely`]).
pub fn push_char(pipeline: &mut Pipeline, c: u8) -> Result<()> {
    let frag = catalogue::fragment(c).ok_or_else(|| ChainError::catalogue(c))?;
    pipeline.push(frag).push(B64D).push(B64E);
    Ok(())
}

/// [`push_char`] followed by `REMOVE_EQUAL`, to strip the `=` artefacts it
/// can introduce.
pub fn push_char_safely(pipeline: &mut Pipeline, c: u8) -> Result<()> {
    push_char(pipeline, c)?;
    pipeline.push(REMOVE_EQUAL);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_value_rounds_up_to_next_multiple() {
        assert_eq!(align_value(1, 9), 9);
        assert_eq!(align_value(9, 9), 9);
        assert_eq!(align_value(10, 9), 18);
        assert_eq!(align_value(200, 9), 207);
        assert_eq!(align_value(100, 9), 108);
    }

    #[test]
    fn align_right_appends_to_reach_multiple() {
        assert_eq!(align_right(b"ab", 3, b'M'), b"abM");
        assert_eq!(align_right(b"abc", 3, b'M'), b"abc");
    }

    #[test]
    fn align_left_prepends_to_reach_multiple() {
        assert_eq!(align_left(b"ab", 3, b'0'), b"0ab");
        assert_eq!(align_left(b"abc", 3, b'0'), b"abc");
    }

    #[test]
    fn b64_encode_stripped_removes_all_padding() {
        assert_eq!(b64_encode_stripped(b"ab"), b64_encode(b"ab")[..3].to_vec());
        assert_eq!(b64_encode_stripped(b"abc"), b64_encode(b"abc"));
    }

    #[test]
    fn push_char_rejects_non_alphabet_bytes() {
        let mut pipeline = Pipeline::new();
        assert!(push_char(&mut pipeline, b'!').is_err());
    }

    #[test]
    fn push_char_appends_fragment_then_b64d_b64e() {
        let mut pipeline = Pipeline::new();
        push_char(&mut pipeline, b'A').unwrap();
        let names: Vec<&str> = pipeline.filter_names().collect();
        assert_eq!(names.last(), Some(&B64E));
        assert_eq!(names[names.len() - 2], B64D);
    }
}
