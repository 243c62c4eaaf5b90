//! Prefix injection: the simple-mode prefix-only builder (§4.5) and the
//! full-mode forged chunk header that carries the prefix (§4.9).

use crate::error::Result;
use crate::pipeline::primitives::{
    align_left, align_right, b64_encode, push_char_safely, Pipeline, B64D, B64E, REMOVE_EQUAL,
};

/// Simple mode (no suffix): base64-encode the pipeline's output so far,
/// inject PREFIX character-by-character (in reverse, since each push
/// prepends), then decode once.
pub fn add_simple_prefix(pipeline: &mut Pipeline, prefix: &[u8], padding_byte: u8) -> Result<()> {
    pipeline.push(B64E).push(REMOVE_EQUAL);

    let padded = align_right(prefix, 3, padding_byte);
    let encoded = b64_encode(&padded);

    for &byte in encoded.iter().rev() {
        push_char_safely(pipeline, byte)?;
    }

    pipeline.push(B64D);
    Ok(())
}

/// Full mode: forge a chunked-transfer-encoding header whose declared chunk
/// length spans exactly from itself to the suffix's forged `\n0\n`
/// terminator, so `dechunk` preserves that whole span — including PREFIX,
/// which rides along inside the header.
pub fn add_prefix(
    pipeline: &mut Pipeline,
    prefix: &[u8],
    suffix: &[u8],
    padding_byte: u8,
    nb_chunks: usize,
) -> Result<()> {
    pipeline.push(B64E);

    let prefix = align_right(prefix, 3, padding_byte);
    let prefix = b64_encode(&prefix);
    let prefix = align_right(&prefix, 9, 0x00);
    let prefix = b64_encode(&prefix);

    let suffix_b64_len = b64_encode(suffix).len();
    let size = chunk_header_size(suffix_b64_len, nb_chunks, prefix.len());

    let chunk_header = format!("{size:x}\n").into_bytes();
    let chunk_header = align_left(&chunk_header, 3, b'0');

    let mut combined = chunk_header;
    combined.extend_from_slice(&prefix);
    let combined_b64 = b64_encode(&combined);

    for &byte in combined_b64.iter().rev() {
        push_char_safely(pipeline, byte)?;
    }
    Ok(())
}

/// The forged chunk header's declared size: the span, in bytes, from the
/// header itself to the suffix's forged `\n0\n` terminator.
///
/// `suffix_b64_len` is always a multiple of 4 (it's a base64 output length),
/// so `suffix_b64_len / 2 * 4` is exact integer arithmetic identical to the
/// reference's `len(...) / 2 * 4` float computation — see `DESIGN.md`.
pub fn chunk_header_size(suffix_b64_len: usize, nb_chunks: usize, prefix_len: usize) -> usize {
    suffix_b64_len / 2 * 4 + nb_chunks * 4 * 4 + 2 + 7 + prefix_len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::primitives::align_value;

    #[test]
    fn simple_prefix_ends_with_single_b64d() {
        let mut pipeline = Pipeline::new();
        add_simple_prefix(&mut pipeline, b"X", b'M').unwrap();
        let names: Vec<&str> = pipeline.filter_names().collect();
        assert_eq!(names.last(), Some(&B64D));
    }

    #[test]
    fn simple_prefix_handles_empty_prefix() {
        let mut pipeline = Pipeline::new();
        assert!(add_simple_prefix(&mut pipeline, b"", b'M').is_ok());
    }

    #[test]
    fn chunk_header_size_matches_the_spec_formula() {
        let prefix = b"{\"message\":\"";
        let suffix = b"\"}";
        let padding_byte = b'M';
        let nb_bytes: usize = 200;
        let aligned_n = align_value(nb_bytes, 9);
        assert_eq!(aligned_n, 207);
        let nb_chunks = aligned_n / 9 * 4;

        let padded_prefix = align_right(prefix, 3, padding_byte);
        let b64_prefix = b64_encode(&padded_prefix);
        let zero_padded_prefix = align_right(&b64_prefix, 9, 0x00);
        let final_prefix = b64_encode(&zero_padded_prefix);

        let suffix_b64_len = b64_encode(suffix).len();
        let expected_size =
            suffix_b64_len / 2 * 4 + nb_chunks * 4 * 4 + 2 + 7 + final_prefix.len();

        assert_eq!(
            chunk_header_size(suffix_b64_len, nb_chunks, final_prefix.len()),
            expected_size
        );

        let mut pipeline = Pipeline::new();
        add_prefix(&mut pipeline, prefix, suffix, padding_byte, nb_chunks).unwrap();
    }
}
