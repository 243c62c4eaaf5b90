//! Postlude: decode the forged chunked representation, dechunk it, and
//! recover the raw `PREFIX || file contents || SUFFIX` bytes.

use crate::pipeline::primitives::{Pipeline, B64D};

/// Decode back to the forged chunked bytes, strip the chunked framing with
/// `dechunk`, then decode twice more to recover the raw payload.
pub fn postlude(pipeline: &mut Pipeline) {
    pipeline.push(B64D).push("dechunk").push(B64D).push(B64D);
}
