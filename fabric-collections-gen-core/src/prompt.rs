//! Interactive integer prompts with typed defaults.

use std::io::{BufRead, Write};

use crate::error::{CollectionsGenError, CollectionsGenResult};

/// Ask for one integer on `output`, reading the answer from `input`.
///
/// The prompt is rendered as `label [default]: `. Empty input (or EOF)
/// accepts the default; anything else must parse as a signed integer. A
/// parse failure aborts the run, so callers see it before any record is
/// built or any file is touched.
pub fn ask_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    default: i64,
) -> CollectionsGenResult<i64> {
    write!(output, "{label} [{default}]: ").map_err(CollectionsGenError::Prompt)?;
    output.flush().map_err(CollectionsGenError::Prompt)?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(CollectionsGenError::Prompt)?;

    let raw = line.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse::<i64>()
        .map_err(|source| CollectionsGenError::InvalidInput {
            prompt: label.to_string(),
            value: raw.to_string(),
            source,
        })
}
