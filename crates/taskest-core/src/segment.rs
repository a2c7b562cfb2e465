//! Segmenter — splits raw input text into task strings.
//!
//! Splitting happens in two passes. The coarse pass cuts on list delimiters
//! from several scripts (ASCII and full-width punctuation, the middle dot,
//! slashes, newlines, and the spaced words ` and ` / ` および `). The fine
//! pass cuts each coarse fragment again on connective particles that chain
//! sub-actions inside a single clause.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Coarse list delimiters.
static DELIMITER_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"[;\n\r・/]|。|、|，|；| and | および ") {
        Ok(regex) => regex,
        Err(err) => panic!("delimiter regex is invalid: {err}"),
    }
});

/// Connectives meaning "and then" / "and". Longest alternative first so that
/// `してから` is consumed whole instead of leaving a dangling `から`.
static CONNECTIVE_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"してから|して|および|かつ") {
        Ok(regex) => regex,
        Err(err) => panic!("connective regex is invalid: {err}"),
    }
});

/// Characters stripped from both ends of a coarse fragment.
const BULLET_CHARS: &[char] = &[' ', '-', '—', '\t'];

/// Split `text` into an ordered list of trimmed, non-empty task strings.
///
/// Order follows first appearance in the input. Duplicates are kept.
pub fn split_tasks(text: &str) -> Vec<String> {
    let tasks: Vec<String> = DELIMITER_RE
        .split(text)
        .filter(|part| !part.trim().is_empty())
        .map(|part| part.trim_matches(BULLET_CHARS))
        .flat_map(|part| CONNECTIVE_RE.split(part))
        .map(str::trim)
        .filter(|task| !task.is_empty())
        .map(str::to_string)
        .collect();

    trace!(count = tasks.len(), "segmented input");
    tasks
}
