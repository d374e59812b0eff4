//! Bold-span splitting
//!
//! Clause text carries a side list of sub-strings that must render bold once
//! placeholders are resolved. The splitter turns one substituted string into
//! an ordered run list with those spans emphasized.

use docx_core::StyledRun;

/// Split clause text into runs, bolding each target's first occurrence
///
/// Scans left to right with a cursor: for each target in order, the first
/// occurrence within the unconsumed remainder becomes a bold run, the text
/// before it a plain run, and the scan continues past the match. Targets that
/// are empty or absent from the remainder are skipped silently; several of
/// the deed's fields are optional and resolve to empty strings. Whatever text
/// remains after the last match becomes a final plain run.
pub fn split_bold_spans(text: &str, targets: &[String]) -> Vec<StyledRun> {
    let mut runs = Vec::new();
    let mut rest = text;

    for target in targets {
        if target.is_empty() {
            continue;
        }
        if let Some(at) = rest.find(target.as_str()) {
            if at > 0 {
                runs.push(StyledRun::plain(&rest[..at]));
            }
            runs.push(StyledRun::bold(target.clone()));
            rest = &rest[at + target.len()..];
        }
    }

    if !rest.is_empty() {
        runs.push(StyledRun::plain(rest));
    }
    runs
}
