//! Line classifier: blank / comment / code.
//!
//! A heuristic, not a lexer. Only the leading token of each trimmed line is
//! inspected, so string literals never affect the result. The only state
//! carried between lines is whether an unterminated `/*` is open:
//!
//! | state            | trimmed line                      | kind    | next state       |
//! |------------------|-----------------------------------|---------|------------------|
//! | any              | empty                             | blank   | unchanged        |
//! | `Normal`         | starts with `//`, `#` or `*`      | comment | `Normal`         |
//! | `Normal`         | starts with `/*`, ends with `*/`  | comment | `Normal`         |
//! | `Normal`         | starts with `/*`                  | comment | `InBlockComment` |
//! | `InBlockComment` | starts with `//`, `#` or `*`      | comment | `InBlockComment` |
//! | `InBlockComment` | ends with `*/`                    | comment | `Normal`         |
//! | `InBlockComment` | anything else                     | comment | `InBlockComment` |
//! | `Normal`         | anything else                     | code    | `Normal`         |
//!
//! Line-comment markers are checked before the block state, so a `* end */`
//! line inside a block comment is a comment but does not close the block.

use std::fs;
use std::path::Path;

use crate::error::TreelocError;
use crate::Result;

use super::stats::FileClassification;

/// Classifier state between two lines of the same file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassifierState {
    /// Outside any block comment
    #[default]
    Normal,
    /// Inside a `/*` that has not been closed yet
    InBlockComment,
}

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Code,
}

/// Run one transition of the state machine.
pub fn classify_line(state: ClassifierState, line: &str) -> (LineKind, ClassifierState) {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return (LineKind::Blank, state);
    }

    if trimmed.starts_with("//") || trimmed.starts_with('#') || trimmed.starts_with('*') {
        return (LineKind::Comment, state);
    }

    if trimmed.starts_with("/*") {
        let next = if trimmed.ends_with("*/") {
            state
        } else {
            ClassifierState::InBlockComment
        };
        return (LineKind::Comment, next);
    }

    match state {
        ClassifierState::InBlockComment if trimmed.ends_with("*/") => {
            (LineKind::Comment, ClassifierState::Normal)
        }
        ClassifierState::InBlockComment => (LineKind::Comment, state),
        ClassifierState::Normal => (LineKind::Code, state),
    }
}

/// Classify an ordered sequence of lines, starting in `Normal` state.
pub fn classify<I, S>(lines: I) -> FileClassification
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ClassifierState::Normal;
    let mut result = FileClassification::default();

    for line in lines {
        let (kind, next) = classify_line(state, line.as_ref());
        state = next;
        result.total += 1;
        match kind {
            LineKind::Blank => result.blank += 1,
            LineKind::Comment => result.comment += 1,
            LineKind::Code => result.code += 1,
        }
    }

    result
}

/// Split on `\n`, `\r\n` and bare `\r`. A trailing terminator does not
/// start an extra empty line.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Decode bytes as UTF-8, dropping invalid sequences.
pub fn decode_dropping_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Classify in-memory file content.
pub fn classify_str(content: &str) -> FileClassification {
    classify(split_lines(content))
}

/// Read and classify a file.
///
/// Invalid UTF-8 is dropped rather than rejected, so only I/O failures
/// produce an error.
pub fn classify_file(path: impl AsRef<Path>) -> Result<FileClassification> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| TreelocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(classify_str(&decode_dropping_invalid(&bytes)))
}
