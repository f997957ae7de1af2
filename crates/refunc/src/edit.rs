//! Span-based source patching
//!
//! The engine reduces every rewrite to a text edit over the original source:
//! the callee identifier's span for a call, the whole statement's span for an
//! import. Applying those edits from the end of the file backwards leaves all
//! untouched bytes exactly as they were, comments and whitespace included.

use ruff_text_size::TextRange;
use thiserror::Error;

/// Errors that can occur during edit application
#[derive(Error, Debug)]
pub enum EditError {
    #[error("overlapping edits detected at offset {0}")]
    OverlappingEdits(usize),

    #[error("edit span {start}..{end} out of bounds for source length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}

/// A single replacement of a source span
#[derive(Debug, Clone)]
pub struct SourceEdit {
    /// The source span to replace
    pub range: TextRange,
    /// The replacement text
    pub replacement: String,
}

impl SourceEdit {
    pub fn new(range: TextRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Byte offset where this edit starts
    pub fn start_offset(&self) -> usize {
        usize::from(self.range.start())
    }

    /// Byte offset where this edit ends
    pub fn end_offset(&self) -> usize {
        usize::from(self.range.end())
    }
}

/// Apply edits to source code, preserving all surrounding bytes.
///
/// Edits are applied in reverse order (from end to start) so earlier offsets
/// stay valid throughout. Overlapping or out-of-bounds edits are rejected;
/// the traversal engine never produces them for a well-formed tree.
pub fn apply_edits(source: &str, edits: &[SourceEdit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_owned());
    }

    let mut sorted_edits: Vec<&SourceEdit> = edits.iter().collect();
    sorted_edits.sort_by(|a, b| b.start_offset().cmp(&a.start_offset()));

    let source_len = source.len();
    let mut prev_start: Option<usize> = None;
    for edit in &sorted_edits {
        let start = edit.start_offset();
        let end = edit.end_offset();
        if end > source_len {
            return Err(EditError::SpanOutOfBounds {
                start,
                end,
                len: source_len,
            });
        }
        if let Some(prev) = prev_start {
            if end > prev {
                return Err(EditError::OverlappingEdits(start));
            }
        }
        prev_start = Some(start);
    }

    let mut result = source.to_owned();
    for edit in sorted_edits {
        result.replace_range(edit.start_offset()..edit.end_offset(), &edit.replacement);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ruff_text_size::TextSize;

    fn make_range(start: u32, end: u32) -> TextRange {
        TextRange::new(TextSize::new(start), TextSize::new(end))
    }

    #[test]
    fn test_simple_replacement() {
        let source = "old_func(1, 2)";
        let edit = SourceEdit::new(make_range(0, 8), "new_func");
        let result = apply_edits(source, &[edit]).unwrap();
        assert_eq!(result, "new_func(1, 2)");
    }

    #[test]
    fn test_multiple_edits_applied_back_to_front() {
        let source = "old_func(a); old_func(b)";
        let edits = vec![
            SourceEdit::new(make_range(0, 8), "new_func"),
            SourceEdit::new(make_range(13, 21), "new_func"),
        ];
        let result = apply_edits(source, &edits).unwrap();
        assert_eq!(result, "new_func(a); new_func(b)");
    }

    #[test]
    fn test_empty_edits() {
        let source = "unchanged";
        assert_eq!(apply_edits(source, &[]).unwrap(), "unchanged");
    }

    #[test]
    fn test_out_of_bounds() {
        let result = apply_edits("short", &[SourceEdit::new(make_range(0, 100), "x")]);
        assert!(matches!(result, Err(EditError::SpanOutOfBounds { .. })));
    }

    #[test]
    fn test_overlap_detected() {
        let edits = vec![
            SourceEdit::new(make_range(0, 5), "x"),
            SourceEdit::new(make_range(3, 8), "y"),
        ];
        let result = apply_edits("abcdefghij", &edits);
        assert!(matches!(result, Err(EditError::OverlappingEdits(_))));
    }
}
