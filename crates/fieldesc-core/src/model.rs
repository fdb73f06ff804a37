//! Items collected from a single struct body.
//!
//! Everything here lives for one struct check only: the collector builds the
//! items, the matcher consumes them, and nothing is kept afterwards.

use serde::{Deserialize, Serialize};

/// Position of a node in the source file.
///
/// Ordering is by byte offset. Row and column are zero-based and carried
/// along for same-line reasoning and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourcePosition {
    pub byte: usize,
    pub row: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(byte: usize, row: usize, column: usize) -> Self {
        Self { byte, row, column }
    }

    pub(crate) fn start_of(node: &tree_sitter::Node<'_>) -> Self {
        let point = node.start_position();
        Self::new(node.start_byte(), point.row, point.column)
    }

    pub(crate) fn end_of(node: &tree_sitter::Node<'_>) -> Self {
        let point = node.end_position();
        Self::new(node.end_byte(), point.row, point.column)
    }

    /// 1-based line number, as editors and `go vet` print it.
    pub fn line(&self) -> usize {
        self.row + 1
    }

    /// 1-based column number.
    pub fn display_column(&self) -> usize {
        self.column + 1
    }
}

/// A declared field, or an embedded type (no name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    /// First declared identifier; `None` for embedded fields.
    pub name: Option<String>,
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl FieldNode {
    pub fn named(name: impl Into<String>, start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            name: Some(name.into()),
            start,
            end,
        }
    }

    pub fn embedded(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            name: None,
            start,
            end,
        }
    }
}

/// A single line or block comment, marker included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentNode {
    pub text: String,
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl CommentNode {
    pub fn new(text: impl Into<String>, start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Whether this comment starts on the line `field` ends on, after it.
    pub fn trails(&self, field: &FieldNode) -> bool {
        self.start.row == field.end.row && self.start >= field.end
    }
}

/// Field or comment, ordered by where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisItem {
    Field(FieldNode),
    Comment(CommentNode),
}

impl AnalysisItem {
    pub fn start(&self) -> SourcePosition {
        match self {
            AnalysisItem::Field(field) => field.start,
            AnalysisItem::Comment(comment) => comment.start,
        }
    }

    pub fn end(&self) -> SourcePosition {
        match self {
            AnalysisItem::Field(field) => field.end,
            AnalysisItem::Comment(comment) => comment.end,
        }
    }
}

impl From<FieldNode> for AnalysisItem {
    fn from(field: FieldNode) -> Self {
        AnalysisItem::Field(field)
    }
}

impl From<CommentNode> for AnalysisItem {
    fn from(comment: CommentNode) -> Self {
        AnalysisItem::Comment(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(byte: usize, row: usize, column: usize) -> SourcePosition {
        SourcePosition::new(byte, row, column)
    }

    #[test]
    fn positions_order_by_byte() {
        assert!(pos(3, 0, 3) < pos(10, 1, 0));
        assert_eq!(pos(5, 0, 5).line(), 1);
        assert_eq!(pos(5, 0, 5).display_column(), 6);
    }

    #[test]
    fn comment_on_same_line_after_field_trails() {
        let field = FieldNode::named("ID", pos(10, 1, 1), pos(16, 1, 7));
        let trailing = CommentNode::new("// note", pos(17, 1, 8), pos(24, 1, 15));
        let next_line = CommentNode::new("// Name is", pos(26, 2, 1), pos(36, 2, 11));

        assert!(trailing.trails(&field));
        assert!(!next_line.trails(&field));
    }

    #[test]
    fn comment_before_field_on_same_line_does_not_trail() {
        let field = FieldNode::named("ID", pos(12, 1, 12), pos(18, 1, 18));
        let leading = CommentNode::new("/* ID is */", pos(1, 1, 1), pos(11, 1, 11));

        assert!(!leading.trails(&field));
    }
}
