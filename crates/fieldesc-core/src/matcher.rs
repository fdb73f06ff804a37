//! Compliance matching between fields and the comments above them.

use crate::model::{AnalysisItem, CommentNode, FieldNode};

/// Marker every description comment starts with.
const LINE_COMMENT_PREFIX: &str = "// ";

/// Returns the names of fields that have no description comment.
///
/// Items are sorted by start position first, so traversal order does not
/// matter. A run of comments is attributed to the field that follows it;
/// the field complies when any comment in the run describes it. Embedded
/// fields are never reported. Names keep struct order and are not
/// deduplicated.
pub fn missing_descriptions(mut items: Vec<AnalysisItem>) -> Vec<String> {
    items.sort_by_key(AnalysisItem::start);

    let mut missing = Vec::new();
    let mut pending: Vec<CommentNode> = Vec::new();

    for item in items {
        match item {
            AnalysisItem::Comment(comment) => pending.push(comment),
            AnalysisItem::Field(FieldNode { name: None, .. }) => pending.clear(),
            AnalysisItem::Field(FieldNode {
                name: Some(name), ..
            }) => {
                if !pending.iter().any(|comment| describes(&comment.text, &name)) {
                    missing.push(name);
                }
                pending.clear();
            }
        }
    }

    // Comments after the last field describe nothing.
    missing
}

/// Whether `comment` reads `// <field> ...`, with exact case.
pub fn describes(comment: &str, field: &str) -> bool {
    comment
        .strip_prefix(LINE_COMMENT_PREFIX)
        .and_then(|rest| rest.strip_prefix(field))
        .is_some_and(|rest| rest.starts_with(' '))
}
