//! Node collection for a single struct body.
//!
//! The whole subtree is walked so that fields of inline struct types are
//! seen too, but only field declarations and comments are emitted.

use tree_sitter::Node;

use crate::model::{AnalysisItem, CommentNode, FieldNode, SourcePosition};

const FIELD_DECLARATION: &str = "field_declaration";
const COMMENT: &str = "comment";

/// Collects fields and candidate description comments below `struct_node`.
///
/// Items come back in traversal order, not source order. Comments that
/// trail a field on the line it ends are dropped, so they can never be
/// taken as the description of the next field.
pub fn collect_items(struct_node: Node<'_>, source: &str) -> Vec<AnalysisItem> {
    let mut items = Vec::new();
    let mut fields = Vec::new();

    walk_preorder(struct_node, |node| match node.kind() {
        FIELD_DECLARATION => {
            let field = field_node(node, source);
            fields.push(field.clone());
            items.push(AnalysisItem::Field(field));
        }
        COMMENT => items.push(AnalysisItem::Comment(comment_node(node, source))),
        _ => {}
    });

    items.retain(|item| match item {
        AnalysisItem::Comment(comment) => !fields.iter().any(|field| comment.trails(field)),
        AnalysisItem::Field(_) => true,
    });
    items
}

fn field_node(node: Node<'_>, source: &str) -> FieldNode {
    let name = node
        .child_by_field_name("name")
        .map(|ident| node_text(ident, source).to_string());
    FieldNode {
        name,
        start: SourcePosition::start_of(&node),
        end: SourcePosition::end_of(&node),
    }
}

fn comment_node(node: Node<'_>, source: &str) -> CommentNode {
    CommentNode::new(
        node_text(node, source),
        SourcePosition::start_of(&node),
        SourcePosition::end_of(&node),
    )
}

pub(crate) fn node_text<'src>(node: Node<'_>, source: &'src str) -> &'src str {
    source.get(node.byte_range()).unwrap_or_default()
}

/// Visits `root` and all of its descendants, parents before children.
pub(crate) fn walk_preorder<'tree>(root: Node<'tree>, mut visit: impl FnMut(Node<'tree>)) {
    let mut cursor = root.walk();
    loop {
        visit(cursor.node());
        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::GoParser;

    fn collect(source: &str) -> Vec<AnalysisItem> {
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse(source).unwrap();
        let node = tree.struct_types()[0];
        collect_items(node, source)
    }

    fn names(items: &[AnalysisItem]) -> Vec<Option<&str>> {
        items
            .iter()
            .filter_map(|item| match item {
                AnalysisItem::Field(field) => Some(field.name.as_deref()),
                AnalysisItem::Comment(_) => None,
            })
            .collect()
    }

    fn comments(items: &[AnalysisItem]) -> Vec<&str> {
        items
            .iter()
            .filter_map(|item| match item {
                AnalysisItem::Comment(comment) => Some(comment.text.as_str()),
                AnalysisItem::Field(_) => None,
            })
            .collect()
    }

    #[test]
    fn empty_struct_yields_nothing() {
        assert!(collect("package main\n\ntype S struct {}\n").is_empty());
    }

    #[test]
    fn collects_named_and_embedded_fields() {
        let items = collect(
            "package main\n\ntype S struct {\n\tA, B int\n\tYourStruct\n\t*pkg.Other\n}\n",
        );
        assert_eq!(names(&items), vec![Some("A"), None, None]);
    }

    #[test]
    fn drops_trailing_comments() {
        let items = collect(
            "package main\n\ntype S struct {\n\t// ID is identity\n\tID int // Name trailing\n\tName string\n}\n",
        );
        assert_eq!(comments(&items), vec!["// ID is identity"]);
    }

    #[test]
    fn drops_aligned_trailing_comments() {
        let items = collect(
            "package main\n\ntype S struct {\n\tID   int    // Name aligned\n\tName string\n}\n",
        );
        assert!(comments(&items).is_empty());
    }

    #[test]
    fn keeps_block_comment_text_verbatim() {
        let items = collect("package main\n\ntype S struct {\n\t/* ID block */\n\tID int\n}\n");
        assert_eq!(comments(&items), vec!["/* ID block */"]);
    }

    #[test]
    fn walks_into_inline_struct_fields() {
        let items = collect(
            "package main\n\ntype S struct {\n\tInner struct {\n\t\tValue int\n\t}\n}\n",
        );
        assert_eq!(names(&items), vec![Some("Inner"), Some("Value")]);
    }
}
