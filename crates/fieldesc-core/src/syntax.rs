//! Go syntax trees via tree-sitter.

use tree_sitter::{Node, Parser, Tree};

use crate::collect::walk_preorder;
use crate::error::SyntaxError;
use crate::model::SourcePosition;

const STRUCT_TYPE: &str = "struct_type";

/// tree-sitter parser configured for Go.
pub struct GoParser {
    parser: Parser,
}

impl std::fmt::Debug for GoParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoParser").finish_non_exhaustive()
    }
}

impl GoParser {
    pub fn new() -> Result<Self, SyntaxError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parses one Go source file.
    ///
    /// Syntax errors do not fail here; check [`SyntaxTree::first_error`].
    pub fn parse<'src>(&mut self, source: &'src str) -> Result<SyntaxTree<'src>, SyntaxError> {
        let tree = self.parser.parse(source, None).ok_or(SyntaxError::NoTree)?;
        Ok(SyntaxTree { tree, source })
    }
}

/// A parsed file together with the text it was parsed from.
#[derive(Debug)]
pub struct SyntaxTree<'src> {
    tree: Tree,
    source: &'src str,
}

impl<'src> SyntaxTree<'src> {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn has_errors(&self) -> bool {
        self.root().has_error()
    }

    /// Position of the first error or missing node, in source order.
    pub fn first_error(&self) -> Option<SourcePosition> {
        let root = self.root();
        if !root.has_error() {
            return None;
        }
        let mut first = None;
        walk_preorder(root, |node| {
            if first.is_none() && (node.is_error() || node.is_missing()) {
                first = Some(SourcePosition::start_of(&node));
            }
        });
        first.or_else(|| Some(SourcePosition::start_of(&root)))
    }

    /// Every struct type in the file, outer structs before inner ones.
    pub fn struct_types(&self) -> Vec<Node<'_>> {
        let mut structs = Vec::new();
        walk_preorder(self.root(), |node| {
            if node.kind() == STRUCT_TYPE {
                structs.push(node);
            }
        });
        structs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clean_source() {
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse("package main\n\ntype S struct {\n\tID int\n}\n").unwrap();
        assert!(!tree.has_errors());
        assert_eq!(tree.first_error(), None);
        assert_eq!(tree.struct_types().len(), 1);
    }

    #[test]
    fn finds_nested_and_anonymous_structs() {
        let source = "package main\n\ntype S struct {\n\tInner struct {\n\t\tX int\n\t}\n}\n\nvar v struct{ Y int }\n";
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse(source).unwrap();
        let starts: Vec<usize> = tree
            .struct_types()
            .iter()
            .map(|node| node.start_position().row)
            .collect();
        assert_eq!(starts, vec![2, 3, 8]);
    }

    #[test]
    fn reports_unterminated_struct() {
        let mut parser = GoParser::new().unwrap();
        let tree = parser
            .parse("package main\n\ntype S struct {\n\tID int\n\tName string")
            .unwrap();
        assert!(tree.has_errors());
        assert!(tree.first_error().is_some());
    }

    #[test]
    fn no_struct_in_file() {
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse("package main").unwrap();
        assert!(tree.struct_types().is_empty());
    }
}
