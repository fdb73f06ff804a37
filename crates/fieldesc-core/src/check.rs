use tree_sitter::Node;

use crate::collect::collect_items;
use crate::error::CheckError;
use crate::matcher::missing_descriptions;

/// Checks one struct type and returns the fields missing a description.
///
/// `struct_node` is a `struct_type` node parsed from `source`. A subtree
/// that contains syntax errors or missing tokens is rejected as a whole;
/// no partial result is produced.
pub fn check_struct(struct_node: Node<'_>, source: &str) -> Result<Vec<String>, CheckError> {
    if struct_node.has_error() {
        return Err(CheckError::UpstreamParseFailure {
            line: struct_node.start_position().row + 1,
        });
    }
    Ok(missing_descriptions(collect_items(struct_node, source)))
}
