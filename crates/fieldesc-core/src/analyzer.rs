//! File-level analysis: find struct types, check each, emit diagnostics.

use std::path::Path;

use tracing::{debug, debug_span, trace};
use tree_sitter::Node;

use crate::check::check_struct;
use crate::collect::node_text;
use crate::diagnostic::{Diagnostic, StructReport};
use crate::error::{AnalyzeError, Result};
use crate::model::SourcePosition;
use crate::syntax::{GoParser, SyntaxTree};

/// Analyzer name, as printed by `fieldesc doc`.
pub const ANALYZER_NAME: &str = "fieldescription";

/// One-line analyzer description.
pub const DESCRIPTION: &str = "Linter to check for all struct fields comments";

/// Invocation examples.
pub const USAGE: &str = "\
fieldesc check <file.go>
fieldesc check ./<path-to-package>/<file.go>
fieldesc check <file1.go> <file2.go>
fieldesc check ./...
fieldesc check ./<path-to-package>/...";

/// Parses `source` and returns one diagnostic per non-compliant struct.
///
/// A file with syntax errors fails as a whole; none of its structs are
/// checked.
pub fn analyze_source(path: &Path, source: &str) -> Result<Vec<Diagnostic>> {
    let span = debug_span!("analyze", path = %path.display());
    let _guard = span.enter();

    let mut parser = GoParser::new()?;
    let tree = parser.parse(source)?;
    if let Some(position) = tree.first_error() {
        return Err(AnalyzeError::Parse {
            path: path.to_path_buf(),
            line: position.line(),
            column: position.display_column(),
        });
    }

    let reports = struct_reports(&tree);
    debug!(structs = reports.len(), "checked struct types");
    Ok(reports
        .iter()
        .filter_map(|report| Diagnostic::from_report(path, report))
        .collect())
}

/// Checks every struct type in `tree`, outer structs first.
pub fn struct_reports(tree: &SyntaxTree<'_>) -> Vec<StructReport> {
    let source = tree.source();
    tree.struct_types()
        .into_iter()
        .map(|node| {
            let identifier = enclosing_identifier(node, source);
            let outcome = check_struct(node, source);
            trace!(
                identifier = identifier.as_deref().unwrap_or_default(),
                ?outcome,
                "struct checked"
            );
            StructReport {
                identifier,
                position: SourcePosition::start_of(&node),
                outcome,
            }
        })
        .collect()
}

/// Name a struct type is declared under.
///
/// `type T struct{...}` and `type T = struct{...}` give `T`; an inline
/// field type `F struct{...}` gives `F`. Anything else is anonymous.
pub fn enclosing_identifier(struct_node: Node<'_>, source: &str) -> Option<String> {
    let parent = struct_node.parent()?;
    match parent.kind() {
        "type_spec" | "type_alias" | "field_declaration" => parent
            .child_by_field_name("name")
            .map(|name| node_text(name, source).to_string()),
        _ => None,
    }
}
