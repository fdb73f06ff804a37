//! Struct field description checks for Go source.
//!
//! Every named field of a struct must be preceded by a line comment that
//! starts with the field's own name:
//!
//! ```go
//! type User struct {
//!     // ID is the primary key.
//!     ID int
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use fieldesc_core::{GoParser, check_struct};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = "package main\n\ntype S struct {\n\tID int\n}\n";
//! let mut parser = GoParser::new()?;
//! let tree = parser.parse(source)?;
//! for node in tree.struct_types() {
//!     let missing = check_struct(node, source)?;
//!     assert_eq!(missing, vec!["ID"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
mod check;
pub mod collect;
pub mod diagnostic;
pub mod error;
pub mod matcher;
pub mod model;
pub mod syntax;

// === Core Check ===
pub use check::check_struct;
pub use collect::collect_items;
pub use matcher::{describes, missing_descriptions};

// === Data Model ===
pub use model::{AnalysisItem, CommentNode, FieldNode, SourcePosition};

// === File Analysis ===
pub use analyzer::{
    ANALYZER_NAME, DESCRIPTION, USAGE, analyze_source, enclosing_identifier, struct_reports,
};
pub use diagnostic::{Diagnostic, DiagnosticKind, StructReport};
pub use syntax::{GoParser, SyntaxTree};

// === Error Types ===
pub use error::{AnalyzeError, CheckError, Result, SyntaxError};
