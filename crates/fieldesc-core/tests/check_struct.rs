//! Struct checks against parsed Go sources.

use std::path::Path;

use fieldesc_core::{AnalyzeError, CheckError, GoParser, analyze_source, check_struct};

/// Missing fields of every struct in `source`, concatenated in file order.
fn missing_in(source: &str) -> Result<Vec<String>, CheckError> {
    let mut parser = GoParser::new().expect("load Go grammar");
    let tree = parser.parse(source).expect("parse source");
    let mut missing = Vec::new();
    for node in tree.struct_types() {
        missing.extend(check_struct(node, source)?);
    }
    Ok(missing)
}

fn assert_missing(source: &str, expected: &[&str]) {
    let missing = missing_in(source).expect("check structs");
    assert_eq!(missing, expected);
}

#[test]
fn test_no_struct() {
    assert_missing("package main", &[]);
}

#[test]
fn test_no_fields() {
    assert_missing(
        r#"package main

type MyStruct struct {}
"#,
        &[],
    );
}

#[test]
fn test_no_comments() {
    assert_missing(
        r#"package main

type MyStruct struct {
	ID int
	Name string
}
"#,
        &["ID", "Name"],
    );
}

#[test]
fn test_all_fields_compliant() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// ID is identity
	ID int
	// Name is name
	Name string
}
"#,
        &[],
    );
}

#[test]
fn test_multi_line_comments() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// ID is identity
	// which is the ID
	ID int
	// Name is name
	Name string
}
"#,
        &[],
    );
}

#[test]
fn test_in_line_comments() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// ID is identity
	// which is the ID
	ID int // ID comment
	// Name is name
	Name string // Name comment
}
"#,
        &[],
    );
}

#[test]
fn test_first_field_without_name_prefix() {
    assert_missing(
        r#"package mypkg

// MyStruct is my struct
type MyStruct struct {
	// off you must go
	F1 uint
	// ID is identity
	ID int
	// Name is name
	Name string
}
"#,
        &["F1"],
    );
}

#[test]
fn test_middle_and_last_field() {
    assert_missing(
        r#"package mypkg

type MyStruct struct {
	// ID is identity
	ID int
	// off you must go
	F1 uint
	// Name is name
	Name string
	// off you must go
	F2 uint
}
"#,
        &["F1", "F2"],
    );
}

#[test]
fn test_mixed_fields_keep_declaration_order() {
    assert_missing(
        r#"package mypkg

// MyStruct is my struct
type MyStruct struct {
	// off you must go
	F1 uint
	// ID is identity
	// which is the ID
	ID int // ID comment
	// Name is name
	Name string // Name comment
	// off you must go
	Age uint
	Height string
}
"#,
        &["F1", "Age", "Height"],
    );
}

#[test]
fn test_duplicates_across_structs_are_kept() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// is identity
	// which is the ID
	ID int // ID comment
	Name string // Name comment
}

type YourStruct struct {
	ID int
	// is name
	Name string
}
"#,
        &["ID", "Name", "ID", "Name"],
    );
}

#[test]
fn test_trailing_comment_does_not_describe_next_field() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// ID is identity
	ID int // Name is name
	Name string
}
"#,
        &["Name"],
    );
}

#[test]
fn test_embedded_only() {
    assert_missing(
        r#"package main

type MyStruct struct {
	YourStruct
}
"#,
        &[],
    );
}

#[test]
fn test_composition() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// ID is identity
	ID int
	// is name
	Name string
	YourStruct
	*pkg.SomeStruct
}
"#,
        &["Name"],
    );
}

#[test]
fn test_unexported_fields() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// id is identity
	id int
	name string
}
"#,
        &["name"],
    );
}

#[test]
fn test_case_mismatch() {
    assert_missing(
        r#"package main

type MyStruct struct {
	// ID is identity
	id int
	// Name is name
	name string
	// age in number
	Age uint
}
"#,
        &["id", "name", "Age"],
    );
}

#[test]
fn test_multiple_names_use_first() {
    assert_missing(
        r#"package main

type Point struct {
	// X and Y are coordinates
	X, Y int
	// Z, W are unused
	Z, W int
}
"#,
        &["Z"],
    );
}

#[test]
fn test_tagged_fields() {
    assert_missing(
        r#"package main

type Row struct {
	// ID is the key
	ID int `json:"id"`
	Name string `json:"name"`
}
"#,
        &["Name"],
    );
}

#[test]
fn test_inline_struct_fields_count_for_both_structs() {
    assert_missing(
        r#"package main

type Outer struct {
	// Inner groups nested values
	Inner struct {
		Value int
	}
}
"#,
        &["Value", "Value"],
    );
}

#[test]
fn test_incomplete_struct() {
    let source = r#"package main

type MyStruct struct {
	// ID is identity
	ID int
	// Name is name
	Name string"#;

    let err = analyze_source(Path::new("incomplete.go"), source).unwrap_err();
    assert!(matches!(err, AnalyzeError::Parse { .. }));
}

#[test]
fn test_malformed_struct_body_is_rejected() {
    let source = r#"package main

type MyStruct struct {
	// ID is identity
	ID int
	@ Name string
}
"#;

    let mut parser = GoParser::new().unwrap();
    let tree = parser.parse(source).unwrap();
    let structs = tree.struct_types();
    assert_eq!(structs.len(), 1);
    assert!(structs[0].has_error());
    assert_eq!(
        check_struct(structs[0], source),
        Err(CheckError::UpstreamParseFailure { line: 3 })
    );

    let err = analyze_source(Path::new("malformed.go"), source).unwrap_err();
    assert!(matches!(err, AnalyzeError::Parse { .. }));
}
