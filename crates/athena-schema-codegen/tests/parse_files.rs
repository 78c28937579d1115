use athena_schema_codegen::{parse_dir, parse_file, parse_paths};
use std::path::{Path, PathBuf};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures")
}

fn names(schema: &athena_schema_core::Schema) -> Vec<String> {
    schema.defs().map(|def| def.name.clone()).collect()
}

#[test]
fn parse_dir_reads_files_in_name_order() {
    let schema = parse_dir(fixtures().join("blog")).unwrap();
    assert_eq!(names(&schema), ["Comment", "Post", "User"]);
}

#[test]
fn parse_single_file() {
    let schema = parse_file(fixtures().join("http/log.rs")).unwrap();
    assert_eq!(names(&schema), ["HttpLog", "Request", "Response", "Method"]);
}

#[test]
fn parse_paths_accepts_a_directory_or_files() {
    let dir = parse_paths(&[fixtures().join("http")]).unwrap();
    assert_eq!(dir.len(), 4);

    let files = parse_paths(&[
        fixtures().join("blog/user.rs"),
        fixtures().join("http/log.rs"),
    ])
    .unwrap();
    assert_eq!(files.len(), 5);
}

#[test]
fn missing_file() {
    let err = parse_file(fixtures().join("blog/missing.rs")).unwrap_err();

    assert!(err.is_io());
    assert!(err.to_string().starts_with("failed to read "), "{err}");
}

#[test]
fn directory_without_sources() {
    let dir = std::env::temp_dir().join(format!("athena-schema-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let err = parse_dir(&dir).unwrap_err();
    assert!(err.is_invalid_source());
    assert!(err.to_string().ends_with("no Rust source files"), "{err}");

    std::fs::remove_dir_all(&dir).unwrap();
}
