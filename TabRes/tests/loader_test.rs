use std::fs;

use pretty_assertions::assert_eq;
use tabres::prelude::*;

/// A loose `Data.xml` in the working directory overrides the embedded
/// table, the embedded-only flag ignores it, and a populated cache slot
/// never re-reads the file.
#[test]
fn file_data_prefers_disk_override() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Data.xml"),
        r#"<files><file name="a.txt" type="text"/></files>"#,
    )
    .unwrap();

    // Resource names double as relative paths, so run from the temp dir.
    // This is the only test that touches the working directory.
    let original_dir = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let loader = ResourceLoader::new();
    let files = loader.file_data().unwrap();
    assert_eq!(files.root.name, "files");
    assert_eq!(files.root.children.len(), 1);
    let file = files.root.child("file").unwrap();
    assert_eq!(file.attr("name"), Some("a.txt"));
    assert_eq!(file.attr("type"), Some("text"));

    // The embedded-only flag ignores the same-named file on disk
    let embedded = ResourceLoader::embedded_only();
    let embedded_files = embedded.file_data().unwrap();
    assert!(embedded_files.root.children.len() > 1);
    assert!(
        embedded_files
            .root
            .children
            .iter()
            .all(|c| c.attr("name") != Some("a.txt"))
    );

    // A populated slot keeps the first load even after the file changes
    fs::write(
        "Data.xml",
        r#"<files><file name="b.txt" type="text"/></files>"#,
    )
    .unwrap();
    let again = loader.file_data().unwrap();
    assert!(std::ptr::eq(files, again));
    assert_eq!(again.root.child("file").unwrap().attr("name"), Some("a.txt"));

    std::env::set_current_dir(original_dir).unwrap();
}

#[test]
fn get_resource_reads_arbitrary_disk_paths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom-tables.xml");
    let content = r#"<functions><function name="HEX$" parameters="1"/></functions>"#;
    fs::write(&path, content).unwrap();

    let loader = ResourceLoader::new();
    let from_disk = loader.get_resource(path.to_str().unwrap()).unwrap();

    assert_eq!(from_disk, parse_document(content).unwrap());
}

#[test]
fn missing_resource_reports_not_found() {
    let loader = ResourceLoader::embedded_only();

    let err = loader.get_resource("Glyphs.xml").unwrap_err();
    assert!(matches!(err, Error::ResourceNotFound(_)));
}

#[test]
fn malformed_file_reports_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.xml");
    fs::write(&path, "<a>").unwrap();

    let loader = ResourceLoader::new();
    let err = loader.get_resource(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, Error::Xml(_) | Error::UnexpectedEof(_)));
}

#[test]
fn caches_are_per_loader_instance() {
    let first = ResourceLoader::embedded_only();
    let second = ResourceLoader::embedded_only();

    let a = first.char_table().unwrap();
    let b = second.char_table().unwrap();
    assert!(!std::ptr::eq(a, b));
    assert_eq!(a, b);
}

#[test]
fn embedded_char_table_contains_named_charsets() {
    let loader = ResourceLoader::embedded_only();

    let chartable = loader.char_table().unwrap();
    assert_eq!(chartable.root.name, "chartable");

    let upper = chartable
        .root
        .children_named("table")
        .find(|t| t.attr("name") == Some("petscii-upper"))
        .unwrap();
    let pi = upper
        .children_named("char")
        .find(|c| c.attr("value") == Some("π"))
        .unwrap();
    assert_eq!(pi.attr("code"), Some("255"));
}
