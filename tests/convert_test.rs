//! Integration tests for batch conversion from files.

use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;

use tempfile::TempDir;
use textpdf::convert::{convert_paths, BatchMode, ConversionOutcome, ConvertOptions};
use textpdf::{Error, TextPdf};

fn write_files(dir: &TempDir, files: &[(&str, &[u8])]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(name, content)| {
            let path = dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        })
        .collect()
}

fn archive_entries(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    (0..zip.len())
        .map(|i| {
            let mut file = zip.by_index(i).unwrap();
            let mut data = Vec::new();
            file.read_to_end(&mut data).unwrap();
            (file.name().to_string(), data)
        })
        .collect()
}

#[test]
fn test_per_file_archive() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(
        &dir,
        &[
            ("alpha.txt", b"First file"),
            ("beta.txt", b"Second file"),
            ("gamma.txt", b"Third file"),
        ],
    );

    let output = convert_paths(&paths, BatchMode::PerFileZipped, &ConvertOptions::default())
        .unwrap();
    assert_eq!(output.name, "converted_texts.zip");
    assert_eq!(output.mime_type, "application/zip");

    let entries = archive_entries(&output.bytes);
    let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["alpha.pdf", "beta.pdf", "gamma.pdf"]);
    for (_, data) in &entries {
        let doc = lopdf::Document::load_mem(data).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }
}

#[test]
fn test_empty_file_fails_batch() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(
        &dir,
        &[
            ("one.txt", b"content"),
            ("empty.txt", b""),
            ("three.txt", b"content"),
        ],
    );

    let result = convert_paths(&paths, BatchMode::PerFileZipped, &ConvertOptions::default());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("empty.txt"));
    match err {
        Error::Document { name, source } => {
            assert_eq!(name, "empty.txt");
            assert!(matches!(*source, Error::EmptyInput(_)));
        }
        other => panic!("unexpected error: {other}"),
    }

    // Nothing was written next to the inputs
    let produced = fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(produced, 3);
}

#[test]
fn test_whitespace_only_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("blank.txt", b"  \n\t\n ")]);
    let err = convert_paths(&paths, BatchMode::Combined, &ConvertOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "Error processing blank.txt: File blank.txt is empty");
}

#[test]
fn test_missing_file_fails_batch() {
    let dir = TempDir::new().unwrap();
    let mut paths = write_files(&dir, &[("present.txt", b"here")]);
    paths.push(dir.path().join("absent.txt"));

    let err = convert_paths(&paths, BatchMode::Combined, &ConvertOptions::default()).unwrap_err();
    match err {
        Error::Document { name, source } => {
            assert_eq!(name, "absent.txt");
            assert!(matches!(*source, Error::Io(_)));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_binary_and_pdf_inputs_rejected() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("image.txt", b"\x89PNG\r\n\x1a\n\x00\x00")]);
    let err = convert_paths(&paths, BatchMode::Combined, &ConvertOptions::default()).unwrap_err();
    assert!(err.to_string().contains("image.txt"));

    let paths = write_files(&dir, &[("doc.txt", b"%PDF-1.4\n%rest")]);
    let err = convert_paths(&paths, BatchMode::Combined, &ConvertOptions::default()).unwrap_err();
    match err {
        Error::Document { source, .. } => {
            assert!(matches!(*source, Error::UnsupportedFormat(_)))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_utf8_is_replaced() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("latin1.txt", b"caf\xE9 au lait")]);
    let output = convert_paths(&paths, BatchMode::Combined, &ConvertOptions::default()).unwrap();
    assert_eq!(output.name, "latin1.pdf");
    // U+FFFD cannot be encoded, so the line becomes the placeholder
    assert_eq!(output.stats.placeholder_count, 1);
}

#[test]
fn test_duplicate_names_in_archive() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let mut paths = write_files(&first, &[("notes.txt", b"first")]);
    paths.extend(write_files(&second, &[("notes.txt", b"second")]));

    let output = convert_paths(&paths, BatchMode::PerFileZipped, &ConvertOptions::default())
        .unwrap();
    let names: Vec<String> = archive_entries(&output.bytes)
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    assert_eq!(names, vec!["notes.pdf", "notes_2.pdf"]);
}

#[test]
fn test_sanitized_entry_names() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("report: final?.txt", b"body")]);
    let output = convert_paths(&paths, BatchMode::PerFileZipped, &ConvertOptions::default())
        .unwrap();
    let names: Vec<String> = archive_entries(&output.bytes)
        .into_iter()
        .map(|(n, _)| n)
        .collect();
    assert_eq!(names, vec!["report- final-.pdf"]);
}

#[test]
fn test_per_file_headers_optional() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("a.txt", b"body")]);

    let plain = convert_paths(&paths, BatchMode::PerFileZipped, &ConvertOptions::default())
        .unwrap();
    assert_eq!(plain.stats.line_count, 1);

    let options = ConvertOptions::default().with_headers(true);
    let headed = convert_paths(&paths, BatchMode::PerFileZipped, &options).unwrap();
    assert_eq!(headed.stats.line_count, 2);
}

#[test]
fn test_builder_writes_output() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("a.txt", b"one"), ("b.txt", b"two")]);

    let output = TextPdf::new().combined().convert_files(&paths).unwrap();
    let written = output.save_in(dir.path()).unwrap();
    assert_eq!(written.file_name().unwrap(), "combined_text.pdf");

    let doc = lopdf::Document::load(&written).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}

#[test]
fn test_outcome_reports() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("a.txt", b"one")]);

    let result = convert_paths(&paths, BatchMode::PerFileZipped, &ConvertOptions::default());
    let value: serde_json::Value =
        serde_json::from_str(&ConversionOutcome::from_result(&result).to_json().unwrap()).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["file_name"], "converted_texts.zip");
    assert_eq!(value["document_count"], 1);

    let paths = write_files(&dir, &[("b.txt", b"")]);
    let result = convert_paths(&paths, BatchMode::PerFileZipped, &ConvertOptions::default());
    let outcome = ConversionOutcome::from_result(&result);
    assert!(!outcome.is_success());
}

#[cfg(feature = "async")]
#[tokio::test]
async fn test_convert_paths_async() {
    let dir = TempDir::new().unwrap();
    let paths = write_files(&dir, &[("a.txt", b"one"), ("b.txt", b"two")]);

    let output =
        textpdf::convert_paths_async(&paths, BatchMode::Combined, &ConvertOptions::default())
            .await
            .unwrap();
    assert_eq!(output.stats.document_count, 2);

    let empty = write_files(&dir, &[("c.txt", b"")]);
    let err = textpdf::convert_paths_async(&empty, BatchMode::Combined, &ConvertOptions::default())
        .await
        .unwrap_err();
    assert!(err.to_string().contains("c.txt"));
}
