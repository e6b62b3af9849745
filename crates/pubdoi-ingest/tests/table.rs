//! Tests for metadata table reading and write-back.

use std::fs;

use pubdoi_ingest::{IngestError, MetadataTable};
use tempfile::tempdir;

#[test]
fn reads_headers_and_rows() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    fs::write(
        &path,
        "title_main,file_name,custom_note\nStudy X,study.pdf,keep me\n",
    )
    .expect("write fixture");

    let table = MetadataTable::read_csv(&path).expect("read csv");
    assert_eq!(table.headers(), ["title_main", "file_name", "custom_note"]);
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.field(0, "custom_note"), "keep me");
    assert_eq!(table.field(0, "doi"), "");
}

#[test]
fn missing_file_is_reported() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let err = MetadataTable::read_csv(&path).expect_err("should fail");
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn ensure_column_appends_once() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    fs::write(&path, "title_main,file_name\nStudy X,study.pdf\n").expect("write fixture");

    let mut table = MetadataTable::read_csv(&path).expect("read csv");
    let first = table.ensure_column("doi");
    let second = table.ensure_column("doi");
    assert_eq!(first, second);
    assert_eq!(table.headers().last().map(String::as_str), Some("doi"));
    assert_eq!(table.field(0, "doi"), "");
}

#[test]
fn set_field_round_trips_through_write() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    fs::write(
        &path,
        "title_main,file_name,file_url,doi\nStudy X,study.pdf,,\n",
    )
    .expect("write fixture");

    let mut table = MetadataTable::read_csv(&path).expect("read csv");
    table.set_field(0, "doi", "10.83545/example-1");
    table.write_csv(&path).expect("write csv");

    let reread = MetadataTable::read_csv(&path).expect("reread csv");
    assert_eq!(reread.field(0, "doi"), "10.83545/example-1");
    assert_eq!(reread.field(0, "title_main"), "Study X");
}

#[test]
fn untouched_rows_are_written_back_unchanged() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    let body = "title_main,file_url,doi\nDone already,https://example.org/a.pdf,10.1234/done\n";
    fs::write(&path, body).expect("write fixture");

    let table = MetadataTable::read_csv(&path).expect("read csv");
    let out = dir.path().join("out.csv");
    table.write_csv(&out).expect("write csv");
    let written = fs::read_to_string(&out).expect("read output");
    assert_eq!(written, body);
}

#[test]
fn short_records_are_padded_to_header_width() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    fs::write(&path, "title_main,file_name,doi\nStudy X,study.pdf\n").expect("write fixture");

    let table = MetadataTable::read_csv(&path).expect("read csv");
    assert_eq!(table.field(0, "doi"), "");
    let row = table.publication_row(0);
    assert_eq!(row.get("file_name"), "study.pdf");
    assert!(!row.has_value("doi"));
}

#[test]
fn records_wider_than_the_header_are_rejected() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    fs::write(
        &path,
        "title_main,file_name\nStudy X,study.pdf,stray cell\n",
    )
    .expect("write fixture");

    let err = MetadataTable::read_csv(&path).expect_err("should fail");
    match err {
        IngestError::ExtraCells {
            line,
            cells,
            columns,
            ..
        } => {
            assert_eq!(line, 2);
            assert_eq!(cells, 3);
            assert_eq!(columns, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn padded_header_names_are_preserved_as_read() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    let body = "title_main, file_name \nStudy X,study.pdf\n";
    fs::write(&path, body).expect("write fixture");

    let table = MetadataTable::read_csv(&path).expect("read csv");
    assert_eq!(table.headers(), ["title_main", " file_name "]);
    let out = dir.path().join("out.csv");
    table.write_csv(&out).expect("write csv");
    let written = fs::read_to_string(&out).expect("read output");
    assert_eq!(written, body);
}

#[test]
fn bom_on_first_header_is_stripped() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("publications.csv");
    fs::write(&path, "\u{feff}title_main,file_name\nStudy X,study.pdf\n").expect("write fixture");

    let table = MetadataTable::read_csv(&path).expect("read csv");
    assert_eq!(table.headers()[0], "title_main");
}
