//! Export integration harness.
//!
//! # What this covers
//!
//! - **Exact text**: 2-space pretty JSON in schema field order, integral
//!   times written without a fraction (insta inline snapshot).
//! - **Reproducibility**: the same document exports to the same bytes.
//! - **Round trip**: re-normalizing an export yields the same document.
//! - **Files**: `gradient_<millis>.json` lands in the requested directory;
//!   with nothing loaded no file is written.
//!
//! # Running
//!
//! ```sh
//! cargo test --test export_harness
//! # Update snapshots after intentional format changes:
//! cargo insta review
//! ```

mod common;
use common::*;

use chrono::{TimeZone, Utc};
use gradbin_core::{
    detect_format,
    export::{export_latest, to_pretty_json, write_export_at},
    normalize, ExportError,
};
use pretty_assertions::assert_eq;

#[test]
fn xml_export_text() {
    let doc = normalize(detect_format(XML_FULL), XML_FULL).unwrap();
    insta::assert_snapshot!(to_pretty_json(&doc).unwrap(), @r###"
{
  "colorSequence": [
    {
      "time": 0,
      "color": "#112233"
    },
    {
      "time": 0.5,
      "color": "#888888"
    },
    {
      "time": 1,
      "color": "#FFFFFF"
    }
  ],
  "propsColors": [
    {
      "name": "border",
      "color": "#445566"
    },
    {
      "name": "shadow",
      "color": "#00000080"
    }
  ],
  "firstColor": "#000000",
  "lastColor": "#FFFFFF"
}
"###);
}

#[test]
fn empty_document_export_text() {
    let doc = normalize(detect_format("{}"), "{}").unwrap();
    insta::assert_snapshot!(to_pretty_json(&doc).unwrap(), @r###"
{
  "colorSequence": [],
  "propsColors": [],
  "firstColor": null,
  "lastColor": null
}
"###);
}

#[test]
fn export_is_reproducible_and_round_trips() {
    let doc = GradientDocumentBuilder::new()
        .stop(0.125, "#010203")
        .stop(0.1 + 0.2, "rgba(0, 0, 0, 0.5)")
        .stop(1.0, "red")
        .prop("glow", "#FFEE00")
        .last("#FFF")
        .build();

    let first = to_pretty_json(&doc).unwrap();
    let second = to_pretty_json(&doc).unwrap();
    assert_eq!(first, second);

    let reparsed = normalize(detect_format(&first), &first).unwrap();
    assert_eq!(reparsed, doc);
}

#[test]
fn export_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let doc = normalize(detect_format(JSON_FULL), JSON_FULL).unwrap();
    let at = Utc.timestamp_millis_opt(1_718_000_000_000).unwrap();

    let path = write_export_at(&doc, dir.path(), at).unwrap();

    assert_eq!(path, dir.path().join("gradient_1718000000000.json"));
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        to_pretty_json(&doc).unwrap()
    );
}

#[test]
fn nothing_loaded_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let err = export_latest(None, dir.path()).unwrap_err();
    assert!(matches!(err, ExportError::NoDocument));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
