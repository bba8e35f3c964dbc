//! Tests for the output module

use super::*;
use crate::swagger::{Info, Paths, SwaggerDocument};
use std::path::Path;
use tempfile::tempdir;

fn sample_doc() -> SwaggerDocument {
    SwaggerDocument {
        swagger: "2.0".to_string(),
        info: Info {
            title: "Sample".to_string(),
            description: "No description".to_string(),
            version: "1.0.0".to_string(),
        },
        host: Some("api.example.com".to_string()),
        basepath: None,
        schemes: vec!["https".to_string()],
        consumes: None,
        produces: None,
        paths: Paths::new(),
    }
}

#[test]
fn test_format_from_path() {
    assert_eq!(OutputFormat::from_path(Path::new("out.yaml")), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from_path(Path::new("out.yml")), OutputFormat::Yaml);
    assert_eq!(OutputFormat::from_path(Path::new("out.json")), OutputFormat::Json);
    assert_eq!(OutputFormat::from_path(Path::new("swagger")), OutputFormat::Json);
}

#[test]
fn test_render_json_keeps_field_order() {
    let rendered = render_document(&sample_doc(), OutputFormat::Json).unwrap();

    let swagger = rendered.find("\"swagger\"").unwrap();
    let info = rendered.find("\"info\"").unwrap();
    let host = rendered.find("\"host\"").unwrap();
    let paths = rendered.find("\"paths\"").unwrap();
    assert!(swagger < info && info < host && host < paths);
    assert!(!rendered.contains("basepath"));
    assert!(rendered.ends_with('\n'));
}

#[test]
fn test_render_yaml() {
    let rendered = render_document(&sample_doc(), OutputFormat::Yaml).unwrap();
    assert!(rendered.contains("swagger: '2.0'"));
    assert!(rendered.contains("host: api.example.com"));

    let parsed: SwaggerDocument = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(parsed, sample_doc());
}

#[test]
fn test_write_document_creates_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("swagger.json");

    write_document(&sample_doc(), &path, OutputFormat::Json).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: SwaggerDocument = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, sample_doc());
}

#[test]
fn test_write_document_to_buffer() {
    let mut buffer = Vec::new();
    write_document_to(&sample_doc(), &mut buffer, OutputFormat::Json).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains("\"title\": \"Sample\""));
}
