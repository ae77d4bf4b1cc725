use serde_json::json;
use std::fs;
use tempfile::tempdir;
use tree_grower::errors::{LoadError, SaveError};
use tree_grower::utils::json_file;

#[test]
fn load_nodes_distinguishes_failures() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let missing = json_file::load_nodes(&root.join("missing.json")).unwrap_err();
    assert!(matches!(missing, LoadError::NotFound { .. }));
    assert!(missing.to_string().starts_with("Input file not found"));

    let broken = root.join("broken.json");
    fs::write(&broken, "[{").unwrap();
    assert!(matches!(json_file::load_nodes(&broken), Err(LoadError::Decode { .. })));

    let scalar = root.join("scalar.json");
    fs::write(&scalar, "\"just a string\"").unwrap();
    assert!(matches!(
        json_file::load_nodes(&scalar),
        Err(LoadError::NotAList { found: "string" })
    ));

    // a directory cannot be read as a file
    assert!(json_file::load_nodes(root).is_err());
}

#[test]
fn load_nodes_keeps_field_order_and_mixed_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("seed.json");
    fs::write(&path, r#"[{"name":"x","id":"a","parentId":null}, 7]"#).unwrap();

    let nodes = json_file::load_nodes(&path).unwrap();
    assert_eq!(nodes.len(), 2);
    let keys: Vec<&str> = nodes[0].as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["name", "id", "parentId"]);
    assert_eq!(nodes[1], json!(7));
}

#[test]
fn save_nodes_writes_compact_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    let nodes = vec![json!({"id": "a", "name": "João"}), json!({"id": "b", "parentId": "a"})];

    json_file::save_nodes(&path, &nodes).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, r#"[{"id":"a","name":"João"},{"id":"b","parentId":"a"}]"#);
}

#[test]
fn save_nodes_reports_unwritable_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.json");
    let err = json_file::save_nodes(&path, &[json!({"id": "a"})]).unwrap_err();
    assert!(matches!(err, SaveError::Create { .. }));
}
