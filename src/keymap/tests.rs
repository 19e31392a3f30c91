//! Keymap loading tests

use std::io::Write;

use super::*;

const SAMPLE_KEYMAP_YAML: &str = r#"
bindings:
  - key: "home"
    intent: MoveLeftToFirst
  - key: "end"
    intent: MoveRightToLast
  - key: "ctrl+shift+e"
    intent: ToggleEdit
  - key: "f2"
    intent: None
"#;

#[test]
fn test_sample_yaml_parses() {
    let bindings = parse_keymap_yaml(SAMPLE_KEYMAP_YAML).expect("sample keymap should parse");
    assert_eq!(bindings.len(), 4);
    assert_eq!(
        bindings[2].keystroke,
        Keystroke::new(KeyCode::Char('e'), Modifiers::CTRL | Modifiers::SHIFT)
    );
    assert!(bindings[3].is_unbind());
}

#[test]
fn test_yaml_keymap_overrides_builtin_rules() {
    let keymap = Keymap::with_bindings(parse_keymap_yaml(SAMPLE_KEYMAP_YAML).unwrap());

    assert_eq!(
        keymap.classify(&Keystroke::key(KeyCode::End)),
        Intent::MoveRightToLast
    );
    assert_eq!(keymap.classify(&Keystroke::key(KeyCode::F(2))), Intent::None);
    assert_eq!(
        keymap.classify(&Keystroke::key(KeyCode::Escape)),
        Intent::CancelEdit
    );
}

#[test]
fn test_parse_key_string_variants() {
    assert_eq!(
        parse_key_string("Ctrl+Left"),
        Ok(Keystroke::ctrl(KeyCode::Left))
    );
    assert_eq!(
        parse_key_string("f12"),
        Ok(Keystroke::key(KeyCode::F(12)))
    );
    assert_eq!(
        parse_key_string("esc"),
        Ok(Keystroke::key(KeyCode::Escape))
    );
    assert!(matches!(
        parse_key_string("ctrl+a+b"),
        Err(KeymapError::InvalidKey(_))
    ));
    assert!(matches!(
        parse_key_string("ctrl"),
        Err(KeymapError::InvalidKey(_))
    ));
    assert!(matches!(
        parse_key_string("f99"),
        Err(KeymapError::InvalidKey(_))
    ));
}

#[test]
fn test_invalid_intent_is_reported() {
    let yaml = "bindings:\n  - key: up\n    intent: Teleport\n";
    assert_eq!(
        parse_keymap_yaml(yaml),
        Err(KeymapError::InvalidIntent("Teleport".to_string()))
    );
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    assert!(matches!(
        parse_keymap_yaml("bindings: [ {key: "),
        Err(KeymapError::Parse(_))
    ));
}

#[test]
fn test_load_keymap_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_KEYMAP_YAML.as_bytes()).unwrap();

    let keymap = load_keymap_file(file.path()).unwrap();
    assert_eq!(keymap.bindings().len(), 4);
    assert_eq!(
        keymap.classify(&Keystroke::key(KeyCode::Home)),
        Intent::MoveLeftToFirst
    );
}

#[test]
fn test_load_missing_keymap_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_keymap_file(&dir.path().join("missing.yaml"));
    assert!(matches!(result, Err(KeymapError::Io(_))));
}
