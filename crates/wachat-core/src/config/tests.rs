use super::*;

#[test]
fn test_config_defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.wachat.data_dir, "~/.wachat");
    assert_eq!(cfg.wachat.log_level, "info");
    assert!(!cfg.link.strict_phone, "lenient phone policy by default");
    assert_eq!(cfg.link.floating_message, "Hi! I need help with my order.");
    assert_eq!(cfg.link.test_message, "Test message");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
        [link]
        strict_phone = true
    "#;
    let cfg: Config = toml::from_str(toml_str).unwrap();
    assert!(cfg.link.strict_phone);
    assert_eq!(
        cfg.link.floating_message, "Hi! I need help with my order.",
        "missing keys should keep their defaults"
    );
    assert_eq!(cfg.wachat.data_dir, "~/.wachat");
}

#[test]
fn test_config_from_empty_toml() {
    let cfg: Config = toml::from_str("").unwrap();
    assert_eq!(cfg.wachat.log_level, "info");
    assert_eq!(cfg.link.test_message, "Test message");
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("nope.toml");
    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.wachat.data_dir, "~/.wachat");
}

#[test]
fn test_load_reads_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        "[wachat]\ndata_dir = \"/srv/shop\"\n\n[link]\nfloating_message = \"Hello!\"\n",
    )
    .unwrap();

    let cfg = load(path.to_str().unwrap()).unwrap();
    assert_eq!(cfg.wachat.data_dir, "/srv/shop");
    assert_eq!(cfg.link.floating_message, "Hello!");
    assert_eq!(
        cfg.settings_path(),
        std::path::PathBuf::from("/srv/shop/settings.toml")
    );
}

#[test]
fn test_load_rejects_malformed_toml() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(&path, "[wachat\ndata_dir = ").unwrap();

    let err = load(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, WachatError::Config(_)));
}

#[test]
fn test_shellexpand_leaves_plain_paths() {
    assert_eq!(shellexpand("/etc/wachat.toml"), "/etc/wachat.toml");
    assert_eq!(shellexpand("relative/path"), "relative/path");
}
