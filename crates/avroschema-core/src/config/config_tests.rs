#![allow(non_snake_case)]

use super::*;

#[test]
fn GeneratorConfig___default___has_expected_values() {
    let config = GeneratorConfig::default();

    assert_eq!(config.log_level, "info");
    assert_eq!(config.opt_in.message_option, "gogoproto.avro_schema");
    assert_eq!(config.opt_in.file_option, "gogoproto.avro_schema_all");
    assert!(config.opt_in.messages.is_empty());
    assert!(!config.opt_in.all);
    assert_eq!(config.output.namespace, NamespaceSource::File);
    assert_eq!(config.output.field_names, FieldNaming::Declared);
    assert!(!config.output.pretty);
}

#[test]
fn GeneratorConfig___from_toml_str___empty_returns_defaults() {
    let config = GeneratorConfig::from_toml_str("  \n").unwrap();

    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn GeneratorConfig___from_toml_str___parses_all_sections() {
    let toml = r#"
log_level = "debug"

[opt_in]
message_option = "acme.avro"
messages = ["shop.Order", "shop.Customer"]

[output]
namespace = "package"
field_names = "camel-case"
pretty = true
"#;

    let config = GeneratorConfig::from_toml_str(toml).unwrap();

    assert_eq!(config.log_level().unwrap(), LogLevel::Debug);
    assert_eq!(config.opt_in.message_option, "acme.avro");
    assert_eq!(config.opt_in.file_option, "gogoproto.avro_schema_all");
    assert_eq!(config.opt_in.messages, vec!["shop.Order", "shop.Customer"]);
    assert_eq!(config.output.namespace, NamespaceSource::Package);
    assert_eq!(config.output.field_names, FieldNaming::CamelCase);
    assert!(config.output.pretty);
}

#[test]
fn GeneratorConfig___from_toml_str___rejects_unknown_keys() {
    let toml = r#"
[output]
indent = 4
"#;

    let err = GeneratorConfig::from_toml_str(toml).unwrap_err();

    assert!(matches!(err, SchemaError::Config(_)));
}

#[test]
fn GeneratorConfig___from_toml_str___rejects_unknown_namespace_source() {
    let toml = r#"
[output]
namespace = "directory"
"#;

    assert!(GeneratorConfig::from_toml_str(toml).is_err());
}

#[test]
fn GeneratorConfig___validate___accepts_defaults() {
    assert!(GeneratorConfig::default().validate().is_ok());
}

#[test]
fn GeneratorConfig___validate___rejects_bad_log_level() {
    let config = GeneratorConfig {
        log_level: "loud".to_string(),
        ..Default::default()
    };

    assert!(config.validate().is_err());
}

#[test]
fn GeneratorConfig___validate___rejects_empty_message_option() {
    let mut config = GeneratorConfig::default();
    config.opt_in.message_option = " ".to_string();

    let err = config.validate().unwrap_err();

    assert_eq!(
        err.to_string(),
        "configuration error: opt_in.message_option cannot be empty"
    );
}

#[test]
fn GeneratorConfig___validate___rejects_empty_allowlist_entry() {
    let mut config = GeneratorConfig::default();
    config.opt_in.messages = vec!["shop.Order".to_string(), String::new()];

    let err = config.validate().unwrap_err();

    assert_eq!(
        err.to_string(),
        "configuration error: opt_in.messages[1] cannot be empty"
    );
}

#[test]
fn GeneratorConfig___load___missing_file_is_config_error() {
    let err = GeneratorConfig::load("/nonexistent/avroschema.toml").unwrap_err();

    assert!(matches!(err, SchemaError::Config(_)));
}
