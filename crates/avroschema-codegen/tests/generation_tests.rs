//! End-to-end synthesis over JSON descriptor sets.

#![allow(non_snake_case)]

use avroschema_codegen::{AvscEmitter, RustSourceEmitter, SchemaGenerator};
use avroschema_core::{FieldNaming, GeneratorConfig, NamespaceSource, OutputConfig, SchemaError};
use avroschema_descriptor::{AllMessages, AllowList, ExtensionOptIn, FileDescriptorSet};

const ORDER: &str = include_str!("fixtures/order.json");
const SHIPPING: &str = include_str!("fixtures/shipping.json");

fn schemas(set: &FileDescriptorSet, generator: &SchemaGenerator) -> Vec<String> {
    generator
        .generate(set, &[])
        .unwrap()
        .into_iter()
        .flat_map(|unit| unit.schemas)
        .map(|s| s.schema)
        .collect()
}

fn set_from(json: &str) -> FileDescriptorSet {
    FileDescriptorSet::from_json_str(json).unwrap()
}

#[test]
fn order___synthesizes_exact_record_text() {
    let set = set_from(ORDER);

    let out = schemas(&set, &SchemaGenerator::new(ExtensionOptIn::default()));

    assert_eq!(
        out,
        vec![concat!(
            r#"{"name": "Order", "type": "record", "namespace": "Order", "fields": [ "#,
            r#"{"name": "id", "type": "long"}, "#,
            r#"{"name": "tags", "type": {"type": "array", "items": "string"}}, "#,
            r#"{"name": "status", "type": {"type": "enum", "name": "Status", "symbols": [ "NEW", "SHIPPED" ]}}"#,
            r#" ]}"#
        )
        .to_string()]
    );
}

#[test]
fn order___output_is_valid_json() {
    let set = set_from(ORDER);

    for schema in schemas(&set, &SchemaGenerator::new(AllMessages)) {
        let value: serde_json::Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(value["type"], "record");
    }
}

#[test]
fn shipping___record_declared_first___is_shared_by_siblings() {
    let set = set_from(SHIPPING);

    let out = schemas(&set, &SchemaGenerator::new(ExtensionOptIn::default()));

    let address = r#"{ "name": "Address", "type": "record", "fields": [ {"name": "city", "type": "string"}, {"name": "zip", "type": "int"} ] }"#;
    assert_eq!(out.len(), 4);
    assert!(out[1].contains(&format!(r#"{{"name": "billing", "type": {address}}}"#)));
    assert!(out[2].contains(&format!(r#"{{"name": "destination", "type": {address}}}"#)));
}

#[test]
fn shipping___nested_declarations___are_walked_after_parent() {
    let set = set_from(SHIPPING);

    let units = SchemaGenerator::new(ExtensionOptIn::default())
        .generate(&set, &[])
        .unwrap();

    let names: Vec<&str> = units[0]
        .schemas
        .iter()
        .map(|s| s.full_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            ".logistics.v1.Address",
            ".logistics.v1.Invoice",
            ".logistics.v1.Shipment",
            ".logistics.v1.Shipment.Leg",
        ]
    );
    assert_eq!(units[0].namespace, "ShippingEvents");
}

#[test]
fn shipping___package_namespace_and_camel_case___applied_together() {
    let set = set_from(SHIPPING);
    let generator = SchemaGenerator::new(AllMessages).with_output(OutputConfig {
        namespace: NamespaceSource::Package,
        field_names: FieldNaming::CamelCase,
        pretty: false,
    });

    let out = schemas(&set, &generator);

    assert!(out[2].starts_with(
        r#"{"name": "Shipment", "type": "record", "namespace": "logistics.v1", "fields": [ "#
    ));
    assert!(out[2].contains(r#"{"name": "WeightGrams", "type": "int"}"#));
}

#[test]
fn shared_nested_reference___second_sibling_reuses_first_node() {
    let set = set_from(
        r#"{"file": [{"name": "pay.proto", "messageType": [
            {"name": "Invoice", "field": [
                {"name": "address", "type": "TYPE_MESSAGE", "typeName": ".Address"}]},
            {"name": "Receipt", "field": [
                {"name": "address", "type": "TYPE_MESSAGE", "typeName": ".Address"}]},
            {"name": "Address", "field": [
                {"name": "line", "type": "TYPE_STRING"}]}
        ]}]}"#,
    );

    let units = SchemaGenerator::new(AllowList::new(["Invoice", "Receipt"]))
        .generate(&set, &[])
        .unwrap();

    let nested = r#"{"name": "address", "type": { "name": "Address", "type": "record", "fields": [  ] }}"#;
    assert_eq!(units[0].schemas.len(), 2);
    assert!(units[0].schemas[0].schema.contains(nested));
    assert!(units[0].schemas[1].schema.contains(nested));
}

#[test]
fn self_reference___wraps_fields_declared_before_it() {
    let set = set_from(
        r#"{"file": [{"name": "tree.proto", "package": "tree", "messageType": [
            {"name": "Node", "field": [
                {"name": "value", "type": "TYPE_INT32"},
                {"name": "parent", "type": "TYPE_MESSAGE", "typeName": ".tree.Node"}]}
        ]}]}"#,
    );

    let out = schemas(&set, &SchemaGenerator::new(AllMessages));

    assert_eq!(
        out,
        vec![concat!(
            r#"{"name": "Node", "type": "record", "namespace": "Tree", "fields": [ "#,
            r#"{"name": "value", "type": "int"}, "#,
            r#"{"name": "parent", "type": { "name": "Node", "type": "record", "fields": [ {"name": "value", "type": "int"} ] }}"#,
            r#" ]}"#
        )
        .to_string()]
    );
}

#[test]
fn group_field___is_omitted_without_error() {
    let set = set_from(
        r#"{"file": [{"name": "legacy.proto", "messageType": [
            {"name": "Old", "field": [
                {"name": "id", "type": "TYPE_UINT64"},
                {"name": "Result", "type": "TYPE_GROUP", "typeName": ".Old.Result"}]}
        ]}]}"#,
    );

    let out = schemas(&set, &SchemaGenerator::new(AllMessages));

    assert_eq!(
        out[0],
        r#"{"name": "Old", "type": "record", "namespace": "Legacy", "fields": [ {"name": "id", "type": "long"} ]}"#
    );
}

#[test]
fn unknown_type___aborts_unit_with_no_output() {
    let set = set_from(
        r#"{"file": [{"name": "bad.proto", "messageType": [
            {"name": "Fine", "field": [{"name": "a", "type": "TYPE_BOOL"}]},
            {"name": "Broken", "field": [{"name": "b", "type": 99}]}
        ]}]}"#,
    );

    let err = SchemaGenerator::new(AllMessages)
        .emit(&set, &[], &AvscEmitter)
        .unwrap_err();

    assert_eq!(err.to_string(), "message .Broken: unknown type for b");
    assert_eq!(err.error_code(), 2);
}

#[test]
fn repeated_message___is_rejected_as_non_primitive() {
    let set = set_from(
        r#"{"file": [{"name": "cart.proto", "messageType": [
            {"name": "Cart", "field": [
                {"name": "items", "label": "LABEL_REPEATED", "type": "TYPE_MESSAGE", "typeName": ".Item"}]}
        ]}]}"#,
    );

    let err = SchemaGenerator::new(AllMessages)
        .generate(&set, &[])
        .unwrap_err();

    assert!(matches!(
        err.root_cause(),
        SchemaError::UnknownPrimitiveType { field, .. } if field == "items"
    ));
}

#[test]
fn mutual_reference___second_record_reuses_completed_first() {
    let set = set_from(
        r#"{"file": [{"name": "cycle.proto", "package": "cycle", "messageType": [
            {"name": "A", "field": [
                {"name": "b", "type": "TYPE_MESSAGE", "typeName": ".cycle.B"}]},
            {"name": "B", "field": [
                {"name": "a", "type": "TYPE_MESSAGE", "typeName": ".cycle.A"}]}
        ]}]}"#,
    );

    let out = schemas(&set, &SchemaGenerator::new(AllowList::new(["cycle.A", "cycle.B"])));

    assert_eq!(
        out,
        vec![
            concat!(
                r#"{"name": "A", "type": "record", "namespace": "Cycle", "fields": [ "#,
                r#"{"name": "b", "type": { "name": "B", "type": "record", "fields": [  ] }}"#,
                r#" ]}"#
            )
            .to_string(),
            concat!(
                r#"{"name": "B", "type": "record", "namespace": "Cycle", "fields": [ "#,
                r#"{"name": "a", "type": { "name": "A", "type": "record", "fields": [ "#,
                r#"{"name": "b", "type": { "name": "B", "type": "record", "fields": [  ] }}"#,
                r#" ] }}"#,
                r#" ]}"#
            )
            .to_string(),
        ]
    );
}

#[test]
fn same_short_name_under_different_parents___both_synthesize() {
    let set = set_from(
        r#"{"file": [{"name": "rpc.proto", "messageType": [
            {"name": "Request", "nestedType": [
                {"name": "Options", "field": [{"name": "verbose", "type": "TYPE_BOOL"}]}]},
            {"name": "Response", "nestedType": [
                {"name": "Options", "field": [{"name": "compress", "type": "TYPE_BOOL"}]}]}
        ]}]}"#,
    );

    let units = SchemaGenerator::new(AllMessages)
        .generate(&set, &[])
        .unwrap();

    let schemas = &units[0].schemas;
    assert_eq!(schemas.len(), 4);
    assert_eq!(schemas[1].full_name, ".Request.Options");
    assert_eq!(
        schemas[1].schema,
        r#"{"name": "Options", "type": "record", "namespace": "Rpc", "fields": [ {"name": "verbose", "type": "boolean"} ]}"#
    );
    assert_eq!(schemas[3].full_name, ".Response.Options");
    assert_eq!(
        schemas[3].schema,
        r#"{"name": "Options", "type": "record", "namespace": "Rpc", "fields": [ {"name": "compress", "type": "boolean"} ]}"#
    );
}

#[test]
fn field_named_like_earlier_record___keeps_that_record_shared() {
    let set = set_from(
        r#"{"file": [{"name": "sales.proto", "messageType": [
            {"name": "Order", "field": [{"name": "id", "type": "TYPE_INT64"}]},
            {"name": "Refund", "field": [
                {"name": "order", "type": "TYPE_MESSAGE", "typeName": ".Receipt2"}]},
            {"name": "Audit", "field": [
                {"name": "subject", "type": "TYPE_MESSAGE", "typeName": ".Order"}]}
        ]}]}"#,
    );

    let out = schemas(&set, &SchemaGenerator::new(AllowList::new(["Order", "Refund", "Audit"])));

    assert_eq!(out.len(), 3);
    assert_eq!(
        out[1],
        r#"{"name": "Refund", "type": "record", "namespace": "Sales", "fields": [ {"name": "order", "type": { "name": "Receipt2", "type": "record", "fields": [  ] }} ]}"#
    );
    assert_eq!(
        out[2],
        r#"{"name": "Audit", "type": "record", "namespace": "Sales", "fields": [ {"name": "subject", "type": { "name": "Order", "type": "record", "fields": [ {"name": "id", "type": "long"} ] }} ]}"#
    );
}

#[test]
fn cache___is_scoped_to_one_file() {
    let set = set_from(
        r#"{"file": [
            {"name": "a.proto", "messageType": [{"name": "Item", "field": [{"name": "x", "type": "TYPE_INT32"}]}]},
            {"name": "b.proto", "messageType": [{"name": "Item", "field": [{"name": "y", "type": "TYPE_INT64"}]}]}
        ]}"#,
    );

    let units = SchemaGenerator::new(AllMessages)
        .generate(&set, &[])
        .unwrap();

    assert_eq!(units.len(), 2);
    assert!(units[1].schemas[0].schema.contains(r#""name": "y""#));
}

#[test]
fn requested_files___limit_generation() {
    let set = set_from(
        r#"{"file": [
            {"name": "a.proto", "messageType": [{"name": "A"}]},
            {"name": "b.proto", "messageType": [{"name": "B"}]}
        ]}"#,
    );

    let units = SchemaGenerator::new(AllMessages)
        .generate(&set, &["b.proto".to_string()])
        .unwrap();

    assert_eq!(units.len(), 1);
    assert_eq!(units[0].file, "b.proto");
    assert_eq!(
        units[0].schemas[0].schema,
        r#"{"name": "B", "type": "record", "namespace": "B", "fields": [  ]}"#
    );
}

#[test]
fn enum_in_imported_file___resolves_across_the_set() {
    let set = set_from(
        r#"{"file": [
            {"name": "common/types.proto", "package": "common",
             "enumType": [{"name": "Color", "value": [{"name": "RED"}, {"name": "BLUE", "number": 1}]}]},
            {"name": "paint.proto", "messageType": [
                {"name": "Can", "field": [{"name": "color", "type": "TYPE_ENUM", "typeName": ".common.Color"}]}]}
        ]}"#,
    );

    let units = SchemaGenerator::new(AllMessages)
        .generate(&set, &["paint.proto".to_string()])
        .unwrap();

    assert!(units[0].schemas[0].schema.contains(
        r#"{"name": "color", "type": {"type": "enum", "name": "Color", "symbols": [ "RED", "BLUE" ]}}"#
    ));
}

#[test]
fn config___drives_selection_and_rendering() {
    let config = GeneratorConfig::from_toml_str(
        r#"
            [opt_in]
            messages = ["shop.Draft"]

            [output]
            pretty = true
        "#,
    )
    .unwrap();
    let set = set_from(ORDER);

    let units = SchemaGenerator::from_config(&config)
        .generate(&set, &[])
        .unwrap();

    assert_eq!(units[0].schemas.len(), 2);
    assert!(units[0].schemas[1].schema.contains("\n  \"name\": \"Draft\""));
}

#[test]
fn rust_emitter___writes_one_module_per_file() {
    let set = set_from(SHIPPING);

    let files = SchemaGenerator::new(ExtensionOptIn::default())
        .emit(&set, &[], &RustSourceEmitter::new())
        .unwrap();

    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path.to_str(), Some("shipping_events_avro.rs"));
    assert!(files[0].content.contains("pub fn avro_schema_for_leg()"));
    assert!(files[0].content.contains("pub fn avro_schema_for_address()"));
    assert!(files[0].content.contains("logistics/shipping-events.proto"));
}
