#![allow(non_snake_case)]

use super::*;

fn scalar(name: &str, ty: AvroPrimitive) -> FieldNode {
    FieldNode::Scalar {
        name: name.to_string(),
        ty,
    }
}

#[test]
fn FieldNode___scalar___renders_name_type_pair() {
    let field = scalar("id", AvroPrimitive::Long);

    assert_eq!(field.schema(), r#"{"name": "id", "type": "long"}"#);
}

#[test]
fn FieldNode___array___renders_array_wrapper() {
    let field = FieldNode::Array {
        name: "tags".to_string(),
        items: AvroPrimitive::String,
    };

    assert_eq!(
        field.schema(),
        r#"{"name": "tags", "type": {"type": "array", "items": "string"}}"#
    );
}

#[test]
fn FieldNode___enum___renders_symbols_in_order() {
    let field = FieldNode::Enum {
        name: "status".to_string(),
        type_name: "Status".to_string(),
        symbols: vec!["NEW".to_string(), "SHIPPED".to_string()],
    };

    assert_eq!(
        field.schema(),
        r#"{"name": "status", "type": {"type": "enum", "name": "Status", "symbols": [ "NEW", "SHIPPED" ]}}"#
    );
}

#[test]
fn FieldNode___nested_record___renders_inline_record() {
    let field = FieldNode::NestedRecord(NestedRecord {
        field_name: "address".to_string(),
        type_name: "Address".to_string(),
        fields: vec![scalar("city", AvroPrimitive::String)].into(),
    });

    assert_eq!(
        field.schema(),
        r#"{"name": "address", "type": { "name": "Address", "type": "record", "fields": [ {"name": "city", "type": "string"} ] }}"#
    );
}

#[test]
fn FieldNode___unexpanded_nested___renders_empty_field_list() {
    let field = FieldNode::NestedRecord(NestedRecord::unexpanded("next", "Node"));

    assert_eq!(
        field.schema(),
        r#"{"name": "next", "type": { "name": "Node", "type": "record", "fields": [  ] }}"#
    );
}

#[test]
fn FieldNode___name___returns_field_name_for_every_variant() {
    let nested = FieldNode::NestedRecord(NestedRecord::unexpanded("home", "Address"));

    assert_eq!(scalar("id", AvroPrimitive::Int).name(), "id");
    assert_eq!(nested.name(), "home");
}

#[test]
fn RecordNode___schema___renders_envelope() {
    let record = RecordNode {
        name: "Order".to_string(),
        namespace: "Shop".to_string(),
        fields: vec![
            scalar("id", AvroPrimitive::Long),
            scalar("paid", AvroPrimitive::Boolean),
        ]
        .into(),
    };

    assert_eq!(
        record.schema(),
        r#"{"name": "Order", "type": "record", "namespace": "Shop", "fields": [ {"name": "id", "type": "long"}, {"name": "paid", "type": "boolean"} ]}"#
    );
}

#[test]
fn RecordNode___placeholder___has_no_fields() {
    let record = RecordNode::placeholder("Empty", "Shop");

    assert!(record.fields.is_empty());
    assert_eq!(
        record.schema(),
        r#"{"name": "Empty", "type": "record", "namespace": "Shop", "fields": [  ]}"#
    );
}

#[test]
fn RecordNode___schema___escapes_embedded_strings() {
    let record = RecordNode {
        name: "Quote\"d".to_string(),
        namespace: "back\\slash".to_string(),
        fields: vec![scalar("new\nline", AvroPrimitive::Bytes)].into(),
    };

    let parsed: serde_json::Value = serde_json::from_str(&record.schema()).unwrap();

    assert_eq!(parsed["name"], "Quote\"d");
    assert_eq!(parsed["namespace"], "back\\slash");
    assert_eq!(parsed["fields"][0]["name"], "new\nline");
}
