use serde_json::{Value, json};

use es_template::es::codec::{self, DocumentKind};
use es_template::{Mappings, Property, PropertyType, Template, TypeMapping};

const MAPPINGS_JSON: &str = r#"{"_default_":{"_all":{"enabled":true}},"some_type":{"properties":{"@timestamp":{"type":"date","format":"yyyy-MM-dd'T'HH:mm:ssZ"},"count":{"type":"integer"},"location":{"type":"geo_point"},"object":{"type":"nested","properties":{"title":{"type":"keyword","ignore_above":256},"user":{"type":"nested","properties":{"age":{"type":"integer"},"first_name":{"type":"keyword"},"last_name":{"type":"keyword"}}}}},"word":{"type":"text","fielddata":true,"fields":{"keyword":{"type":"keyword","ignore_above":256}}}}}}"#;

const TEMPLATE_JSON: &str = r#"{"template":"te*","settings":{"number_of_shards":1},"mappings":{"type1":{"_source":{"enabled":false},"properties":{"created_at":{"type":"date","format":"EEE MMM dd HH:mm:ss Z YYYY"},"host_name":{"type":"keyword"}}}}}"#;

fn sample_mappings() -> Mappings {
    let user = Property::nested([
        ("first_name", Property::keyword()),
        ("last_name", Property::keyword()),
        ("age", Property::integer()),
    ]);
    let object = Property::nested([
        ("title", Property::keyword().with_ignore_above(256)),
        ("user", user),
    ]);
    let word = Property::text()
        .with_field_data(true)
        .with_field("keyword", Property::keyword().with_ignore_above(256));

    let some_type = TypeMapping::new()
        .with_property("@timestamp", Property::date().with_format("yyyy-MM-dd'T'HH:mm:ssZ"))
        .with_property("count", Property::integer())
        .with_property("location", Property::geo_point())
        .with_property("word", word)
        .with_property("object", object);

    Mappings::from([
        ("_default_".to_string(), TypeMapping::new().with_all(true)),
        ("some_type".to_string(), some_type),
    ])
}

fn sample_template() -> Template {
    Template::new("te*").with_shards(1).with_mapping(
        "type1",
        TypeMapping::new()
            .with_source(false)
            .with_property("host_name", Property::new("keyword".into()))
            .with_property(
                "created_at",
                Property::new("date".into()).with_format("EEE MMM dd HH:mm:ss Z YYYY"),
            ),
    )
}

#[test]
fn mappings_encode_matches_fixture() {
    assert_eq!(codec::encode_mappings(&sample_mappings()).unwrap(), MAPPINGS_JSON);
}

#[test]
fn mappings_decode_matches_constructed_value() {
    assert_eq!(codec::decode_mappings(MAPPINGS_JSON).unwrap(), sample_mappings());
}

#[test]
fn template_encode_matches_fixture() {
    assert_eq!(sample_template().to_json().unwrap(), TEMPLATE_JSON);
}

#[test]
fn template_decode_matches_constructed_value() {
    assert_eq!(Template::from_json(TEMPLATE_JSON).unwrap(), sample_template());
}

#[test]
fn round_trip_preserves_value() {
    let template = sample_template()
        .with_order(3)
        .with_replicas(0)
        .with_mapping("_default_", TypeMapping::new().with_all(false));
    let decoded: Template = codec::decode(&codec::encode(&template).unwrap()).unwrap();
    assert_eq!(decoded, template);

    let mappings = sample_mappings();
    let decoded: Mappings = codec::decode(&codec::encode(&mappings).unwrap()).unwrap();
    assert_eq!(decoded, mappings);
}

#[test]
fn encoding_is_deterministic() {
    let first = codec::encode(&sample_mappings()).unwrap();
    let second = codec::encode(&sample_mappings()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn unset_attributes_have_no_wire_key() {
    let value = codec::encode_value(&Property::keyword()).unwrap();
    assert_eq!(value, json!({ "type": "keyword" }));

    let value = codec::encode_value(&TypeMapping::new()).unwrap();
    assert_eq!(value, json!({}));

    let value = codec::encode_value(&Template::new("x*")).unwrap();
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["template"]);
}

#[test]
fn all_enabled_alone_encodes_minimal_document() {
    let mapping = TypeMapping::new().with_all(true);
    assert_eq!(codec::encode(&mapping).unwrap(), r#"{"_all":{"enabled":true}}"#);
}

#[test]
fn keyword_under_nested_parent() {
    let parent = Property::nested([("tag", Property::keyword().with_ignore_above(256))]);
    assert_eq!(
        codec::encode(&parent).unwrap(),
        r#"{"type":"nested","properties":{"tag":{"type":"keyword","ignore_above":256}}}"#
    );
}

#[test]
fn deep_nesting_round_trips() {
    let mut property = Property::keyword();
    for depth in 0..20 {
        property = Property::nested([(format!("level_{depth}"), property)]);
    }
    let encoded = codec::encode(&property).unwrap();
    let decoded: Property = codec::decode(&encoded).unwrap();
    assert_eq!(decoded, property);

    let mut cursor = &decoded;
    for depth in (0..20).rev() {
        assert_eq!(cursor.kind, PropertyType::Nested);
        cursor = &cursor.properties[&format!("level_{depth}")];
    }
    assert_eq!(cursor.kind, PropertyType::Keyword);
}

#[test]
fn unknown_keys_are_ignored() {
    let input = json!({
        "template": "te*",
        "index_patterns": ["te*"],
        "mappings": {
            "doc": {
                "dynamic": "strict",
                "properties": {
                    "name": { "type": "text", "norms": false, "copy_to": "all_text" }
                }
            }
        }
    });
    let template: Template = codec::decode_value(input).unwrap();
    assert_eq!(
        template,
        Template::new("te*").with_mapping(
            "doc",
            TypeMapping::new().with_property("name", Property::text())
        )
    );
}

#[test]
fn decode_then_encode_reproduces_document() {
    let original: Value = serde_json::from_str(TEMPLATE_JSON).unwrap();
    let out = codec::canonicalize(TEMPLATE_JSON, DocumentKind::Template, false).unwrap();
    assert_eq!(out, TEMPLATE_JSON);
    assert_eq!(serde_json::from_str::<Value>(&out).unwrap(), original);
}

#[test]
fn type_mismatch_is_a_decode_error() {
    let err = codec::decode_mappings(r#"{"t":{"properties":{"n":{"type":"keyword","ignore_above":"256"}}}}"#)
        .unwrap_err();
    assert!(err.is_type_mismatch());

    let err = codec::decode_mappings(r#"{"t":{"_source":{"enabled":"no"}}}"#).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn malformed_json_is_a_decode_error() {
    let err = codec::decode_template("{template: te*}").unwrap_err();
    assert!(err.is_syntax());
    assert!(err.to_string().starts_with("failed to decode Template at line 1"));
}

#[test]
fn mappings_unit_decodes_from_bytes() {
    let mappings: Mappings = codec::decode_slice(MAPPINGS_JSON.as_bytes()).unwrap();
    assert_eq!(mappings.len(), 2);
    assert_eq!(
        mappings["some_type"].properties["word"].fields["keyword"].ignore_above,
        Some(256)
    );
}

#[test]
fn explicit_null_maps_decode_as_empty() {
    let template = codec::decode_template(
        r#"{"template":"te*","settings":null,"mappings":{"t":{"properties":null}},"aliases":null}"#,
    )
    .unwrap();
    assert_eq!(template, Template::new("te*").with_mapping("t", TypeMapping::new()));

    let mappings = codec::decode_mappings(
        r#"{"t":{"properties":{"word":{"type":"text","fields":null,"properties":null}}}}"#,
    )
    .unwrap();
    assert_eq!(mappings["t"].properties["word"], Property::text());
}

#[test]
fn other_type_with_known_name_round_trips() {
    let mapping = TypeMapping::new()
        .with_property("tag", Property::new(PropertyType::Other("keyword".into())))
        .with_property("hash", Property::new(PropertyType::Other("murmur3".into())));
    let decoded: TypeMapping = codec::decode(&codec::encode(&mapping).unwrap()).unwrap();
    assert_eq!(decoded, mapping);
    assert_eq!(decoded.properties["hash"].kind.as_str(), "murmur3");
}
