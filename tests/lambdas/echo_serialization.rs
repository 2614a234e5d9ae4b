use common::serializers::spaced_json;
use rstest::rstest;
use serde_json::Value;

#[rstest]
#[case::flat(r#"{"a":1,"b":"two"}"#, r#"{"a": 1, "b": "two"}"#)]
#[case::nested(r#"{"a":{"b":[true,false,null]}}"#, r#"{"a": {"b": [true, false, null]}}"#)]
#[case::float(r#"{"price":9.5}"#, r#"{"price": 9.5}"#)]
#[case::unicode(r#"{"name":"café"}"#, r#"{"name": "caf\u00e9"}"#)]
fn body_is_reserialized_with_spaces(#[case] body: &str, #[case] expected: &str) {
    let value: Value = serde_json::from_str(body).unwrap();

    assert_eq!(expected, spaced_json::to_string(&value).unwrap());
}

#[test]
fn reserialized_body_parses_back() {
    let body = r#"{"z":[1,{"y":"x"}],"a":"é"}"#;
    let value: Value = serde_json::from_str(body).unwrap();

    let echoed = spaced_json::to_string(&value).unwrap();

    assert_eq!(value, serde_json::from_str::<Value>(&echoed).unwrap());
}
