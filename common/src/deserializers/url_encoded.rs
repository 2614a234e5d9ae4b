use serde::{Deserialize, Deserializer};

/// Decodes a form-style URL escaped string: `+` stands for a space and `%XX`
/// sequences are percent decoded. Invalid UTF-8 is replaced, never rejected.
pub fn decode_plus(value: &str) -> String {
    let spaced = value.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Deserializes a URL escaped string field, such as an S3 object key in an event
/// notification, into its decoded form.
pub fn deserialize_url_encoded<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(decode_plus(&raw))
}
