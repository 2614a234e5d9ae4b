pub mod json_from_string;
pub mod url_encoded;
