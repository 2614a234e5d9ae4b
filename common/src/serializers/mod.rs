pub mod spaced_json;
