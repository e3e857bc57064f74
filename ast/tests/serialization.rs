#[path = "serialization/json.rs"]
mod json;
