//! Response envelope helpers. Payloads are wrapped under a resource key, e.g. `{"review": {...}}`.

use axum::{http::StatusCode, Json};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Single-key JSON object holding a payload.
#[derive(Debug)]
pub struct Envelope<T> {
    pub key: &'static str,
    pub data: T,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.data)?;
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

pub fn success_one<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope { key, data }))
}

pub fn success_created<T: Serialize>(key: &'static str, data: T) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::CREATED, Json(Envelope { key, data }))
}

pub fn success_many<T: Serialize>(key: &'static str, data: Vec<T>) -> (StatusCode, Json<Envelope<Vec<T>>>) {
    (StatusCode::OK, Json(Envelope { key, data }))
}

pub fn error_body(msg: &str) -> Json<ErrorBody> {
    Json(ErrorBody { msg: msg.to_string() })
}
