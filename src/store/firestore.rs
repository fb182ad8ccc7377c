//! Firestore REST implementation of the document store
//!
//! Documents are read through `GET .../documents/{path}` and written through
//! the `documents:commit` endpoint, whose write list is applied atomically.
//! `Create` writes carry an `exists: false` precondition so uniqueness
//! reservations fail at the write, not just at the pre-check.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::config::FirebaseConfig;
use crate::constants::STORE_REQUEST_TIMEOUT_SECS;
use crate::error::{AppError, AppResult};

use super::document::{Document, DocumentStore, WriteOp};

/// Firestore-backed document store
#[derive(Clone)]
pub struct FirestoreStore {
    client: reqwest::Client,
    project_id: String,
    api_key: String,
}

/// Wire shape of a Firestore document
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
}

impl FirestoreStore {
    /// Build a store client from the Firebase configuration
    pub fn new(config: &FirebaseConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(STORE_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::Configuration(format!("store client: {e}")))?;

        Ok(Self {
            client,
            project_id: config.project_id.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn documents_root(&self) -> String {
        format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents",
            self.project_id
        )
    }

    /// Fully qualified resource name for a store-relative path
    fn resource_name(&self, path: &str) -> String {
        format!(
            "projects/{}/databases/(default)/documents/{}",
            self.project_id, path
        )
    }

    fn encode_write(&self, write: &WriteOp) -> Value {
        match write {
            WriteOp::Create { path, fields } => json!({
                "update": {
                    "name": self.resource_name(path),
                    "fields": encode_fields(fields),
                },
                "currentDocument": { "exists": false },
            }),
            WriteOp::Set { path, fields } => json!({
                "update": {
                    "name": self.resource_name(path),
                    "fields": encode_fields(fields),
                },
            }),
            WriteOp::Merge { path, fields } => {
                let mask: Vec<&str> = fields
                    .as_object()
                    .map(|m| m.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                json!({
                    "update": {
                        "name": self.resource_name(path),
                        "fields": encode_fields(fields),
                    },
                    "updateMask": { "fieldPaths": mask },
                })
            }
            WriteOp::Delete { path } => json!({
                "delete": self.resource_name(path),
            }),
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn get(&self, path: &str) -> AppResult<Option<Document>> {
        let url = format!("{}/{}?key={}", self.documents_root(), path, self.api_key);
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Store(format!("get {path}: {e}")))?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Store(format!("get {path}: HTTP {status}: {body}")));
        }

        let doc: FirestoreDocument = res
            .json()
            .await
            .map_err(|e| AppError::Store(format!("get {path}: {e}")))?;

        Ok(Some(decode_document(doc)))
    }

    async fn list(&self, collection_path: &str) -> AppResult<Vec<Document>> {
        let url = format!(
            "{}/{}?key={}&pageSize=300",
            self.documents_root(),
            collection_path,
            self.api_key
        );
        let res = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Store(format!("list {collection_path}: {e}")))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Store(format!(
                "list {collection_path}: HTTP {status}: {body}"
            )));
        }

        let listing: ListDocumentsResponse = res
            .json()
            .await
            .map_err(|e| AppError::Store(format!("list {collection_path}: {e}")))?;

        Ok(listing.documents.into_iter().map(decode_document).collect())
    }

    async fn commit(&self, writes: Vec<WriteOp>) -> AppResult<()> {
        let url = format!(
            "https://firestore.googleapis.com/v1/projects/{}/databases/(default)/documents:commit?key={}",
            self.project_id, self.api_key
        );

        let body = json!({
            "writes": writes.iter().map(|w| self.encode_write(w)).collect::<Vec<_>>(),
        });

        let res = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Store(format!("commit: {e}")))?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let text = res.text().await.unwrap_or_default();
        // A failed create precondition comes back as ALREADY_EXISTS or
        // FAILED_PRECONDITION depending on the write shape
        if status == StatusCode::CONFLICT
            || text.contains("ALREADY_EXISTS")
            || text.contains("FAILED_PRECONDITION")
        {
            return Err(AppError::Conflict("document already exists".to_string()));
        }

        Err(AppError::Store(format!("commit: HTTP {status}: {text}")))
    }
}

fn decode_document(doc: FirestoreDocument) -> Document {
    // Strip the `projects/.../documents/` prefix back to a store-relative path
    let path = doc
        .name
        .split_once("/documents/")
        .map(|(_, rest)| rest.to_string())
        .unwrap_or(doc.name);

    let mut fields = Map::new();
    for (key, value) in doc.fields {
        fields.insert(key, decode_value(&value));
    }

    Document {
        path,
        fields: Value::Object(fields),
    }
}

/// Encode a JSON object into Firestore's typed field map
fn encode_fields(fields: &Value) -> Value {
    let mut out = Map::new();
    if let Some(map) = fields.as_object() {
        for (key, value) in map {
            out.insert(key.clone(), encode_value(value));
        }
    }
    Value::Object(out)
}

fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                // Firestore integers travel as strings
                json!({ "integerValue": i.to_string() })
            } else {
                json!({ "doubleValue": n.as_f64() })
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(_) => json!({ "mapValue": { "fields": encode_fields(value) } }),
    }
}

fn decode_value(value: &Value) -> Value {
    let Some(map) = value.as_object() else {
        return Value::Null;
    };

    if let Some(s) = map.get("stringValue").and_then(Value::as_str) {
        return Value::String(s.to_string());
    }
    if let Some(s) = map.get("timestampValue").and_then(Value::as_str) {
        return Value::String(s.to_string());
    }
    if let Some(s) = map.get("integerValue").and_then(Value::as_str) {
        if let Ok(i) = s.parse::<i64>() {
            return json!(i);
        }
        return Value::String(s.to_string());
    }
    if let Some(d) = map.get("doubleValue").and_then(Value::as_f64) {
        return json!(d);
    }
    if let Some(b) = map.get("booleanValue").and_then(Value::as_bool) {
        return Value::Bool(b);
    }
    if let Some(arr) = map.get("arrayValue") {
        let values = arr
            .get("values")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(decode_value).collect())
            .unwrap_or_default();
        return Value::Array(values);
    }
    if let Some(inner) = map.get("mapValue") {
        let mut out = Map::new();
        if let Some(fields) = inner.get("fields").and_then(Value::as_object) {
            for (key, value) in fields {
                out.insert(key.clone(), decode_value(value));
            }
        }
        return Value::Object(out);
    }

    Value::Null
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_round_trip() {
        let original = json!({
            "username": "bob",
            "solved": ["p1", "p2"],
            "count": 3,
            "score": 1.5,
            "active": true,
            "meta": { "tier": "free" },
        });

        let encoded = encode_fields(&original);
        let doc = FirestoreDocument {
            name: "projects/p/databases/(default)/documents/users/abc".to_string(),
            fields: encoded.as_object().cloned().unwrap_or_default(),
        };
        let decoded = decode_document(doc);

        assert_eq!(decoded.path, "users/abc");
        assert_eq!(decoded.fields, original);
    }

    #[test]
    fn test_integer_encoding_as_string() {
        let encoded = encode_value(&json!(42));
        assert_eq!(encoded, json!({ "integerValue": "42" }));
    }

    #[test]
    fn test_timestamp_decodes_to_string() {
        let decoded = decode_value(&json!({ "timestampValue": "2024-05-01T12:00:00Z" }));
        assert_eq!(decoded, json!("2024-05-01T12:00:00Z"));
    }
}
