/*
[INPUT]:  Request descriptor (method, path, query, body, timestamp)
[OUTPUT]: Exact byte sequence to be signed
[POS]:    Auth layer - canonical message assembly for request signing
[UPDATE]: When the remote signing contract changes
*/

use serde_json::Value;

use crate::types::HttpMethod;

/// Descriptor for one outgoing request at the moment of signing.
///
/// The timestamp is the caller's wall clock in milliseconds, captured when
/// the request is built; a retry must construct a fresh descriptor rather
/// than re-sign a stale one.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub timestamp_ms: i64,
}

impl SigningRequest {
    /// Create a descriptor stamped with the current wall-clock time.
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self::at(method, path, chrono::Utc::now().timestamp_millis())
    }

    /// Create a descriptor with an explicit timestamp (tests, replays of
    /// known vectors).
    pub fn at(method: HttpMethod, path: impl Into<String>, timestamp_ms: i64) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            timestamp_ms,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Query string including the leading `?`, or empty.
    ///
    /// Pairs are sorted by key so the server reconstructs the same string.
    pub fn query_string(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        let mut pairs = self.query.clone();
        pairs.sort();
        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{joined}")
    }
}

/// Build the exact string signed under the current protocol revision:
/// `timestamp ++ METHOD ++ path ++ query ++ body`.
///
/// The body is appended only for methods that sign it; a DELETE body may
/// still be sent on the wire but never enters the signed content.
pub fn canonical_message(request: &SigningRequest) -> String {
    let mut message = format!(
        "{}{}{}{}",
        request.timestamp_ms,
        request.method.as_str(),
        request.path,
        request.query_string()
    );
    append_signed_body(&mut message, request);
    message
}

/// Build the signed string of the earlier protocol revisions, which did not
/// include the query string: `timestamp ++ METHOD ++ path ++ body`.
pub fn legacy_message(request: &SigningRequest) -> String {
    let mut message = format!(
        "{}{}{}",
        request.timestamp_ms,
        request.method.as_str(),
        request.path
    );
    append_signed_body(&mut message, request);
    message
}

fn append_signed_body(message: &mut String, request: &SigningRequest) {
    if request.method.signs_body() {
        if let Some(body) = &request.body {
            message.push_str(&canonical_json(body));
        }
    }
}

/// Serialize a JSON value compactly with object keys sorted recursively.
///
/// The server recomputes the signed string from its own parse of the body,
/// so the serialization must be byte-stable for the same logical object.
pub fn canonical_json(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let fields = keys
                .iter()
                .map(|k| format!("{}:{}", Value::String((*k).clone()), canonical_json(&map[*k])))
                .collect::<Vec<_>>()
                .join(",");
            format!("{{{fields}}}")
        }
        Value::Array(items) => {
            let items = items
                .iter()
                .map(canonical_json)
                .collect::<Vec<_>>()
                .join(",");
            format!("[{items}]")
        }
        other => other.to_string(),
    }
}
