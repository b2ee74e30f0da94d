//! Core aggregation types.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Normalized inbound request handed to every service call.
///
/// Built once per request by the transport layer and shared read-only
/// across the route's calls.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Path parameters extracted by the router (e.g. `id`).
    pub params: HashMap<String, String>,

    /// Parsed JSON request body; `null` when the request carried none.
    pub body: Value,

    /// Query parameters.
    pub query: HashMap<String, String>,
}

impl RequestContext {
    pub fn new(
        params: HashMap<String, String>,
        body: Value,
        query: HashMap<String, String>,
    ) -> Self {
        Self {
            params,
            body,
            query,
        }
    }
}

/// Outcome of one downstream call.
///
/// Failures are a value, never an exception: callers can only tell a call
/// failed by inspecting the shape of what came back. `Err` serializes to
/// the `{"error": "<message>"}` wire form.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResult {
    Ok(Value),
    Err(String),
}

impl ServiceResult {
    pub fn is_err(&self) -> bool {
        matches!(self, ServiceResult::Err(_))
    }
}

impl Serialize for ServiceResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ServiceResult::Ok(value) => value.serialize(serializer),
            ServiceResult::Err(message) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", message)?;
                map.end()
            }
        }
    }
}

/// Keyed merge of the results for one route invocation.
///
/// One entry per invoked call, keyed by the service's name. Insertion order
/// is invocation order and carries no meaning beyond readability.
#[derive(Debug, Default)]
pub struct AggregatedResponse {
    entries: Vec<(String, ServiceResult)>,
}

impl AggregatedResponse {
    /// Insert a result under `name`. Rejects a key that is already present:
    /// two calls sharing a name on one route is a wiring bug, not a
    /// downstream failure.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        result: ServiceResult,
    ) -> Result<(), super::AggregateError> {
        let name = name.into();
        if self.entries.iter().any(|(existing, _)| *existing == name) {
            return Err(super::AggregateError::DuplicateKey(name));
        }
        self.entries.push((name, result));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ServiceResult> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, result)| result)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for AggregatedResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, result) in &self.entries {
            map.serialize_entry(name, result)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_result_serializes_as_raw_payload() {
        let result = ServiceResult::Ok(json!([{"id": 1, "title": "a"}]));
        let encoded = serde_json::to_value(&result).unwrap();
        assert_eq!(encoded, json!([{"id": 1, "title": "a"}]));

        let scalar = ServiceResult::Ok(json!(42));
        assert_eq!(serde_json::to_value(&scalar).unwrap(), json!(42));
    }

    #[test]
    fn test_err_result_serializes_as_error_object() {
        let result = ServiceResult::Err("connection refused".to_string());
        let encoded = serde_json::to_value(&result).unwrap();
        assert_eq!(encoded, json!({"error": "connection refused"}));
    }

    #[test]
    fn test_response_keeps_invocation_order() {
        let mut response = AggregatedResponse::default();
        response.insert("b", ServiceResult::Ok(json!(1))).unwrap();
        response.insert("a", ServiceResult::Ok(json!(2))).unwrap();

        let keys: Vec<&str> = response.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);

        let encoded = serde_json::to_string(&response).unwrap();
        assert_eq!(encoded, r#"{"b":1,"a":2}"#);
    }

    #[test]
    fn test_response_rejects_duplicate_key() {
        let mut response = AggregatedResponse::default();
        response.insert("svc", ServiceResult::Ok(json!(1))).unwrap();

        let err = response
            .insert("svc", ServiceResult::Err("x".into()))
            .unwrap_err();
        assert!(err.to_string().contains("svc"));
        assert_eq!(response.len(), 1);
    }
}
