//! Typed view of the SPARQL 1.1 JSON results format

use indexmap::IndexMap;
use serde::Deserialize;

/// One RDF term descriptor from a binding row.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RdfValue {
    /// Lexical value of the term
    pub value: String,
    /// Term kind (`uri`, `literal`, `bnode`)
    #[serde(rename = "type", default)]
    pub term_type: Option<String>,
    /// Datatype IRI for typed literals
    #[serde(default)]
    pub datatype: Option<String>,
    /// Language tag for language-tagged literals
    #[serde(rename = "xml:lang", default)]
    pub lang: Option<String>,
}

/// One result row: variable name → term, in document order.
pub type BindingRow = IndexMap<String, RdfValue>;

/// Outcome of one query round-trip.
#[derive(Debug, Clone)]
pub enum ResultSet {
    /// HTTP error status, transport failure, or an `error` key in the body
    Error(String),
    /// Binding rows from a well-formed SELECT response
    Bindings(Vec<BindingRow>),
    /// HTTP 200 body lacking the `results.bindings` shape
    Malformed,
}

impl ResultSet {
    /// Classify a parsed response body.
    pub fn from_json(body: serde_json::Value) -> Self {
        if let Some(err) = body.get("error") {
            let msg = match err {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return ResultSet::Error(msg);
        }

        let Some(bindings) = body.get("results").and_then(|r| r.get("bindings")) else {
            return ResultSet::Malformed;
        };

        match serde_json::from_value::<Vec<BindingRow>>(bindings.clone()) {
            Ok(rows) => ResultSet::Bindings(rows),
            Err(_) => ResultSet::Malformed,
        }
    }

    /// True when this result carries no error marker.
    pub fn is_ok(&self) -> bool {
        !matches!(self, ResultSet::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_key_classifies_as_error() {
        let body = json!({"error": "HTTP 500: Parse error"});
        match ResultSet::from_json(body) {
            ResultSet::Error(msg) => assert_eq!(msg, "HTTP 500: Parse error"),
            other => panic!("expected Error, got {other:?}"),
        }
    }

    #[test]
    fn missing_bindings_is_malformed() {
        assert!(matches!(
            ResultSet::from_json(json!({"head": {"vars": ["x"]}})),
            ResultSet::Malformed
        ));
        assert!(matches!(
            ResultSet::from_json(json!({"results": {}})),
            ResultSet::Malformed
        ));
        assert!(matches!(ResultSet::from_json(json!(42)), ResultSet::Malformed));
    }

    #[test]
    fn bindings_preserve_variable_order() {
        let body = json!({
            "head": {"vars": ["machineID", "type", "location"]},
            "results": {"bindings": [{
                "machineID": {"type": "literal", "value": "M1"},
                "type": {"type": "literal", "value": "CNC"},
                "location": {"type": "literal", "value": "Plant A"}
            }]}
        });
        let ResultSet::Bindings(rows) = ResultSet::from_json(body) else {
            panic!("expected bindings");
        };
        assert_eq!(rows.len(), 1);
        let vars: Vec<&str> = rows[0].keys().map(String::as_str).collect();
        assert_eq!(vars, ["machineID", "type", "location"]);
        assert_eq!(rows[0]["machineID"].value, "M1");
    }

    #[test]
    fn empty_bindings_parse_as_empty_rows() {
        let body = json!({"head": {"vars": []}, "results": {"bindings": []}});
        let ResultSet::Bindings(rows) = ResultSet::from_json(body) else {
            panic!("expected bindings");
        };
        assert!(rows.is_empty());
    }

    #[test]
    fn non_object_binding_is_malformed() {
        let body = json!({"results": {"bindings": ["not-a-row"]}});
        assert!(matches!(ResultSet::from_json(body), ResultSet::Malformed));
    }
}
