// 📦 Results - SPARQL JSON bindings → NormalizedResult
// Shape is checked here, not trusted

use crate::category::Category;
use crate::error::{LookupError, Result};
use serde::{Deserialize, Serialize};

/// Tag written into `repository` on every result
pub const REPOSITORY: &str = "jps";

// ============================================================================
// RAW RESPONSE (SPARQL 1.1 JSON results)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SparqlResponse {
    pub results: SparqlResults,
}

#[derive(Debug, Deserialize)]
pub struct SparqlResults {
    pub bindings: Vec<Binding>,
}

/// One row of the result set; every variable is optional on the wire
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    pub s: Option<Term>,
    pub label: Option<Term>,
    pub description: Option<Term>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Term {
    pub value: String,
}

// ============================================================================
// NORMALIZED RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    pub name_type: String,
    pub id: String,
    pub uri: String,
    pub uri_for_display: String,
    pub name: String,
    pub description: String,
    pub repository: String,
    pub original_query_string: String,
}

impl NormalizedResult {
    /// Build a result from one binding
    ///
    /// `s` and `label` are required; a missing `description` becomes "".
    pub fn from_binding(
        binding: Binding,
        category: Category,
        query_string: &str,
        row: usize,
    ) -> Result<Self> {
        let uri = binding
            .s
            .ok_or_else(|| LookupError::Parse(format!("binding {} has no 's' value", row)))?
            .value;
        let name = binding
            .label
            .ok_or_else(|| LookupError::Parse(format!("binding {} has no 'label' value", row)))?
            .value;
        let description = binding.description.map(|d| d.value).unwrap_or_default();

        Ok(NormalizedResult {
            name_type: category.label().to_string(),
            id: uri.clone(),
            uri_for_display: uri.clone(),
            uri,
            name,
            description,
            repository: REPOSITORY.to_string(),
            original_query_string: query_string.to_string(),
        })
    }
}

/// Parse a SPARQL JSON body and normalize every binding, keeping endpoint order
pub fn normalize_response(
    body: &[u8],
    category: Category,
    query_string: &str,
) -> Result<Vec<NormalizedResult>> {
    let response: SparqlResponse = serde_json::from_slice(body)?;

    response
        .results
        .bindings
        .into_iter()
        .enumerate()
        .map(|(row, binding)| NormalizedResult::from_binding(binding, category, query_string, row))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(bindings: serde_json::Value) -> Vec<u8> {
        json!({
            "head": { "vars": ["s", "label", "description"] },
            "results": { "bindings": bindings }
        })
        .to_string()
        .into_bytes()
    }

    #[test]
    fn test_normalize_full_binding() {
        let body = body(json!([{
            "s": { "type": "uri", "value": "https://jpsearch.go.jp/entity/place/葛飾区" },
            "label": { "type": "literal", "value": "葛飾区" },
            "description": { "type": "literal", "value": "東京都の特別区" }
        }]));

        let results = normalize_response(&body, Category::Place, "葛飾").unwrap();
        assert_eq!(results.len(), 1);

        let r = &results[0];
        assert_eq!(r.name_type, "Place");
        assert_eq!(r.id, "https://jpsearch.go.jp/entity/place/葛飾区");
        assert_eq!(r.uri, r.id);
        assert_eq!(r.uri_for_display, r.id);
        assert_eq!(r.name, "葛飾区");
        assert_eq!(r.description, "東京都の特別区");
        assert_eq!(r.repository, "jps");
        assert_eq!(r.original_query_string, "葛飾");
    }

    #[test]
    fn test_missing_description_is_empty() {
        let body = body(json!([{
            "s": { "value": "https://jpsearch.go.jp/entity/chname/葛飾北斎" },
            "label": { "value": "葛飾北斎" }
        }]));

        let results = normalize_response(&body, Category::Person, "葛飾").unwrap();
        assert_eq!(results[0].description, "");
        assert_eq!(results[0].name_type, "Person");
    }

    #[test]
    fn test_order_preserved() {
        let body = body(json!([
            { "s": { "value": "urn:b" }, "label": { "value": "B" } },
            { "s": { "value": "urn:a" }, "label": { "value": "A" } },
            { "s": { "value": "urn:c" }, "label": { "value": "C" } }
        ]));

        let names: Vec<String> = normalize_response(&body, Category::Title, "x")
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_bindings() {
        let results = normalize_response(&body(json!([])), Category::FreeformSubject, "x").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_missing_label_is_parse_error() {
        let body = body(json!([
            { "s": { "value": "urn:a" }, "label": { "value": "A" } },
            { "s": { "value": "urn:b" } }
        ]));

        let err = normalize_response(&body, Category::Place, "x").unwrap_err();
        match err {
            LookupError::Parse(msg) => assert!(msg.contains("binding 1") && msg.contains("label")),
            other => panic!("expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_subject_is_parse_error() {
        let body = body(json!([{ "label": { "value": "A" } }]));
        let err = normalize_response(&body, Category::Place, "x").unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        assert!(matches!(
            normalize_response(b"{\"head\": {}}", Category::Place, "x"),
            Err(LookupError::Parse(_))
        ));
        assert!(matches!(
            normalize_response(b"<html>busy</html>", Category::Place, "x"),
            Err(LookupError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let body: &[u8] = b"{\"results\":{\"bindings\":[{\"s\":{\"value\":\"urn:\xff\"},\"label\":{\"value\":\"A\"}}]}}";
        let err = normalize_response(body, Category::Place, "x").unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)), "got {:?}", err);
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let result = NormalizedResult {
            name_type: "RS".to_string(),
            id: "urn:a".to_string(),
            uri: "urn:a".to_string(),
            uri_for_display: "urn:a".to_string(),
            name: "A".to_string(),
            description: String::new(),
            repository: REPOSITORY.to_string(),
            original_query_string: "a".to_string(),
        };

        let value = serde_json::to_value(&result).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "description",
                "id",
                "name",
                "nameType",
                "originalQueryString",
                "repository",
                "uri",
                "uriForDisplay"
            ]
        );
    }
}
