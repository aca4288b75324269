// 🔎 Query Builder - free text + category → SPARQL request URI
// Pure functions, no I/O

use crate::category::Category;
use crate::config::{DEFAULT_ENDPOINT, RESULT_LIMIT};

// ============================================================================
// LITERAL ESCAPING
// ============================================================================

/// Escape text for use inside a single-quoted SPARQL string literal
///
/// Covers the characters that could close the literal or break the line:
/// backslash, both quote kinds, newline, carriage return and tab.
pub fn escape_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Keep text inside a single `bif:contains` phrase
///
/// The phrase is double-quoted for the full-text engine; a `"` in the text
/// would end it early and let the rest parse as `OR` / `AND` / `NEAR`
/// operators, so each one becomes a space.
pub fn phrase_text(text: &str) -> String {
    text.replace('"', " ")
}

// ============================================================================
// SPARQL TEMPLATES
// ============================================================================

/// Build the SPARQL query text for a category
///
/// Title matches the search text against `rdfs:label` of JPS source records.
/// Every other category matches it against any property value, restricted to
/// the category's RDF type when it has one.
pub fn build_sparql(category: Category, query_string: &str) -> String {
    let text = escape_literal(&phrase_text(query_string));

    match category {
        Category::Title => format!(
            "
    SELECT DISTINCT ?s ?label ?description WHERE {{
      ?s jps:sourceInfo ?source .
      ?s rdfs:label ?label .
      OPTIONAL {{ ?s schema:description ?description . }}
      FILTER(bif:contains(?label, '\"{text}\"')) .
    }}
    LIMIT {limit}
  ",
            text = text,
            limit = RESULT_LIMIT,
        ),
        _ => {
            // FreeformSubject still requires *some* declared type
            let subject_type = category.type_id().unwrap_or("?type");

            format!(
                "
    SELECT DISTINCT ?s ?label ?description WHERE {{
      ?s a {subject_type} .
      ?s rdfs:label ?label .
      OPTIONAL {{ ?s schema:description ?description . }}
      ?s ?p ?value .
      FILTER(bif:contains(?value, '\"{text}\"')) .
    }}
    LIMIT {limit}
  ",
                subject_type = subject_type,
                text = text,
                limit = RESULT_LIMIT,
            )
        }
    }
}

// ============================================================================
// REQUEST URIS
// ============================================================================

/// Full request URI against an arbitrary endpoint
pub fn build_query_uri_for(endpoint: &str, category: Category, query_string: &str) -> String {
    let sparql = build_sparql(category, query_string);
    format!(
        "{}?output=json&query={}",
        endpoint,
        urlencoding::encode(&sparql)
    )
}

/// Full request URI against the public Japan Search endpoint
pub fn build_query_uri(category: Category, query_string: &str) -> String {
    build_query_uri_for(DEFAULT_ENDPOINT, category, query_string)
}

pub fn person_lookup_uri(query_string: &str) -> String {
    build_query_uri(Category::Person, query_string)
}

pub fn place_lookup_uri(query_string: &str) -> String {
    build_query_uri(Category::Place, query_string)
}

pub fn organization_lookup_uri(query_string: &str) -> String {
    build_query_uri(Category::Organization, query_string)
}

pub fn title_lookup_uri(query_string: &str) -> String {
    build_query_uri(Category::Title, query_string)
}

pub fn rs_lookup_uri(query_string: &str) -> String {
    build_query_uri(Category::FreeformSubject, query_string)
}
