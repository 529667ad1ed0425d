//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse patterns such as `/recipe/:id` into literal and parameter segments
//! - Match concrete path segments against a pattern, binding parameters
//! - Build a concrete path from parameter values
//!
//! # Design Decisions
//! - Literal segments match exactly (case-sensitive)
//! - A parameter captures exactly one non-empty segment
//! - Segment counts must be equal: no prefix matches, no wildcards
//! - No regex to guarantee O(n) matching

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::routing::RouteParams;

/// Reasons a pattern string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern must begin with `/`")]
    MissingLeadingSlash,

    #[error("pattern contains an empty segment")]
    EmptySegment,

    #[error("pattern ends with `/`")]
    TrailingSlash,

    #[error("`{0}` is not a valid parameter name")]
    InvalidParamName(String),

    #[error("parameter `{0}` is declared more than once")]
    DuplicateParam(String),

    #[error("literal segment `{0}` contains a reserved character")]
    ReservedCharacter(String),

    #[error("literal segment `{0}` is a dot segment")]
    DotSegment(String),
}

/// One segment of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),
    /// Binds any non-empty path segment under this name.
    Param(String),
}

/// A parsed, well-formed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let rest = raw
            .strip_prefix('/')
            .ok_or(PatternError::MissingLeadingSlash)?;

        let mut segments = Vec::new();
        if !rest.is_empty() {
            if rest.ends_with('/') {
                return Err(PatternError::TrailingSlash);
            }
            for part in rest.split('/') {
                segments.push(parse_segment(part, &segments)?);
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Match decoded path segments, returning the bindings on success.
    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> Option<RouteParams> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, value) in self.segments.iter().zip(path) {
            let value = value.as_ref();
            match segment {
                Segment::Literal(text) => {
                    if text != value {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), value.to_string());
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for PathPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

fn parse_segment(part: &str, seen: &[Segment]) -> Result<Segment, PatternError> {
    if part.is_empty() {
        return Err(PatternError::EmptySegment);
    }

    if let Some(name) = part.strip_prefix(':') {
        if !is_identifier(name) {
            return Err(PatternError::InvalidParamName(name.to_string()));
        }
        if seen
            .iter()
            .any(|s| matches!(s, Segment::Param(existing) if existing == name))
        {
            return Err(PatternError::DuplicateParam(name.to_string()));
        }
        return Ok(Segment::Param(name.to_string()));
    }

    if part.contains([':', '?', '#']) || part.chars().any(char::is_control) {
        return Err(PatternError::ReservedCharacter(part.to_string()));
    }
    if part == "." || part == ".." {
        return Err(PatternError::DotSegment(part.to_string()));
    }
    Ok(Segment::Literal(part.to_string()))
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_root() {
        let pattern = PathPattern::parse("/").unwrap();
        assert!(pattern.segments().is_empty());
        assert_eq!(pattern.as_str(), "/");
    }

    #[test]
    fn test_parse_param_pattern() {
        let pattern = PathPattern::parse("/recipe/:id").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("recipe".into()),
                Segment::Param("id".into())
            ]
        );
        assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            PathPattern::parse("recipe"),
            Err(PatternError::MissingLeadingSlash)
        );
        assert_eq!(
            PathPattern::parse("/recipe//:id"),
            Err(PatternError::EmptySegment)
        );
        assert_eq!(
            PathPattern::parse("/recipe/"),
            Err(PatternError::TrailingSlash)
        );
        assert_eq!(
            PathPattern::parse("/recipe/:"),
            Err(PatternError::InvalidParamName(String::new()))
        );
        assert_eq!(
            PathPattern::parse("/recipe/:1st"),
            Err(PatternError::InvalidParamName("1st".into()))
        );
        assert_eq!(
            PathPattern::parse("/:id/x/:id"),
            Err(PatternError::DuplicateParam("id".into()))
        );
        assert_eq!(
            PathPattern::parse("/a:b"),
            Err(PatternError::ReservedCharacter("a:b".into()))
        );
        assert_eq!(
            PathPattern::parse("/a\tb"),
            Err(PatternError::ReservedCharacter("a\tb".into()))
        );
        assert_eq!(
            PathPattern::parse("/recipe/.."),
            Err(PatternError::DotSegment("..".into()))
        );
    }

    #[test]
    fn test_matches_non_ascii_literal() {
        let pattern = PathPattern::parse("/receitas/sobremesa doce").unwrap();
        assert!(pattern.matches(&["receitas", "sobremesa doce"]).is_some());
        assert!(pattern.matches(&["receitas", "sobremesa%20doce"]).is_none());
    }

    #[test]
    fn test_matches_literal_case_sensitive() {
        let pattern = PathPattern::parse("/recipe/:id").unwrap();
        assert!(pattern.matches(&["recipe", "42"]).is_some());
        assert!(pattern.matches(&["Recipe", "42"]).is_none());
    }

    #[test]
    fn test_matches_binds_params() {
        let pattern = PathPattern::parse("/recipe/:id").unwrap();
        let params = pattern.matches(&["recipe", "42"]).unwrap();
        assert_eq!(params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_matches_requires_equal_length() {
        let pattern = PathPattern::parse("/recipe/:id").unwrap();
        assert!(pattern.matches(&["recipe"]).is_none());
        assert!(pattern.matches(&["recipe", "42", "edit"]).is_none());
        assert!(pattern.matches(&["recipe", ""]).is_none());
    }
}
