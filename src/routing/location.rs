//! Navigation locations.
//!
//! # Responsibilities
//! - Split a target into path, query and hash
//! - Normalize the path (dot segments, percent-encoding)
//! - Produce the segments the matcher compares against
//! - Encode parameter values back into a path
//!
//! # Design Decisions
//! - Parsing goes through `url` against a fixed origin, so paths are
//!   normalized exactly as a browser address bar would
//! - Query and hash never take part in matching
//! - One trailing `/` is not significant (`/recipe/42/` == `/recipe/42`)
//! - Segments are percent-decoded before matching, so `/recipe/p%C3%A3o`
//!   and `/recipe/pão` are the same location
//! - Control characters and trailing whitespace are rejected, since `url`
//!   would silently strip them

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use serde::Serialize;
use url::Url;

use crate::routing::ResolveError;

/// Origin used to anchor relative targets. Never leaves this module.
const ORIGIN: &str = "http://router.local";

/// A parsed navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    path: String,
    query: Option<String>,
    hash: Option<String>,
}

impl Location {
    /// Parse an absolute target such as `/recipe/42?tab=steps#top`.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        let invalid = || ResolveError::InvalidPath {
            path: input.to_string(),
        };
        if !input.starts_with('/')
            || input.chars().any(char::is_control)
            || input.ends_with(char::is_whitespace)
        {
            return Err(invalid());
        }

        let url = Url::parse(&format!("{ORIGIN}{input}")).map_err(|_| invalid())?;
        Ok(Self {
            path: url.path().to_string(),
            query: url.query().map(str::to_string),
            hash: url.fragment().map(str::to_string),
        })
    }

    /// Normalized path, without query or hash.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query string, without the leading `?`.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Decoded query pairs in order of appearance.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .as_deref()
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Fragment, without the leading `#`.
    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Path, query and hash joined back together.
    pub fn full_path(&self) -> String {
        let mut full = self.path.clone();
        if let Some(query) = &self.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(hash) = &self.hash {
            full.push('#');
            full.push_str(hash);
        }
        full
    }

    /// Decoded path segments as the matcher sees them. The root path has none.
    ///
    /// Splitting happens before decoding, so an encoded `%2F` stays inside
    /// its segment.
    pub fn segments(&self) -> Vec<Cow<'_, str>> {
        let rest = self.path.strip_prefix('/').unwrap_or(&self.path);
        if rest.is_empty() {
            return Vec::new();
        }
        let rest = rest.strip_suffix('/').unwrap_or(rest);
        rest.split('/')
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy())
            .collect()
    }
}

/// Join already-validated segment values into an absolute, percent-encoded path.
///
/// Returns `None` only if the fixed origin cannot be used as a base.
pub(crate) fn encode_path<'a, I>(segments: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = Url::parse(ORIGIN).ok()?;
    url.path_segments_mut().ok()?.clear().extend(segments);
    Some(url.path().to_string())
}
