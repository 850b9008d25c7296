//! Shareable query-string representation of a gallery state.
//!
//! Only non-default values are written, so the empty state encodes as an
//! empty string and any link reproduces exactly the state it was made from.

use std::collections::BTreeSet;
use std::str::FromStr;

use fallbacks_catalog::Category;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::criteria::Criteria;
use crate::sort::{SortDirection, SortField, SortSpec};

/// Longest search query a share link may carry, in characters.
pub const MAX_SHARE_QUERY_CHARS: usize = 100;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Malformed query string: {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),
    #[error("Could not encode query string: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Query keys mirrored into a share link. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Comma-joined tag slugs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badges: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl GalleryQuery {
    /// Build the minimal query for a state, omitting every default.
    pub fn from_state(criteria: &Criteria, sort: SortSpec) -> Self {
        let q = criteria.trimmed_query();
        Self {
            q: (!q.is_empty()).then(|| q.to_string()),
            category: criteria.category.map(|c| c.as_str().to_string()),
            tags: join_slugs(criteria.tags.iter().map(|t| t.as_str())),
            languages: join_slugs(criteria.languages.iter().map(|l| l.as_str())),
            badges: join_slugs(criteria.badges.iter().map(|b| b.as_str())),
            sort: (sort.field != SortField::default()).then(|| sort.field.as_str().to_string()),
            order: (sort.direction != SortDirection::default())
                .then(|| sort.direction.as_str().to_string()),
        }
    }

    /// Parse an `application/x-www-form-urlencoded` string. A leading `?` is allowed.
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Ok(serde_urlencoded::from_str(query)?)
    }

    pub fn to_query_string(&self) -> Result<String, QueryError> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Decode into criteria and sort. Unknown values are dropped with a warning.
    pub fn apply(&self) -> (Criteria, SortSpec) {
        let category = self.category.as_deref().and_then(|raw| {
            Category::from_str(raw)
                .map_err(|e| log::warn!("Ignoring share link category: {}", e))
                .ok()
        });
        let criteria = Criteria {
            query: self.q.as_deref().map(clamp_query).unwrap_or_default(),
            category,
            tags: parse_list(self.tags.as_deref()),
            languages: parse_list(self.languages.as_deref()),
            badges: parse_list(self.badges.as_deref()),
        };

        let field = self
            .sort
            .as_deref()
            .map(SortField::parse_lenient)
            .unwrap_or_default();
        let direction = match self.order.as_deref() {
            Some(raw) => SortDirection::parse(raw).unwrap_or_else(|| {
                log::warn!("Ignoring share link sort order '{}'", raw);
                SortDirection::default()
            }),
            None => SortDirection::default(),
        };

        (criteria, SortSpec::new(field, direction))
    }
}

fn clamp_query(raw: &str) -> String {
    match raw.char_indices().nth(MAX_SHARE_QUERY_CHARS) {
        Some((cut, _)) => {
            log::warn!(
                "Truncating share link search query to {} characters",
                MAX_SHARE_QUERY_CHARS
            );
            raw[..cut].to_string()
        }
        None => raw.to_string(),
    }
}

fn join_slugs<'a>(slugs: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = slugs.collect::<Vec<_>>().join(",");
    (!joined.is_empty()).then_some(joined)
}

fn parse_list<T>(raw: Option<&str>) -> BTreeSet<T>
where
    T: FromStr + Ord,
    T::Err: std::fmt::Display,
{
    let Some(raw) = raw else {
        return BTreeSet::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| {
            T::from_str(s)
                .map_err(|e| log::warn!("Ignoring share link value: {}", e))
                .ok()
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
