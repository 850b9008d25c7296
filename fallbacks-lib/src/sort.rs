//! Catalog sort engine.
//!
//! Sorting is stable: entries that compare equal keep their input order,
//! in both directions. Descending negates the ascending comparison rather
//! than reversing the output.

use std::cmp::Ordering;

use fallbacks_catalog::{Badge, CatalogEntry, Complexity};

/// Rank given to entries without a badge; sorts after every real badge.
pub const BADGE_UNRANKED: u8 = u8::MAX;

/// Field to order entries by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Title, lexical.
    #[default]
    Name,
    /// Category slug, lexical.
    Category,
    /// simple < intermediate < advanced.
    Complexity,
    /// new < popular < stable < beta < experimental < no badge.
    Badge,
    /// No ordering: every entry compares equal, so catalog order is kept.
    CatalogOrder,
}

const ALL_SORT_FIELDS: &[SortField] = &[
    SortField::Name,
    SortField::Category,
    SortField::Complexity,
    SortField::Badge,
];

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Complexity => "complexity",
            Self::Badge => "badge",
            Self::CatalogOrder => "catalog",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Complexity => "Complexity",
            Self::Badge => "Status",
            Self::CatalogOrder => "Catalog order",
        }
    }

    /// Fields offered in the sort selector.
    pub fn all() -> &'static [SortField] {
        ALL_SORT_FIELDS
    }

    /// Parse a sort key, mapping anything unrecognized to `CatalogOrder`.
    ///
    /// Accepts `title` as an alias for `name` and `status` for `badge`.
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "name" | "title" => Self::Name,
            "category" => Self::Category,
            "complexity" => Self::Complexity,
            "badge" | "status" => Self::Badge,
            "catalog" => Self::CatalogOrder,
            other => {
                log::warn!("Unknown sort field '{}', keeping catalog order", other);
                Self::CatalogOrder
            }
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Parse `asc`/`desc` (or `ascending`/`descending`), case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Some(Self::Asc),
            "desc" | "descending" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A sort field together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

pub fn complexity_rank(complexity: Complexity) -> u8 {
    match complexity {
        Complexity::Simple => 0,
        Complexity::Intermediate => 1,
        Complexity::Advanced => 2,
    }
}

pub fn badge_rank(badge: Option<Badge>) -> u8 {
    match badge {
        Some(Badge::New) => 0,
        Some(Badge::Popular) => 1,
        Some(Badge::Stable) => 2,
        Some(Badge::Beta) => 3,
        Some(Badge::Experimental) => 4,
        None => BADGE_UNRANKED,
    }
}

/// Ascending comparison of two entries on `field`.
pub fn compare_by(field: SortField, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
    match field {
        SortField::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Category => a.category.as_str().cmp(b.category.as_str()),
        SortField::Complexity => complexity_rank(a.complexity).cmp(&complexity_rank(b.complexity)),
        SortField::Badge => badge_rank(a.badge).cmp(&badge_rank(b.badge)),
        SortField::CatalogOrder => Ordering::Equal,
    }
}

/// Return `entries` ordered by `spec`. The input slice is left untouched.
pub fn sort_entries<'a>(entries: &[&'a CatalogEntry], spec: SortSpec) -> Vec<&'a CatalogEntry> {
    let mut sorted = entries.to_vec();
    // `sort_by` is stable; `Ordering::reverse` keeps Equal as Equal.
    sorted.sort_by(|a, b| {
        let ord = compare_by(spec.field, a, b);
        match spec.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
