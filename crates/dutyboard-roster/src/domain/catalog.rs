//! The duty catalog — slug → duty lookup.

use indexmap::IndexMap;

use super::duty::Duty;

/// Insertion-ordered lookup of duties by slug.
///
/// Built once from `(slug, duty)` pairs. When a slug repeats, the later duty
/// replaces the earlier one but the slug keeps its first position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DutyCatalog {
    duties: IndexMap<String, Duty>,
}

impl DutyCatalog {
    /// Returns the duty registered under `slug`.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Duty> {
        self.duties.get(slug)
    }

    /// Returns `true` if a duty is registered under `slug`.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.duties.contains_key(slug)
    }

    /// Number of distinct slugs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.duties.len()
    }

    /// Returns `true` if the catalog holds no duties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.duties.is_empty()
    }

    /// Iterates `(slug, duty)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Duty)> {
        self.duties.iter().map(|(slug, duty)| (slug.as_str(), duty))
    }

    /// Iterates slugs in catalog order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.duties.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Duty)> for DutyCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Duty)>>(iter: I) -> Self {
        Self {
            duties: iter.into_iter().collect(),
        }
    }
}
