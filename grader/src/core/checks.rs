//! Selector check lists.

use std::slice::Iter;

use serde::Serialize;

/// Selectors to check, kept in ascending order of their UTF-16 code units.
///
/// Duplicates are preserved; they collapse later into a single report entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckList {
    selectors: Vec<String>,
}

impl CheckList {
    /// Build a check list from selectors in any order.
    pub fn new(mut selectors: Vec<String>) -> Self {
        selectors.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
        Self { selectors }
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.selectors.iter()
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.selectors
    }
}

impl<'a> IntoIterator for &'a CheckList {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<String> for CheckList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
