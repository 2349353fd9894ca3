//! Result mapping and its JSON rendering.

use std::io::Write;

use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap};
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Selector -> presence, in the order selectors were first recorded.
///
/// The evaluator records in check list order, so the report keys follow it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultMapping {
    entries: Vec<(String, bool)>,
}

impl ResultMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selector result; a repeated selector overwrites its entry.
    pub fn record(&mut self, selector: &str, present: bool) {
        match self.entries.iter_mut().find(|(key, _)| key == selector) {
            Some(entry) => entry.1 = present,
            None => self.entries.push((selector.to_string(), present)),
        }
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(key, _)| key == selector)
            .map(|(_, present)| *present)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.entries
            .iter()
            .map(|(key, present)| (key.as_str(), *present))
    }

    /// Render as a JSON object with 4-space indentation.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser).context("serialize report")?;
        String::from_utf8(buf).context("report is not utf-8")
    }
}

impl Serialize for ResultMapping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, present) in &self.entries {
            map.serialize_entry(key, present)?;
        }
        map.end()
    }
}

/// Write the report followed by a newline.
pub fn emit<W: Write>(mapping: &ResultMapping, mut out: W) -> Result<()> {
    let payload = mapping.to_pretty_json()?;
    writeln!(out, "{payload}").context("write report")?;
    out.flush().context("flush report")
}
