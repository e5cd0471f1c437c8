// src/locale.rs
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The English catalog compiled into the binary.
const EN_CATALOG: &str = include_str!("../locales/en.json");

/// A catalog file: a flat key → template JSON object.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
struct Catalog {
    templates: HashMap<String, String>,
}

/// Key → template catalog for every user-facing line. Templates use
/// positional `{0}` placeholders. A missing key renders as the key
/// itself, which keeps a catalog gap visible without failing the query.
pub struct Locale {
    catalog: Catalog,
}

impl Locale {
    /// Loads a replacement catalog from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let catalog = serde_json::from_reader(reader)?;
        Ok(Self { catalog })
    }

    pub fn text(&self, key: &str) -> String {
        self.catalog
            .templates
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn render(&self, key: &str, args: &[&str]) -> String {
        let mut out = self.text(key);
        for (i, arg) in args.iter().enumerate() {
            out = out.replace(&format!("{{{i}}}"), arg);
        }
        out
    }
}

impl Default for Locale {
    fn default() -> Self {
        // The embedded catalog is checked by the test suite; a parse
        // failure here is a build defect, not a runtime condition.
        let catalog =
            serde_json::from_str(EN_CATALOG).expect("embedded locale catalog is valid JSON");
        Self { catalog }
    }
}
