//! `icons.json` status manifest.
//!
//! Mirrors the icon path dictionaries a browser extension hands to
//! `chrome.action.setIcon`: each status maps pixel sizes to file paths.
//!
//! ```json
//! {
//!   "gray": { "16": "icon-gray-16.png", "48": "icon-gray-48.png" },
//!   "red": { "16": "icon-red-16.png", "48": "icon-red-48.png" }
//! }
//! ```

use crate::config::{Variant, VariantSpec};
use crate::error::{Error, Result};
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::path::Path;

/// Root of `icons.json`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct StatusManifest {
    pub gray: IconPaths,
    pub red: IconPaths,
    pub green: IconPaths,
}

/// Size to path entries for one status, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconPaths {
    entries: Vec<(u32, String)>,
}

impl IconPaths {
    /// Insert or replace the path for `size`, keeping sizes ascending.
    pub fn insert(&mut self, size: u32, path: String) {
        match self.entries.binary_search_by_key(&size, |(s, _)| *s) {
            Ok(index) => self.entries[index].1 = path,
            Err(index) => self.entries.insert(index, (size, path)),
        }
    }

    pub fn get(&self, size: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|(s, _)| *s == size)
            .map(|(_, path)| path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for IconPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (size, path) in &self.entries {
            map.serialize_entry(&size.to_string(), path)?;
        }
        map.end()
    }
}

impl StatusManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_specs<'a>(specs: impl IntoIterator<Item = &'a VariantSpec>) -> Self {
        let mut manifest = Self::new();
        for spec in specs {
            manifest.add(spec.variant, spec.size, spec.file_name.clone());
        }
        manifest
    }

    pub fn add(&mut self, variant: Variant, size: u32, path: String) {
        self.paths_mut(variant).insert(size, path);
    }

    pub fn paths(&self, variant: Variant) -> &IconPaths {
        match variant {
            Variant::Gray => &self.gray,
            Variant::Red => &self.red,
            Variant::Green => &self.green,
        }
    }

    fn paths_mut(&mut self, variant: Variant) -> &mut IconPaths {
        match variant {
            Variant::Gray => &mut self.gray,
            Variant::Red => &mut self.red,
            Variant::Green => &mut self.green,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the manifest to `path`, overwriting any existing file.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|source| Error::from_write(path, source))
    }
}
