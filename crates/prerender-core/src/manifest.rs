//! Build asset manifest.

use serde_json::{Map, Value};

/// Mapping of build asset names to their hashed output entries.
///
/// Produced by the build toolchain, loaded once per process in production,
/// and passed read-only to the render call. Development renders receive an
/// empty manifest.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    entries: Map<String, Value>,
}

impl Manifest {
    /// An empty manifest (development mode).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a manifest from its JSON source.
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        let entries: Map<String, Value> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    /// Hashed output file path for an asset name, if present.
    pub fn file(&self, name: &str) -> Option<&str> {
        self.entries.get(name)?.get("file")?.as_str()
    }

    /// Raw manifest entry for an asset name.
    pub fn entry(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Iterate over asset names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Whether the manifest has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST_JSON: &str = r#"{
        "src/entry-client.ts": {
            "file": "assets/entry-client.4f8c1d2e.js",
            "isEntry": true
        },
        "src/style.css": {
            "file": "assets/style.9a7b3c1f.css"
        }
    }"#;

    #[test]
    fn test_manifest_lookup() {
        let manifest = Manifest::from_json_str(MANIFEST_JSON).unwrap();

        assert_eq!(
            manifest.file("src/entry-client.ts"),
            Some("assets/entry-client.4f8c1d2e.js")
        );
        assert_eq!(manifest.file("src/missing.ts"), None);
        assert!(!manifest.is_empty());
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = Manifest::empty();

        assert!(manifest.is_empty());
        assert_eq!(manifest.file("anything"), None);
    }

    #[test]
    fn test_manifest_rejects_non_object() {
        assert!(Manifest::from_json_str("[1, 2, 3]").is_err());
    }
}
