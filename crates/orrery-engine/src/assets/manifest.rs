use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Asset manifest describing the textures, overlay images and downloadable
/// documents a game refers to by name. Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Surface textures: name → relative path.
    #[serde(default)]
    pub textures: HashMap<String, String>,
    /// Images shown in overlays: name → relative path.
    #[serde(default)]
    pub images: HashMap<String, String>,
    /// Downloadable documents: name → relative path.
    #[serde(default)]
    pub documents: HashMap<String, String>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn image_path(&self, name: &str) -> Option<&str> {
        self.images.get(name).map(String::as_str)
    }

    pub fn document_path(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(String::as_str)
    }

    /// Document names in sorted order. A document's position here is the
    /// id carried by game events.
    pub fn document_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn document_index(&self, name: &str) -> Option<usize> {
        self.document_names().iter().position(|&n| n == name)
    }

    pub fn document_path_at(&self, index: usize) -> Option<&str> {
        let name = *self.document_names().get(index)?;
        self.document_path(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let json = r#"{
            "textures": { "earth": "textures/earth.jpg", "sun": "textures/sun.jpg" },
            "images": { "earth_shot": "img/earth.png" },
            "documents": { "resume": "docs/resume.pdf" }
        }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.image_path("earth_shot"), Some("img/earth.png"));
        assert_eq!(manifest.document_path("resume"), Some("docs/resume.pdf"));
    }

    #[test]
    fn parse_minimal_manifest() {
        let manifest = AssetManifest::from_json("{}").unwrap();
        assert!(manifest.textures.is_empty());
        assert!(manifest.document_path("resume").is_none());
    }

    #[test]
    fn documents_are_indexed_by_sorted_name() {
        let json = r#"{ "documents": { "resume": "docs/resume.pdf", "cover": "docs/cover.pdf" } }"#;
        let manifest = AssetManifest::from_json(json).unwrap();
        assert_eq!(manifest.document_index("cover"), Some(0));
        assert_eq!(manifest.document_index("resume"), Some(1));
        assert_eq!(manifest.document_index("missing"), None);
        assert_eq!(manifest.document_path_at(1), Some("docs/resume.pdf"));
        assert_eq!(manifest.document_path_at(2), None);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AssetManifest::from_json("{\"textures\": [").is_err());
    }
}
