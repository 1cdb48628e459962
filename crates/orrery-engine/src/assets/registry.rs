use std::collections::HashMap;
use crate::assets::manifest::AssetManifest;

/// Texture slot index as seen by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Registry of named textures, built from an AssetManifest.
/// Slots are assigned in name order so they are stable across loads of the same manifest.
pub struct TextureRegistry {
    slots: HashMap<String, TextureId>,
    paths: Vec<String>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            paths: Vec::new(),
        }
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut names: Vec<&String> = manifest.textures.keys().collect();
        names.sort();

        let mut slots = HashMap::with_capacity(names.len());
        let mut paths = Vec::with_capacity(names.len());
        for (slot, name) in names.into_iter().enumerate() {
            slots.insert(name.clone(), TextureId(slot as u32));
            paths.push(manifest.textures[name].clone());
        }
        Self { slots, paths }
    }

    /// Look up a texture by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<TextureId> {
        self.slots.get(name).copied()
    }

    /// Like `get`, but logs the untextured fallback.
    pub fn resolve(&self, name: &str) -> Option<TextureId> {
        let id = self.get(name);
        if id.is_none() {
            log::debug!("texture '{}' not in manifest, rendering untextured", name);
        }
        id
    }

    /// Relative path for a slot, in slot order. The host loads these.
    pub fn path(&self, id: TextureId) -> Option<&str> {
        self.paths.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
