use std::collections::HashMap;
use bevy::asset::{Assets, Handle};
use bevy::pbr::StandardMaterial;

/// Shares one material handle per key within a spawned course.
pub(crate) struct MaterialCache {
    map: HashMap<String, Handle<StandardMaterial>>,
}

impl MaterialCache {
    pub fn new() -> Self {
        MaterialCache {
            map: HashMap::new(),
        }
    }

    pub fn get_or_insert_with(
        &mut self,
        key: &str,
        materials: &mut Assets<StandardMaterial>,
        make: impl FnOnce() -> StandardMaterial,
    ) -> Handle<StandardMaterial> {
        if let Some(handle) = self.map.get(key) {
            return handle.clone();
        }

        let handle = materials.add(make());
        self.map.insert(key.to_string(), handle.clone());
        handle
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}
