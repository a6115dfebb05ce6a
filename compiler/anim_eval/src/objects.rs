//! The object registry.

use anim_ir::{AnimationObject, Name, Vec2};
use rustc_hash::FxHashMap;

/// Mapping from object name to object.
///
/// These methods are the default effects hooks build on. They do not check
/// whether a name is present; [`World`](crate::World) does that before any
/// hook runs.
#[derive(Clone, Debug, Default)]
pub struct Objects {
    map: FxHashMap<Name, AnimationObject>,
}

impl Objects {
    pub fn new() -> Self {
        Objects::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&AnimationObject> {
        self.map.get(name)
    }

    /// Iterate over all objects, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &AnimationObject)> {
        self.map.iter()
    }

    /// Add (or replace) an object.
    pub fn insert(&mut self, name: Name, object: AnimationObject) {
        self.map.insert(name, object);
    }

    /// Move an object. Returns `false` if the name is absent.
    pub fn set_position(&mut self, name: &str, position: Vec2) -> bool {
        match self.map.get_mut(name) {
            Some(object) => {
                object.position = position;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AnimationObject> {
        self.map.remove(name)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}
