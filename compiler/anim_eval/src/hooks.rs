//! World hooks.
//!
//! Every world effect runs through a [`WorldHooks`] implementation. Each
//! method receives the registry and performs the default effect by calling
//! the provided implementation's registry mutation, so a host can run code
//! before it, after it, or instead of it:
//!
//! ```ignore
//! impl WorldHooks for Renderer {
//!     fn on_object_placed(&mut self, objects: &mut Objects, name: &Name, position: Vec2) {
//!         objects.set_position(name, position);
//!         self.redraw(name);
//!     }
//! }
//! ```

use anim_ir::{AnimationObject, Direction, Name, Vec2};

use crate::Objects;

/// Strategy for world effects. All methods default to the plain registry
/// mutation.
pub trait WorldHooks {
    /// `name` is not yet in `objects`.
    fn on_object_added(&mut self, objects: &mut Objects, name: &Name, object: AnimationObject) {
        objects.insert(name.clone(), object);
    }

    /// `name` is in `objects`.
    fn on_object_placed(&mut self, objects: &mut Objects, name: &Name, position: Vec2) {
        objects.set_position(name, position);
    }

    /// `name` is in `objects`. Shifting is symbolic, so the default does
    /// nothing; hosts that want movement apply [`Direction::offset`].
    fn on_object_shifting(&mut self, objects: &mut Objects, name: &Name, direction: Direction) {
        let _ = (objects, name, direction);
    }

    /// `name` is in `objects`.
    fn on_object_erasing_out(&mut self, objects: &mut Objects, name: &Name) {
        objects.remove(name);
    }
}

/// Hooks that only perform the default effects.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultHooks;

impl WorldHooks for DefaultHooks {}

impl<H: WorldHooks + ?Sized> WorldHooks for &mut H {
    fn on_object_added(&mut self, objects: &mut Objects, name: &Name, object: AnimationObject) {
        (**self).on_object_added(objects, name, object);
    }

    fn on_object_placed(&mut self, objects: &mut Objects, name: &Name, position: Vec2) {
        (**self).on_object_placed(objects, name, position);
    }

    fn on_object_shifting(&mut self, objects: &mut Objects, name: &Name, direction: Direction) {
        (**self).on_object_shifting(objects, name, direction);
    }

    fn on_object_erasing_out(&mut self, objects: &mut Objects, name: &Name) {
        (**self).on_object_erasing_out(objects, name);
    }
}
