//! The world context: object registry plus hooks.

use std::convert::Infallible;

use anim_ir::{AnimationObject, Command, Direction, Name, Vec2};

use crate::{flatten, DefaultHooks, EvalError, Objects, WorldHooks};

/// Runtime state of one script run.
///
/// Checks name presence, then hands the effect to the hooks. A run owns
/// its world; nothing is shared between runs.
#[derive(Debug, Default)]
pub struct World<H = DefaultHooks> {
    objects: Objects,
    hooks: H,
}

impl World {
    pub fn new() -> Self {
        World::default()
    }
}

impl<H: WorldHooks> World<H> {
    pub fn with_hooks(hooks: H) -> Self {
        World {
            objects: Objects::new(),
            hooks,
        }
    }

    /// Add a new object. Fails if the name is already present.
    pub fn declare(
        &mut self,
        name: impl Into<Name>,
        object: AnimationObject,
    ) -> Result<(), EvalError> {
        let name = name.into();
        if self.objects.contains(&name) {
            return Err(EvalError::DuplicateName { name });
        }
        tracing::debug!(%name, shapes = object.shapes().len(), "declare");
        self.hooks.on_object_added(&mut self.objects, &name, object);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AnimationObject> {
        self.objects.get(name)
    }

    /// Move an object to an absolute position.
    pub fn place(&mut self, name: impl Into<Name>, position: Vec2) -> Result<(), EvalError> {
        let name = self.require(name.into(), "place")?;
        tracing::debug!(%name, %position, "place");
        self.hooks
            .on_object_placed(&mut self.objects, &name, position);
        Ok(())
    }

    pub fn shift(&mut self, name: impl Into<Name>, direction: Direction) -> Result<(), EvalError> {
        let name = self.require(name.into(), "shift")?;
        tracing::debug!(%name, %direction, "shift");
        self.hooks
            .on_object_shifting(&mut self.objects, &name, direction);
        Ok(())
    }

    /// Remove an object; its name may be declared again afterwards.
    pub fn erase(&mut self, name: impl Into<Name>) -> Result<(), EvalError> {
        let name = self.require(name.into(), "erase")?;
        tracing::debug!(%name, "erase");
        self.hooks.on_object_erasing_out(&mut self.objects, &name);
        Ok(())
    }

    /// Dispatch one command. A loop is expanded through the flattener and
    /// stops at the first failing leaf.
    pub fn apply(&mut self, command: &Command) -> Result<(), EvalError> {
        match command {
            Command::Define { name, object } => self.declare(name.clone(), object.clone()),
            Command::Place { name, position } => self.place(name.clone(), *position),
            Command::Shift { name, direction } => self.shift(name.clone(), *direction),
            Command::Erase { name } => self.erase(name.clone()),
            Command::Loop { .. } => {
                for leaf in flatten(std::slice::from_ref(command)) {
                    let leaf = leaf.unwrap_or_else(|never: Infallible| match never {});
                    self.apply(&leaf)?;
                }
                Ok(())
            }
        }
    }

    /// Drop every object. Hooks are kept.
    pub fn reset(&mut self) {
        tracing::debug!(objects = self.objects.len(), "reset");
        self.objects.clear();
    }

    pub fn objects(&self) -> &Objects {
        &self.objects
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    pub fn into_parts(self) -> (Objects, H) {
        (self.objects, self.hooks)
    }

    fn require(&self, name: Name, command: &'static str) -> Result<Name, EvalError> {
        if self.objects.contains(&name) {
            Ok(name)
        } else {
            Err(EvalError::UndeclaredName { name, command })
        }
    }
}
