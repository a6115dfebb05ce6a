//! Hooks that narrate a run.

use std::io::Write;

use anim_eval::{Objects, WorldHooks};
use anim_ir::{AnimationObject, Direction, Name, Vec2};

/// Prints one line per world event and moves shifted objects by a fixed
/// step.
pub struct PrintHooks<W> {
    out: W,
    step: f32,
    quiet: bool,
}

impl<W: Write> PrintHooks<W> {
    pub fn new(out: W, step: f32, quiet: bool) -> Self {
        PrintHooks { out, step, quiet }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn event(&mut self, line: std::fmt::Arguments<'_>) {
        if !self.quiet {
            let _ = writeln!(self.out, "{line}");
        }
    }
}

impl<W: Write> WorldHooks for PrintHooks<W> {
    fn on_object_added(&mut self, objects: &mut Objects, name: &Name, object: AnimationObject) {
        self.event(format_args!("define {name} {object}"));
        objects.insert(name.clone(), object);
    }

    fn on_object_placed(&mut self, objects: &mut Objects, name: &Name, position: Vec2) {
        objects.set_position(name, position);
        self.event(format_args!("place  {name} at {position}"));
    }

    fn on_object_shifting(&mut self, objects: &mut Objects, name: &Name, direction: Direction) {
        let Some(from) = objects.get(name).map(|object| object.position) else {
            return;
        };
        let to = from + direction.offset(self.step);
        objects.set_position(name, to);
        self.event(format_args!("shift  {name} {direction} {from} -> {to}"));
    }

    fn on_object_erasing_out(&mut self, objects: &mut Objects, name: &Name) {
        objects.remove(name);
        self.event(format_args!("erase  {name}"));
    }
}
