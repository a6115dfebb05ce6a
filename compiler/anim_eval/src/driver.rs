//! Execution drivers.
//!
//! [`execute_all`] and [`run`] drain the flattened stream in one call.
//! [`Stepper`] applies one command per [`Stepper::step`] and hands control
//! back, so a host can interleave rendering or stop early by dropping it.

use anim_ir::Command;
use anim_lexer::Lexer;
use anim_parse::{Commands, Parser};

use crate::{Flatten, ScriptError, World, WorldHooks};

/// Result of a single [`Stepper::step`].
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// This leaf command was applied to the world.
    Applied(Command),
    /// The script has no more commands.
    Finished,
}

/// Apply every leaf command in order, stopping at the first error.
///
/// Returns the number of leaf commands applied.
#[tracing::instrument(level = "debug", skip_all)]
pub fn execute_all<H, C, E>(world: &mut World<H>, commands: C) -> Result<usize, ScriptError>
where
    H: WorldHooks,
    C: IntoIterator<Item = Result<Command, E>>,
    E: Into<ScriptError>,
{
    execute(world, commands, None)
}

/// Apply at most `limit` leaf commands from an already-built sequence.
#[tracing::instrument(level = "debug", skip_all, fields(limit = limit))]
pub fn execute_with_limit<H, C, E>(
    world: &mut World<H>,
    commands: C,
    limit: usize,
) -> Result<usize, ScriptError>
where
    H: WorldHooks,
    C: IntoIterator<Item = Result<Command, E>>,
    E: Into<ScriptError>,
{
    execute(world, commands, Some(limit))
}

/// Parse and execute a script.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run<H: WorldHooks>(source: &str, world: &mut World<H>) -> Result<usize, ScriptError> {
    execute(world, Parser::new(source).parse(), None)
}

/// Parse and execute at most `limit` leaf commands.
///
/// Nothing past the limit is parsed or expanded, so an enormous loop count
/// costs only what is actually run.
#[tracing::instrument(level = "debug", skip_all, fields(limit = limit))]
pub fn run_with_limit<H: WorldHooks>(
    source: &str,
    world: &mut World<H>,
    limit: usize,
) -> Result<usize, ScriptError> {
    execute(world, Parser::new(source).parse(), Some(limit))
}

fn execute<H, C, E>(
    world: &mut World<H>,
    commands: C,
    limit: Option<usize>,
) -> Result<usize, ScriptError>
where
    H: WorldHooks,
    C: IntoIterator<Item = Result<Command, E>>,
    E: Into<ScriptError>,
{
    let mut stream = Flatten::new(commands);
    let mut applied = 0usize;
    while limit.map_or(true, |limit| applied < limit) {
        let Some(item) = stream.next() else {
            break;
        };
        let command = item.map_err(Into::into)?;
        world.apply(&command)?;
        applied += 1;
    }
    tracing::debug!(applied, "execution finished");
    Ok(applied)
}

/// Cooperative driver: one leaf command per call.
pub struct Stepper<'w, H, I> {
    world: &'w mut World<H>,
    commands: Flatten<I>,
    applied: usize,
    finished: bool,
}

impl<'w, 'src, H: WorldHooks> Stepper<'w, H, Commands<'src, Lexer<'src>>> {
    /// Step through a script, parsing it as execution advances.
    pub fn for_source(world: &'w mut World<H>, source: &'src str) -> Self {
        Stepper::new(world, Parser::new(source).parse())
    }
}

impl<'w, H, I, E> Stepper<'w, H, I>
where
    H: WorldHooks,
    I: Iterator<Item = Result<Command, E>>,
    E: Into<ScriptError>,
{
    pub fn new(world: &'w mut World<H>, commands: impl IntoIterator<IntoIter = I>) -> Self {
        Stepper {
            world,
            commands: Flatten::new(commands),
            applied: 0,
            finished: false,
        }
    }

    /// Apply the next leaf command.
    ///
    /// After `Finished` or an error, every further call returns `Finished`.
    pub fn step(&mut self) -> Result<Step, ScriptError> {
        if self.finished {
            return Ok(Step::Finished);
        }
        let result = self.advance();
        if !matches!(result, Ok(Step::Applied(_))) {
            self.finished = true;
        }
        result
    }

    fn advance(&mut self) -> Result<Step, ScriptError> {
        let Some(item) = self.commands.next() else {
            tracing::debug!(applied = self.applied, "stepper finished");
            return Ok(Step::Finished);
        };
        let command = item.map_err(Into::into)?;
        self.world.apply(&command)?;
        self.applied += 1;
        tracing::trace!(applied = self.applied, command = command.keyword(), "step");
        Ok(Step::Applied(command))
    }

    /// The world as of the last applied command.
    pub fn world(&self) -> &World<H> {
        &*self.world
    }

    /// Leaf commands applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<H, I, E> Iterator for Stepper<'_, H, I>
where
    H: WorldHooks,
    I: Iterator<Item = Result<Command, E>>,
    E: Into<ScriptError>,
{
    type Item = Result<Command, ScriptError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.step() {
            Ok(Step::Applied(command)) => Some(Ok(command)),
            Ok(Step::Finished) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests;
