//! Loop flattening.
//!
//! Turns a command tree into the stream of leaf commands in execution
//! order, without recursion. The top-level sequence is the initial frame
//! and runs once; each active loop adds a frame holding a cursor into the
//! shared body and the number of passes left.
//!
//! Nothing is expanded ahead of the consumer: a loop of a billion passes
//! costs one frame until someone pulls from it. Every pass over a body is
//! the same, so a pass that yields nothing ends its frame at once; the
//! work between two yielded commands is bounded by the size of the tree,
//! never by loop counts.

use std::convert::Infallible;
use std::iter::FusedIterator;
use std::sync::Arc;

use anim_ir::Command;
use smallvec::SmallVec;

/// One active loop.
struct LoopFrame {
    body: Arc<[Command]>,
    cursor: usize,
    /// Passes left, including the current one. Always positive.
    remaining: i64,
    /// Whether the current pass has produced a leaf.
    yielded: bool,
}

/// Lazy stream of leaf commands.
///
/// Items from the top-level sequence are `Result`s so a lazily parsed
/// script can feed the flattener directly; the first error is passed
/// through and ends the stream.
pub struct Flatten<I> {
    /// The initial frame; `None` once exhausted.
    source: Option<I>,
    frames: SmallVec<[LoopFrame; 8]>,
}

impl<I, E> Flatten<I>
where
    I: Iterator<Item = Result<Command, E>>,
{
    pub fn new(commands: impl IntoIterator<IntoIter = I>) -> Self {
        Flatten {
            source: Some(commands.into_iter()),
            frames: SmallVec::new(),
        }
    }

    /// Number of loops currently being expanded.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push a frame for `command` if it is a loop with work to do.
    ///
    /// Returns the command back if it is a leaf.
    fn enter(&mut self, command: Command) -> Option<Command> {
        let Command::Loop { count, body } = &command else {
            return Some(command);
        };
        if *count > 0 && !body.is_empty() {
            tracing::debug!(count, len = body.len(), depth = self.frames.len(), "push loop frame");
            self.frames.push(LoopFrame {
                body: Arc::clone(body),
                cursor: 0,
                remaining: *count,
                yielded: false,
            });
        } else {
            tracing::trace!(count, "skip empty loop");
        }
        None
    }

    fn pop(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        if frame.yielded {
            if let Some(parent) = self.frames.last_mut() {
                parent.yielded = true;
            }
        } else {
            tracing::debug!(remaining = frame.remaining, "drop loop that yields nothing");
        }
        tracing::debug!(depth = self.frames.len(), "pop loop frame");
    }
}

/// Flatten a tree that is already fully built.
pub fn flatten(
    commands: &[Command],
) -> Flatten<impl Iterator<Item = Result<Command, Infallible>> + '_> {
    Flatten::new(commands.iter().cloned().map(Ok))
}

impl<I, E> Iterator for Flatten<I>
where
    I: Iterator<Item = Result<Command, E>>,
{
    type Item = Result<Command, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(frame) = self.frames.last_mut() {
                if let Some(command) = frame.body.get(frame.cursor) {
                    let command = command.clone();
                    frame.cursor += 1;
                    if let Some(leaf) = self.enter(command) {
                        if let Some(frame) = self.frames.last_mut() {
                            frame.yielded = true;
                        }
                        return Some(Ok(leaf));
                    }
                } else if frame.remaining > 1 && frame.yielded {
                    frame.remaining -= 1;
                    frame.cursor = 0;
                } else {
                    self.pop();
                }
                continue;
            }

            match self.source.as_mut()?.next() {
                Some(Ok(command)) => {
                    if let Some(leaf) = self.enter(command) {
                        return Some(Ok(leaf));
                    }
                }
                Some(Err(err)) => {
                    self.source = None;
                    return Some(Err(err));
                }
                None => {
                    self.source = None;
                    return None;
                }
            }
        }
    }
}

impl<I, E> FusedIterator for Flatten<I> where I: Iterator<Item = Result<Command, E>> {}
