//! `check` and `run`: execute a script.

use std::io::Write;

use anim_eval::{DefaultHooks, ScriptError, World};
use anim_parse::parse_program;

use crate::{PrintHooks, RunConfig};

/// Leaf commands `anim check` applies when no `--limit` is given.
pub const DEFAULT_CHECK_LIMIT: usize = 10_000_000;

/// What `anim check` found.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CheckReport {
    pub statements: usize,
    /// Leaf commands the script expands to, saturating.
    pub expanded: u64,
    pub applied: usize,
    /// Objects still declared at the end.
    pub objects: usize,
    /// Whether execution stopped at the limit before the script ended.
    pub limited: bool,
}

/// Parse the whole script, then execute at most `limit` leaf commands
/// headlessly.
pub fn check(source: &str, limit: usize) -> Result<CheckReport, ScriptError> {
    let commands = parse_program(source)?;
    let expanded = commands
        .iter()
        .map(anim_ir::Command::expanded_len)
        .fold(0u64, u64::saturating_add);

    let mut world: World<DefaultHooks> = World::new();
    let applied = anim_eval::execute_with_limit(
        &mut world,
        commands.iter().cloned().map(Ok::<_, ScriptError>),
        limit,
    )?;
    let limited = u64::try_from(applied).is_ok_and(|applied| applied < expanded);
    tracing::debug!(applied, expanded, limited, "check finished");
    Ok(CheckReport {
        statements: commands.len(),
        expanded,
        applied,
        objects: world.objects().len(),
        limited,
    })
}

/// Result of a completed `anim run`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RunSummary {
    pub applied: usize,
    /// Whether the run reached the configured limit.
    pub limited: bool,
    pub objects: usize,
}

/// Execute a script, narrating world events to `out`.
pub fn run(
    source: &str,
    config: &RunConfig,
    out: &mut impl Write,
) -> Result<RunSummary, ScriptError> {
    let hooks = PrintHooks::new(&mut *out, config.step, config.quiet);
    let mut world = World::with_hooks(hooks);
    let applied = match config.limit {
        Some(limit) => anim_eval::run_with_limit(source, &mut world, limit)?,
        None => anim_eval::run(source, &mut world)?,
    };
    let limited = config.limit == Some(applied);
    if limited {
        tracing::info!(applied, "run stopped at limit");
    }
    Ok(RunSummary {
        applied,
        limited,
        objects: world.objects().len(),
    })
}
