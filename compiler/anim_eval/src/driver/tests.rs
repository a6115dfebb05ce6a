use std::convert::Infallible;

use super::*;
use anim_diagnostic::ErrorCode;
use anim_ir::{AnimationObject, Direction, Name, Vec2};
use anim_parse::{parse_program, ParseError};
use pretty_assertions::assert_eq;

use crate::{EvalError, Objects};

const CROSS: &str = "(define d ((line (0 0) (50 50))))";

fn run_ok(source: &str) -> usize {
    let mut world = World::new();
    match run(source, &mut world) {
        Ok(applied) => applied,
        Err(err) => panic!("unexpected error: {err}"),
    }
}

#[test]
fn loop_of_one_hundred_after_define() {
    assert_eq!(run_ok(&format!("{CROSS} (loop 100 ((shift d right)))")), 101);
}

#[test]
fn nested_loops_run_ten_thousand_commands() {
    assert_eq!(
        run_ok(&format!("{CROSS} (loop 100 ((loop 100 ((shift d up)))))")),
        10_001
    );
}

#[test]
fn zero_outer_count_runs_nothing() {
    assert_eq!(run_ok("(loop 0 ((loop 100 ((shift d up)))))"), 0);
}

#[test]
fn empty_script_runs_nothing() {
    assert_eq!(run_ok(""), 0);
    assert_eq!(run_ok("  \n\t "), 0);
}

#[test]
fn redefine_after_erase_succeeds() {
    assert_eq!(run_ok(&format!("{CROSS} (erase d) {CROSS}")), 3);
}

#[test]
fn duplicate_define_stops_the_run() {
    let mut world = World::new();
    let err = run(&format!("{CROSS} {CROSS} (erase d)"), &mut world);
    assert_eq!(
        err,
        Err(ScriptError::Eval(EvalError::DuplicateName {
            name: Name::from("d")
        }))
    );
    // The first define was applied; the erase never ran.
    assert!(world.get("d").is_some());
}

#[test]
fn undeclared_commands_fail() {
    for source in ["(place d (1 1))", "(shift d up)", "(erase d)"] {
        let mut world = World::new();
        let Err(err) = run(source, &mut world) else {
            panic!("{source} should fail");
        };
        assert_eq!(err.code(), ErrorCode::E6002, "{source}");
    }
}

#[test]
fn erase_inside_loop_fails_on_second_pass() {
    let mut world = World::new();
    let Err(err) = run(&format!("{CROSS} (loop 2 ((erase d)))"), &mut world) else {
        panic!("second erase must fail");
    };
    assert!(matches!(
        err,
        ScriptError::Eval(EvalError::UndeclaredName { command: "erase", .. })
    ));
}

#[test]
fn parse_errors_surface_after_earlier_commands_ran() {
    let mut world = World::new();
    let Err(err) = run(&format!("{CROSS} (place d (5 5)) (shift d sideways)"), &mut world) else {
        panic!("sideways is not a direction");
    };
    assert!(matches!(err, ScriptError::Parse(ParseError::UnexpectedToken { .. })));
    assert_eq!(world.get("d").map(|o| o.position), Some(Vec2::new(5.0, 5.0)));
}

#[test]
fn lex_errors_are_script_errors() {
    let mut world = World::new();
    let Err(err) = run(&format!("{CROSS} *"), &mut world) else {
        panic!("'*' is not valid");
    };
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(world.objects().len(), 1);
}

#[test]
fn limit_stops_huge_loops() {
    let mut world = World::new();
    let source = "(define d ()) (loop 9223372036854775807 ((loop 9223372036854775807 ((shift d up)))))";
    assert_eq!(run_with_limit(source, &mut world, 1_000), Ok(1_000));
}

#[test]
fn limit_does_not_parse_past_the_cut() {
    let mut world = World::new();
    assert_eq!(
        run_with_limit("(define d ()) (erase d) (bogus)", &mut world, 2),
        Ok(2)
    );
    assert!(world.objects().is_empty());
}

#[test]
fn execute_all_accepts_a_built_tree() {
    let commands = match parse_program(&format!("{CROSS} (loop 3 ((shift d left)))")) {
        Ok(commands) => commands,
        Err(err) => panic!("{err}"),
    };
    let mut world = World::new();
    let applied = execute_all(&mut world, commands.into_iter().map(Ok::<_, Infallible>));
    assert_eq!(applied, Ok(4));
}

#[test]
fn execute_with_limit_stops_a_built_tree() {
    let commands = match parse_program("(define d ()) (loop 9223372036854775807 ((shift d up)))") {
        Ok(commands) => commands,
        Err(err) => panic!("{err}"),
    };
    let mut world = World::new();
    let applied = execute_with_limit(&mut world, commands.iter().cloned().map(Ok::<_, Infallible>), 50);
    assert_eq!(applied, Ok(50));
    assert!(world.get("d").is_some());
}

#[test]
fn stepper_applies_one_command_per_step() {
    let mut world = World::new();
    let mut stepper = Stepper::for_source(&mut world, "(define d ()) (loop 2 ((shift d down)))");

    let Ok(Step::Applied(first)) = stepper.step() else {
        panic!("define should be applied first");
    };
    assert_eq!(first.keyword(), "define");
    assert!(stepper.world().get("d").is_some());

    assert_eq!(
        stepper.step(),
        Ok(Step::Applied(Command::Shift {
            name: Name::from("d"),
            direction: Direction::Down,
        }))
    );
    assert!(matches!(stepper.step(), Ok(Step::Applied(_))));
    assert_eq!(stepper.applied(), 3);
    assert_eq!(stepper.step(), Ok(Step::Finished));
    assert!(stepper.is_finished());
    assert_eq!(stepper.step(), Ok(Step::Finished));
}

#[test]
fn stepper_can_stop_early() {
    let mut world = World::new();
    {
        let mut stepper = Stepper::for_source(
            &mut world,
            "(define d ()) (loop 1000000000 ((shift d up)))",
        );
        for _ in 0..10 {
            assert!(matches!(stepper.step(), Ok(Step::Applied(_))));
        }
        assert!(!stepper.is_finished());
    }
    // Dropping the stepper cancels the run; applied effects remain.
    assert!(world.get("d").is_some());
}

#[test]
fn stepper_returns_past_a_loop_with_no_leaves() {
    let mut world = World::new();
    let mut stepper = Stepper::for_source(
        &mut world,
        "(define d ()) (loop 9000000000000000000 ((loop -1 ((shift d up))))) (shift d up)",
    );
    assert!(matches!(stepper.step(), Ok(Step::Applied(Command::Define { .. }))));
    assert_eq!(
        stepper.step(),
        Ok(Step::Applied(Command::Shift {
            name: Name::from("d"),
            direction: Direction::Up,
        }))
    );
    assert_eq!(stepper.step(), Ok(Step::Finished));
    assert_eq!(stepper.applied(), 2);
}

#[test]
fn deeply_nested_loops_run_and_drop() {
    let depth = 100_000;
    let mut source = String::from("(define d ())");
    source.push_str(&" (loop 1 (".repeat(depth));
    source.push_str("(shift d up)");
    source.push_str(&"))".repeat(depth));

    assert_eq!(run_ok(&source), 2);

    let commands = match parse_program(&source) {
        Ok(commands) => commands,
        Err(err) => panic!("unexpected parse error: {err}"),
    };
    let mut world = World::new();
    assert_eq!(
        execute_all(&mut world, commands.iter().cloned().map(Ok::<_, Infallible>)),
        Ok(2)
    );
    drop(world);
    drop(commands);
}

#[test]
fn stepper_finishes_after_an_error() {
    let mut world = World::new();
    let mut stepper = Stepper::for_source(&mut world, "(erase d) (define d ())");
    assert!(matches!(
        stepper.step(),
        Err(ScriptError::Eval(EvalError::UndeclaredName { .. }))
    ));
    assert!(stepper.is_finished());
    assert_eq!(stepper.step(), Ok(Step::Finished));
}

#[test]
fn stepper_is_an_iterator() {
    let source = format!("{CROSS} (loop 5 ((shift d up)))");
    let mut world = World::new();
    let stepper = Stepper::for_source(&mut world, &source);
    let results: Vec<_> = stepper.collect();
    assert_eq!(results.len(), 6);
    assert!(results.iter().all(Result::is_ok));
}

/// Moves objects one unit per shift and counts every effect.
#[derive(Default)]
struct Mover {
    effects: usize,
}

impl WorldHooks for Mover {
    fn on_object_added(&mut self, objects: &mut Objects, name: &Name, object: AnimationObject) {
        self.effects += 1;
        objects.insert(name.clone(), object);
    }

    fn on_object_shifting(&mut self, objects: &mut Objects, name: &Name, direction: Direction) {
        self.effects += 1;
        if let Some(position) = objects.get(name).map(|o| o.position) {
            objects.set_position(name, position + direction.offset(1.0));
        }
    }
}

#[test]
fn hooks_see_every_flattened_command() {
    let mut world = World::with_hooks(Mover::default());
    let applied = run(
        "(define d ()) (loop 3 ((shift d right) (loop 2 ((shift d down)))))",
        &mut world,
    );
    assert_eq!(applied, Ok(10));
    assert_eq!(world.hooks().effects, 10);
    assert_eq!(world.get("d").map(|o| o.position), Some(Vec2::new(3.0, 6.0)));
}
