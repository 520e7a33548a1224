mod support;

use robotscript::{
    Context, Options, VariableResolution,
    error::{CapabilityError, Error, RuntimeError},
    parse_program, run,
};
use support::{Call, RecordingRobot};

fn exec(source: &str, options: Options) -> (RecordingRobot, Result<(), Error>) {
    let mut robot = RecordingRobot::new();
    let result = run(source, &mut robot, options);
    (robot, result)
}

fn exec_ok(source: &str) -> RecordingRobot {
    let (robot, result) = exec(source, Options::default());
    if let Err(e) = result {
        panic!("running {source:?} failed: {e}");
    }
    robot
}

fn runtime_error(source: &str, options: Options) -> (RecordingRobot, RuntimeError) {
    match exec(source, options) {
        (robot, Err(Error::Runtime(e))) => (robot, e),
        (_, other) => panic!("expected a runtime error from {source:?}, got {other:?}"),
    }
}

const fn limited(steps: u64) -> Options {
    Options { resolution: VariableResolution::ParseTime,
              step_limit: Some(steps), }
}

const fn runtime_resolution() -> Options {
    Options { resolution: VariableResolution::Runtime,
              step_limit: Some(1_000) }
}

#[test]
fn actions_reach_the_robot_in_order() {
    let robot = exec_ok("move; turnL; turnR; turnAround; shieldOn; shieldOff; takeFuel; wait;");
    assert_eq!(robot.actions(),
               vec![Call::Move,
                    Call::TurnLeft,
                    Call::TurnRight,
                    Call::TurnAround,
                    Call::Shield(true),
                    Call::Shield(false),
                    Call::TakeFuel,
                    Call::Wait]);
}

#[test]
fn repeat_counts() {
    assert_eq!(exec_ok("move(3);").count(&Call::Move), 3);
    assert_eq!(exec_ok("wait(div(7, 2));").count(&Call::Wait), 3);
    assert_eq!(exec_ok("move(wallDist);").count(&Call::Move), 10);
}

#[test]
fn non_positive_counts_do_nothing() {
    let robot = exec_ok("move(0); wait(0); move(-3); wait(sub(1, 5));");
    assert!(robot.actions().is_empty());
}

#[test]
fn count_is_evaluated_once() {
    let robot = exec_ok("move(fuelLeft);");
    assert_eq!(robot.count(&Call::Sense("fuelLeft")), 1);
    assert_eq!(robot.count(&Call::Move), 100);
}

#[test]
fn arithmetic_and_sensors() {
    assert_eq!(exec_ok("$x = add(2, 3); move($x);").count(&Call::Move), 5);
    assert_eq!(exec_ok("move(mul(oppFB, -1));").count(&Call::Move), 6);
    assert_eq!(exec_ok("move(barrelFB(1));").count(&Call::Move), 4);
    assert_eq!(exec_ok("move(sub(barrelLR, barrelLR(1)));").count(&Call::Move), 4);
    assert_eq!(exec_ok("wait(div(-7, -2));").count(&Call::Wait), 3);
}

#[test]
fn first_true_branch_wins() {
    let source = "if (lt(oppLR, 0)) { turnL; } elif (gt(oppLR, 0)) { turnR; } \
                  elif (gt(wallDist, 0)) { move; } else { wait; }";
    let robot = exec_ok(source);

    assert_eq!(robot.actions(), vec![Call::TurnRight]);
    assert!(!robot.sensed("wallDist"));
    assert_eq!(robot.count(&Call::Sense("oppLR")), 2);
}

#[test]
fn else_runs_when_nothing_holds() {
    let robot = exec_ok("if (eq(1, 2)) { move; } elif (eq(2, 3)) { turnL; } else { wait; }");
    assert_eq!(robot.actions(), vec![Call::Wait]);

    let robot = exec_ok("if (eq(1, 2)) { move; } turnR;");
    assert_eq!(robot.actions(), vec![Call::TurnRight]);
}

#[test]
fn and_or_short_circuit() {
    let robot = exec_ok("if (or(eq(1, 1), eq(div(1, 0), 0))) { move; }");
    assert_eq!(robot.actions(), vec![Call::Move]);

    let robot = exec_ok("if (and(eq(1, 2), eq(div(1, 0), 0))) { move; } else { wait; }");
    assert_eq!(robot.actions(), vec![Call::Wait]);

    let robot = exec_ok("if (and(gt(fuelLeft, 0), not(eq(wallDist, 0)))) { move; }");
    assert!(robot.sensed("fuelLeft") && robot.sensed("wallDist"));

    let (_, err) = runtime_error("if (and(eq(1, 1), eq(div(1, 0), 0))) { move; }",
                                 Options::default());
    assert_eq!(err, RuntimeError::DivisionByZero { line: 1 });
}

#[test]
fn while_checks_before_every_iteration() {
    let robot = exec_ok("while (gt(wallDist, 7)) { move; }");
    assert_eq!(robot.count(&Call::Move), 3);
    assert_eq!(robot.count(&Call::Sense("wallDist")), 4);

    let robot = exec_ok("while (lt(wallDist, 0)) { move; } wait;");
    assert_eq!(robot.actions(), vec![Call::Wait]);
}

#[test]
fn division_by_zero_reports_the_line() {
    let (robot, err) = runtime_error("move;\nwait(div(5,\n  0));\nmove;", Options::default());
    assert_eq!(err, RuntimeError::DivisionByZero { line: 2 });
    assert_eq!(robot.actions(), vec![Call::Move]);
}

#[test]
fn overflow_is_an_error() {
    let (_, err) = runtime_error("move(add(9223372036854775807, 1));", Options::default());
    assert_eq!(err, RuntimeError::Overflow { line: 1 });

    let (_, err) = runtime_error("move(div(-9223372036854775808, -1));", Options::default());
    assert_eq!(err, RuntimeError::Overflow { line: 1 });
}

#[test]
fn step_limit_stops_an_endless_loop() {
    let (robot, err) = runtime_error("loop { move; }", limited(10));
    assert_eq!(err, RuntimeError::StepLimitExceeded { limit: 10 });
    assert_eq!(robot.count(&Call::Move), 5);
}

#[test]
fn step_limit_counts_repeated_actions() {
    let (robot, err) = runtime_error("move(10);", limited(4));
    assert_eq!(err, RuntimeError::StepLimitExceeded { limit: 4 });
    assert_eq!(robot.count(&Call::Move), 4);

    let (robot, result) = exec("move(4);", limited(4));
    assert!(result.is_ok());
    assert_eq!(robot.count(&Call::Move), 4);
}

#[test]
fn robot_failures_abort_execution() {
    let mut robot = RecordingRobot::halting_after(3);
    let result = run("loop { move; }", &mut robot, Options::default());

    assert_eq!(result,
               Err(Error::Runtime(RuntimeError::Capability(CapabilityError::Halted {
                   reason: "out of turns".to_string(),
               }))));
    assert_eq!(robot.count(&Call::Move), 3);
}

#[test]
fn invalid_barrel_index_is_forwarded() {
    let (_, err) = runtime_error("move(barrelLR(5));", Options::default());
    assert_eq!(err,
               RuntimeError::Capability(CapabilityError::InvalidBarrelIndex { index: 5 }));

    let (_, err) = runtime_error("move(barrelFB(-1));", Options::default());
    assert_eq!(err,
               RuntimeError::Capability(CapabilityError::InvalidBarrelIndex { index: -1 }));
}

#[test]
fn parse_errors_prevent_any_action() {
    let (robot, result) = exec("move; turnL; move(", Options::default());
    assert!(matches!(result, Err(Error::Parse(_))));
    assert!(robot.calls.is_empty());
}

#[test]
fn parse_time_binding_re_evaluates_the_bound_expression() {
    let robot = exec_ok("$d = wallDist; move(3); move($d);");
    assert_eq!(robot.count(&Call::Move), 10);

    let robot = exec_ok("$x = 1; $x = add($x, 1); $x = mul($x, 3); move($x);");
    assert_eq!(robot.count(&Call::Move), 6);
}

#[test]
fn parse_time_binding_ignores_control_flow() {
    let robot = exec_ok("if (lt(2, 1)) { $x = 4; } move($x);");
    assert_eq!(robot.count(&Call::Move), 4);

    let (_, err) = runtime_error("if (lt(2, 1)) { $x = 4; } move($x);", runtime_resolution());
    assert_eq!(err,
               RuntimeError::UnboundVariable { name: "$x".to_string(),
                                               line: 1, });
}

#[test]
fn counter_loops_depend_on_resolution() {
    let source = "$n = 3; while (gt($n, 0)) { move; $n = sub($n, 1); }";

    let (robot, err) = runtime_error(source, limited(20));
    assert_eq!(err, RuntimeError::StepLimitExceeded { limit: 20 });
    assert_eq!(robot.count(&Call::Move), 10);

    let mut robot = RecordingRobot::new();
    run(source, &mut robot, runtime_resolution()).unwrap();
    assert_eq!(robot.count(&Call::Move), 3);
}

#[test]
fn runtime_resolution_stores_values() {
    let mut robot = RecordingRobot::new();
    run("$d = wallDist; move(3); move($d);", &mut robot, runtime_resolution()).unwrap();
    assert_eq!(robot.count(&Call::Move), 13);
}

#[test]
fn long_reassignment_chains_evaluate_in_both_modes() {
    let mut source = String::from("$x = 0;\n");
    source.push_str(&"$x = add($x, 1);\n".repeat(100));
    source.push_str("wait($x);");

    assert_eq!(exec_ok(&source).count(&Call::Wait), 100);

    let mut robot = RecordingRobot::new();
    run(&source, &mut robot, runtime_resolution()).unwrap();
    assert_eq!(robot.count(&Call::Wait), 100);
}

#[test]
fn nested_arithmetic_evaluates() {
    let depth = 100;
    let source = format!("wait({}1{});", "add(1, ".repeat(depth), ")".repeat(depth));
    assert_eq!(exec_ok(&source).count(&Call::Wait), 101);
}

#[test]
fn context_exposes_options_and_stored_values() {
    let program = parse_program("$x = 2; $y = mul($x, wallDist); move($x);").unwrap();
    let mut robot = RecordingRobot::new();

    let mut context = Context::with_options(runtime_resolution());
    context.execute_program(&program, &mut robot).unwrap();
    assert_eq!(context.options.resolution, VariableResolution::Runtime);
    assert_eq!(context.variables.get("$x"), Some(&2));
    assert_eq!(context.variables.get("$y"), Some(&20));
    assert_eq!(context.steps_taken(), 2);

    let mut context = Context::new();
    context.execute_program(&program, &mut robot).unwrap();
    assert!(context.variables.is_empty());
}
