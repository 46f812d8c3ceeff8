use super::*;

#[test]
fn test_repeat() {
    let mut r = Runtime::default();
    r.run_str("t", "|5|! |3|! \\.:");
    assert_eq!(run(&mut r), "8.0");
}

#[test]
fn test_negative_repeat_is_opposite() {
    let mut r = Runtime::default();
    r.run_str("t", "|5|! |-2|! \\.:");
    let negative = run(&mut r);
    let mut r = Runtime::default();
    r.run_str("t", "|5|! |2|~ \\.:");
    assert_eq!(run(&mut r), negative);
    assert_eq!(negative, "3.0");
}

#[test]
fn test_cell_repeat() {
    let mut r = Runtime::default();
    r.run_str("t", "|3|! ||! \\. |0|! ||> \\.:");
    assert_eq!(run(&mut r), "6.00.0");
    assert_eq!(r.global().active_tape().cursor(), 6);
    assert_eq!(r.global().active_tape().cells().len(), 7);
}

#[test]
fn test_arithmetic_with_inactive_tape() {
    let mut r = Runtime::default();
    r.run_str("t", "|2|! ^ |5|! + \\. ^ * \\. ^ / \\. - \\.:");
    assert_eq!(run(&mut r), "7.014.00.5-13.5");
}

#[test]
fn test_division_by_zero() {
    let mut r = Runtime::default();
    r.run_str("t", "! / \\.:");
    assert_eq!(run(&mut r), "inf");
}

#[test]
fn test_tape_growth_and_warning() {
    let mut r = Runtime::default();
    r.run_str("t", "> > <<< \\.:");
    assert_eq!(run(&mut r), "[too-left-pointer]0.0");
    assert_eq!(r.global().tape(0).cells().len(), 4);
    assert_eq!(r.global().tape(0).cursor(), 0);
    assert_eq!(r.global().tape(1).cells().len(), 1);
}

#[test]
fn test_one_warning_per_instruction() {
    let mut r = Runtime::default();
    r.run_str("t", "|2|<:");
    assert_eq!(run(&mut r), "[too-left-pointer]");
    assert_eq!(r.global().tape(0).cells(), &[0.0, 0.0, 0.0]);
    r.run_str("t", "|100000|< < \\.:");
    assert_eq!(run(&mut r), "[too-left-pointer][too-left-pointer]0.0");
    assert_eq!(r.global().tape(0).cells().len(), 100004);
}

#[test]
fn test_long_repeat() {
    let mut r = Runtime::default();
    r.run_str("t", "|5000|! \\.:");
    assert_eq!(run_cycles(&mut r, 10), "5000.0");
}

#[test]
fn test_not_finite_cell_repeat() {
    let mut r = Runtime::default();
    r.run_str("t", "! / ||! \\.:");
    assert_eq!(
        run(&mut r),
        "INVALID NUMBER AT 1:5 IN t; REPEAT COUNT IS NOT FINITE\n"
    );
    assert_eq!(r.global().cell(), f64::INFINITY);
}

#[test]
fn test_exponent_output() {
    let mut r = Runtime::default();
    r.run_str("t", "|10|! ^ |10|! ^ |19|* \\. ^ / \\.:");
    assert_eq!(run(&mut r), "1e+201e-19");
}

#[test]
fn test_context_isolation() {
    let mut r = Runtime::default();
    r.run_str("t", "'|3|! \\. '\\.:");
    assert_eq!(run(&mut r), "0.03.0");
    assert_eq!(r.global().cell(), 0.0);
    assert_eq!(r.local().cell(), 3.0);
}

#[test]
fn test_swap() {
    let mut r = Runtime::default();
    r.run_str("t", "|4|! ; '\\. \\.:");
    assert_eq!(run(&mut r), "4.00.0");
    r.run_str("t", "|4|! ; ; \\. '\\.:");
    assert_eq!(run(&mut r), "4.00.0");
}

#[test]
fn test_global_persists_local_does_not() {
    let mut r = Runtime::default();
    r.run_str("t", "|2|! '!:");
    assert_eq!(run(&mut r), "");
    r.run_str("t", "\\. '\\.:");
    assert_eq!(run(&mut r), "2.00.0");
}

#[test]
fn test_output_char() {
    let mut r = Runtime::default();
    r.run_str("t", "|72|! \\, ! \\,:");
    assert_eq!(run(&mut r), "HI");
    r.run_str("t", "|-75|! \\,:");
    assert_eq!(run(&mut r), "INVALID CHARACTER AT 1:8 IN t\n");
}

#[test]
fn test_input_number() {
    let mut r = Runtime::default();
    r.run_str("t", "$. \\.:");
    assert_eq!(r.execute(10), Event::Input(InputKind::Number));
    assert!(r.is_waiting());
    assert!(r.enter(" 4.5\r\n"));
    assert!(!r.enter("1"));
    assert_eq!(run(&mut r), "4.5");
}

#[test]
fn test_input_char() {
    let mut r = Runtime::default();
    r.run_str("t", "'$, '\\.:");
    assert_eq!(r.execute(10), Event::Input(InputKind::Char));
    r.enter("AB");
    assert_eq!(run(&mut r), "65.0");
}

#[test]
fn test_input_errors() {
    let mut r = Runtime::default();
    r.run_str("t", "$.:");
    run(&mut r);
    r.enter("x");
    assert_eq!(run(&mut r), "INVALID NUMBER AT 1:1 IN t\n");
    r.run_str("t", "! $,:");
    run(&mut r);
    r.enter("");
    assert_eq!(run(&mut r), "INVALID INPUT AT 1:3 IN t; EMPTY LINE\n");
    assert_eq!(r.global().cell(), 1.0);
}

#[test]
fn test_compile_error_is_reported() {
    let mut r = Runtime::default();
    r.run_str("t", "!");
    assert_eq!(run(&mut r), "':' EXPECTED AT 1:2 IN t\n");
    assert_eq!(r.execute(10), Event::Stopped);
}

#[test]
fn test_random() {
    let mut r = Runtime::default();
    r.run_str("t", "`:");
    run(&mut r);
    let cell = r.global().cell();
    assert!(cell >= 0.0 && cell < 1.0);
}
