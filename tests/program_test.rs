mod common;
use common::*;
use golden::lang::ErrorCode;
use golden::mach::{LoopKind, Program, Runtime};

const POWERS: &str = "\"powers of two\":
! ^ |2|! ^ :
'|4|! '[ \\. * '~ ']:
";

#[test]
fn test_powers_of_two() {
    let mut r = Runtime::default();
    r.run_str("maumivu.au", POWERS);
    assert_eq!(exec(&mut r), "1.02.04.08.0");
    assert_eq!(r.global().tape(0).cells(), &[16.0]);
    assert_eq!(r.global().tape(1).cells(), &[2.0]);
}

#[test]
fn test_hello() {
    let mut r = Runtime::default();
    r.run_str("maumivu.au", "|72|! \\, ! \\, ^ |10|! \\,:");
    assert_eq!(exec(&mut r), "HI\n");
}

#[test]
fn test_compiled_program() {
    let p = Program::compile("maumivu.au", POWERS).unwrap();
    assert_eq!(p.to_string(), "! ^ |2|! ^ '|4|! '[ \\. * '~ ']");
    assert_eq!(p.link().jumps(LoopKind::WhileLocal).get(&5), Some(&9));
    assert!(p.link().jumps(LoopKind::While).is_empty());
    assert!(p.link().unmatched().is_empty());
}

#[test]
fn test_unmatched_is_listed() {
    let p = Program::compile("maumivu.au", "[ [ ]:").unwrap();
    assert_eq!(p.link().unmatched(), [0]);
}

#[test]
fn test_dangling_quote_comments_out_the_rest() {
    let e = Program::compile("maumivu.au", "! \" ~:").unwrap_err();
    assert!(e.is(ErrorCode::LineTerminatorExpected));
    let p = Program::compile("maumivu.au", "! :\" ~:").unwrap();
    assert_eq!(p.to_string(), "!");
}

#[test]
fn test_reserved_commands_do_nothing() {
    let mut r = Runtime::default();
    r.run_str("maumivu.au", "|3|! _ & ?= ?< ?> \\.:");
    assert_eq!(exec(&mut r), "3.0");
}

#[test]
fn test_cycles_exceeded() {
    let mut r = Runtime::default();
    r.run_str("maumivu.au", "! [ ]:");
    assert_eq!(exec_n(&mut r, 10), "\n10 Execution cycles exceeded.\n");
}
