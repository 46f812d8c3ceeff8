mod common;
use common::*;
use golden::mach::Runtime;

#[test]
fn test_input_sum() {
    let mut r = Runtime::default();
    r.run_str("maumivu.au", "$. ^ $. + \\.:");
    assert_eq!(exec(&mut r), "? ");
    assert!(r.enter("1.25"));
    assert_eq!(exec(&mut r), "? ");
    assert!(r.enter("2\n"));
    assert_eq!(exec(&mut r), "3.25");
}

#[test]
fn test_input_char_echo() {
    let mut r = Runtime::default();
    r.run_str("maumivu.au", "$, \\, \\.:");
    assert_eq!(exec(&mut r), "? ");
    r.enter("é");
    assert_eq!(exec(&mut r), "é233.0");
}

#[test]
fn test_enter_without_pending_input() {
    let mut r = Runtime::default();
    assert!(!r.enter("1"));
    r.run_str("maumivu.au", "\\.:");
    assert!(!r.enter("1"));
    assert_eq!(exec(&mut r), "0.0");
}

#[test]
fn test_invalid_number() {
    let mut r = Runtime::default();
    r.run_str("maumivu.au", "! $.:");
    exec(&mut r);
    r.enter("one");
    assert_eq!(exec(&mut r), "INVALID NUMBER AT 1:3 IN maumivu.au\n");
}
