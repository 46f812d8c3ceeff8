//! # The Golden
//!
//! Runs a `maumivu.au` file, a program given on the command line,
//! or an interactive session.
//!

mod term;

fn main() {
    term::main();
}
