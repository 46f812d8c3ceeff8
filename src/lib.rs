//! # The Golden
//!
//! An interpreter for The Golden, a tape language where every program
//! lives in a file named `maumivu.au`.
//!
//! A program is compiled into a [`mach::Program`] and run by a
//! [`mach::Runtime`], which reports everything it does as
//! [`mach::Event`]s.
//!
//! ```
//! use golden::mach::{Event, Output, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.run_str("maumivu.au", "|3|! \\.:");
//! assert_eq!(runtime.execute(100), Event::Print(Output::Number(3.0)));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

pub mod lang;
pub mod mach;
