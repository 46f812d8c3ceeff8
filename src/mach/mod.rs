/*!
## Rust Machine Module

This Rust module links loop delimiters and runs The Golden
on a pair of two-tape memory contexts.

*/

pub type Address = usize;

mod link;
mod program;
mod runtime;
mod tape;

pub use link::bracket;
pub use link::Delimiter;
pub use link::Link;
pub use link::LoopKind;
pub use program::Program;
pub use runtime::Event;
pub use runtime::InputKind;
pub use runtime::Output;
pub use runtime::Runtime;
pub use runtime::Warning;
pub use tape::Context;
pub use tape::Tape;

#[cfg(test)]
mod tests;
