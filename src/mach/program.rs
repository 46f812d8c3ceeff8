use super::{Address, Link};
use crate::lang::ast::Instruction;
use crate::lang::{parse, validate, Error, Lexer, Position};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Compiled program
///
/// Decoded instructions, their source positions and the loop jump table.
/// Immutable once compiled.

#[derive(Debug, Clone)]
pub struct Program {
    source: Rc<str>,
    instructions: Vec<Instruction>,
    positions: Vec<Position>,
    link: Link,
}

impl Default for Program {
    fn default() -> Self {
        Program {
            source: "".into(),
            instructions: vec![],
            positions: vec![],
            link: Link::default(),
        }
    }
}

impl Program {
    pub fn compile(source: &str, text: &str) -> Result<Program> {
        let lexer = Lexer::new(source, text);
        validate(lexer.clone())?;
        let (instructions, positions) = parse(lexer.clone())?;
        let link = Link::new(&instructions);
        Ok(Program {
            source: lexer.source().clone(),
            instructions,
            positions,
            link,
        })
    }

    pub fn source(&self) -> &Rc<str> {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn instruction(&self, addr: Address) -> Option<&Instruction> {
        self.instructions.get(addr)
    }

    pub fn position(&self, addr: Address) -> Position {
        self.positions.get(addr).copied().unwrap_or_default()
    }

    pub fn link(&self) -> &Link {
        &self.link
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s: Vec<String> = self.instructions.iter().map(|i| i.to_string()).collect();
        write!(f, "{}", s.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_compile() {
        let p = Program::compile("test", "\"count\" |3|! [ ~ ]:\n").unwrap();
        assert_eq!(p.to_string(), "|3|! [ ~ ]");
        assert_eq!(p.len(), 4);
        assert_eq!(p.position(1), Position::new(1, 14));
        assert_eq!(p.link().target(1), Some(3));
        assert_eq!(&**p.source(), "test");
    }

    #[test]
    fn test_compile_errors() {
        let e = Program::compile("test", "!").unwrap_err();
        assert!(e.is(ErrorCode::LineTerminatorExpected));
        let e = Program::compile("test", "!#:").unwrap_err();
        assert!(e.is(ErrorCode::SyntaxError));
    }

    #[test]
    fn test_comment_only_lines() {
        let p = Program::compile("test", "\"nothing to do\":\n").unwrap();
        assert!(p.is_empty());
        assert!(p.link().is_empty());
    }
}
