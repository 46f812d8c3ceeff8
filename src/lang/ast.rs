use super::Error;
use std::str::FromStr;

type Result<T> = std::result::Result<T, Error>;

/// Which memory context an instruction operates on.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Scope {
    Global,
    Local,
}

/// The optional `|n|` annotation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Repeat {
    Once,
    Times(i64),
    /// `||` repeats by the floor of the active cell.
    Cell,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Command {
    Increment,
    Decrement,
    Add,
    Subtract,
    Multiply,
    Divide,
    Random,
    MoveRight,
    MoveLeft,
    Floor,
    Ceil,
    SwitchTape,
    DoWhileStart,
    DoWhileEnd,
    WhileStart,
    WhileEnd,
    InputNumber,
    InputChar,
    OutputNumber,
    OutputChar,
    BreakEqual,
    BreakLess,
    BreakGreater,
    Swap,
}

impl Command {
    pub fn lexeme(self) -> &'static str {
        use Command::*;
        match self {
            Increment => "!",
            Decrement => "~",
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Random => "`",
            MoveRight => ">",
            MoveLeft => "<",
            Floor => "_",
            Ceil => "&",
            SwitchTape => "^",
            DoWhileStart => "[@",
            DoWhileEnd => "@]",
            WhileStart => "[",
            WhileEnd => "]",
            InputNumber => "$.",
            InputChar => "$,",
            OutputNumber => "\\.",
            OutputChar => "\\,",
            BreakEqual => "?=",
            BreakLess => "?<",
            BreakGreater => "?>",
            Swap => ";",
        }
    }

    /// The command a negative repeat count turns this one into.
    pub fn opposite(self) -> Option<Command> {
        use Command::*;
        match self {
            Increment => Some(Decrement),
            Decrement => Some(Increment),
            Add => Some(Subtract),
            Subtract => Some(Add),
            Multiply => Some(Divide),
            Divide => Some(Multiply),
            MoveRight => Some(MoveLeft),
            MoveLeft => Some(MoveRight),
            _ => None,
        }
    }

    pub fn accepts_repeat(self) -> bool {
        self.opposite().is_some()
    }

    pub fn accepts_scope(self) -> bool {
        self != Command::Swap
    }
}

impl FromStr for Command {
    type Err = Error;
    fn from_str(s: &str) -> Result<Command> {
        use Command::*;
        Ok(match s {
            "!" => Increment,
            "~" => Decrement,
            "+" => Add,
            "-" => Subtract,
            "*" => Multiply,
            "/" => Divide,
            "`" => Random,
            ">" => MoveRight,
            "<" => MoveLeft,
            "_" => Floor,
            "&" => Ceil,
            "^" => SwitchTape,
            "[@" => DoWhileStart,
            "@]" => DoWhileEnd,
            "[" => WhileStart,
            "]" => WhileEnd,
            "$." => InputNumber,
            "$," => InputChar,
            "\\." => OutputNumber,
            "\\," => OutputChar,
            "?=" => BreakEqual,
            "?<" => BreakLess,
            "?>" => BreakGreater,
            ";" => Swap,
            _ => return Err(error!(SyntaxError; "UNKNOWN COMMAND")),
        })
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lexeme())
    }
}

/// A decoded command lexeme: `'|-3|>` is a local, repeated `MoveRight`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Instruction {
    pub scope: Scope,
    pub repeat: Repeat,
    pub command: Command,
}

impl Instruction {
    pub fn new(scope: Scope, repeat: Repeat, command: Command) -> Instruction {
        Instruction {
            scope,
            repeat,
            command,
        }
    }

    pub fn is_local(&self) -> bool {
        self.scope == Scope::Local
    }
}

impl From<Command> for Instruction {
    fn from(command: Command) -> Self {
        Instruction::new(Scope::Global, Repeat::Once, command)
    }
}

impl FromStr for Instruction {
    type Err = Error;
    fn from_str(s: &str) -> Result<Instruction> {
        let (scope, s) = match s.strip_prefix('\'') {
            Some(rest) => (Scope::Local, rest),
            None => (Scope::Global, s),
        };
        let (repeat, s) = match s.strip_prefix('|') {
            Some(rest) => {
                let end = match rest.find('|') {
                    Some(end) => end,
                    None => return Err(error!(SyntaxError; "UNTERMINATED REPEAT COUNT")),
                };
                let repeat = match &rest[..end] {
                    "" => Repeat::Cell,
                    n => match n.parse::<i64>() {
                        Ok(n) => Repeat::Times(n),
                        Err(_) => return Err(error!(SyntaxError; "INVALID REPEAT COUNT")),
                    },
                };
                (repeat, &rest[end + 1..])
            }
            None => (Repeat::Once, s),
        };
        let command = Command::from_str(s)?;
        if repeat != Repeat::Once && !command.accepts_repeat() {
            return Err(error!(SyntaxError; "COMMAND CAN NOT BE REPEATED"));
        }
        if scope == Scope::Local && !command.accepts_scope() {
            return Err(error!(SyntaxError; "COMMAND CAN NOT BE LOCAL"));
        }
        Ok(Instruction::new(scope, repeat, command))
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.scope == Scope::Local {
            write!(f, "'")?;
        }
        match self.repeat {
            Repeat::Once => {}
            Repeat::Times(n) => write!(f, "|{}|", n)?,
            Repeat::Cell => write!(f, "||")?,
        }
        write!(f, "{}", self.command)
    }
}
