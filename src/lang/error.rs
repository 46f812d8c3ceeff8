use super::Position;
use std::rc::Rc;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    position: Option<Position>,
    source: Option<Rc<str>>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $pos:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at($pos)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $pos:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at($pos)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            position: None,
            source: None,
            message: "",
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn at(&self, position: Position) -> Error {
        debug_assert!(self.position.is_none());
        Error {
            code: self.code,
            position: Some(position),
            source: self.source.clone(),
            message: self.message,
        }
    }

    pub fn in_source(&self, source: &Rc<str>) -> Error {
        Error {
            code: self.code,
            position: self.position,
            source: Some(source.clone()),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            position: self.position,
            source: self.source.clone(),
            message,
        }
    }
}

pub enum ErrorCode {
    Break = 1,
    SyntaxError = 2,
    LineTerminatorExpected = 3,
    UnmatchedBracket = 4,
    InvalidNumber = 5,
    InvalidCharacter = 6,
    InvalidInput = 7,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            1 => "BREAK",
            2 => "SYNTAX ERROR",
            3 => "':' EXPECTED",
            4 => "UNMATCHED BRACKET",
            5 => "INVALID NUMBER",
            6 => "INVALID CHARACTER",
            7 => "INVALID INPUT",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(position) = self.position {
            suffix.push_str(&format!(" AT {}", position));
        }
        if let Some(source) = &self.source {
            suffix.push_str(&format!(" IN {}", source));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, suffix)
        } else {
            write!(f, "{}{}", code_str, suffix)
        }
    }
}
