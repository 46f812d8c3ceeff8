/// Line and column of the first character of a token. Both start at 1.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new(1, 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TokenKind {
    Command,
    LineTerminator,
    Comment,
    Whitespace,
}

impl TokenKind {
    /// Tokens of this kind never reach the instruction stream.
    pub fn is_ignored(self) -> bool {
        match self {
            TokenKind::Command => false,
            TokenKind::LineTerminator | TokenKind::Comment | TokenKind::Whitespace => true,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: &str, position: Position) -> Token {
        Token {
            kind,
            lexeme: lexeme.to_string(),
            position,
        }
    }

    pub fn is_line_terminator(&self) -> bool {
        self.kind == TokenKind::LineTerminator
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
