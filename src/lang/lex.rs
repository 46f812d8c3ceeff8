use super::{token::*, Error};
use regex::Regex;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Tokenize a whole program. Mostly useful for tests and debug listings;
/// the compiler drives a `Lexer` directly.
pub fn lex(source: &str, text: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::new(source, text);
    let mut tokens = vec![];
    while let Some(token) = lexer.next()? {
        tokens.push(token);
    }
    Ok(tokens)
}

const LOCAL: &str = "'?";
const REPEAT: &str = r"(?:\|(?:-?[0-9]+)?\|)?";

#[derive(Debug)]
struct Rule {
    pattern: Regex,
    kind: TokenKind,
}

impl Rule {
    fn new(pattern: &str, kind: TokenKind) -> Rule {
        Rule {
            pattern: Regex::new(&format!("^(?:{})", pattern)).expect("invalid grammar rule"),
            kind,
        }
    }

    fn command(local: bool, repeat: bool, pattern: &str) -> Rule {
        let mut s = String::new();
        if local {
            s.push_str(LOCAL);
        }
        if repeat {
            s.push_str(REPEAT);
        }
        s.push_str(pattern);
        Rule::new(&s, TokenKind::Command)
    }
}

thread_local!(
    static GRAMMAR: Rc<[Rule]> = grammar();
);

// Order matters: the first rule that matches wins.
fn grammar() -> Rc<[Rule]> {
    vec![
        Rule::command(true, true, "!"),
        Rule::command(true, true, "~"),
        Rule::command(true, true, r"\+"),
        Rule::command(true, true, "-"),
        Rule::command(true, true, r"\*"),
        Rule::command(true, true, "/"),
        Rule::command(true, false, "`"),
        Rule::command(true, true, ">"),
        Rule::command(true, true, "<"),
        Rule::command(true, false, "_"),
        Rule::command(true, false, "&"),
        Rule::command(true, false, r"\^"),
        Rule::command(true, false, r"\[@"),
        Rule::command(true, false, r"@\]"),
        Rule::command(true, false, r"\["),
        Rule::command(true, false, r"\]"),
        Rule::command(true, false, r"\$[.,]"),
        Rule::command(true, false, r"\\[.,]"),
        Rule::command(true, false, r"\?="),
        Rule::command(true, false, r"\?<"),
        Rule::command(true, false, r"\?>"),
        Rule::command(false, false, ";"),
        Rule::new(r":\r?\n?", TokenKind::LineTerminator),
        Rule::new(r#""[^"]*""#, TokenKind::Comment),
        Rule::new(r"[ \t\x0B\x0C]+", TokenKind::Whitespace),
    ]
    .into()
}

/// ## Ordered first-match tokenizer
///
/// Cloning a `Lexer` is cheap and yields an independent cursor over the
/// same text; the validator and the parser each replay their own clone.

#[derive(Debug, Clone)]
pub struct Lexer {
    text: Rc<str>,
    source: Rc<str>,
    rules: Rc<[Rule]>,
    offset: usize,
    position: Position,
    comment: bool,
}

impl Lexer {
    pub fn new(source: &str, text: &str) -> Lexer {
        Lexer {
            text: text.into(),
            source: source.into(),
            rules: GRAMMAR.with(|g| g.clone()),
            offset: 0,
            position: Position::default(),
            comment: false,
        }
    }

    pub fn source(&self) -> &Rc<str> {
        &self.source
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn next(&mut self) -> Result<Option<Token>> {
        let text = self.text.clone();
        loop {
            let rest = &text[self.offset..];
            if rest.is_empty() {
                return Ok(None);
            }
            if self.comment {
                let len = match rest.find('"') {
                    Some(index) => {
                        self.comment = false;
                        index + 1
                    }
                    None => rest.len(),
                };
                self.advance(&rest[..len]);
                continue;
            }
            let found = self
                .rules
                .iter()
                .find_map(|rule| rule.pattern.find(rest).map(|m| (rule.kind, m.end())));
            if let Some((kind, len)) = found {
                let token = Token::new(kind, &rest[..len], self.position);
                self.advance(&rest[..len]);
                return Ok(Some(token));
            }
            // A quote that does not close on this scan flips the comment state.
            if rest.starts_with('"') {
                self.comment = !self.comment;
                self.advance(&rest[..1]);
                continue;
            }
            return Err(error!(SyntaxError, self.position; "NO COMMAND MATCHES").in_source(&self.source));
        }
    }

    fn advance(&mut self, consumed: &str) {
        match consumed.rfind('\n') {
            Some(last) => {
                self.position.line += consumed.matches('\n').count();
                self.position.column = consumed[last + 1..].chars().count() + 1;
            }
            None => self.position.column += consumed.chars().count(),
        }
        self.offset += consumed.len();
    }
}
