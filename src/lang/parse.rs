use super::{ast::*, lex::Lexer, token::*, Error};

type Result<T> = std::result::Result<T, Error>;

/// Replays the token stream and requires it to end with a line terminator.
pub fn validate(mut lexer: Lexer) -> Result<()> {
    let mut last = None;
    while let Some(token) = lexer.next()? {
        last = Some(token);
    }
    match last {
        Some(token) if token.is_line_terminator() => Ok(()),
        _ => Err(error!(LineTerminatorExpected, lexer.position()).in_source(lexer.source())),
    }
}

/// Filters comments, whitespace and line terminators out of the token
/// stream and decodes what is left.
pub fn parse(mut lexer: Lexer) -> Result<(Vec<Instruction>, Vec<Position>)> {
    let mut instructions = vec![];
    let mut positions = vec![];
    while let Some(token) = lexer.next()? {
        if token.kind.is_ignored() {
            continue;
        }
        match token.lexeme.parse::<Instruction>() {
            Ok(instruction) => instructions.push(instruction),
            Err(e) => return Err(e.at(token.position).in_source(lexer.source())),
        }
        positions.push(token.position);
    }
    Ok((instructions, positions))
}

#[cfg(test)]
#[path = "tests/parse_test.rs"]
mod tests;
