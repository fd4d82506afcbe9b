//! Parse puzzle encodings from text
//!
//! The text form is a bracketed list of cage descriptors, each a bracketed
//! list of integers: `[[3], [11, 21, 3, 0], ...]`.

use std::fmt;

use crate::error::{ParseError, ParsePuzzleError, ParsePuzzleErrorType, UNEXPECTED_END};
use crate::puzzle::parse::token_iterator::TokenIterator;
use crate::puzzle::Puzzle;

mod token_iterator;

/// parse a `Puzzle` from a string
pub(crate) fn parse_puzzle(s: &str) -> Result<Puzzle, ParsePuzzleError> {
    let mut tokens = TokenIterator::new(s);
    let first = next_token(&mut tokens)?;
    let descriptors = read_descriptor_list(&mut tokens, first)?;
    if let Some((i, token)) = tokens.next_skip_space()? {
        return Err(ParseError::new(ParsePuzzleErrorType::UnexpectedToken, token, i).into());
    }
    let puzzle = Puzzle::from_descriptors(&descriptors)?;
    Ok(puzzle)
}

#[derive(Debug, PartialEq)]
pub enum Token {
    Open,
    Close,
    Comma,
    Number(i32),
    Space,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => write!(f, "["),
            Token::Close => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Number(n) => write!(f, "{}", n),
            Token::Space => write!(f, " "),
        }
    }
}

type Spanned = (usize, Token);

fn next_token(tokens: &mut TokenIterator<'_>) -> Result<Spanned, ParseError> {
    tokens.next_skip_space()?.ok_or(UNEXPECTED_END)
}

fn unexpected((i, token): Spanned) -> ParseError {
    ParseError::new(ParsePuzzleErrorType::UnexpectedToken, token, i)
}

fn read_descriptor_list(
    tokens: &mut TokenIterator<'_>,
    first: Spanned,
) -> Result<Vec<Vec<i32>>, ParseError> {
    read_list(tokens, first, |tokens, item| read_list(tokens, item, read_number))
}

fn read_number(_: &mut TokenIterator<'_>, item: Spanned) -> Result<i32, ParseError> {
    match item {
        (_, Token::Number(n)) => Ok(n),
        item => Err(unexpected(item)),
    }
}

/// Reads `[item, item, ...]` where `first` is the token expected to open the list
fn read_list<T>(
    tokens: &mut TokenIterator<'_>,
    first: Spanned,
    mut read_item: impl FnMut(&mut TokenIterator<'_>, Spanned) -> Result<T, ParseError>,
) -> Result<Vec<T>, ParseError> {
    match first {
        (_, Token::Open) => {}
        first => return Err(unexpected(first)),
    }
    let mut items = Vec::new();
    let token = next_token(tokens)?;
    if token.1 == Token::Close {
        return Ok(items);
    }
    items.push(read_item(tokens, token)?);
    loop {
        match next_token(tokens)? {
            (_, Token::Close) => return Ok(items),
            (_, Token::Comma) => {
                let token = next_token(tokens)?;
                items.push(read_item(tokens, token)?);
            }
            token => return Err(unexpected(token)),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::{ParsePuzzleError, ParsePuzzleErrorType};
    use crate::puzzle::parse::parse_puzzle;
    use crate::puzzle::Puzzle;

    fn parse_error_type(s: &str) -> ParsePuzzleErrorType {
        match parse_puzzle(s) {
            Err(ParsePuzzleError::Parse(e)) => e.error_type(),
            other => panic!("expected parse error, found {:?}", other),
        }
    }

    #[test]
    fn empty() {
        assert_eq!(ParsePuzzleErrorType::UnexpectedEnd, parse_error_type(""));
    }

    #[test]
    fn test() {
        let s = "\
        [[3],\n\
         [11, 21, 3, 0],\n\
         [12,22,2,1],\n\
         [13, 23, 33, 6, 3], [31, 32, 1, 1]]\n";
        let expected = Puzzle::from_descriptors(&[
            vec![3],
            vec![11, 21, 3, 0],
            vec![12, 22, 2, 1],
            vec![13, 23, 33, 6, 3],
            vec![31, 32, 1, 1],
        ])
        .unwrap();
        assert_eq!(expected, parse_puzzle(s).unwrap());
    }

    #[test]
    fn display_round_trip() {
        let puzzle = parse_puzzle("[[2],[11,2],[12,22,21,4,0]]").unwrap();
        assert_eq!(puzzle, parse_puzzle(&puzzle.to_string()).unwrap());
    }

    #[test]
    fn trailing_comma() {
        assert_eq!(
            ParsePuzzleErrorType::UnexpectedToken,
            parse_error_type("[[3],[11,3],]")
        );
    }

    #[test]
    fn trailing_token() {
        assert_eq!(
            ParsePuzzleErrorType::UnexpectedToken,
            parse_error_type("[[3]] [")
        );
    }

    #[test]
    fn unclosed() {
        assert_eq!(ParsePuzzleErrorType::UnexpectedEnd, parse_error_type("[[3],[11,3]"));
    }

    #[test]
    fn invalid_token() {
        let error = match parse_puzzle("[[3],[11;3]]") {
            Err(ParsePuzzleError::Parse(e)) => e,
            other => panic!("expected parse error, found {:?}", other),
        };
        assert_eq!(ParsePuzzleErrorType::InvalidToken, error.error_type());
        assert_eq!(Some(8), error.index());
        assert_eq!("Invalid token: \";\" at 8", error.to_string());
    }

    #[test]
    fn invalid_number() {
        assert_eq!(
            ParsePuzzleErrorType::InvalidNumber,
            parse_error_type("[[3],[11,99999999999]]")
        );
        assert_eq!(ParsePuzzleErrorType::InvalidNumber, parse_error_type("[[-]]"));
    }

    #[test]
    fn invalid_puzzle() {
        assert!(matches!(
            parse_puzzle("[[3],[44,1]]"),
            Err(ParsePuzzleError::InvalidPuzzle(_))
        ));
    }
}
