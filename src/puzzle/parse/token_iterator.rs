use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ParseError, ParsePuzzleErrorType};
use crate::puzzle::parse::Token;

pub struct TokenIterator<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> TokenIterator<'a> {
    pub fn new(s: &str) -> TokenIterator<'_> {
        TokenIterator {
            chars: s.char_indices().peekable(),
        }
    }

    pub fn next_skip_space(&mut self) -> Result<Option<(usize, Token)>, ParseError> {
        loop {
            match self.next() {
                Ok(Some((_, Token::Space))) => {}
                next => return next,
            }
        }
    }

    pub fn next(&mut self) -> Result<Option<(usize, Token)>, ParseError> {
        let (idx, c) = match self.chars.peek() {
            Some(&v) => v,
            None => return Ok(None),
        };
        let token = if c.is_whitespace() {
            while self.chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
            Token::Space
        } else if c.is_ascii_digit() || c == '-' {
            self.chars.next();
            let mut s = c.to_string();
            while let Some((_, c)) = self.chars.next_if(|&(_, c)| c.is_ascii_digit()) {
                s.push(c);
            }
            match s.parse() {
                Ok(n) => Token::Number(n),
                Err(_) => {
                    return Err(ParseError::new(
                        ParsePuzzleErrorType::InvalidNumber,
                        s,
                        idx,
                    ))
                }
            }
        } else {
            self.chars.next();
            match c {
                '[' => Token::Open,
                ']' => Token::Close,
                ',' => Token::Comma,
                _ => return Err(ParseError::new(ParsePuzzleErrorType::InvalidToken, c, idx)),
            }
        };
        Ok(Some((idx, token)))
    }
}
