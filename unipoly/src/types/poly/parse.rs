use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::str::FromStr;
use log::debug;
use num_traits::Float;

use super::poly::PolyBase;

#[derive(Debug, derive_more::Display)]
pub enum ParseError {
    #[display("invalid term count: '{_0}'")]
    InvalidCount(String),

    #[display("negative term count: {_0}")]
    NegativeCount(i32),

    #[display("invalid coefficient: '{_0}'")]
    InvalidCoeff(String),

    #[display("invalid exponent: '{_0}'")]
    InvalidExp(String),

    #[display("unexpected end of input")]
    Eof,

    #[display("io error: {_0}")]
    Io(std::io::Error),
}

impl std::error::Error for ParseError {}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// Splits a `BufRead` into whitespace-separated tokens, reading further
// lines on demand so that tokens may span line boundaries.
pub struct TokenReader<I>
where I: BufRead {
    input: I,
    tokens: VecDeque<String>
}

impl<I> TokenReader<I>
where I: BufRead {
    pub fn new(input: I) -> Self {
        Self { input, tokens: VecDeque::new() }
    }

    pub fn next_token(&mut self) -> Result<String, ParseError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ParseError::Eof)
            }
            self.tokens.extend(line.split_whitespace().map(str::to_owned));
        }

        // the loop leaves at least one token buffered
        Ok(self.tokens.pop_front().unwrap())
    }

    // Discards buffered tokens, so the next read starts on fresh input.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl<const X: char, R> PolyBase<X, R>
where R: Float + FromStr {
    // Reads a term count followed by that many (coefficient, exponent)
    // pairs, prompting on `out` before each read. Fails fast on the
    // first malformed token, leaving the remaining input unconsumed.
    pub fn read_from<I, W>(input: &mut TokenReader<I>, out: &mut W) -> Result<Self, ParseError>
    where I: BufRead, W: Write {
        write!(out, "Number of terms: ")?;
        out.flush()?;

        let tok = input.next_token()?;
        let n: i32 = tok.parse().map_err(|_| ParseError::InvalidCount(tok))?;
        if n < 0 {
            return Err(ParseError::NegativeCount(n))
        }

        let mut poly = Self::new();
        for _ in 0..n {
            write!(out, "Coefficient and exponent: ")?;
            out.flush()?;

            let tok = input.next_token()?;
            let coeff = tok.parse::<R>().map_err(|_| ParseError::InvalidCoeff(tok))?;

            let tok = input.next_token()?;
            let exp = tok.parse::<i32>().map_err(|_| ParseError::InvalidExp(tok))?;

            poly.append_term(coeff, exp);
        }

        debug!("read {} terms, {} after normalization", n, poly.nterms());

        Ok(poly)
    }
}
