//! Parser for calculator expressions.
//!
//! Recursive descent over the token stream from the lexer, evaluating as
//! it goes - the grammar is small enough that no AST is needed.
//!
//! Precedence (lowest to highest):
//! 1. Additive: `+`, `-`
//! 2. Multiplicative: `*`, `/`
//! 3. Unary: `-`
//! 4. Primary: numeric literals
//!
//! Both binary levels are left-associative, so `2-3-4` is `(2-3)-4` and
//! `8/4/2` is `(8/4)/2`. Unary minus only arises when an expression is
//! seeded from a negative prior result.

use super::error::EvalError;
use super::lexer::{tokenize, Token};

/// Calculator expression parser.
///
/// Consumes a token stream and produces the raw (unrounded) value of the
/// expression under standard infix semantics.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a parser over a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse and compute a complete expression from source text.
    pub fn parse(source: &str) -> Result<f64, EvalError> {
        let tokens = tokenize(source)?;
        if tokens.is_empty() {
            return Err(EvalError::Empty);
        }

        let mut parser = Parser::new(tokens);
        let value = parser.parse_additive()?;

        // Everything must be consumed.
        if parser.peek().is_some() {
            return Err(EvalError::UnexpectedToken(parser.pos));
        }

        Ok(value)
    }

    /// Level 1: `+` and `-`, left-associative.
    fn parse_additive(&mut self) -> Result<f64, EvalError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(token) = self.peek() {
            match token {
                Token::Plus => {
                    self.advance();
                    left += self.parse_multiplicative()?;
                }
                Token::Minus => {
                    self.advance();
                    left -= self.parse_multiplicative()?;
                }
                _ => break,
            }
        }

        Ok(left)
    }

    /// Level 2: `*` and `/`, left-associative, binds tighter than additive.
    fn parse_multiplicative(&mut self) -> Result<f64, EvalError> {
        let mut left = self.parse_unary()?;

        while let Some(token) = self.peek() {
            match token {
                Token::Star => {
                    self.advance();
                    left *= self.parse_unary()?;
                }
                Token::Slash => {
                    self.advance();
                    left /= self.parse_unary()?;
                }
                _ => break,
            }
        }

        Ok(left)
    }

    /// Level 3: unary minus.
    fn parse_unary(&mut self) -> Result<f64, EvalError> {
        if let Some(Token::Minus) = self.peek() {
            self.advance();
            return Ok(-self.parse_unary()?);
        }
        self.parse_primary()
    }

    /// Level 4: numeric literals.
    fn parse_primary(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some(Token::Number(value)) => {
                let value = *value;
                self.advance();
                Ok(value)
            }
            Some(_) => Err(EvalError::UnexpectedToken(self.pos)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }
}
