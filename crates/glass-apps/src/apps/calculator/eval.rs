//! Arithmetic expression evaluator
//!
//! Recursive descent over `+ - * /`, parentheses, decimal literals and unary
//! signs, with the usual precedence and left associativity. Literals may carry
//! an exponent (`1e+22`), and `Infinity` / `NaN` are accepted so any displayed
//! result can be extended. Anything else is rejected; this is not a
//! general-purpose evaluator.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Reasons an expression can fail to evaluate
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// Nothing but whitespace.
    #[error("empty expression")]
    Empty,

    /// A character outside the arithmetic alphabet.
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    /// A digit run that is not a valid decimal literal (e.g. `1.2.3`).
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// `++` or `--` written without a space; not arithmetic.
    #[error("increment/decrement operator at {0}")]
    IncrementOperator(usize),

    /// Input ended where an operand was expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A token in a position the grammar does not allow.
    #[error("unexpected token at {0}")]
    UnexpectedToken(usize),

    /// An opening parenthesis without a matching close.
    #[error("unclosed parenthesis at {0}")]
    Unclosed(usize),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Evaluate an arithmetic expression
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser { tokens: &tokens, cursor: 0 };
    let value = parser.expr()?;
    match parser.peek() {
        None => Ok(value),
        Some((pos, _)) => Err(EvalError::UnexpectedToken(pos)),
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, EvalError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            '+' | '-' => {
                if let Some(&(_, next)) = chars.peek() {
                    if next == ch {
                        return Err(EvalError::IncrementOperator(pos));
                    }
                }
                if ch == '+' { Token::Plus } else { Token::Minus }
            }
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_ascii_digit() || c == '.' => {
                let end = pos + number_len(&input[pos..]);
                while chars.next_if(|&(i, _)| i < end).is_some() {}
                let literal = &input[pos..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(literal.to_string()))?;
                Token::Number(value)
            }
            c if c.is_ascii_alphabetic() => {
                let rest = &input[pos..];
                let len = rest.find(|ch: char| !ch.is_ascii_alphabetic()).unwrap_or(rest.len());
                let value = match &rest[..len] {
                    "Infinity" => f64::INFINITY,
                    "NaN" => f64::NAN,
                    _ => return Err(EvalError::UnexpectedChar { ch: c, pos }),
                };
                while chars.next_if(|&(i, _)| i < pos + len).is_some() {}
                Token::Number(value)
            }
            other => return Err(EvalError::UnexpectedChar { ch: other, pos }),
        };
        tokens.push((pos, token));
    }

    Ok(tokens)
}

/// Length of the numeric literal at the start of `s`
///
/// A run of digits and dots, then an optional exponent. The exponent is only
/// taken when at least one digit follows `e` and its sign, so `2e` stops
/// before the `e`.
fn number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mantissa = bytes
        .iter()
        .position(|b| !(b.is_ascii_digit() || *b == b'.'))
        .unwrap_or(bytes.len());

    if !matches!(bytes.get(mantissa), Some(b'e' | b'E')) {
        return mantissa;
    }
    let mut cursor = mantissa + 1;
    if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
        cursor += 1;
    }
    let digits = bytes[cursor..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        mantissa
    } else {
        cursor + digits
    }
}

struct Parser<'a> {
    tokens: &'a [(usize, Token)],
    cursor: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<(usize, Token)> {
        self.tokens.get(self.cursor).copied()
    }

    fn advance(&mut self) -> Option<(usize, Token)> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some((_, op @ (Token::Plus | Token::Minus))) = self.peek() {
            self.advance();
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    // term := unary (('*' | '/') unary)*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some((_, op @ (Token::Star | Token::Slash))) = self.peek() {
            self.advance();
            let rhs = self.unary()?;
            value = if op == Token::Star { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    // unary := ('+' | '-') unary | primary
    fn unary(&mut self) -> Result<f64, EvalError> {
        match self.peek() {
            Some((_, Token::Plus)) => {
                self.advance();
                self.unary()
            }
            Some((_, Token::Minus)) => {
                self.advance();
                Ok(-self.unary()?)
            }
            _ => self.primary(),
        }
    }

    // primary := number | '(' expr ')'
    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.advance() {
            Some((_, Token::Number(value))) => Ok(value),
            Some((open, Token::LParen)) => {
                let value = self.expr()?;
                match self.advance() {
                    Some((_, Token::RParen)) => Ok(value),
                    Some((pos, _)) => Err(EvalError::UnexpectedToken(pos)),
                    None => Err(EvalError::Unclosed(open)),
                }
            }
            Some((pos, _)) => Err(EvalError::UnexpectedToken(pos)),
            None => Err(EvalError::UnexpectedEnd),
        }
    }
}
