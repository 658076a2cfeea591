//! Recursive-descent parser over lexed literal tokens
//!
//! Productions:
//!
//! ```text
//! value := INTEGER | FLOAT | STRING | list
//! list  := '[' ']' | '[' value (',' value)* ']'
//! ```

use super::lexer::{lex, Span, Token};
use super::LiteralError;
use crate::value::Value;

/// Parse a complete literal; trailing input is an error
pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let tokens = lex(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.value()?;
    parser.finish()?;
    Ok(value)
}

struct Parser {
    tokens: Vec<(Token, Span)>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn next(&mut self) -> Option<(Token, Span)> {
        let item = self.tokens.get(self.pos).cloned();
        if item.is_some() {
            self.pos += 1;
        }
        item
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        match self.next() {
            Some((Token::Integer(n), _)) => Ok(Value::Integer(n)),
            Some((Token::Float(n), _)) => Ok(Value::Float(n)),
            Some((Token::String(s), _)) => Ok(Value::String(s)),
            Some((Token::BracketOpen, _)) => self.list(),
            Some((_, span)) => Err(LiteralError::UnexpectedToken { span }),
            None => Err(LiteralError::UnexpectedEnd),
        }
    }

    /// Parse list elements after the opening bracket has been consumed
    fn list(&mut self) -> Result<Value, LiteralError> {
        let mut items = Vec::new();
        if matches!(self.peek(), Some(Token::BracketClose)) {
            self.next();
            return Ok(Value::List(items));
        }
        loop {
            items.push(self.value()?);
            match self.next() {
                Some((Token::Comma, _)) => continue,
                Some((Token::BracketClose, _)) => return Ok(Value::List(items)),
                Some((_, span)) => return Err(LiteralError::UnexpectedToken { span }),
                None => return Err(LiteralError::UnexpectedEnd),
            }
        }
    }

    fn finish(&mut self) -> Result<(), LiteralError> {
        match self.next() {
            None => Ok(()),
            Some((_, span)) => Err(LiteralError::TrailingInput { span }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_literal("42"), Ok(Value::Integer(42)));
        assert_eq!(parse_literal("-3"), Ok(Value::Integer(-3)));
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(parse_literal("2.5"), Ok(Value::Float(2.5)));
        assert_eq!(parse_literal(".5"), Ok(Value::Float(0.5)));
    }

    #[test]
    fn test_parse_string() {
        assert_eq!(
            parse_literal("'hello'"),
            Ok(Value::String("hello".to_string()))
        );
        assert_eq!(
            parse_literal("\"hello\""),
            Ok(Value::String("hello".to_string()))
        );
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(
            parse_literal("[1, 'two', 3.0]"),
            Ok(Value::List(vec![
                Value::Integer(1),
                Value::String("two".to_string()),
                Value::Float(3.0),
            ]))
        );
    }

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_literal("[]"), Ok(Value::List(vec![])));
    }

    #[test]
    fn test_parse_nested_list() {
        assert_eq!(
            parse_literal("[[1]]"),
            Ok(Value::List(vec![Value::List(vec![Value::Integer(1)])]))
        );
    }

    #[test]
    fn test_empty_input_is_error() {
        assert_eq!(parse_literal(""), Err(LiteralError::UnexpectedEnd));
    }

    #[test]
    fn test_trailing_input_is_error() {
        assert!(matches!(
            parse_literal("1 2"),
            Err(LiteralError::TrailingInput { .. })
        ));
        assert!(matches!(
            parse_literal("'a' 'b'"),
            Err(LiteralError::TrailingInput { .. })
        ));
    }

    #[test]
    fn test_unterminated_list_is_error() {
        assert_eq!(parse_literal("[1, 2"), Err(LiteralError::UnexpectedEnd));
    }

    #[test]
    fn test_trailing_comma_is_error() {
        assert!(matches!(
            parse_literal("[1,]"),
            Err(LiteralError::UnexpectedToken { .. })
        ));
    }

    #[test]
    fn test_bare_word_is_error() {
        assert!(matches!(
            parse_literal("asd"),
            Err(LiteralError::UnexpectedChar { .. })
        ));
    }
}
