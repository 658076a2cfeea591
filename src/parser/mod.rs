//! Closed literal grammar for mapping values
//!
//! The grammar covers exactly the shapes a mapping value can take:
//! integers, floats, quoted strings, and bracketed lists of those. Anything
//! else is not a literal; callers fall back to treating the input as a
//! plain string.

mod grammar;
pub mod lexer;

pub use grammar::parse_literal;
pub use lexer::Span;

use thiserror::Error;

/// Ways a string can fail to be a literal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("unexpected character at {span:?}")]
    UnexpectedChar { span: Span },
    #[error("unexpected token at {span:?}")]
    UnexpectedToken { span: Span },
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("trailing input after literal at {span:?}")]
    TrailingInput { span: Span },
}
