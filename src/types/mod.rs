pub mod error;
pub mod token;

pub use error::{LexError, Result, ValidationError, ValidationErrorKind};
pub use token::{AnalysisResult, Summary, Token, TokenKind};
