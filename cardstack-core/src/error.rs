use thiserror::Error;

/// Errors produced while assembling a card stack.
///
/// Once a stack exists every operation on it is total; the only failure is
/// building one that has nothing to lay out.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CardStackError {
    #[error("card stack requires at least one card target")]
    Empty,
}

pub type Result<T> = std::result::Result<T, CardStackError>;
