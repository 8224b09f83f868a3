use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquityError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(
        "No disjoint opponent assignment exists for {opponents} opponent(s) with {remaining} card(s) left in the deck"
    )]
    ArithmeticDegenerate { opponents: usize, remaining: usize },
}

impl EquityError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EquityError::InvalidInput(msg.into())
    }
}
