use thiserror::Error;

/// Errors raised while turning a selector document into a [`Selector`](crate::Selector).
///
/// A failed build never yields a partial selector.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The input is not a well-formed JSON object.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    #[error("unknown mango operator '{0}'")]
    UnknownOperator(String),

    #[error("subfields not implemented")]
    SubfieldsNotImplemented,

    #[error("unsupported combination argument: expected a non-empty array of single-key objects")]
    UnsupportedCombinationArgument,

    #[error("unsupported condition: expected exactly one condition operator")]
    UnsupportedCondition,

    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("operator '{0}' cannot be used as a field name")]
    MisplacedOperator(String),
}

/// Errors raised while matching a document.
///
/// Selectors produced by the builder never trigger these; only hand-assembled
/// trees with an operator in the wrong node kind do.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("unknown mango operator '{0}'")]
    UnknownOperator(String),
}
