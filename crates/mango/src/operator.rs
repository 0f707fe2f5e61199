//! Operator vocabulary.
//!
//! Condition operators: <http://docs.couchdb.org/en/2.0.0/api/database/find.html#condition-operators>
//! Combination operators: <http://docs.couchdb.org/en/2.0.0/api/database/find.html#combination-operators>

use std::fmt;

/// Every key starting with this character is an operator.
pub const OPERATOR_PREFIX: char = '$';

/// A selector operator tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Matches everything; the empty selector.
    None,
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
}

impl Operator {
    pub const CONDITION: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Lte,
        Operator::Gt,
        Operator::Gte,
    ];

    pub const COMBINATION: [Operator; 2] = [Operator::And, Operator::Or];

    /// Wire token for the operator. [`Operator::None`] has no token and
    /// returns an empty string.
    pub fn name(self) -> &'static str {
        match self {
            Operator::None => "",
            Operator::Eq => "$eq",
            Operator::Ne => "$ne",
            Operator::Lt => "$lt",
            Operator::Lte => "$lte",
            Operator::Gt => "$gt",
            Operator::Gte => "$gte",
            Operator::And => "$and",
            Operator::Or => "$or",
        }
    }

    /// Looks up a supported operator by its case-sensitive wire token.
    pub fn from_name(name: &str) -> Option<Operator> {
        Self::CONDITION
            .iter()
            .chain(Self::COMBINATION.iter())
            .copied()
            .find(|op| op.name() == name)
    }

    pub fn is_condition(self) -> bool {
        Self::CONDITION.contains(&self)
    }

    pub fn is_combination(self) -> bool {
        Self::COMBINATION.contains(&self)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::None => f.write_str("<none>"),
            op => f.write_str(op.name()),
        }
    }
}

/// Returns `true` if `key` is written as an operator, supported or not.
pub fn is_operator(key: &str) -> bool {
    key.starts_with(OPERATOR_PREFIX)
}

/// Returns `true` if `key` is a supported operator token.
pub fn is_supported_operator(key: &str) -> bool {
    Operator::from_name(key).is_some()
}

/// Returns the condition operator named by `key`, if any.
pub fn condition_operator(key: &str) -> Option<Operator> {
    Operator::from_name(key).filter(|op| op.is_condition())
}
