use crate::error::MatchError;
use crate::operator::Operator;
use crate::selector::{Document, Selector};
use log::trace;
use mango_collate::Collator;
use serde_json::Value;

/// Evaluates `selector` against `doc`, comparing values with `collator`.
///
/// Fields are looked up by exact name. A missing field is a plain
/// non-match. `$and` and `$or` evaluate children in stored order and stop
/// as soon as the outcome is known.
pub fn matches<C: Collator + ?Sized>(
    selector: &Selector,
    doc: &Document,
    collator: &C,
) -> Result<bool, MatchError> {
    match selector {
        Selector::None => Ok(true),
        Selector::Condition {
            operator,
            field,
            value,
        } => {
            let Some(candidate) = doc.get(field) else {
                trace!("{field}: missing, no match");
                return Ok(false);
            };
            let matched = compare(*operator, candidate, value, collator)?;
            trace!("{field} {operator} {value}: {matched}");
            Ok(matched)
        }
        Selector::Combination { operator, children } => match operator {
            Operator::And => {
                for child in children {
                    if !matches(child, doc, collator)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Operator::Or => {
                let mut last_err = None;
                for child in children {
                    match matches(child, doc, collator) {
                        Ok(true) => return Ok(true),
                        Ok(false) => {}
                        Err(e) => last_err = Some(e),
                    }
                }
                match last_err {
                    Some(e) => Err(e),
                    None => Ok(false),
                }
            }
            other => Err(MatchError::UnknownOperator(other.to_string())),
        },
    }
}

fn compare<C: Collator + ?Sized>(
    operator: Operator,
    candidate: &Value,
    value: &Value,
    collator: &C,
) -> Result<bool, MatchError> {
    match operator {
        Operator::Eq => Ok(collator.equal(candidate, value)),
        Operator::Ne => Ok(!collator.equal(candidate, value)),
        Operator::Lt => Ok(collator.lt(candidate, value)),
        Operator::Lte => Ok(collator.lte(candidate, value)),
        Operator::Gt => Ok(collator.gt(candidate, value)),
        Operator::Gte => Ok(collator.gte(candidate, value)),
        Operator::None | Operator::And | Operator::Or => {
            Err(MatchError::UnknownOperator(operator.to_string()))
        }
    }
}
