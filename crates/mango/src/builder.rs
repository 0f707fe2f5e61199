//! Compiles a decoded selector document into a [`Selector`] tree.

use crate::error::BuildError;
use crate::operator::{condition_operator, is_operator, Operator};
use crate::selector::Selector;
use crate::validate::validate_keys;
use log::debug;
use serde_json::{Map, Value};

/// Builds a selector from a decoded selector document.
///
/// - `{}` is the empty selector.
/// - A single entry compiles to a single node.
/// - Several entries compile to an implicit `$and` over one node per entry.
///
/// All operator names are validated before any node is built.
pub fn build(doc: &Map<String, Value>) -> Result<Selector, BuildError> {
    validate_keys(doc)?;
    let selector = build_object(doc)?;
    debug!(
        "built selector: {} node(s), root operator {}",
        selector.node_count(),
        selector.operator()
    );
    Ok(selector)
}

fn build_object(doc: &Map<String, Value>) -> Result<Selector, BuildError> {
    let mut children = build_entries(doc)?;
    match children.len() {
        0 => Ok(Selector::None),
        1 => Ok(children.remove(0)),
        _ => Ok(Selector::Combination {
            operator: Operator::And,
            children,
        }),
    }
}

fn build_entries(doc: &Map<String, Value>) -> Result<Vec<Selector>, BuildError> {
    doc.iter()
        .map(|(key, value)| build_entry(key, value))
        .collect()
}

/// Builds the node for one `key: value` entry of a selector object.
fn build_entry(key: &str, value: &Value) -> Result<Selector, BuildError> {
    if is_operator(key) {
        return match Operator::from_name(key) {
            Some(op) if op.is_combination() => build_combination(op, value),
            Some(_) => Err(BuildError::MisplacedOperator(key.to_string())),
            None => Err(BuildError::UnknownOperator(key.to_string())),
        };
    }
    if key.is_empty() {
        return Err(BuildError::EmptyFieldName);
    }
    match value {
        Value::Object(obj) => build_explicit_condition(key, obj),
        _ => Ok(Selector::Condition {
            operator: Operator::Eq,
            field: key.to_string(),
            value: value.clone(),
        }),
    }
}

/// `{"field": {"$op": value}}`
fn build_explicit_condition(field: &str, obj: &Map<String, Value>) -> Result<Selector, BuildError> {
    let mut conditions = obj
        .iter()
        .filter_map(|(key, value)| condition_operator(key).map(|op| (op, value)));

    let (operator, value) = match conditions.next() {
        Some(found) => found,
        None => return Err(BuildError::SubfieldsNotImplemented),
    };
    if obj.len() > 1 {
        return Err(BuildError::UnsupportedCondition);
    }
    Ok(Selector::Condition {
        operator,
        field: field.to_string(),
        value: value.clone(),
    })
}

/// `{"$and": [{...}, {...}]}` / `{"$or": [...]}`
///
/// The single entries of all elements are merged into one object before
/// building, so a field repeated across elements keeps only its last value.
fn build_combination(operator: Operator, value: &Value) -> Result<Selector, BuildError> {
    let items = match value {
        Value::Array(items) if !items.is_empty() => items,
        _ => return Err(BuildError::UnsupportedCombinationArgument),
    };

    let mut merged = Map::new();
    for item in items {
        match item {
            Value::Object(obj) if obj.len() == 1 => {
                for (key, value) in obj {
                    merged.insert(key.clone(), value.clone());
                }
            }
            _ => return Err(BuildError::UnsupportedCombinationArgument),
        }
    }

    Ok(Selector::Combination {
        operator,
        children: build_entries(&merged)?,
    })
}
