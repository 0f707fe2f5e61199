use crate::builder;
use crate::error::{BuildError, MatchError};
use crate::matcher;
use crate::operator::Operator;
use mango_collate::{Collator, RawCollator};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A candidate document: field name to value.
pub type Document = Map<String, Value>;

/// A compiled Mango selector.
///
/// Built once from a selector document and read-only afterwards; the same
/// selector can be matched against any number of documents, from any number
/// of threads.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selector {
    /// The empty selector `{}`. Matches every document.
    #[default]
    None,
    /// Compares a single document field against a literal.
    Condition {
        operator: Operator,
        field: String,
        value: Value,
    },
    /// Logical `$and` / `$or` over child selectors.
    Combination {
        operator: Operator,
        children: Vec<Selector>,
    },
}

impl Selector {
    /// Parses and compiles a selector from JSON text.
    ///
    /// ```
    /// use mango::{Operator, Selector};
    /// use serde_json::json;
    ///
    /// let s = Selector::new(r#"{"director": {"$lt": "M"}}"#).unwrap();
    /// assert_eq!(
    ///     s,
    ///     Selector::Condition { operator: Operator::Lt, field: "director".into(), value: json!("M") }
    /// );
    /// ```
    pub fn new(data: &str) -> Result<Selector, BuildError> {
        let doc: Map<String, Value> = serde_json::from_str(data)?;
        builder::build(&doc)
    }

    /// Parses and compiles a selector from JSON bytes.
    pub fn from_slice(data: &[u8]) -> Result<Selector, BuildError> {
        let doc: Map<String, Value> = serde_json::from_slice(data)?;
        builder::build(&doc)
    }

    /// Compiles an already decoded selector document.
    pub fn from_map(doc: &Map<String, Value>) -> Result<Selector, BuildError> {
        builder::build(doc)
    }

    /// Returns the operator tag of this node.
    pub fn operator(&self) -> Operator {
        match self {
            Selector::None => Operator::None,
            Selector::Condition { operator, .. } | Selector::Combination { operator, .. } => *operator,
        }
    }

    /// Field name of a condition node.
    pub fn field(&self) -> Option<&str> {
        match self {
            Selector::Condition { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Child selectors of a combination node; empty for other nodes.
    pub fn children(&self) -> &[Selector] {
        match self {
            Selector::Combination { children, .. } => children,
            _ => &[],
        }
    }

    /// Number of nodes in the tree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Selector::node_count).sum::<usize>()
    }

    /// Returns the tree with every combination's children in canonical order:
    /// by field name, then operator token, then rendered JSON. Combination
    /// children have no field and sort first.
    ///
    /// Child order does not change what a selector matches, so two selectors
    /// that differ only in child order are equal once sorted.
    pub fn sorted(self) -> Selector {
        match self {
            Selector::Combination { operator, children } => {
                let mut children: Vec<Selector> = children.into_iter().map(Selector::sorted).collect();
                children.sort_by_cached_key(|child| {
                    (
                        child.field().unwrap_or("").to_string(),
                        child.operator().name(),
                        child.to_string(),
                    )
                });
                Selector::Combination { operator, children }
            }
            other => other,
        }
    }

    /// Returns whether `doc` satisfies the selector under raw collation.
    pub fn matches(&self, doc: &Document) -> Result<bool, MatchError> {
        matcher::matches(self, doc, &RawCollator)
    }

    /// Returns whether `doc` satisfies the selector under `collator`.
    pub fn matches_with<C: Collator + ?Sized>(
        &self,
        doc: &Document,
        collator: &C,
    ) -> Result<bool, MatchError> {
        matcher::matches(self, doc, collator)
    }

    /// Renders the selector back into explicit selector syntax.
    ///
    /// Every condition is written with its operator (`{"f": {"$eq": v}}`) and
    /// every combination as an array of single-key objects, so the output
    /// compiles back to an equivalent selector.
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        match self {
            Selector::None => {}
            Selector::Condition { operator, field, value } => {
                let mut cond = Map::new();
                cond.insert(operator.name().to_string(), value.clone());
                out.insert(field.clone(), Value::Object(cond));
            }
            Selector::Combination { operator, children } => {
                let items = children.iter().map(Selector::to_value).collect();
                out.insert(operator.name().to_string(), Value::Array(items));
            }
        }
        Value::Object(out)
    }
}

impl FromStr for Selector {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::new(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let doc = Map::<String, Value>::deserialize(deserializer)?;
        builder::build(&doc).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
