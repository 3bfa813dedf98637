use pest::iterators::Pair;

use super::{Expression, Identifier};
use crate::parser::Rule;

/// `TupleValue { elements: Expression[] }` — a `[...]` literal (not a
/// for-expression or splat; those are distinguished earlier by the grammar).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TupleValue {
    pub elements: Vec<Expression>,
}

impl TupleValue {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::tupleValue);
        let elements = pair.into_inner().map(Expression::from_pair).collect();
        TupleValue { elements }
    }
}

/// `ObjectValue { elements: ObjectValueElement[] }` — a `{...}` literal.
/// Duplicate keys are accepted and preserved in element order, no dedup
/// (see DESIGN.md).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectValue {
    pub elements: Vec<ObjectValueElement>,
}

impl ObjectValue {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::objectValue);
        let elements = pair
            .into_inner()
            .map(ObjectValueElement::from_pair)
            .collect();
        ObjectValue { elements }
    }
}

/// `{ key: Identifier, value: Expression }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectValueElement {
    pub key: Identifier,
    pub value: Expression,
}

impl ObjectValueElement {
    fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::objectElement);
        let mut inner = pair.into_inner();
        let key = Identifier::from_pair(
            inner
                .next()
                .expect("objectElement always starts with an identifier key"),
        );
        let value = Expression::from_pair(
            inner
                .next()
                .expect("objectElement always carries a value expression"),
        );
        ObjectValueElement { key, value }
    }
}
