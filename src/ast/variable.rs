use pest::iterators::Pair;

use super::Identifier;
use crate::parser::Rule;

/// `VariableExpression { name: Identifier }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableExpression {
    pub name: Identifier,
}

impl VariableExpression {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::variableExpr);
        let name = Identifier::from_pair(
            pair.into_inner()
                .next()
                .expect("variableExpr always wraps a single identifier"),
        );
        VariableExpression { name }
    }
}
