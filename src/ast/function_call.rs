use pest::iterators::Pair;

use super::{Expression, Identifier};
use crate::parser::Rule;

/// `FunctionCallExpression { name: Identifier, args: Expression[] }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FunctionCallExpression {
    pub name: Identifier,
    pub args: Vec<Expression>,
}

impl FunctionCallExpression {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::functionCallExpr);
        let mut inner = pair.into_inner();
        let name = Identifier::from_pair(
            inner
                .next()
                .expect("functionCallExpr always starts with an identifier"),
        );
        let args = inner.map(Expression::from_pair).collect();
        FunctionCallExpression { name, args }
    }
}
