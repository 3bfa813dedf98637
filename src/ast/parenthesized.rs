use pest::iterators::Pair;

use super::Expression;
use crate::parser::Rule;

/// `ParenthesizedExpression { expression: Expression }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
}

impl ParenthesizedExpression {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::parenthesizedExpr);
        let inner = pair
            .into_inner()
            .next()
            .expect("parenthesizedExpr always wraps one expression");
        ParenthesizedExpression {
            expression: Box::new(Expression::from_pair(inner)),
        }
    }
}
