use pest::iterators::Pair;

use super::super::Expression;
use crate::parser::Rule;

/// `operator ∈ { "!", "-" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    #[cfg_attr(feature = "serde", serde(rename = "!"))]
    Not,
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Neg,
}

impl UnaryOp {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::unaryOp);
        match pair.as_str() {
            "!" => UnaryOp::Not,
            "-" => UnaryOp::Neg,
            other => unreachable!("unaryOp only matches '!' or '-', got {other:?}"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        }
    }
}

/// `UnaryOperator { operator, term }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnaryOperator {
    pub operator: UnaryOp,
    pub term: Box<Expression>,
}
