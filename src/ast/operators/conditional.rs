use super::super::Expression;

/// `ConditionalOperator { predicate, trueExpr, falseExpr }` — `a ? b : c`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConditionalOperator {
    pub predicate: Box<Expression>,
    #[cfg_attr(feature = "serde", serde(rename = "trueExpr"))]
    pub true_expr: Box<Expression>,
    #[cfg_attr(feature = "serde", serde(rename = "falseExpr"))]
    pub false_expr: Box<Expression>,
}
