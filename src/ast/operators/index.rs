use super::super::{Expression, Identifier, NumberLiteral};

/// `IndexOperator { key: Expression, target }` — `target[key]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexOperator {
    pub key: Box<Expression>,
    pub target: Box<Expression>,
}

/// `LegacyIndexOperator { key: NumberLiteral, target }` — `target.0`, the
/// numeric-index shorthand kept for HIL compatibility. Never normalized to
/// `[0]` by the stringifier (see DESIGN.md).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyIndexOperator {
    pub key: NumberLiteral,
    pub target: Box<Expression>,
}

/// `GetAttributeOperator { key: Identifier, target }` — `target.ident`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GetAttributeOperator {
    pub key: Identifier,
    pub target: Box<Expression>,
}
