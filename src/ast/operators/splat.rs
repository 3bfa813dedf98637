use super::super::{Expression, Identifier};
use super::IndexOperator;

/// `GetAttributeOperator` variant without `target`, used only as a stepping
/// element inside splat chains — each step applies to "the current element"
/// rather than to an independently-targeted expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplatGetAttributeOperator {
    pub key: Identifier,
}

/// One step inside a `[*]` full-splat's `operations` list: either a bare
/// attribute access or an index access. `IndexOperator` keeps its `target`
/// field in this position per the data model's sum type, set to the
/// accumulated expression within the splat's own chain (the splat's
/// pre-splat `target` for the first step, the previous step's node for
/// subsequent ones) — see DESIGN.md for why this reuses the same shape
/// rather than inventing a target-less index node.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SplatOperationStep {
    Attribute(SplatGetAttributeOperator),
    Index(IndexOperator),
}

/// `SplatOperator` — the sum `{ kind: "Attribute", attributes, target }`
/// (`.*`) or `{ kind: "Full", operations, target }` (`[*]`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum SplatOperator {
    Attribute {
        attributes: Vec<SplatGetAttributeOperator>,
        target: Box<Expression>,
    },
    Full {
        operations: Vec<SplatOperationStep>,
        target: Box<Expression>,
    },
}
