use pest::iterators::Pair;

use super::{Expression, Identifier, Label};
use crate::parser::Rule;

/// `Attribute { name: Identifier, value: Expression }` — `name = expr`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    pub name: Identifier,
    pub value: Expression,
}

impl Attribute {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::attribute);
        let mut inner = pair.into_inner();
        let name = Identifier::from_pair(inner.next().expect("attribute always carries a name"));
        let value = Expression::from_pair(inner.next().expect("attribute always carries a value"));
        Attribute { name, value }
    }
}

/// `Block { blockType, labels, bodies }` — a multi-line block nesting
/// recursively. An empty `"{}"` always parses here with `bodies = []`
/// rather than as an `OneLineBlock`; see `oneLineBlock`'s grammar comment
/// in `hcl.pest` and DESIGN.md for why.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    #[cfg_attr(feature = "serde", serde(rename = "blockType"))]
    pub block_type: Identifier,
    pub labels: Vec<Label>,
    pub bodies: Vec<BodyElement>,
}

impl Block {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::block);
        let mut inner = pair.into_inner().peekable();
        let block_type =
            Identifier::from_pair(inner.next().expect("block always starts with an identifier"));
        let mut labels = Vec::new();
        while inner.peek().map(|p| p.as_rule()) == Some(Rule::label) {
            labels.push(Label::from_pair(inner.next().unwrap()));
        }
        let body_pair = inner.next().expect("block always carries a body");
        assert_eq!(body_pair.as_rule(), Rule::body);
        let bodies = body_pair.into_inner().map(BodyElement::from_pair).collect();
        Block {
            block_type,
            labels,
            bodies,
        }
    }
}

/// `OneLineBlock { blockType, labels, attribute }` — a block whose entire
/// body fits on one line. The parser only ever emits `Some(attribute)`
/// (the grammar requires exactly one inline attribute); the `null` case
/// stays in the schema for hand-built trees, matching the data model's
/// "either null or exactly one attribute" invariant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OneLineBlock {
    #[cfg_attr(feature = "serde", serde(rename = "blockType"))]
    pub block_type: Identifier,
    pub labels: Vec<Label>,
    pub attribute: Option<Attribute>,
}

impl OneLineBlock {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::oneLineBlock);
        let mut inner = pair.into_inner().peekable();
        let block_type = Identifier::from_pair(
            inner.next().expect("oneLineBlock always starts with an identifier"),
        );
        let mut labels = Vec::new();
        while inner.peek().map(|p| p.as_rule()) == Some(Rule::label) {
            labels.push(Label::from_pair(inner.next().unwrap()));
        }
        let name = Identifier::from_pair(
            inner
                .next()
                .expect("oneLineBlock always carries its inline attribute name"),
        );
        let value = Expression::from_pair(
            inner
                .next()
                .expect("oneLineBlock always carries its inline attribute value"),
        );
        OneLineBlock {
            block_type,
            labels,
            attribute: Some(Attribute { name, value }),
        }
    }
}

/// `BodyElement` — the closed set of three top-level kinds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum BodyElement {
    Attribute(Attribute),
    Block(Block),
    OneLineBlock(OneLineBlock),
}

impl BodyElement {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::bodyElement);
        let inner = pair
            .into_inner()
            .next()
            .expect("bodyElement always wraps exactly one alternative");
        match inner.as_rule() {
            Rule::oneLineBlock => BodyElement::OneLineBlock(OneLineBlock::from_pair(inner)),
            Rule::block => BodyElement::Block(Block::from_pair(inner)),
            Rule::attribute => BodyElement::Attribute(Attribute::from_pair(inner)),
            rule => unreachable!("unexpected rule {rule:?} inside bodyElement"),
        }
    }
}
