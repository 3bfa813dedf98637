use pest::iterators::{Pair, Pairs};

use super::{Expression, Identifier};
use crate::parser::Rule;

/// `ForIntro { iterator: Identifier, value: Identifier|null, collection: Expression }`,
/// shared by both for-expression kinds and by the `%{for}` template directive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForIntro {
    pub iterator: Identifier,
    pub value: Option<Identifier>,
    pub collection: Box<Expression>,
}

impl ForIntro {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::forIntro);
        Self::from_pairs(pair.into_inner())
    }

    fn from_pairs(mut inner: Pairs<Rule>) -> Self {
        let first = Identifier::from_pair(
            inner
                .next()
                .expect("forIntro always has at least one identifier"),
        );
        let next = inner.next().expect("forIntro always carries a collection");
        let (iterator, value) = if next.as_rule() == Rule::identifier {
            (first, Some(Identifier::from_pair(next.clone())))
        } else {
            (first, None)
        };
        let collection = Box::new(if value.is_some() {
            Expression::from_pair(
                inner
                    .next()
                    .expect("forIntro with two identifiers still carries a collection"),
            )
        } else {
            Expression::from_pair(next)
        });
        ForIntro {
            iterator,
            value,
            collection,
        }
    }
}

/// `ForExpression` — the sum of `ForTupleExpression` (`kind: "tuple"`) and
/// `ForObjectExpression` (`kind: "object"`), sharing the single
/// `"ForExpression"` discriminator tag as documented in the external
/// interface's `kind` sub-tag list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum ForExpression {
    #[cfg_attr(feature = "serde", serde(rename = "tuple"))]
    Tuple(ForTupleExpression),
    #[cfg_attr(feature = "serde", serde(rename = "object"))]
    Object(ForObjectExpression),
}

impl ForExpression {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::forExpr);
        let inner = pair
            .into_inner()
            .next()
            .expect("forExpr always wraps forTupleExpr or forObjectExpr");
        match inner.as_rule() {
            Rule::forTupleExpr => ForExpression::Tuple(ForTupleExpression::from_pair(inner)),
            Rule::forObjectExpr => ForExpression::Object(ForObjectExpression::from_pair(inner)),
            rule => unreachable!("unexpected rule {rule:?} inside forExpr"),
        }
    }
}

/// `ForTupleExpression { kind: "tuple", intro, expression, condition }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForTupleExpression {
    pub intro: ForIntro,
    pub expression: Box<Expression>,
    pub condition: Option<Box<Expression>>,
}

impl ForTupleExpression {
    fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::forTupleExpr);
        let mut inner = pair.into_inner();
        let intro = ForIntro::from_pair(
            inner
                .next()
                .expect("forTupleExpr always starts with forIntro"),
        );
        let expression = Box::new(Expression::from_pair(
            inner.next().expect("forTupleExpr always carries a body expression"),
        ));
        let condition = inner.next().map(Expression::from_pair).map(Box::new);
        ForTupleExpression {
            intro,
            expression,
            condition,
        }
    }
}

/// `ForObjectExpression { kind: "object", intro, key, value, grouping, condition }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForObjectExpression {
    pub intro: ForIntro,
    pub key: Box<Expression>,
    pub value: Box<Expression>,
    pub grouping: bool,
    pub condition: Option<Box<Expression>>,
}

impl ForObjectExpression {
    fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::forObjectExpr);
        let mut inner = pair.into_inner();
        let intro = ForIntro::from_pair(
            inner
                .next()
                .expect("forObjectExpr always starts with forIntro"),
        );
        let key = Box::new(Expression::from_pair(
            inner.next().expect("forObjectExpr always carries a key expression"),
        ));
        let value = Box::new(Expression::from_pair(
            inner
                .next()
                .expect("forObjectExpr always carries a value expression"),
        ));
        let mut grouping = false;
        let mut condition = None;
        for remaining in inner {
            match remaining.as_rule() {
                Rule::ellipsis => grouping = true,
                Rule::conditionalExpr => condition = Some(Box::new(Expression::from_pair(remaining))),
                rule => unreachable!("unexpected rule {rule:?} inside forObjectExpr tail"),
            }
        }
        ForObjectExpression {
            intro,
            key,
            value,
            grouping,
            condition,
        }
    }
}
