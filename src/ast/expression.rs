use pest::iterators::Pair;

use super::{
    BinaryOp, BinaryOperator, BooleanLiteral, ConditionalOperator, ForExpression,
    FunctionCallExpression, GetAttributeOperator, Identifier, IndexOperator, LegacyIndexOperator,
    NullLiteral, NumberLiteral, ObjectValue, ParenthesizedExpression,
    QuotedTemplateExpression, HeredocTemplateExpression, SplatGetAttributeOperator, SplatOperator,
    SplatOperationStep, StringLiteral, TupleValue, UnaryOp, UnaryOperator, VariableExpression,
};
use crate::parser::Rule;

/// `Expression` is the closed sum of every expression-level node shape.
///
/// The variant names are the literal discriminator tags consumers
/// pattern-match on. Construction is one big dispatch over every rule that
/// can appear where an expression is expected (the precedence ladder's six
/// levels, `unaryExpr`, `postfixExpr`, `primaryExpr` and its leaves) rather
/// than one `from_pair` per level delegating to the next — mirrors the
/// teacher's `Expression::from_pair` catch-all match in spirit, just with a
/// wider rule set since this grammar threads more ladder levels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Expression {
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral(NullLiteral),
    TupleValue(TupleValue),
    ObjectValue(ObjectValue),
    QuotedTemplateExpression(QuotedTemplateExpression),
    HeredocTemplateExpression(HeredocTemplateExpression),
    FunctionCallExpression(FunctionCallExpression),
    VariableExpression(VariableExpression),
    ForExpression(ForExpression),
    IndexOperator(IndexOperator),
    LegacyIndexOperator(LegacyIndexOperator),
    GetAttributeOperator(GetAttributeOperator),
    SplatOperator(SplatOperator),
    UnaryOperator(UnaryOperator),
    BinaryOperator(BinaryOperator),
    ConditionalOperator(ConditionalOperator),
    ParenthesizedExpression(ParenthesizedExpression),
}

impl Expression {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Expression {
        match pair.as_rule() {
            Rule::conditionalExpr => Self::from_conditional_pair(pair),
            Rule::orExpr | Rule::andExpr | Rule::eqExpr | Rule::compExpr | Rule::addExpr
            | Rule::mulExpr => Self::from_binary_level_pair(pair),
            Rule::unaryExpr => Self::from_unary_pair(pair),
            Rule::postfixExpr => Self::from_postfix_pair(pair),
            Rule::primaryExpr => Self::from_pair(
                pair.into_inner()
                    .next()
                    .expect("primaryExpr always wraps exactly one alternative"),
            ),
            Rule::number => Expression::NumberLiteral(NumberLiteral::from_number_pair(pair)),
            Rule::boolean => Expression::BooleanLiteral(BooleanLiteral::from_pair(pair)),
            Rule::nullLiteral => Expression::NullLiteral(NullLiteral::from_pair(pair)),
            Rule::quotedTemplateExpr => {
                Expression::QuotedTemplateExpression(QuotedTemplateExpression::from_pair(pair))
            }
            Rule::heredocTemplateExpr => {
                Expression::HeredocTemplateExpression(HeredocTemplateExpression::from_pair(pair))
            }
            Rule::functionCallExpr => {
                Expression::FunctionCallExpression(FunctionCallExpression::from_pair(pair))
            }
            Rule::forExpr => Expression::ForExpression(ForExpression::from_pair(pair)),
            Rule::tupleValue => Expression::TupleValue(TupleValue::from_pair(pair)),
            Rule::objectValue => Expression::ObjectValue(ObjectValue::from_pair(pair)),
            Rule::variableExpr => Expression::VariableExpression(VariableExpression::from_pair(pair)),
            Rule::parenthesizedExpr => {
                Expression::ParenthesizedExpression(ParenthesizedExpression::from_pair(pair))
            }
            rule => unreachable!("unexpected rule {rule:?} while building an expression"),
        }
    }

    /// `conditionalExpr = { orExpr ~ ("?" ~ expression ~ ":" ~ expression)? }`.
    fn from_conditional_pair(pair: Pair<Rule>) -> Expression {
        let mut inner = pair.into_inner();
        let predicate =
            Expression::from_pair(inner.next().expect("conditionalExpr always has a predicate"));
        match inner.next() {
            None => predicate,
            Some(true_pair) => {
                let true_expr = Expression::from_pair(true_pair);
                let false_expr = Expression::from_pair(
                    inner
                        .next()
                        .expect("conditionalExpr with '?' always has a ':' branch"),
                );
                Expression::ConditionalOperator(ConditionalOperator {
                    predicate: Box::new(predicate),
                    true_expr: Box::new(true_expr),
                    false_expr: Box::new(false_expr),
                })
            }
        }
    }

    /// Shared shape for `orExpr`..`mulExpr`: `NextLevel ~ (Op ~ expression)?`.
    /// The right operand recurses to the full top-level `expression`, not
    /// back to this level, which is what produces the right-leaning trees
    /// for chained same-precedence operators.
    fn from_binary_level_pair(pair: Pair<Rule>) -> Expression {
        let mut inner = pair.into_inner();
        let left =
            Expression::from_pair(inner.next().expect("binary ladder level always has a left operand"));
        match inner.next() {
            None => left,
            Some(op_pair) => {
                let operator = BinaryOp::from_str(op_pair.as_str());
                let right = Expression::from_pair(inner.next().expect(
                    "binary ladder level always has a right operand once an operator is present",
                ));
                Expression::BinaryOperator(BinaryOperator {
                    operator,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
        }
    }

    /// `unaryExpr = { (unaryOp ~ unaryExpr) | postfixExpr }`.
    fn from_unary_pair(pair: Pair<Rule>) -> Expression {
        let mut inner = pair.into_inner();
        let first = inner.next().expect("unaryExpr always has at least one child");
        match first.as_rule() {
            Rule::unaryOp => {
                let operator = UnaryOp::from_pair(first);
                let term = Expression::from_pair(
                    inner
                        .next()
                        .expect("unaryExpr with a leading operator always has a term"),
                );
                Expression::UnaryOperator(UnaryOperator {
                    operator,
                    term: Box::new(term),
                })
            }
            _ => Expression::from_pair(first),
        }
    }

    /// `postfixExpr = { primaryExpr ~ postfixOp* }` — an explicit left fold,
    /// threading the accumulated expression into each new node's `target`.
    fn from_postfix_pair(pair: Pair<Rule>) -> Expression {
        let mut inner = pair.into_inner();
        let primary = inner.next().expect("postfixExpr always has a primary term");
        let mut target = Expression::from_pair(primary);
        for postfix_op in inner {
            target = Self::apply_postfix_op(postfix_op, target);
        }
        target
    }

    fn apply_postfix_op(pair: Pair<Rule>, target: Expression) -> Expression {
        assert_eq!(pair.as_rule(), Rule::postfixOp);
        let op = pair
            .into_inner()
            .next()
            .expect("postfixOp always wraps exactly one operator");
        match op.as_rule() {
            Rule::indexOp => {
                let key_pair = op
                    .into_inner()
                    .next()
                    .expect("indexOp always carries a key expression");
                Expression::IndexOperator(IndexOperator {
                    key: Box::new(Expression::from_pair(key_pair)),
                    target: Box::new(target),
                })
            }
            Rule::legacyIndexOp => {
                let digits = op
                    .into_inner()
                    .next()
                    .expect("legacyIndexOp always carries digits");
                Expression::LegacyIndexOperator(LegacyIndexOperator {
                    key: NumberLiteral::from_legacy_index_digits_pair(digits),
                    target: Box::new(target),
                })
            }
            Rule::getAttrOp => {
                let key = Self::get_attr_key(op);
                Expression::GetAttributeOperator(GetAttributeOperator {
                    key,
                    target: Box::new(target),
                })
            }
            Rule::splatOp => Self::apply_splat_op(op, target),
            rule => unreachable!("unexpected rule {rule:?} inside postfixOp"),
        }
    }

    fn get_attr_key(get_attr_op: Pair<Rule>) -> Identifier {
        assert_eq!(get_attr_op.as_rule(), Rule::getAttrOp);
        Identifier::from_pair(
            get_attr_op
                .into_inner()
                .next()
                .expect("getAttrOp always carries an identifier"),
        )
    }

    fn apply_splat_op(pair: Pair<Rule>, target: Expression) -> Expression {
        assert_eq!(pair.as_rule(), Rule::splatOp);
        let inner = pair
            .into_inner()
            .next()
            .expect("splatOp always wraps fullSplatOp or attrSplatOp");
        match inner.as_rule() {
            Rule::attrSplatOp => {
                let attributes = inner
                    .into_inner()
                    .map(|tail| {
                        assert_eq!(tail.as_rule(), Rule::splatAttrTail);
                        let get_attr_op = tail
                            .into_inner()
                            .next()
                            .expect("splatAttrTail always wraps a getAttrOp");
                        SplatGetAttributeOperator {
                            key: Self::get_attr_key(get_attr_op),
                        }
                    })
                    .collect();
                Expression::SplatOperator(SplatOperator::Attribute {
                    attributes,
                    target: Box::new(target),
                })
            }
            Rule::fullSplatOp => {
                let mut operations = Vec::new();
                // Each step's own `target` threads the splat's running
                // accumulator rather than the splat's pre-splat `target`
                // directly — see `SplatOperationStep` for the rationale.
                let mut acc = target.clone();
                for tail in inner.into_inner() {
                    assert_eq!(tail.as_rule(), Rule::splatFullTail);
                    let step = tail
                        .into_inner()
                        .next()
                        .expect("splatFullTail always wraps getAttrOp or indexOp");
                    match step.as_rule() {
                        Rule::getAttrOp => {
                            operations.push(SplatOperationStep::Attribute(
                                SplatGetAttributeOperator {
                                    key: Self::get_attr_key(step),
                                },
                            ));
                        }
                        Rule::indexOp => {
                            let key_pair = step
                                .into_inner()
                                .next()
                                .expect("indexOp always carries a key expression");
                            let index_op = IndexOperator {
                                key: Box::new(Expression::from_pair(key_pair)),
                                target: Box::new(acc),
                            };
                            acc = Expression::IndexOperator(index_op.clone());
                            operations.push(SplatOperationStep::Index(index_op));
                        }
                        rule => unreachable!("unexpected rule {rule:?} inside splatFullTail"),
                    }
                }
                Expression::SplatOperator(SplatOperator::Full {
                    operations,
                    target: Box::new(target),
                })
            }
            rule => unreachable!("unexpected rule {rule:?} inside splatOp"),
        }
    }
}
