//! Expression emission, including the asymmetric precedence-based
//! parenthesization rule from the core contract's binary-operator section.

use crate::ast::{Expression, ForExpression, ForIntro, ForObjectExpression, ForTupleExpression, SplatOperationStep, SplatOperator};
use crate::escape::{encode_string_escapes, encode_template_escapes};

use super::template::{stringify_heredoc, stringify_quoted_template};

enum Side {
    Left,
    Right,
}

pub(crate) fn stringify_expression(expr: &Expression) -> String {
    match expr {
        Expression::StringLiteral(s) => format!("\"{}\"", encode_string_escapes(&s.value)),
        Expression::NumberLiteral(n) => format_number(n.value),
        Expression::BooleanLiteral(b) => b.value.to_string(),
        Expression::NullLiteral(_) => "null".to_string(),
        Expression::TupleValue(t) => format!(
            "[{}]",
            t.elements
                .iter()
                .map(stringify_expression)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Expression::ObjectValue(o) => format!(
            "{{{}}}",
            o.elements
                .iter()
                .map(|e| format!("{} = {}", e.key.value, stringify_expression(&e.value)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Expression::QuotedTemplateExpression(t) => stringify_quoted_template(t),
        Expression::HeredocTemplateExpression(h) => stringify_heredoc(h),
        Expression::FunctionCallExpression(f) => format!(
            "{}({})",
            f.name.value,
            f.args
                .iter()
                .map(stringify_expression)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        Expression::VariableExpression(v) => v.name.value.clone(),
        Expression::ForExpression(f) => stringify_for_expression(f),
        Expression::IndexOperator(i) => format!(
            "{}[{}]",
            stringify_expression(&i.target),
            stringify_expression(&i.key)
        ),
        Expression::LegacyIndexOperator(l) => {
            format!("{}.{}", stringify_expression(&l.target), l.key.value as i64)
        }
        Expression::GetAttributeOperator(g) => {
            format!("{}.{}", stringify_expression(&g.target), g.key.value)
        }
        Expression::SplatOperator(s) => stringify_splat(s),
        Expression::UnaryOperator(u) => {
            format!("{}{}", u.operator.as_str(), stringify_expression(&u.term))
        }
        Expression::BinaryOperator(b) => {
            let left = stringify_operand(&b.left, b.operator.precedence(), Side::Left);
            let right = stringify_operand(&b.right, b.operator.precedence(), Side::Right);
            format!("{left} {} {right}", b.operator.as_str())
        }
        Expression::ConditionalOperator(c) => format!(
            "{} ? {} : {}",
            stringify_expression(&c.predicate),
            stringify_expression(&c.true_expr),
            stringify_expression(&c.false_expr)
        ),
        Expression::ParenthesizedExpression(p) => {
            format!("({})", stringify_expression(&p.expression))
        }
    }
}

/// `* / % = 5`, `+ - = 4`, `> >= < <= = 3`, `== != = 2`, `&& = 1`, `|| = 0`.
/// Left child parenthesized if strictly looser; right child parenthesized
/// if looser-or-equal, which is what forces re-nesting on the right to
/// reproduce the parser's right-leaning same-precedence trees.
fn stringify_operand(expr: &Expression, parent_precedence: u8, side: Side) -> String {
    let rendered = stringify_expression(expr);
    if let Expression::BinaryOperator(inner) = expr {
        let needs_parens = match side {
            Side::Left => inner.operator.precedence() < parent_precedence,
            Side::Right => inner.operator.precedence() <= parent_precedence,
        };
        if needs_parens {
            return format!("({rendered})");
        }
    }
    rendered
}

fn format_number(value: f64) -> String {
    value.to_string()
}

fn stringify_splat(splat: &SplatOperator) -> String {
    match splat {
        SplatOperator::Attribute { attributes, target } => {
            let mut out = format!("{}.*", stringify_expression(target));
            for attr in attributes {
                out.push('.');
                out.push_str(&attr.key.value);
            }
            out
        }
        SplatOperator::Full { operations, target } => {
            let mut out = format!("{}[*]", stringify_expression(target));
            for op in operations {
                match op {
                    SplatOperationStep::Attribute(a) => {
                        out.push('.');
                        out.push_str(&a.key.value);
                    }
                    SplatOperationStep::Index(i) => {
                        out.push('[');
                        out.push_str(&stringify_expression(&i.key));
                        out.push(']');
                    }
                }
            }
            out
        }
    }
}

fn stringify_for_intro(intro: &ForIntro) -> String {
    let mut out = format!("for {}", intro.iterator.value);
    if let Some(value) = &intro.value {
        out.push_str(&format!(", {}", value.value));
    }
    out.push_str(&format!(" in {}:", stringify_expression(&intro.collection)));
    out
}

fn stringify_for_expression(expr: &ForExpression) -> String {
    match expr {
        ForExpression::Tuple(tuple) => stringify_for_tuple(tuple),
        ForExpression::Object(object) => stringify_for_object(object),
    }
}

fn stringify_for_tuple(tuple: &ForTupleExpression) -> String {
    let intro = stringify_for_intro(&tuple.intro);
    let body = stringify_expression(&tuple.expression);
    let condition = tuple
        .condition
        .as_ref()
        .map(|c| format!(" if {}", stringify_expression(c)))
        .unwrap_or_default();
    format!("[{intro} {body}{condition}]")
}

fn stringify_for_object(object: &ForObjectExpression) -> String {
    let intro = stringify_for_intro(&object.intro);
    let key = stringify_expression(&object.key);
    let value = stringify_expression(&object.value);
    let grouping = if object.grouping { "..." } else { "" };
    let condition = object
        .condition
        .as_ref()
        .map(|c| format!(" if {}", stringify_expression(c)))
        .unwrap_or_default();
    format!("{{{intro} {key} => {value}{grouping}{condition}}}")
}

pub(crate) fn encode_label_string(value: &str) -> String {
    encode_string_escapes(value)
}

pub(crate) fn encode_template_literal(value: &str) -> String {
    encode_template_escapes(value)
}
