//! Purely structural validation: confirms every node in a tree carries a
//! known discriminator and the fields appropriate to it, recursing through
//! sub-expressions. Never re-runs the grammar — a tree built by [`crate::parse`]
//! always validates; this exists for trees built or mutated by hand.
//!
//! Rust's closed enums are already the fixed-point the contract asks for
//! (no schema-registry indirection needed to resolve the Expression/
//! Template/Collection mutual recursion), so this is a single recursive
//! walk per node kind, mirroring the teacher's per-type `assert_eq!`
//! shape-check habit without the pest `Pair` plumbing.

use crate::ast::{
    Attribute, Block, BodyElement, ConfigFile, Expression, ForExpression, OneLineBlock,
    SplatOperationStep, SplatOperator, TemplatePart,
};

/// One structural defect found while walking a hand-built tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    pub message: String,
}

impl Issue {
    fn new(message: impl Into<String>) -> Self {
        Issue {
            message: message.into(),
        }
    }
}

pub fn validate(ast: &ConfigFile) -> Result<(), Vec<Issue>> {
    let mut issues = Vec::new();
    for body in &ast.bodies {
        validate_body_element(body, &mut issues);
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn validate_body_element(element: &BodyElement, issues: &mut Vec<Issue>) {
    match element {
        BodyElement::Attribute(attribute) => validate_attribute(attribute, issues),
        BodyElement::Block(block) => validate_block(block, issues),
        BodyElement::OneLineBlock(one_line) => validate_one_line_block(one_line, issues),
    }
}

fn validate_attribute(attribute: &Attribute, issues: &mut Vec<Issue>) {
    if attribute.name.value.is_empty() {
        issues.push(Issue::new("Attribute.name must be non-empty"));
    }
    validate_expression(&attribute.value, issues);
}

fn validate_block(block: &Block, issues: &mut Vec<Issue>) {
    if block.block_type.value.is_empty() {
        issues.push(Issue::new("Block.blockType must be non-empty"));
    }
    for child in &block.bodies {
        validate_body_element(child, issues);
    }
}

fn validate_one_line_block(block: &OneLineBlock, issues: &mut Vec<Issue>) {
    if block.block_type.value.is_empty() {
        issues.push(Issue::new("OneLineBlock.blockType must be non-empty"));
    }
    if let Some(attribute) = &block.attribute {
        validate_attribute(attribute, issues);
    }
}

fn validate_expression(expr: &Expression, issues: &mut Vec<Issue>) {
    match expr {
        Expression::StringLiteral(_)
        | Expression::NumberLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::VariableExpression(_) => {}
        Expression::TupleValue(tuple) => {
            for element in &tuple.elements {
                validate_expression(element, issues);
            }
        }
        Expression::ObjectValue(object) => {
            for element in &object.elements {
                validate_expression(&element.value, issues);
            }
        }
        Expression::QuotedTemplateExpression(template) => {
            validate_template_parts(&template.parts, issues);
        }
        Expression::HeredocTemplateExpression(heredoc) => {
            if heredoc.marker.value.is_empty() {
                issues.push(Issue::new("HeredocTemplateExpression.marker must be non-empty"));
            }
            validate_template_parts(&heredoc.template, issues);
        }
        Expression::FunctionCallExpression(call) => {
            if call.name.value.is_empty() {
                issues.push(Issue::new("FunctionCallExpression.name must be non-empty"));
            }
            for arg in &call.args {
                validate_expression(arg, issues);
            }
        }
        Expression::ForExpression(for_expr) => validate_for_expression(for_expr, issues),
        Expression::IndexOperator(index) => {
            validate_expression(&index.key, issues);
            validate_expression(&index.target, issues);
        }
        Expression::LegacyIndexOperator(legacy) => {
            if legacy.key.value.fract() != 0.0 || legacy.key.value < 0.0 {
                issues.push(Issue::new("LegacyIndexOperator.key must be a non-negative integer"));
            }
            validate_expression(&legacy.target, issues);
        }
        Expression::GetAttributeOperator(get_attr) => {
            validate_expression(&get_attr.target, issues);
        }
        Expression::SplatOperator(splat) => validate_splat(splat, issues),
        Expression::UnaryOperator(unary) => validate_expression(&unary.term, issues),
        Expression::BinaryOperator(binary) => {
            validate_expression(&binary.left, issues);
            validate_expression(&binary.right, issues);
        }
        Expression::ConditionalOperator(conditional) => {
            validate_expression(&conditional.predicate, issues);
            validate_expression(&conditional.true_expr, issues);
            validate_expression(&conditional.false_expr, issues);
        }
        Expression::ParenthesizedExpression(parenthesized) => {
            validate_expression(&parenthesized.expression, issues);
        }
    }
}

fn validate_for_expression(for_expr: &ForExpression, issues: &mut Vec<Issue>) {
    match for_expr {
        ForExpression::Tuple(tuple) => {
            validate_expression(&tuple.intro.collection, issues);
            validate_expression(&tuple.expression, issues);
            if let Some(condition) = &tuple.condition {
                validate_expression(condition, issues);
            }
        }
        ForExpression::Object(object) => {
            validate_expression(&object.intro.collection, issues);
            validate_expression(&object.key, issues);
            validate_expression(&object.value, issues);
            if let Some(condition) = &object.condition {
                validate_expression(condition, issues);
            }
        }
    }
}

fn validate_splat(splat: &SplatOperator, issues: &mut Vec<Issue>) {
    match splat {
        SplatOperator::Attribute { target, .. } => validate_expression(target, issues),
        SplatOperator::Full { operations, target } => {
            validate_expression(target, issues);
            for op in operations {
                if let SplatOperationStep::Index(index) = op {
                    validate_expression(&index.key, issues);
                }
            }
        }
    }
}

fn validate_template_parts(parts: &[TemplatePart], issues: &mut Vec<Issue>) {
    for part in parts {
        match part {
            TemplatePart::TemplateLiteral(_) => {}
            TemplatePart::TemplateInterpolation(interp) => {
                validate_expression(&interp.expression, issues);
            }
            TemplatePart::TemplateIf(if_directive) => {
                validate_expression(&if_directive.condition, issues);
                validate_template_parts(&if_directive.then, issues);
                if let Some(else_body) = &if_directive.else_ {
                    validate_template_parts(else_body, issues);
                }
            }
            TemplatePart::TemplateFor(for_directive) => {
                validate_expression(&for_directive.intro.collection, issues);
                validate_template_parts(&for_directive.body, issues);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, LegacyIndexOperator, NumberLiteral, VariableExpression};
    use crate::parser::parse;

    #[test]
    fn a_tree_produced_by_parse_always_validates() {
        let ast = parse("resource \"aws_instance\" \"web\" {\n  count = 2\n}\n").unwrap();
        assert_eq!(validate(&ast), Ok(()));
    }

    #[test]
    fn an_empty_block_type_is_an_issue() {
        let ast = ConfigFile {
            bodies: vec![BodyElement::Block(Block {
                block_type: Identifier::from(""),
                labels: vec![],
                bodies: vec![],
            })],
        };
        assert!(validate(&ast).is_err());
    }

    #[test]
    fn a_negative_legacy_index_is_an_issue() {
        let ast = ConfigFile {
            bodies: vec![BodyElement::Attribute(Attribute {
                name: Identifier::from("x"),
                value: Expression::LegacyIndexOperator(LegacyIndexOperator {
                    key: NumberLiteral { value: -1.0 },
                    target: Box::new(Expression::VariableExpression(VariableExpression {
                        name: Identifier::from("list"),
                    })),
                }),
            })],
        };
        assert!(validate(&ast).is_err());
    }
}
