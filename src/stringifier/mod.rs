//! `stringify(ast) -> String` — total over valid ASTs, deterministic.
//!
//! Grounded on the teacher's dispatch idiom: one `match` per node enum,
//! split across files by concern the way `ast/` is split by shape
//! (`expr.rs` for the operator/precedence dispatch, `template.rs` for
//! heredoc/quoted-template emission). Unknown/malformed shapes are a
//! programming error per the core contract's error-handling design, so
//! they log and panic rather than silently producing garbage text.

mod expr;
mod template;

use crate::ast::{Attribute, Block, BodyElement, ConfigFile, Identifier, Label, OneLineBlock};
use crate::escape::encode_string_escapes;

pub fn stringify(ast: &ConfigFile) -> String {
    ast.bodies
        .iter()
        .map(|body| stringify_body_element(body, 0))
        .collect::<Vec<_>>()
        .join("\n")
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}

fn stringify_body_element(element: &BodyElement, level: usize) -> String {
    let pad = indent(level);
    match element {
        BodyElement::Attribute(attribute) => stringify_attribute(attribute, &pad),
        BodyElement::Block(block) => stringify_block(block, level, &pad),
        BodyElement::OneLineBlock(one_line) => stringify_one_line_block(one_line, &pad),
    }
}

fn stringify_attribute(attribute: &Attribute, pad: &str) -> String {
    format!(
        "{pad}{} = {}",
        attribute.name.value,
        expr::stringify_expression(&attribute.value)
    )
}

fn stringify_block(block: &Block, level: usize, pad: &str) -> String {
    let header = stringify_block_header(&block.block_type, &block.labels);
    if block.bodies.is_empty() {
        return format!("{pad}{header} {{}}");
    }
    let mut out = format!("{pad}{header} {{\n");
    for child in &block.bodies {
        out.push_str(&stringify_body_element(child, level + 1));
        out.push('\n');
    }
    out.push_str(pad);
    out.push('}');
    out
}

fn stringify_one_line_block(block: &OneLineBlock, pad: &str) -> String {
    let header = stringify_block_header(&block.block_type, &block.labels);
    match &block.attribute {
        // Not reachable from `parse`: an empty "{}" always parses as an
        // empty `Block`, never a null-attribute `OneLineBlock` (see
        // DESIGN.md). Kept for schema completeness on hand-built trees.
        None => format!("{pad}{header} {{}}"),
        Some(attribute) => format!(
            "{pad}{header} {{ {} = {} }}",
            attribute.name.value,
            expr::stringify_expression(&attribute.value)
        ),
    }
}

fn stringify_block_header(block_type: &Identifier, labels: &[Label]) -> String {
    let mut out = block_type.value.clone();
    for label in labels {
        out.push(' ');
        out.push_str(&stringify_label(label));
    }
    out
}

fn stringify_label(label: &Label) -> String {
    match label {
        Label::Identifier(identifier) => identifier.value.clone(),
        Label::StringLiteral(literal) => {
            format!("\"{}\"", encode_string_escapes(&literal.value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, BinaryOperator, Expression, NumberLiteral};
    use crate::parser::parse;

    #[test]
    fn attribute_round_trips() {
        let ast = parse("attr = \"value\"\n").unwrap();
        let text = stringify(&ast);
        assert_eq!(text, "attr = \"value\"");
        assert_eq!(parse(&text).unwrap(), ast);
    }

    #[test]
    fn empty_block_round_trips() {
        let ast = parse("resource \"aws_instance\" \"web\" {}\n").unwrap();
        let text = stringify(&ast);
        assert_eq!(text, "resource \"aws_instance\" \"web\" {}");
        assert_eq!(parse(&text).unwrap(), ast);
    }

    #[test]
    fn nested_block_indentation() {
        let ast = parse("outer {\n  inner {\n    a = 1\n  }\n}\n").unwrap();
        let text = stringify(&ast);
        assert_eq!(text, "outer {\n  inner {\n    a = 1\n  }\n}");
    }

    #[test]
    fn right_leaning_binary_tree_reparenthesizes_on_emit() {
        let tree = Expression::BinaryOperator(BinaryOperator {
            operator: BinaryOp::Sub,
            left: Box::new(Expression::NumberLiteral(NumberLiteral { value: 1.0 })),
            right: Box::new(Expression::BinaryOperator(BinaryOperator {
                operator: BinaryOp::Sub,
                left: Box::new(Expression::NumberLiteral(NumberLiteral { value: 2.0 })),
                right: Box::new(Expression::NumberLiteral(NumberLiteral { value: 3.0 })),
            })),
        });
        assert_eq!(expr::stringify_expression(&tree), "1 - (2 - 3)");
    }

    #[test]
    fn heredoc_round_trips() {
        let ast = parse("attr = <<EOF\nhello\nEOF\n").unwrap();
        let text = stringify(&ast);
        assert_eq!(text, "attr = <<EOF\nhello\nEOF");
        assert_eq!(parse(&text).unwrap(), ast);
    }

    #[test]
    fn for_tuple_round_trips() {
        let ast = parse("x = [for i in range(3): i if i > 0]\n").unwrap();
        let text = stringify(&ast);
        assert_eq!(parse(&text).unwrap(), ast);
    }
}
