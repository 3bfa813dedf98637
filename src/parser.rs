//! Grammar-driven parser entry points.
//!
//! Mirrors the teacher's `src/ast/parser.rs`: a zero-sized struct carrying
//! the `#[derive(Parser)] #[grammar = "..."]` attribute, which expands into
//! the generated `Rule` enum used throughout `ast::*`'s `from_pair`
//! constructors. `parse` returns `Result` rather than logging-and-exiting —
//! `process::exit` belongs to `bin/hclfmt.rs`, never to library code.

use pest::Parser as _;
use pest_derive::Parser;

use crate::ast::ConfigFile;
use crate::error::ParseError;

#[derive(Parser)]
#[grammar = "hcl.pest"]
struct HclParser;

/// `parse(input) -> ConfigFile` — fails with a single `ParseError`
/// pinpointing the first unrecoverable mismatch; no partial results.
pub fn parse(input: &str) -> Result<ConfigFile, ParseError> {
    let mut pairs = HclParser::parse(Rule::configFile, input).map_err(ParseError::from_pest)?;
    let config_pair = pairs
        .next()
        .expect("a successful parse of Rule::configFile always yields exactly one pair");
    Ok(ConfigFile::from_pair(config_pair))
}

/// Tagged-result wrapper over [`parse`], for callers that would rather
/// branch on a value than catch an error.
#[derive(Debug)]
pub enum ParseOutcome {
    Success { data: ConfigFile },
    Failure { error: ParseError },
}

pub fn safe_parse(input: &str) -> ParseOutcome {
    match parse(input) {
        Ok(data) => ParseOutcome::Success { data },
        Err(error) => ParseOutcome::Failure { error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    #[test]
    fn empty_input_is_an_empty_config_file() {
        let config = parse("").expect("empty input parses");
        assert_eq!(config.bodies, vec![]);
    }

    #[test]
    fn comments_only_input_is_an_empty_config_file() {
        let config = parse("// just a comment\n# another\n/* block */\n").expect("comments parse");
        assert_eq!(config.bodies, vec![]);
    }

    #[test]
    fn seed_scenario_1_simple_attribute() {
        let config = parse("attr = \"value\"\n").unwrap();
        assert_eq!(config.bodies.len(), 1);
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        assert_eq!(attr.name.value, "attr");
        let Expression::QuotedTemplateExpression(template) = &attr.value else {
            panic!("expected a QuotedTemplateExpression");
        };
        assert_eq!(
            template.parts,
            vec![TemplatePart::TemplateLiteral(TemplateLiteral {
                value: "value".to_string()
            })]
        );
    }

    #[test]
    fn seed_scenario_2_empty_block_with_labels() {
        let config = parse("resource \"aws_instance\" \"web\" {}\n").unwrap();
        assert_eq!(config.bodies.len(), 1);
        let BodyElement::Block(block) = &config.bodies[0] else {
            panic!("expected a Block, not a OneLineBlock, for an empty body");
        };
        assert_eq!(block.block_type.value, "resource");
        assert_eq!(
            block.labels,
            vec![
                Label::StringLiteral(StringLiteral {
                    value: "aws_instance".to_string()
                }),
                Label::StringLiteral(StringLiteral {
                    value: "web".to_string()
                }),
            ]
        );
        assert_eq!(block.bodies, vec![]);
    }

    #[test]
    fn seed_scenario_3_right_leaning_precedence_tree() {
        let config = parse("x = 2 + 3 * 4\n").unwrap();
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        let Expression::BinaryOperator(add) = &attr.value else {
            panic!("expected a top-level BinaryOperator");
        };
        assert_eq!(add.operator, BinaryOp::Add);
        assert_eq!(*add.left, Expression::NumberLiteral(NumberLiteral { value: 2.0 }));
        let Expression::BinaryOperator(mul) = add.right.as_ref() else {
            panic!("expected the right side to be a nested BinaryOperator");
        };
        assert_eq!(mul.operator, BinaryOp::Mul);
        assert_eq!(*mul.left, Expression::NumberLiteral(NumberLiteral { value: 3.0 }));
        assert_eq!(*mul.right, Expression::NumberLiteral(NumberLiteral { value: 4.0 }));
    }

    #[test]
    fn seed_scenario_4_parenthesized_left_operand() {
        let config = parse("x = (2 + 3) * 4\n").unwrap();
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        let Expression::BinaryOperator(mul) = &attr.value else {
            panic!("expected a top-level BinaryOperator");
        };
        assert_eq!(mul.operator, BinaryOp::Mul);
        assert!(matches!(
            mul.left.as_ref(),
            Expression::ParenthesizedExpression(_)
        ));
        assert_eq!(*mul.right, Expression::NumberLiteral(NumberLiteral { value: 4.0 }));
    }

    #[test]
    fn seed_scenario_5_interpolated_template() {
        let config = parse("attr = \"Hello, ${var.name}!\"\n").unwrap();
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        let Expression::QuotedTemplateExpression(template) = &attr.value else {
            panic!("expected a QuotedTemplateExpression");
        };
        assert_eq!(template.parts.len(), 3);
        assert_eq!(
            template.parts[0],
            TemplatePart::TemplateLiteral(TemplateLiteral {
                value: "Hello, ".to_string()
            })
        );
        let TemplatePart::TemplateInterpolation(interp) = &template.parts[1] else {
            panic!("expected a TemplateInterpolation");
        };
        let Expression::GetAttributeOperator(get_attr) = &interp.expression else {
            panic!("expected a GetAttributeOperator");
        };
        assert_eq!(get_attr.key.value, "name");
        assert_eq!(
            *get_attr.target,
            Expression::VariableExpression(VariableExpression {
                name: Identifier::from("var")
            })
        );
        assert_eq!(
            template.parts[2],
            TemplatePart::TemplateLiteral(TemplateLiteral {
                value: "!".to_string()
            })
        );
    }

    #[test]
    fn seed_scenario_6_simple_heredoc() {
        let config = parse("attr = <<EOF\nhello\nEOF\n").unwrap();
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        let Expression::HeredocTemplateExpression(heredoc) = &attr.value else {
            panic!("expected a HeredocTemplateExpression");
        };
        assert_eq!(heredoc.marker.value, "EOF");
        assert!(!heredoc.strip_indent);
        assert_eq!(
            heredoc.template,
            vec![TemplatePart::TemplateLiteral(TemplateLiteral {
                value: "hello".to_string()
            })]
        );
    }

    #[test]
    fn seed_scenario_7_for_tuple_expression() {
        let config = parse("x = [for i in range(3): i if i > 0]\n").unwrap();
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        let Expression::ForExpression(ForExpression::Tuple(for_tuple)) = &attr.value else {
            panic!("expected a ForTupleExpression");
        };
        assert_eq!(for_tuple.intro.iterator.value, "i");
        assert_eq!(for_tuple.intro.value, None);
        assert!(matches!(
            for_tuple.intro.collection.as_ref(),
            Expression::FunctionCallExpression(_)
        ));
        assert_eq!(
            *for_tuple.expression,
            Expression::VariableExpression(VariableExpression {
                name: Identifier::from("i")
            })
        );
        assert!(for_tuple.condition.is_some());
    }

    #[test]
    fn identifier_cannot_start_with_a_digit() {
        assert!(parse("1abc = 1\n").is_err());
    }

    #[test]
    fn identifier_may_contain_hyphens_after_the_first_character() {
        let config = parse("my-attr = 1\n").unwrap();
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        assert_eq!(attr.name.value, "my-attr");
    }

    #[test]
    fn unterminated_string_is_a_parse_error() {
        assert!(parse("attr = \"unterminated\n").is_err());
    }

    #[test]
    fn unbalanced_braces_is_a_parse_error() {
        assert!(parse("block {\n").is_err());
    }

    #[test]
    fn number_with_fraction_and_signed_exponent() {
        let config = parse("x = 1.5e-3\n").unwrap();
        let BodyElement::Attribute(attr) = &config.bodies[0] else {
            panic!("expected an Attribute");
        };
        assert_eq!(attr.value, Expression::NumberLiteral(NumberLiteral { value: 1.5e-3 }));
    }
}
