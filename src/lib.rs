//! Parser, AST and stringifier for the HashiCorp Configuration Language
//! (HCL) native syntax.
//!
//! Three components, one-way data flow: grammar/parser turns source text
//! into an AST, the optional validator confirms a tree's shape, the
//! stringifier turns a tree back into source text. No evaluation, no
//! variable resolution, no HCL JSON syntax.

pub mod ast;
mod error;
mod escape;
mod parser;
mod stringifier;
mod validator;

pub use error::{ParseError, Position};
pub use parser::{parse, safe_parse, ParseOutcome};
pub use stringifier::stringify;
pub use validator::{validate, Issue};

#[cfg(test)]
mod property_tests {
    use super::*;
    use ast::*;
    use proptest::prelude::*;

    fn arb_identifier_text() -> impl Strategy<Value = String> {
        "[a-zA-Z_][a-zA-Z0-9_-]{0,7}".prop_map(|s| s)
    }

    fn arb_leaf_expression() -> impl Strategy<Value = Expression> {
        prop_oneof![
            any::<bool>().prop_map(|value| Expression::BooleanLiteral(BooleanLiteral { value })),
            (-1000i32..1000).prop_map(|value| Expression::NumberLiteral(NumberLiteral {
                value: value as f64
            })),
            Just(Expression::NullLiteral(NullLiteral::default())),
            arb_identifier_text().prop_map(|name| Expression::VariableExpression(
                VariableExpression {
                    name: Identifier::from(name.as_str())
                }
            )),
            "[a-zA-Z0-9 ]{0,12}".prop_map(|value| Expression::QuotedTemplateExpression(
                QuotedTemplateExpression {
                    parts: vec![TemplatePart::TemplateLiteral(TemplateLiteral { value })],
                }
            )),
        ]
    }

    // `BinaryOperator` only ever takes leaf operands here, never another
    // `BinaryOperator`: the parser's right-leaning grammar (`hcl.pest`'s
    // `addExpr`/`mulExpr`/...) never produces a bare, unparenthesized
    // binary-in-binary nesting the stringifier's asymmetric parenthesization
    // rule would need to re-derive exactly, so generating one here could
    // build a tree `parse` itself can never shape. Recursion still exercises
    // `TupleValue`/`ParenthesizedExpression`, whose round trip doesn't
    // depend on operator precedence at all.
    fn arb_expression() -> impl Strategy<Value = Expression> {
        arb_leaf_expression().prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                (arb_leaf_expression(), arb_leaf_expression()).prop_map(|(left, right)| {
                    Expression::BinaryOperator(BinaryOperator {
                        operator: BinaryOp::Add,
                        left: Box::new(left),
                        right: Box::new(right),
                    })
                }),
                prop::collection::vec(inner.clone(), 0..4)
                    .prop_map(|elements| Expression::TupleValue(TupleValue { elements })),
                inner
                    .clone()
                    .prop_map(|expr| Expression::ParenthesizedExpression(ParenthesizedExpression {
                        expression: Box::new(expr),
                    })),
            ]
        })
    }

    fn arb_attribute() -> impl Strategy<Value = BodyElement> {
        (arb_identifier_text(), arb_expression()).prop_map(|(name, value)| {
            BodyElement::Attribute(Attribute {
                name: Identifier::from(name.as_str()),
                value,
            })
        })
    }

    fn arb_config_file() -> impl Strategy<Value = ConfigFile> {
        prop::collection::vec(arb_attribute(), 0..6).prop_map(|bodies| ConfigFile { bodies })
    }

    proptest! {
        /// `validate(parse(s))` succeeds for every `s` `parse` accepts.
        #[test]
        fn parse_output_always_validates(ast in arb_config_file()) {
            let text = stringify(&ast);
            if let Ok(reparsed) = parse(&text) {
                prop_assert_eq!(validate(&reparsed), Ok(()));
            }
        }

        /// `parse(stringify(A)) == A` for arbitrary `A`.
        #[test]
        fn stringify_then_parse_round_trips(ast in arb_config_file()) {
            let text = stringify(&ast);
            let reparsed = parse(&text).expect("stringified output always reparses");
            prop_assert_eq!(reparsed, ast);
        }

        /// `parse(stringify(parse(s))) == parse(s)`, i.e. round-tripping
        /// through text twice is idempotent at the AST level.
        #[test]
        fn double_round_trip_is_idempotent(ast in arb_config_file()) {
            let once = parse(&stringify(&ast)).expect("first round trip reparses");
            let twice = parse(&stringify(&once)).expect("second round trip reparses");
            prop_assert_eq!(once, twice);
        }
    }
}
