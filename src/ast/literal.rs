use pest::iterators::Pair;

use crate::escape::decode_string_escapes;
use crate::parser::Rule;

/// `StringLiteral { value: string }` — bare-decoded, no surrounding quotes.
///
/// Only produced directly by the grammar for block labels
/// (`quotedStringLiteral`); string-valued expressions always arrive as a
/// `QuotedTemplateExpression` with a single `TemplateLiteral` part (seed
/// scenario 1), even for templates with no interpolation. The schema still
/// allows a bare `StringLiteral` as an `Expression` for hand-built trees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StringLiteral {
    pub value: String,
}

impl StringLiteral {
    pub(crate) fn from_quoted_string_literal_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::quotedStringLiteral);
        let inner = pair
            .into_inner()
            .next()
            .expect("quotedStringLiteral always wraps quotedStringInner");
        StringLiteral {
            value: decode_string_escapes(inner.as_str()),
        }
    }
}

/// `NumberLiteral { value: number }` — parsed as an IEEE-754 double.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberLiteral {
    pub value: f64,
}

impl NumberLiteral {
    pub(crate) fn from_number_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::number);
        NumberLiteral {
            value: pair
                .as_str()
                .parse()
                .expect("number rule only matches valid float syntax"),
        }
    }

    /// Builds the `NumberLiteral` key of a `LegacyIndexOperator` (`.0`, `.1`, …).
    pub(crate) fn from_legacy_index_digits_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::legacyIndexDigits);
        NumberLiteral {
            value: pair
                .as_str()
                .parse()
                .expect("legacyIndexDigits only matches ASCII digits"),
        }
    }
}

/// `BooleanLiteral { value: bool }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BooleanLiteral {
    pub value: bool,
}

impl BooleanLiteral {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::boolean);
        BooleanLiteral {
            value: pair.as_str() == "true",
        }
    }
}

/// `NullLiteral { value: null }`. `value` carries no information — the
/// grammar already narrowed the alternative to exactly this shape by the
/// time this is constructed — but the field stays so the `serde` shape
/// matches its sibling literals (`{"type":"NullLiteral","value":null}`
/// instead of dropping the key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NullLiteral {
    pub value: (),
}

impl NullLiteral {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::nullLiteral);
        NullLiteral { value: () }
    }
}
