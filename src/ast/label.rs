use pest::iterators::Pair;

use super::{Identifier, StringLiteral};
use crate::parser::Rule;

/// `Label` is the sum `Identifier | StringLiteral`.
///
/// In practice the grammar only ever emits the `StringLiteral` variant (bare
/// identifier labels are not native HCL syntax, block labels are always
/// quoted), but the `Identifier` variant is kept in the schema for
/// hand-built trees, matching the data model's stated sum type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Label {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
}

impl Label {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::label);
        let inner = pair
            .into_inner()
            .next()
            .expect("label always wraps identifier or quotedStringLiteral");
        match inner.as_rule() {
            Rule::identifier => Label::Identifier(Identifier::from_pair(inner)),
            Rule::quotedStringLiteral => {
                Label::StringLiteral(StringLiteral::from_quoted_string_literal_pair(inner))
            }
            rule => unreachable!("unexpected rule {rule:?} inside label"),
        }
    }
}
