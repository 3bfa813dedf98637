use pest::iterators::Pair;

use crate::parser::Rule;

/// `Identifier { value: string }`.
///
/// Grounded on the teacher's `ast/identifier.rs`: a single-field newtype
/// built straight off the matched span, no decoding needed since the
/// grammar's `identStart`/`identCont` classes already enforce the invariant
/// (non-empty, starts with a letter/underscore/high-unicode byte).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    pub value: String,
}

impl Identifier {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::identifier);
        Identifier {
            value: pair.as_str().to_string(),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier {
            value: value.to_string(),
        }
    }
}
