use pest::iterators::Pair;

use super::BodyElement;
use crate::parser::Rule;

/// The root node: an ordered sequence of body elements in source order.
/// Empty input, and input containing only comments/whitespace, both parse
/// to `ConfigFile { bodies: vec![] }`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfigFile {
    pub bodies: Vec<BodyElement>,
}

impl ConfigFile {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::configFile);
        let bodies = pair
            .into_inner()
            .filter(|p| p.as_rule() == Rule::bodyElement)
            .map(BodyElement::from_pair)
            .collect();
        ConfigFile { bodies }
    }
}
