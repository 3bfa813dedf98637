use pest::iterators::Pair;

use super::{Expression, ForIntro, Identifier};
use crate::escape::decode_template_escapes;
use crate::parser::Rule;

/// `TemplateLiteral { value: string }` — a run of plain text inside a
/// template, already escape-decoded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateLiteral {
    pub value: String,
}

/// `strip: { left: bool, right: bool }` on a `TemplateInterpolation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpolationStrip {
    pub left: bool,
    pub right: bool,
}

/// `TemplateInterpolation { expression, strip: { left, right } }` — `${~?expr~?}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateInterpolation {
    pub expression: Expression,
    pub strip: InterpolationStrip,
}

/// A single `%{tag}`'s own `~` markers (`start` = before the tag's content,
/// `end` = after it, each only meaningful relative to that one tag).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripMarkers {
    pub start: bool,
    pub end: bool,
}

/// `strip: { if:{start,end}, else:{start,end}|null, endif:{start,end} }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateIfStrip {
    #[cfg_attr(feature = "serde", serde(rename = "if"))]
    pub if_tag: StripMarkers,
    #[cfg_attr(feature = "serde", serde(rename = "else"))]
    pub else_tag: Option<StripMarkers>,
    pub endif: StripMarkers,
}

/// `TemplateIf { condition, then, else, strip }` — `%{if}…%{else}…%{endif}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateIf {
    pub condition: Expression,
    pub then: Vec<TemplatePart>,
    #[cfg_attr(feature = "serde", serde(rename = "else"))]
    pub else_: Option<Vec<TemplatePart>>,
    pub strip: TemplateIfStrip,
}

/// `strip: { for:{start,end}, endfor:{start,end} }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateForStrip {
    #[cfg_attr(feature = "serde", serde(rename = "for"))]
    pub for_tag: StripMarkers,
    pub endfor: StripMarkers,
}

/// The `%{for}` directive's intro shares `ForIntro`'s shape but names its
/// first binding `key` rather than `iterator`, per the data model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateForIntro {
    pub key: Identifier,
    pub value: Option<Identifier>,
    pub collection: Box<Expression>,
}

/// `TemplateFor { intro, body, strip }` — `%{for}…%{endfor}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateFor {
    pub intro: TemplateForIntro,
    pub body: Vec<TemplatePart>,
    pub strip: TemplateForStrip,
}

/// One element of a template's part list. Flattened here rather than
/// through an intermediate `TemplateDirective` wrapper: `TemplateIf` and
/// `TemplateFor` are themselves discriminator tags (see §6's tag list),
/// "directive" is just the spec's umbrella term for the two.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum TemplatePart {
    TemplateLiteral(TemplateLiteral),
    TemplateInterpolation(TemplateInterpolation),
    TemplateIf(TemplateIf),
    TemplateFor(TemplateFor),
}

impl TemplatePart {
    fn from_quoted_part_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::quotedTemplatePart);
        Self::from_inner_pair(
            pair.into_inner()
                .next()
                .expect("quotedTemplatePart always wraps exactly one alternative"),
        )
    }

    fn from_heredoc_part_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::heredocPart);
        Self::from_inner_pair(
            pair.into_inner()
                .next()
                .expect("heredocPart always wraps exactly one alternative"),
        )
    }

    fn from_inner_pair(pair: Pair<Rule>) -> Self {
        match pair.as_rule() {
            Rule::interpolation => {
                TemplatePart::TemplateInterpolation(template_interpolation_from_pair(pair))
            }
            Rule::directiveIf => TemplatePart::TemplateIf(template_if_from_pair(pair)),
            Rule::directiveFor => TemplatePart::TemplateFor(template_for_from_pair(pair)),
            Rule::quotedLiteralRun | Rule::heredocLiteralRun | Rule::templateBodyLiteralRun => {
                TemplatePart::TemplateLiteral(TemplateLiteral {
                    value: decode_template_escapes(pair.as_str()),
                })
            }
            rule => unreachable!("unexpected rule {rule:?} inside a template part"),
        }
    }

    fn vec_from_template_body_pair(pair: Pair<Rule>) -> Vec<TemplatePart> {
        assert_eq!(pair.as_rule(), Rule::templateBody);
        pair.into_inner().map(TemplatePart::from_inner_pair).collect()
    }
}

fn strip_flag(pair: Pair<Rule>) -> bool {
    pair.as_str() == "~"
}

fn template_interpolation_from_pair(pair: Pair<Rule>) -> TemplateInterpolation {
    assert_eq!(pair.as_rule(), Rule::interpolation);
    let mut inner = pair.into_inner();
    let left = strip_flag(inner.next().expect("interpolation always carries stripLeft"));
    let expression =
        Expression::from_pair(inner.next().expect("interpolation always carries an expression"));
    let right = strip_flag(inner.next().expect("interpolation always carries stripRight"));
    TemplateInterpolation {
        expression,
        strip: InterpolationStrip { left, right },
    }
}

fn directive_else_from_pair(pair: Pair<Rule>) -> (bool, bool, Vec<TemplatePart>) {
    assert_eq!(pair.as_rule(), Rule::directiveElse);
    let mut inner = pair.into_inner();
    let start = strip_flag(inner.next().expect("directiveElse always carries stripLeft"));
    let end = strip_flag(inner.next().expect("directiveElse always carries stripRight"));
    let body = TemplatePart::vec_from_template_body_pair(
        inner.next().expect("directiveElse always carries a templateBody"),
    );
    (start, end, body)
}

fn template_if_from_pair(pair: Pair<Rule>) -> TemplateIf {
    assert_eq!(pair.as_rule(), Rule::directiveIf);
    let mut inner = pair.into_inner();
    let if_start =
        strip_flag(inner.next().expect("directiveIf always carries the if tag's stripLeft"));
    let condition =
        Expression::from_pair(inner.next().expect("directiveIf always carries a condition"));
    let if_end =
        strip_flag(inner.next().expect("directiveIf always carries the if tag's stripRight"));
    let then = TemplatePart::vec_from_template_body_pair(
        inner.next().expect("directiveIf always carries a then templateBody"),
    );

    let mut next = inner
        .next()
        .expect("directiveIf always carries an endif tag, possibly preceded by an else branch");
    let mut else_ = None;
    let mut else_tag = None;
    if next.as_rule() == Rule::directiveElse {
        let (start, end, body) = directive_else_from_pair(next);
        else_ = Some(body);
        else_tag = Some(StripMarkers { start, end });
        next = inner
            .next()
            .expect("directiveIf with an else branch still carries an endif tag");
    }
    let endif_start = strip_flag(next);
    let endif_end = strip_flag(
        inner
            .next()
            .expect("directiveIf always carries the endif tag's stripRight"),
    );

    TemplateIf {
        condition,
        then,
        else_,
        strip: TemplateIfStrip {
            if_tag: StripMarkers {
                start: if_start,
                end: if_end,
            },
            else_tag,
            endif: StripMarkers {
                start: endif_start,
                end: endif_end,
            },
        },
    }
}

fn template_for_from_pair(pair: Pair<Rule>) -> TemplateFor {
    assert_eq!(pair.as_rule(), Rule::directiveFor);
    let mut inner = pair.into_inner();
    let for_start =
        strip_flag(inner.next().expect("directiveFor always carries the for tag's stripLeft"));
    let raw_intro =
        ForIntro::from_pair(inner.next().expect("directiveFor always carries a forIntro"));
    let intro = TemplateForIntro {
        key: raw_intro.iterator,
        value: raw_intro.value,
        collection: raw_intro.collection,
    };
    let for_end =
        strip_flag(inner.next().expect("directiveFor always carries the for tag's stripRight"));
    let body = TemplatePart::vec_from_template_body_pair(
        inner.next().expect("directiveFor always carries a templateBody"),
    );
    let endfor_start = strip_flag(
        inner
            .next()
            .expect("directiveFor always carries the endfor tag's stripLeft"),
    );
    let endfor_end = strip_flag(
        inner
            .next()
            .expect("directiveFor always carries the endfor tag's stripRight"),
    );

    TemplateFor {
        intro,
        body,
        strip: TemplateForStrip {
            for_tag: StripMarkers {
                start: for_start,
                end: for_end,
            },
            endfor: StripMarkers {
                start: endfor_start,
                end: endfor_end,
            },
        },
    }
}

/// `QuotedTemplateExpression { parts: QuotedTemplateContent[] }` — a `"..."`
/// template literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuotedTemplateExpression {
    pub parts: Vec<TemplatePart>,
}

impl QuotedTemplateExpression {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::quotedTemplateExpr);
        let parts = pair
            .into_inner()
            .map(TemplatePart::from_quoted_part_pair)
            .collect();
        QuotedTemplateExpression { parts }
    }
}

/// `HeredocTemplateExpression { marker, stripIndent, template }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeredocTemplateExpression {
    pub marker: Identifier,
    #[cfg_attr(feature = "serde", serde(rename = "stripIndent"))]
    pub strip_indent: bool,
    pub template: Vec<TemplatePart>,
}

impl HeredocTemplateExpression {
    pub(crate) fn from_pair(pair: Pair<Rule>) -> Self {
        assert_eq!(pair.as_rule(), Rule::heredocTemplateExpr);
        let mut inner = pair.into_inner();
        let strip_flag_pair = inner
            .next()
            .expect("heredocTemplateExpr always carries heredocStripFlag");
        assert_eq!(strip_flag_pair.as_rule(), Rule::heredocStripFlag);
        let strip_indent = strip_flag_pair.as_str() == "-";
        let marker = Identifier::from_pair(
            inner
                .next()
                .expect("heredocTemplateExpr always carries its marker identifier"),
        );
        let template = inner.map(TemplatePart::from_heredoc_part_pair).collect();
        HeredocTemplateExpression {
            marker,
            strip_indent,
            template,
        }
    }
}
