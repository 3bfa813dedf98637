//! Template and heredoc emission, honoring `~` strip markers and the
//! template-only `$$`/`%%` escapes.

use crate::ast::{
    HeredocTemplateExpression, QuotedTemplateExpression, StripMarkers, TemplateFor,
    TemplateForIntro, TemplateIf, TemplateInterpolation, TemplatePart,
};

use super::expr::{encode_template_literal, stringify_expression};

pub(crate) fn stringify_quoted_template(template: &QuotedTemplateExpression) -> String {
    format!("\"{}\"", stringify_parts(&template.parts))
}

pub(crate) fn stringify_heredoc(heredoc: &HeredocTemplateExpression) -> String {
    let flag = if heredoc.strip_indent { "-" } else { "" };
    let body = stringify_parts(&heredoc.template);
    format!("<<{flag}{}\n{body}\n{}", heredoc.marker.value, heredoc.marker.value)
}

fn stringify_parts(parts: &[TemplatePart]) -> String {
    parts.iter().map(stringify_part).collect()
}

fn stringify_part(part: &TemplatePart) -> String {
    match part {
        TemplatePart::TemplateLiteral(literal) => encode_template_literal(&literal.value),
        TemplatePart::TemplateInterpolation(interp) => stringify_interpolation(interp),
        TemplatePart::TemplateIf(if_directive) => stringify_if(if_directive),
        TemplatePart::TemplateFor(for_directive) => stringify_for(for_directive),
    }
}

fn stringify_interpolation(interp: &TemplateInterpolation) -> String {
    let mut out = String::from("${");
    if interp.strip.left {
        out.push('~');
    }
    out.push_str(&stringify_expression(&interp.expression));
    if interp.strip.right {
        out.push('~');
    }
    out.push('}');
    out
}

fn push_directive_tag(out: &mut String, markers: StripMarkers, content: &str) {
    out.push_str("%{");
    if markers.start {
        out.push('~');
    }
    out.push_str(content);
    if markers.end {
        out.push('~');
    }
    out.push('}');
}

fn stringify_if(directive: &TemplateIf) -> String {
    let mut out = String::new();
    push_directive_tag(
        &mut out,
        directive.strip.if_tag,
        &format!("if {}", stringify_expression(&directive.condition)),
    );
    out.push_str(&stringify_parts(&directive.then));
    if let (Some(else_body), Some(else_tag)) = (&directive.else_, directive.strip.else_tag) {
        push_directive_tag(&mut out, else_tag, "else");
        out.push_str(&stringify_parts(else_body));
    }
    push_directive_tag(&mut out, directive.strip.endif, "endif");
    out
}

fn stringify_for_intro(intro: &TemplateForIntro) -> String {
    let mut out = format!("for {}", intro.key.value);
    if let Some(value) = &intro.value {
        out.push_str(&format!(", {}", value.value));
    }
    out.push_str(&format!(" in {}:", stringify_expression(&intro.collection)));
    out
}

fn stringify_for(directive: &TemplateFor) -> String {
    let mut out = String::new();
    push_directive_tag(&mut out, directive.strip.for_tag, &stringify_for_intro(&directive.intro));
    out.push_str(&stringify_parts(&directive.body));
    push_directive_tag(&mut out, directive.strip.endfor, "endfor");
    out
}
