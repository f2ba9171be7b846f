//! Human-readable rendering of compiled queries.
//!
//! Output is for diagnostics and logs only; it is never handed to a
//! backend, so rendering here carries no injection surface.

use crate::{
    query::{
        compile::CompiledQuery,
        predicate::{CompareOp, Predicate},
        sort::OrderSpec,
    },
    value::{TextMode, TextOp},
};

/// Render a compiled query on one line; parameter slots appear as `$n`.
#[must_use]
pub fn explain(query: &CompiledQuery) -> String {
    let mut out = render_predicate(&query.predicate);
    if let Some(order) = &query.order {
        out.push_str(" order by ");
        out.push_str(&render_order(order));
    }

    out
}

fn render_predicate(predicate: &Predicate) -> String {
    match predicate {
        Predicate::All => "all".to_string(),
        Predicate::And(children) => render_connective(children, " and "),
        Predicate::Or(children) => render_connective(children, " or "),
        Predicate::Not(inner) => format!("not {}", render_predicate(inner)),
        Predicate::Compare { field, op, param } => {
            format!("{field} {} {param}", compare_symbol(*op))
        }
        Predicate::IsNull { field } => format!("{field} is null"),
        Predicate::IsNotNull { field } => format!("{field} is not null"),
        Predicate::Text {
            field,
            op,
            mode,
            param,
        } => format!("{}({field}, {param})", text_name(*op, *mode)),
        Predicate::InSet { field, param } => format!("{field} in {param}"),
        Predicate::Between { field, param } => format!("{field} between {param}"),
    }
}

fn render_connective(children: &[Predicate], joiner: &str) -> String {
    let rendered: Vec<String> = children.iter().map(render_predicate).collect();

    format!("({})", rendered.join(joiner))
}

fn render_order(order: &OrderSpec) -> String {
    let rendered: Vec<String> = order
        .fields
        .iter()
        .map(|(field, direction)| format!("{field} {direction}"))
        .collect();

    rendered.join(", ")
}

const fn compare_symbol(op: CompareOp) -> &'static str {
    match op {
        CompareOp::Eq => "=",
        CompareOp::Ne => "!=",
        CompareOp::Lt => "<",
        CompareOp::Lte => "<=",
        CompareOp::Gt => ">",
        CompareOp::Gte => ">=",
    }
}

const fn text_name(op: TextOp, mode: TextMode) -> &'static str {
    match (op, mode) {
        (TextOp::StartsWith, TextMode::Cs) => "startswith",
        (TextOp::StartsWith, TextMode::Ci) => "startswith_ci",
        (TextOp::EndsWith, TextMode::Cs) => "endswith",
        (TextOp::EndsWith, TextMode::Ci) => "endswith_ci",
        (TextOp::Contains, TextMode::Cs) => "contains",
        (TextOp::Contains, TextMode::Ci) => "contains_ci",
    }
}

/// TESTS
///
