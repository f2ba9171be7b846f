use crate::query::predicate::ast::Predicate;

/// Normalize a predicate into a canonical, deterministic form.
///
/// Normalization guarantees:
/// - Logical equivalence is preserved
/// - Nested AND / OR nodes are flattened
/// - `All` neutral elements are removed from AND; `All` absorbs OR
/// - Single-child connectives collapse to the child
/// - Double negation is eliminated
///
/// Child order is preserved, so flattened parameter slots keep their
/// pre-order positions. Used for stable equality checks and predictable
/// test behavior.
#[must_use]
pub fn normalize(predicate: &Predicate) -> Predicate {
    match predicate {
        Predicate::And(children) => normalize_connective(children, Connective::And),
        Predicate::Or(children) => normalize_connective(children, Connective::Or),
        Predicate::Not(inner) => normalize_not(inner),
        leaf => leaf.clone(),
    }
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum Connective {
    And,
    Or,
}

fn normalize_connective(children: &[Predicate], connective: Connective) -> Predicate {
    let mut flat = Vec::with_capacity(children.len());

    for child in children {
        match normalize(child) {
            Predicate::All => {
                // All is neutral under AND and absorbing under OR.
                if connective == Connective::Or {
                    return Predicate::All;
                }
            }
            Predicate::And(grand) if connective == Connective::And => flat.extend(grand),
            Predicate::Or(grand) if connective == Connective::Or => flat.extend(grand),
            other => flat.push(other),
        }
    }

    if flat.is_empty() {
        // AND of nothing is no constraint; OR of nothing stays
        // unsatisfiable, matching evaluation.
        return match connective {
            Connective::And => Predicate::All,
            Connective::Or => Predicate::Or(flat),
        };
    }
    if flat.len() == 1 {
        return flat.swap_remove(0);
    }

    match connective {
        Connective::And => Predicate::And(flat),
        Connective::Or => Predicate::Or(flat),
    }
}

///
/// Normalize a NOT expression.
///
/// Eliminates double negation:
///     NOT (NOT x)  →  x
///
fn normalize_not(inner: &Predicate) -> Predicate {
    match normalize(inner) {
        Predicate::Not(double) => *double,
        normalized => Predicate::Not(Box::new(normalized)),
    }
}

/// TESTS
///

#[cfg(test)]
mod tests {
    use super::normalize;
    use crate::query::{
        flatten::ParamSlot,
        predicate::{CompareOp, Predicate},
    };

    fn cmp(field: &str, slot: usize) -> Predicate {
        Predicate::compare(field, CompareOp::Eq, ParamSlot(slot))
    }

    #[test]
    fn nested_same_connective_nodes_flatten_in_order() {
        let nested = Predicate::and(vec![
            cmp("a", 0),
            Predicate::and(vec![cmp("b", 1), cmp("c", 2)]),
        ]);

        assert_eq!(
            normalize(&nested),
            Predicate::and(vec![cmp("a", 0), cmp("b", 1), cmp("c", 2)])
        );
    }

    #[test]
    fn all_is_neutral_under_and() {
        let pred = Predicate::and(vec![Predicate::All, cmp("a", 0)]);

        assert_eq!(normalize(&pred), cmp("a", 0));
    }

    #[test]
    fn all_absorbs_or() {
        let pred = Predicate::or(vec![cmp("a", 0), Predicate::All]);

        assert_eq!(normalize(&pred), Predicate::All);
    }

    #[test]
    fn empty_and_means_no_constraint() {
        assert_eq!(normalize(&Predicate::and(vec![])), Predicate::All);
        assert_eq!(
            normalize(&Predicate::and(vec![Predicate::All])),
            Predicate::All
        );
    }

    #[test]
    fn empty_or_stays_unsatisfiable() {
        assert_eq!(normalize(&Predicate::or(vec![])), Predicate::or(vec![]));
    }

    #[test]
    fn double_negation_is_eliminated() {
        let pred = Predicate::not(Predicate::not(cmp("a", 0)));

        assert_eq!(normalize(&pred), cmp("a", 0));
    }

    #[test]
    fn bit_operators_build_binary_connectives() {
        assert_eq!(
            cmp("a", 0) & cmp("b", 1),
            Predicate::and(vec![cmp("a", 0), cmp("b", 1)])
        );
        assert_eq!(
            cmp("a", 0) | cmp("b", 1),
            Predicate::or(vec![cmp("a", 0), cmp("b", 1)])
        );
    }

    #[test]
    fn mixed_connectives_do_not_flatten_across_kinds() {
        let pred = Predicate::and(vec![
            cmp("a", 0),
            Predicate::or(vec![cmp("b", 1), cmp("c", 2)]),
        ]);

        assert_eq!(normalize(&pred), pred);
    }
}
