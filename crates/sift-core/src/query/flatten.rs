use crate::query::filter::FilterNode;
use derive_more::Deref;
use std::fmt;

///
/// ParamSlot
///
/// Position of a filter node in its tree's flattened list. A node's slot
/// binds its raw value as an opaque backend parameter; the predicate AST
/// carries slots only, never literals.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ParamSlot(pub usize);

impl fmt::Display for ParamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

///
/// Params
///
/// Order-stable parameter array for one compiled filter tree: the
/// original, unmodified value string of each flattened node, `None` where
/// the node carries no value. Handed to backends as-is; values are never
/// spliced into predicate structure.
///

#[derive(Clone, Debug, Default, Deref, PartialEq)]
pub struct Params(Vec<Option<String>>);

impl Params {
    #[must_use]
    pub const fn new(values: Vec<Option<String>>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn resolve(&self, slot: ParamSlot) -> Option<&str> {
        self.0.get(slot.0).and_then(Option::as_deref)
    }
}

/// Flatten a filter tree into pre-order: root first, then each child's
/// subtree in declaration order, depth-first.
///
/// Deterministic and order-stable: the same tree shape always produces the
/// same flattening, and a node's position in the output is its parameter
/// slot. Callers never need references into the tree at bind time, only
/// offsets into the flat values array.
#[must_use]
pub fn flatten(root: &FilterNode) -> Vec<&FilterNode> {
    let mut nodes = Vec::with_capacity(root.node_count());
    push_pre_order(root, &mut nodes);

    nodes
}

fn push_pre_order<'a>(node: &'a FilterNode, out: &mut Vec<&'a FilterNode>) {
    out.push(node);
    for child in &node.children {
        push_pre_order(child, out);
    }
}

/// Read the parameter array off a flattened node list in slot order.
#[must_use]
pub fn params_of(nodes: &[&FilterNode]) -> Params {
    Params(nodes.iter().map(|node| node.value.clone()).collect())
}

/// TESTS
///
