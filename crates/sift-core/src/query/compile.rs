use crate::{
    query::{
        filter::{DynamicQuery, FilterNode, Logic},
        flatten::{ParamSlot, Params, flatten, params_of},
        ops::{FilterOperator, ParamShape, RenderClass},
        predicate::{Predicate, normalize},
        schema::{FieldType, SchemaInfo},
        sort::{OrderSpec, SortError, compile_sort},
    },
    value::TextMode,
};
use thiserror::Error as ThisError;

///
/// CompiledQuery
///
/// Output of compilation: a backend-agnostic predicate, the opaque
/// parameter array it binds, and an optional order spec. Nothing here is
/// backend syntax; interpretation or translation happens in the applier.
///

#[derive(Clone, Debug, PartialEq)]
pub struct CompiledQuery {
    pub predicate: Predicate,
    pub params: Params,
    pub order: Option<OrderSpec>,
}

impl CompiledQuery {
    /// True when the query constrains and orders nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.predicate == Predicate::All && self.order.is_none()
    }
}

///
/// CompileError
///
/// Structural failures detected during compilation, before any
/// data-source interaction. Compilation is all-or-nothing: the first
/// failure aborts it, and the caller surfaces the error as a client-input
/// validation failure, not a server fault.
///

#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum CompileError {
    #[error("filter node has an empty field name")]
    EmptyField,

    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' has sub-filters but no logic connective")]
    MissingLogic { field: String },

    #[error("operator {op} is not valid for field '{field}'")]
    OperatorUnsupported { field: String, op: FilterOperator },

    #[error("invalid literal '{literal}' for field '{field}'")]
    InvalidLiteral { field: String, literal: String },

    #[error("between on field '{field}' requires exactly two comma-separated bounds, got {got}")]
    MalformedRange { field: String, got: usize },

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// Compile a dynamic query against the given schema.
///
/// Every structural error is detected here, synchronously, before any
/// data-source interaction. An absent filter compiles to `Predicate::All`
/// and an absent sort list to no ordering: the identity transform.
pub fn compile(query: &DynamicQuery, schema: &SchemaInfo) -> Result<CompiledQuery, CompileError> {
    let (predicate, params) = match &query.filter {
        Some(root) => compile_filter(root, schema)?,
        None => (Predicate::All, Params::default()),
    };
    let order = compile_sort(&query.sort, schema)?;

    Ok(CompiledQuery {
        predicate,
        params,
        order,
    })
}

/// Compile one filter tree into a normalized predicate and its parameter
/// array.
///
/// The whole tree is flattened once up front; parameter slots are assigned
/// in pre-order so they stay consistent across nested compile calls and
/// index directly into the flat values array.
pub fn compile_filter(
    root: &FilterNode,
    schema: &SchemaInfo,
) -> Result<(Predicate, Params), CompileError> {
    let params = params_of(&flatten(root));

    let mut cursor = SlotCursor::default();
    let predicate = compile_node(root, schema, &mut cursor)?;
    debug_assert_eq!(cursor.assigned(), params.len());

    Ok((normalize(&predicate), params))
}

// Pre-order slot assignment mirrors `flatten`: the n-th node visited owns
// slot n.
#[derive(Default)]
struct SlotCursor(usize);

impl SlotCursor {
    fn next(&mut self) -> ParamSlot {
        let slot = ParamSlot(self.0);
        self.0 += 1;

        slot
    }

    const fn assigned(&self) -> usize {
        self.0
    }
}

fn compile_node(
    node: &FilterNode,
    schema: &SchemaInfo,
    cursor: &mut SlotCursor,
) -> Result<Predicate, CompileError> {
    let slot = cursor.next();

    if node.field.is_empty() {
        return Err(CompileError::EmptyField);
    }
    let Some(field_type) = schema.field(&node.field) else {
        return Err(CompileError::UnknownField {
            field: node.field.clone(),
        });
    };

    let own = compile_leaf(node, field_type, slot)?;

    if node.children.is_empty() {
        // A leaf with nothing to render constrains nothing.
        return Ok(own.unwrap_or(Predicate::All));
    }

    let Some(logic) = node.logic else {
        return Err(CompileError::MissingLogic {
            field: node.field.clone(),
        });
    };

    let mut parts = Vec::with_capacity(node.children.len() + 1);
    parts.extend(own);
    for child in &node.children {
        parts.push(compile_node(child, schema, cursor)?);
    }

    Ok(match logic {
        Logic::And => Predicate::And(parts),
        Logic::Or => Predicate::Or(parts),
    })
}

// Render the node's own expression, if it has one. `None` means the node
// contributes no constraint of its own (grouping-only node or the
// empty-leaf corner: a valued operator with no value).
fn compile_leaf(
    node: &FilterNode,
    field_type: FieldType,
    slot: ParamSlot,
) -> Result<Option<Predicate>, CompileError> {
    let spec = node.operator.spec();

    if let RenderClass::NullCheck { negated } = spec.class {
        // Null checks are unary; a stray value is ignored.
        let field = node.field.clone();
        return Ok(Some(if negated {
            Predicate::IsNotNull { field }
        } else {
            Predicate::IsNull { field }
        }));
    }

    let Some(value) = node.value.as_deref() else {
        return Ok(None);
    };

    check_literal(&node.field, field_type, value, spec.shape)?;

    let field = node.field.clone();
    let predicate = match spec.class {
        RenderClass::Compare(op) => Predicate::Compare {
            field,
            op,
            param: slot,
        },
        RenderClass::Text { op, negated } => {
            if !field_type.is_text() {
                return Err(CompileError::OperatorUnsupported {
                    field,
                    op: node.operator,
                });
            }
            let mode = if node.case_sensitive {
                TextMode::Cs
            } else {
                TextMode::Ci
            };
            let text = Predicate::Text {
                field,
                op,
                mode,
                param: slot,
            };
            if negated { Predicate::not(text) } else { text }
        }
        RenderClass::Membership => Predicate::InSet { field, param: slot },
        RenderClass::Range => Predicate::Between { field, param: slot },
        // Handled above; kept for exhaustiveness.
        RenderClass::NullCheck { .. } => return Ok(None),
    };

    Ok(Some(predicate))
}

// Literal compatibility per parameter shape: every bound and list element
// must parse into the field's family. Text fields accept any literal.
fn check_literal(
    field: &str,
    field_type: FieldType,
    value: &str,
    shape: ParamShape,
) -> Result<(), CompileError> {
    match shape {
        ParamShape::None => Ok(()),
        ParamShape::Single => ensure_parses(field, field_type, value),
        ParamShape::List => {
            for item in value.split(',') {
                ensure_parses(field, field_type, item)?;
            }
            Ok(())
        }
        ParamShape::Pair => {
            let bounds: Vec<&str> = value.split(',').collect();
            if bounds.len() != 2 {
                return Err(CompileError::MalformedRange {
                    field: field.to_string(),
                    got: bounds.len(),
                });
            }
            ensure_parses(field, field_type, bounds[0])?;
            ensure_parses(field, field_type, bounds[1])
        }
    }
}

fn ensure_parses(field: &str, field_type: FieldType, literal: &str) -> Result<(), CompileError> {
    if field_type.accepts_literal(literal) {
        Ok(())
    } else {
        Err(CompileError::InvalidLiteral {
            field: field.to_string(),
            literal: literal.to_string(),
        })
    }
}
