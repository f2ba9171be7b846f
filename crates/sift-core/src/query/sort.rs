use crate::query::{
    filter::{OrderDirection, SortCriterion},
    schema::SchemaInfo,
};
use thiserror::Error as ThisError;

///
/// OrderSpec
///
/// Validated multi-key ordering directive: criteria in declaration order,
/// earlier fields take precedence and later fields break ties.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderSpec {
    pub fields: Vec<(String, OrderDirection)>,
}

///
/// SortError
///
/// Structural failures while lowering sort criteria. Detected before any
/// data-source interaction.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SortError {
    #[error("sort criterion has an empty field name")]
    EmptyField,

    #[error("unknown sort field '{field}'")]
    UnknownField { field: String },
}

/// Validate and lower sort criteria into an order spec.
///
/// An empty list yields `None`: source order is preserved.
pub fn compile_sort(
    criteria: &[SortCriterion],
    schema: &SchemaInfo,
) -> Result<Option<OrderSpec>, SortError> {
    if criteria.is_empty() {
        return Ok(None);
    }

    let mut fields = Vec::with_capacity(criteria.len());
    for criterion in criteria {
        if criterion.field.is_empty() {
            return Err(SortError::EmptyField);
        }
        if schema.field(&criterion.field).is_none() {
            return Err(SortError::UnknownField {
                field: criterion.field.clone(),
            });
        }
        fields.push((criterion.field.clone(), criterion.direction));
    }

    Ok(Some(OrderSpec { fields }))
}

/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{SortError, compile_sort};
    use crate::query::{
        filter::{OrderDirection, SortCriterion},
        schema::{FieldType, SchemaInfo},
    };

    fn schema() -> SchemaInfo {
        SchemaInfo::new()
            .with_field("age", FieldType::Int)
            .with_field("name", FieldType::Text)
    }

    #[test]
    fn empty_criteria_preserve_source_order() {
        assert_eq!(compile_sort(&[], &schema()), Ok(None));
    }

    #[test]
    fn criteria_lower_in_declaration_order() {
        let spec = compile_sort(
            &[SortCriterion::asc("age"), SortCriterion::desc("name")],
            &schema(),
        )
        .expect("valid criteria")
        .expect("non-empty spec");

        assert_eq!(
            spec.fields,
            vec![
                ("age".to_string(), OrderDirection::Asc),
                ("name".to_string(), OrderDirection::Desc),
            ]
        );
    }

    #[test]
    fn empty_field_is_rejected() {
        let result = compile_sort(&[SortCriterion::asc("")], &schema());

        assert_eq!(result, Err(SortError::EmptyField));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = compile_sort(&[SortCriterion::asc("salary")], &schema());

        assert_eq!(
            result,
            Err(SortError::UnknownField {
                field: "salary".to_string()
            })
        );
    }
}
