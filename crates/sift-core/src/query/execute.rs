use crate::{
    query::{
        compile::CompiledQuery,
        filter::OrderDirection,
        predicate::{FieldPresence, Row, eval},
        sort::OrderSpec,
        trace::{TraceEvent, TracePhase, TraceSink},
    },
    value::{Value, canonical_cmp},
};
use std::{cmp::Ordering, convert::Infallible};

///
/// Queryable
///
/// The push-down seam: a source receives the whole compiled query
/// (predicate, opaque parameter array, order spec) and may defer
/// evaluation to its backing store instead of materializing rows first.
/// `Memory` is the eager reference source.
///

pub trait Queryable {
    type Item;
    type Error;

    fn execute(self, query: &CompiledQuery) -> Result<Vec<Self::Item>, Self::Error>;
}

///
/// Memory
///
/// Eager in-memory source over any row iterator: the predicate filters
/// first, then the order spec drives one stable multi-key sort. Pagination
/// is an external collaborator; the full filtered, ordered sequence is
/// returned.
///

pub struct Memory<'a, I> {
    rows: I,
    sink: Option<&'a dyn TraceSink>,
}

impl<'a, I> Memory<'a, I> {
    #[must_use]
    pub const fn new(rows: I) -> Self {
        Self { rows, sink: None }
    }

    /// Attach a trace sink; tracing never affects execution semantics.
    #[must_use]
    pub const fn with_trace(mut self, sink: &'a dyn TraceSink) -> Self {
        self.sink = Some(sink);
        self
    }
}

impl<I, R> Memory<'_, I>
where
    I: IntoIterator<Item = R>,
    R: Row,
{
    /// Filter and order the rows eagerly. Cannot fail: every structural
    /// error was already caught at compile time.
    #[must_use]
    pub fn run(self, query: &CompiledQuery) -> Vec<R> {
        let Self { rows, sink } = self;
        let emit = |event: TraceEvent| {
            if let Some(sink) = sink {
                sink.on_event(event);
            }
        };

        let mut rows: Vec<R> = rows
            .into_iter()
            .filter(|row| eval(row, &query.predicate, &query.params))
            .collect();
        emit(TraceEvent {
            phase: TracePhase::Filter,
            rows: rows.len(),
        });

        if let Some(order) = &query.order {
            sort_rows(&mut rows, order);
            emit(TraceEvent {
                phase: TracePhase::Order,
                rows: rows.len(),
            });
        }

        rows
    }
}

impl<I, R> Queryable for Memory<'_, I>
where
    I: IntoIterator<Item = R>,
    R: Row,
{
    type Item = R;
    type Error = Infallible;

    fn execute(self, query: &CompiledQuery) -> Result<Vec<R>, Infallible> {
        Ok(self.run(query))
    }
}

/// Filter and order a slice eagerly; convenience over `Memory`.
#[must_use]
pub fn apply_slice<R: Row + Clone>(rows: &[R], query: &CompiledQuery) -> Vec<R> {
    Memory::new(rows.iter().cloned()).run(query)
}

/// Stable multi-key sort: earlier criteria take precedence, equal keys
/// preserve source order.
fn sort_rows<R: Row>(rows: &mut [R], order: &OrderSpec) {
    rows.sort_by(|left, right| order_cmp(left, right, order));
}

fn order_cmp<R: Row>(left: &R, right: &R, order: &OrderSpec) -> Ordering {
    for (field, direction) in &order.fields {
        let ordering = canonical_cmp(&sort_key(left, field), &sort_key(right, field));
        let ordering = match direction {
            OrderDirection::Asc => ordering,
            OrderDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}

// Missing fields sort together with nulls.
fn sort_key<R: Row>(row: &R, field: &str) -> Value {
    match row.field(field) {
        FieldPresence::Present(value) => value,
        FieldPresence::Missing => Value::Null,
    }
}
