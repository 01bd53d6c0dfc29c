use std::cell::Cell;
use std::rc::Rc;

use outcome_rail::traits::{KindedError, OutcomeExt};
use outcome_rail::Outcome;

mod failure;

#[derive(Debug, PartialEq)]
enum IngestError {
    NotAString,
    NotAnInteger,
}

impl KindedError for IngestError {
    type Kind = &'static str;

    fn kind(&self) -> Self::Kind {
        match self {
            IngestError::NotAString => "not_a_string",
            IngestError::NotAnInteger => "not_an_integer",
        }
    }
}

#[test]
fn pipeline_stays_lazy_until_resolved() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);

    let outcome = Outcome::<i32, IngestError>::error(IngestError::NotAString)
        .handle_kind("not_a_string", move |_| counter.set(counter.get() + 1))
        .map(|x| x + 1)
        .and_then(|x| Outcome::ok(x * 2));

    // Registration, mapping, and chaining must not run any side effect.
    assert_eq!(fired.get(), 0);

    let resolved = outcome.resolve();
    assert_eq!(resolved, Err(IngestError::NotAString));
    assert_eq!(fired.get(), 1);
}

#[test]
fn end_to_end_kind_scoped_dispatch() {
    let string_hits = Rc::new(Cell::new(0));
    let integer_hits = Rc::new(Cell::new(0));
    let on_string = Rc::clone(&string_hits);
    let on_integer = Rc::clone(&integer_hits);

    let resolved = Outcome::<String, IngestError>::error(IngestError::NotAString)
        .handle_kind("not_a_string", move |_| on_string.set(on_string.get() + 1))
        .handle_kind("not_an_integer", move |_| on_integer.set(on_integer.get() + 1))
        .resolve();

    assert_eq!(resolved, Err(IngestError::NotAString));
    assert_eq!(string_hits.get(), 1);
    assert_eq!(integer_hits.get(), 0);
}

#[test]
fn end_to_end_success_pipeline() {
    let resolved = Outcome::<i32, IngestError>::ok(2)
        .map(|x| x + 3)
        .and_then(|x| Outcome::ok(x * 2))
        .resolve();

    assert_eq!(resolved, Ok(10));
}

#[test]
fn lifted_result_flows_through_handlers() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);

    let raw: Result<i32, IngestError> = Err(IngestError::NotAnInteger);
    let resolved = raw
        .into_outcome()
        .handle_kind("not_an_integer", move |_| counter.set(counter.get() + 1))
        .resolve();

    assert_eq!(resolved, Err(IngestError::NotAnInteger));
    assert_eq!(fired.get(), 1);
}
