use std::cell::{Cell, RefCell};
use std::rc::Rc;

use outcome_rail::traits::KindedError;
use outcome_rail::{Failure, Handler};

#[derive(Debug, PartialEq)]
enum StoreError {
    Missing,
    Corrupt { offset: u64 },
}

impl KindedError for StoreError {
    type Kind = &'static str;

    fn kind(&self) -> Self::Kind {
        match self {
            StoreError::Missing => "missing",
            StoreError::Corrupt { .. } => "corrupt",
        }
    }
}

#[test]
fn test_new_failure_has_empty_chain() {
    let failure = Failure::new(StoreError::Missing);

    assert_eq!(failure.error(), &StoreError::Missing);
    assert_eq!(failure.handler_count(), 0);
    assert!(!failure.has_handlers());
}

#[test]
fn test_register_appends_in_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&order);
    let second = Rc::clone(&order);

    let mut failure = Failure::new(StoreError::Missing);
    failure.handle_kind("missing", move |_| first.borrow_mut().push("first"));
    failure.handle_kind("missing", move |_| second.borrow_mut().push("second"));
    assert_eq!(failure.handler_count(), 2);

    failure.dispatch();
    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_dispatch_returns_error_unchanged() {
    let mut failure = Failure::new(StoreError::Corrupt { offset: 512 });
    failure.handle_kind("corrupt", |_| {});

    assert_eq!(failure.dispatch(), &StoreError::Corrupt { offset: 512 });
}

#[test]
fn test_dispatch_twice_fires_twice() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);

    let mut failure = Failure::new(StoreError::Missing);
    failure.handle_kind("missing", move |_| counter.set(counter.get() + 1));

    // Each dispatch call is independent; there is no memoization.
    failure.dispatch();
    failure.dispatch();
    assert_eq!(fired.get(), 2);
}

#[test]
fn test_dispatch_skips_non_matching_kinds() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);

    let mut failure = Failure::new(StoreError::Missing);
    failure.handle_kind("corrupt", move |_| counter.set(counter.get() + 1));

    failure.dispatch();
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_handler_observes_error_payload() {
    let seen = Rc::new(Cell::new(0u64));
    let observer = Rc::clone(&seen);

    let mut failure = Failure::new(StoreError::Corrupt { offset: 77 });
    failure.handle_kind("corrupt", move |error| {
        if let StoreError::Corrupt { offset } = error {
            observer.set(*offset);
        }
    });

    failure.dispatch();
    assert_eq!(seen.get(), 77);
}

#[test]
fn test_into_error_skips_dispatch() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);

    let mut failure = Failure::new(StoreError::Missing);
    failure.handle_kind("missing", move |_| counter.set(counter.get() + 1));

    assert_eq!(failure.into_error(), StoreError::Missing);
    assert_eq!(fired.get(), 0);
}

#[test]
fn test_into_dispatched_runs_chain_once() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);

    let mut failure = Failure::new(StoreError::Missing);
    failure.handle_kind("missing", move |_| counter.set(counter.get() + 1));

    assert_eq!(failure.into_dispatched(), StoreError::Missing);
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_handler_when_predicate() {
    let handler = Handler::when(
        |e: &StoreError| matches!(e, StoreError::Corrupt { .. }),
        |_| {},
    );

    assert!(handler.matches(&StoreError::Corrupt { offset: 1 }));
    assert!(!handler.matches(&StoreError::Missing));
}

#[test]
fn test_handler_fire_reports_whether_it_ran() {
    let fired = Rc::new(Cell::new(0));
    let counter = Rc::clone(&fired);

    let handler = Handler::for_kind("missing", move |_: &StoreError| {
        counter.set(counter.get() + 1)
    });

    assert!(handler.fire(&StoreError::Missing));
    assert!(!handler.fire(&StoreError::Corrupt { offset: 9 }));
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_failure_from_error() {
    let failure = Failure::from(StoreError::Missing);

    assert_eq!(failure.error(), &StoreError::Missing);
    assert!(!failure.has_handlers());
}

#[test]
fn test_failure_display_and_debug() {
    let mut failure = Failure::new("disk full");
    failure.register(Handler::when(|_: &&str| true, |_| {}));

    assert_eq!(format!("{failure}"), "disk full");

    let debugged = format!("{failure:?}");
    assert!(debugged.contains("disk full"));
    assert!(debugged.contains("handlers: 1"));
}
