//! Checks that the tracing extension emits the expected events.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use result_rail::prelude::*;
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Default)]
struct LevelCounts {
    errors: AtomicUsize,
    warnings: AtomicUsize,
}

struct CountingSubscriber {
    counts: Arc<LevelCounts>,
}

impl Subscriber for CountingSubscriber {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        match *event.metadata().level() {
            Level::ERROR => self.counts.errors.fetch_add(1, Ordering::SeqCst),
            Level::WARN => self.counts.warnings.fetch_add(1, Ordering::SeqCst),
            _ => 0,
        };
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn counted<R>(f: impl FnOnce() -> R) -> (R, Arc<LevelCounts>) {
    let counts = Arc::new(LevelCounts::default());
    let subscriber = CountingSubscriber {
        counts: Arc::clone(&counts),
    };
    let out = tracing::subscriber::with_default(subscriber, f);
    (out, counts)
}

#[test]
fn trace_err_emits_one_error_event_for_err() {
    let (o, counts) = counted(|| Outcome::<i32, &str>::new_err("x").trace_err("saving"));
    assert_eq!(o.unwrap_err(), "x");
    assert_eq!(counts.errors.load(Ordering::SeqCst), 1);
    assert_eq!(counts.warnings.load(Ordering::SeqCst), 0);
}

#[test]
fn trace_err_is_silent_for_ok() {
    let (o, counts) = counted(|| Outcome::<i32, &str>::new_ok(1).trace_err("saving"));
    assert_eq!(o.unwrap(), 1);
    assert_eq!(counts.errors.load(Ordering::SeqCst), 0);
}

#[test]
fn trace_uninit_emits_one_warning_for_default() {
    let (o, counts) = counted(|| Outcome::<i32, &str>::default().trace_uninit());
    assert!(o.is_uninit());
    assert_eq!(counts.warnings.load(Ordering::SeqCst), 1);
    assert_eq!(counts.errors.load(Ordering::SeqCst), 0);
}

#[test]
fn trace_uninit_is_silent_for_built_outcomes() {
    let (_, counts) = counted(|| {
        let _ = Outcome::<i32, &str>::new_ok(1).trace_uninit();
        let _ = Outcome::<i32, &str>::new_err("e").trace_uninit();
    });
    assert_eq!(counts.warnings.load(Ordering::SeqCst), 0);
}
