#![allow(clippy::float_cmp)]

use std::rc::Rc;

use super::*;

fn counter() -> (Rc<Cell<u32>>, impl Fn() -> FrameCallback) {
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    let make = move || -> FrameCallback {
        let hits = Rc::clone(&hits_cb);
        Box::new(move |_ts| hits.set(hits.get() + 1))
    };
    (hits, make)
}

#[test]
fn scheduled_callback_runs_once_on_next_frame() {
    let scheduler = ManualScheduler::new();
    let (hits, make) = counter();
    assert!(scheduler.request_frame(make()).is_some());
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(scheduler.run_frame(), 1);
    assert_eq!(hits.get(), 1);
    assert_eq!(scheduler.run_frame(), 0);
    assert_eq!(hits.get(), 1);
}

#[test]
fn cancelled_callback_never_runs() {
    let scheduler = ManualScheduler::new();
    let (hits, make) = counter();
    let handle = scheduler.request_frame(make()).unwrap();
    scheduler.cancel_frame(handle);
    scheduler.cancel_frame(handle);
    assert_eq!(scheduler.run_frames(3), 0);
    assert_eq!(hits.get(), 0);
}

#[test]
fn handles_are_unique() {
    let scheduler = ManualScheduler::new();
    let (_, make) = counter();
    let a = scheduler.request_frame(make()).unwrap();
    let b = scheduler.request_frame(make()).unwrap();
    assert_ne!(a, b);
    assert_ne!(a.id(), b.id());
}

#[test]
fn callbacks_scheduled_during_a_frame_wait_for_the_next() {
    let scheduler = Rc::new(ManualScheduler::new());
    let hits = Rc::new(Cell::new(0));
    let inner_scheduler = Rc::clone(&scheduler);
    let inner_hits = Rc::clone(&hits);
    scheduler.request_frame(Box::new(move |_| {
        let hits = Rc::clone(&inner_hits);
        inner_scheduler.request_frame(Box::new(move |_| hits.set(hits.get() + 1)));
    }));
    assert_eq!(scheduler.run_frame(), 1);
    assert_eq!(hits.get(), 0);
    assert_eq!(scheduler.run_frame(), 1);
    assert_eq!(hits.get(), 1);
}

#[test]
fn cancel_from_earlier_callback_in_same_frame_is_honored() {
    let scheduler = Rc::new(ManualScheduler::new());
    let (hits, make) = counter();
    let victim = Rc::new(Cell::new(None::<FrameHandle>));
    let canceller_scheduler = Rc::clone(&scheduler);
    let canceller_victim = Rc::clone(&victim);
    scheduler.request_frame(Box::new(move |_| {
        if let Some(handle) = canceller_victim.get() {
            canceller_scheduler.cancel_frame(handle);
        }
    }));
    victim.set(scheduler.request_frame(make()));
    assert_eq!(scheduler.run_frame(), 1);
    assert_eq!(hits.get(), 0);
}

#[test]
fn clock_advances_one_interval_per_frame() {
    let scheduler = ManualScheduler::new();
    let seen = Rc::new(Cell::new(0.0));
    let seen_cb = Rc::clone(&seen);
    scheduler.request_frame(Box::new(move |ts| seen_cb.set(ts)));
    scheduler.run_frame();
    assert_eq!(seen.get(), FRAME_INTERVAL_MS);
    scheduler.run_frame();
    assert_eq!(scheduler.now_ms(), 2.0 * FRAME_INTERVAL_MS);
}
