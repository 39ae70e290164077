#![cfg(feature = "async")]
//! Integration tests for the tokio-backed scheduler.
//!
//! The runtime starts paused, so sleeps complete as soon as every task is
//! idle and elapsed time is exact.

use eachfold::SchedulerError;
use eachfold::function::{delay, throttle};
use eachfold::scheduler::{Scheduler, TokioScheduler};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::{Instant, sleep};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn current_outside_a_runtime_is_an_error() {
    assert!(matches!(
        TokioScheduler::current(),
        Err(SchedulerError::NoRuntime(_))
    ));
}

#[test]
fn new_accepts_an_explicit_handle() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();
    let scheduler = TokioScheduler::new(runtime.handle().clone());
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let handle = scheduler.schedule(
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
        Duration::from_secs(1),
    );
    runtime.block_on(handle).unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// delay
// =============================================================================

#[tokio::test(start_paused = true)]
async fn delay_fires_after_the_wait() {
    let scheduler = TokioScheduler::current().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let start = Instant::now();

    let handle = delay(
        &scheduler,
        move |amount: usize| counter.fetch_add(amount, Ordering::SeqCst),
        Duration::from_millis(100),
        3,
    );

    sleep(Duration::from_millis(50)).await;
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    handle.await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(start.elapsed(), Duration::from_millis(100));
}

// =============================================================================
// throttle
// =============================================================================

#[tokio::test(start_paused = true)]
async fn throttle_cooldown_ends_on_the_runtime() {
    let scheduler = TokioScheduler::current().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let throttled = throttle(
        move |()| counter.fetch_add(1, Ordering::SeqCst),
        Duration::from_millis(100),
        scheduler,
    );

    assert!(throttled.call(()).is_some());
    sleep(Duration::from_millis(50)).await;
    assert!(throttled.call(()).is_none());

    sleep(Duration::from_millis(60)).await;
    assert!(!throttled.is_cooling_down());
    assert!(throttled.call(()).is_some());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
