#![cfg(feature = "test-utils")]

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use signalhub::hub::{SignalHub, wait_for_signal_once};
use signalhub::test_utils::init_test_tracing;
use tokio::sync::watch;
use tokio::time::sleep;

const SIGNATURES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

#[tokio::test(flavor = "multi_thread")]
async fn broadcast_and_random_signals_reach_looping_receivers() {
    init_test_tracing();

    let hub = Arc::new(SignalHub::new());
    let (quit_tx, quit_rx) = watch::channel(());

    // Each receiver loops on its endpoint, racing the wait against the
    // quit channel, and deregisters itself on the way out.
    let mut receivers = Vec::new();
    for signature in SIGNATURES {
        let mut rx = hub.register(signature).await.unwrap();
        let hub = hub.clone();
        let mut quit_rx = quit_rx.clone();

        receivers.push(tokio::spawn(async move {
            let mut received = 0usize;
            loop {
                tokio::select! {
                    _ = quit_rx.changed() => break,
                    signal = rx.recv() => {
                        if signal.is_none() {
                            break;
                        }
                        received += 1;
                    }
                }
            }
            hub.deregister(signature).await;

            received
        }));
    }

    // Everyone gets woken once.
    hub.broadcast().await;

    // Then signal random receivers directly for a while.
    let mut sent = 0usize;
    for _ in 0..40 {
        let signature = {
            let idx = rand::thread_rng().gen_range(0..SIGNATURES.len());
            SIGNATURES[idx]
        };
        if hub.signal(signature).await.is_ok() {
            sent += 1;
        }
        sleep(Duration::from_millis(2)).await;
    }

    quit_tx.send(()).unwrap();

    let mut total = 0usize;
    for receiver in receivers {
        let received = receiver.await.unwrap();
        // At minimum the broadcast must have reached every receiver.
        assert!(received >= 1);
        total += received;
    }

    // A receiver may quit with one undrained signal in its slot, so the
    // observed total can fall short of the deliveries, never exceed them.
    assert!(total <= SIGNATURES.len() + sent);

    for signature in SIGNATURES {
        assert!(!hub.is_registered(signature).await);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn wait_for_signal_once_unblocks_on_direct_signal() {
    init_test_tracing();

    let hub = Arc::new(SignalHub::new());

    let waiter = {
        let hub = hub.clone();
        tokio::spawn(async move {
            wait_for_signal_once("WAIT_ONCE", &hub).await;
        })
    };

    // Retry until the waiter task has registered.
    while hub.signal("WAIT_ONCE").await.is_err() {
        sleep(Duration::from_millis(5)).await;
    }

    waiter.await.unwrap();
    assert!(!hub.is_registered("WAIT_ONCE").await);
}

#[tokio::test(flavor = "multi_thread")]
async fn wait_for_signal_once_unblocks_on_broadcast() {
    init_test_tracing();

    let hub = Arc::new(SignalHub::new());

    let waiter = {
        let hub = hub.clone();
        tokio::spawn(async move {
            wait_for_signal_once("WAIT_ONCE", &hub).await;
        })
    };

    // A broadcast before registration completes would be a no-op for this
    // receiver, so wait for the registration to land first.
    while !hub.is_registered("WAIT_ONCE").await {
        sleep(Duration::from_millis(5)).await;
    }
    hub.broadcast().await;

    waiter.await.unwrap();
    assert!(!hub.is_registered("WAIT_ONCE").await);
}
