//! Named signal registry for coordinating concurrent tasks.
//!
//! [`SignalHub`] maps string signatures to single-slot signal endpoints so
//! that independent tasks can wake each other up by name, individually via
//! [`SignalHub::signal`] or all at once via [`SignalHub::broadcast`]. It is
//! a synchronization primitive, not a message queue: signals carry no
//! payload and no history.
//!
//! # Coordination patterns
//!
//! A receiver registers under a unique signature, waits on the returned
//! [`SignalRx`], and deregisters when done. The hub provides no built-in
//! timeout or cancellation; a receiver that must abandon a pending wait
//! races the wait against its own quit signal:
//!
//! ```ignore
//! tokio::select! {
//!     _ = quit.changed() => break,
//!     _ = rx.recv() => { /* handle signal */ }
//! }
//! ```
//!
//! Senders that cannot tolerate per-receiver backpressure should spawn
//! [`SignalHub::signal`] or [`SignalHub::broadcast`] as their own task.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{HubError, HubResult};
use crate::signal::{SignalRx, SignalTx, create_signal};

/// Concurrency-safe registry of named signal receivers.
///
/// Each signature maps to at most one receiver endpoint at any time;
/// uniqueness is enforced at registration. All registry state is guarded by
/// a single lock taken in write mode by every mutating operation, including
/// the full broadcast loop, so one broadcast round always sees a consistent
/// snapshot of recipients. The acknowledged cost is that a receiver which
/// never drains its slot can stall an in-flight broadcast and block
/// registrations until that round completes.
///
/// The hub is an explicitly owned value with no process-wide singleton;
/// share it across tasks behind an [`std::sync::Arc`].
#[derive(Debug, Default)]
pub struct SignalHub {
    /// Currently registered receivers indexed by signature.
    ///
    /// The hub keeps only the send half; the receive half belongs to the
    /// registering caller until [`SignalHub::deregister`] removes the entry.
    receivers: RwLock<HashMap<String, SignalTx>>,
}

impl SignalHub {
    /// Creates a new hub with an empty registry.
    pub fn new() -> Self {
        Self {
            receivers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a receiver under `signature` and returns its endpoint.
    ///
    /// The returned [`SignalRx`] is private to the caller, who alone should
    /// be waiting on it. Callers are expected to use meaningful, non-empty
    /// signatures since the signature is the only handle for signaling.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::DuplicateSignature`] when the signature is
    /// already taken; the registry is left unchanged and the original
    /// receiver keeps its endpoint.
    pub async fn register(&self, signature: &str) -> HubResult<SignalRx> {
        let mut receivers = self.receivers.write().await;

        match receivers.entry(signature.to_owned()) {
            Entry::Occupied(_) => {
                warn!(%signature, "registration failed, signature already registered");

                Err(HubError::DuplicateSignature(signature.to_owned()))
            }
            Entry::Vacant(entry) => {
                let (tx, rx) = create_signal();
                entry.insert(tx);

                debug!(%signature, "registered receiver");

                Ok(rx)
            }
        }
    }

    /// Removes the receiver registered under `signature`, if any.
    ///
    /// Removing an absent signature is a safe no-op, so deregistration is
    /// idempotent. Removing a live entry drops the hub's send half, which
    /// closes the endpoint: a receiver still waiting on it observes
    /// end-of-channel (`recv()` returning [`None`]) rather than hanging
    /// forever.
    pub async fn deregister(&self, signature: &str) {
        let mut receivers = self.receivers.write().await;

        if receivers.remove(signature).is_some() {
            debug!(%signature, "deregistered receiver");
        }
    }

    /// Delivers one notification to the receiver registered under
    /// `signature`.
    ///
    /// The send suspends the calling task while the receiver's single slot
    /// is full, resuming once the receiver drains it. Callers that need
    /// fire-and-forget delivery should spawn this call as its own task.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::UnknownSignature`] when no receiver is
    /// registered under `signature`, or when the registered receiver
    /// dropped its endpoint without deregistering. No other receiver is
    /// affected either way.
    pub async fn signal(&self, signature: &str) -> HubResult<()> {
        let receivers = self.receivers.write().await;

        let Some(tx) = receivers.get(signature) else {
            return Err(HubError::UnknownSignature(signature.to_owned()));
        };

        if tx.send(()).await.is_err() {
            // The receive half was dropped without deregistering, so there
            // is nobody left to observe this signal.
            warn!(%signature, "receiver endpoint closed, dropping signal");

            return Err(HubError::UnknownSignature(signature.to_owned()));
        }

        debug!(%signature, "delivered signal");

        Ok(())
    }

    /// Delivers one notification to every currently registered receiver.
    ///
    /// Safe to invoke "as if" receivers exist even when none do: on an
    /// empty registry it returns immediately having sent nothing. The
    /// registry lock is held for the whole loop, so the set of recipients
    /// is a consistent snapshot for this round; delivery order across
    /// receivers is unspecified. Receivers whose endpoint was dropped
    /// without deregistering are skipped.
    ///
    /// Each per-receiver send is subject to the same single-slot
    /// backpressure as [`SignalHub::signal`], so a receiver that never
    /// drains its slot stalls the remainder of the round. Callers that
    /// cannot tolerate that should spawn this call as its own task.
    pub async fn broadcast(&self) {
        let receivers = self.receivers.write().await;

        for (signature, tx) in receivers.iter() {
            debug!(%signature, "broadcasting to receiver");

            if tx.send(()).await.is_err() {
                warn!(%signature, "receiver endpoint closed, skipping broadcast");
            }
        }
    }

    /// Returns whether a receiver is currently registered under
    /// `signature`.
    ///
    /// A read-only lookup, so it takes the shared form of the registry
    /// lock. Useful for senders that must not race a receiver's
    /// registration, since a signal issued before registration completes is
    /// reported as [`HubError::UnknownSignature`].
    pub async fn is_registered(&self, signature: &str) -> bool {
        let receivers = self.receivers.read().await;

        receivers.contains_key(signature)
    }
}

/// Registers under `signature`, waits for exactly one signal, then
/// deregisters.
///
/// One-shot convenience composed purely from the hub's primitive
/// operations. Deregistration runs unconditionally on every exit path:
/// when registration fails because the signature is already taken, the
/// function skips the wait and returns immediately, removing the existing
/// registration on the way out. A deregistration performed by another
/// task while the wait is pending also ends the wait.
pub async fn wait_for_signal_once(signature: &str, hub: &SignalHub) {
    if let Ok(mut rx) = hub.register(signature).await {
        let _ = rx.recv().await;
    }

    hub.deregister(signature).await;
}
