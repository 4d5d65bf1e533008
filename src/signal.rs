//! Signal channel primitives used by the hub.
//!
//! A signal is a payload-free notification that "something happened". Each
//! registered receiver owns the receive half of a capacity-one channel: the
//! single slot lets a sender complete immediately when the receiver is not
//! yet waiting, while guaranteeing that at most one signal is outstanding
//! per receiver and that a delivered signal is consumed by exactly one wait.

use tokio::sync::mpsc;

/// Transmitter side of a signal channel.
///
/// The hub holds one [`SignalTx`] per registered signature and uses it for
/// both point-to-point and broadcast delivery. The signal carries no data,
/// only the fact that an event occurred.
pub type SignalTx = mpsc::Sender<()>;

/// Receiver side of a signal channel.
///
/// Returned to the registering caller, who alone should be waiting on it.
/// `recv()` returning [`None`] means the hub dropped its send half, i.e.
/// the signature was deregistered while the receiver was still listening.
pub type SignalRx = mpsc::Receiver<()>;

/// Creates a new single-slot signal channel.
pub fn create_signal() -> (SignalTx, SignalRx) {
    mpsc::channel(1)
}
