//! Scan gate abstraction.
//!
//! Equipment identification (QR decoding, NFC, beacon ranging) lives
//! outside this crate. The orchestrator only needs an asynchronous
//! operation with exactly two outcomes: success or user cancellation.
//! There are no partial results and the gate has no side effects until
//! it reports success, so cancellation needs no cleanup.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;

use gymkit_core::data::{Catalog, EquipmentRecord};

/// Result of one scan attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The equipment was identified.
    Success,
    /// The user backed out before identification completed.
    Cancelled,
}

/// Asynchronous equipment identification.
///
/// `target_hint` carries the equipment id the user asked to scan, if
/// any; a blind scan passes `None`. Implementations resolve to exactly
/// one [`ScanOutcome`] per call.
#[async_trait]
pub trait ScanGate: Send + Sync {
    /// Run one scan attempt to completion or cancellation.
    async fn start_scan(&self, target_hint: Option<&str>) -> ScanOutcome;
}

/// Handle for cancelling a pending scan from outside the await.
///
/// Cancellation is immediate and idempotent; calling it after the scan
/// already resolved successfully has no effect on the next scan, which
/// re-arms the handle.
#[derive(Debug, Clone)]
pub struct ScanCancel {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ScanCancel {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Request cancellation of the pending scan, if any.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    /// Whether cancellation has been requested since the last re-arm.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn rearm(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// Timer-driven gate standing in for real camera decoding.
///
/// Resolves to [`ScanOutcome::Success`] after a fixed delay unless the
/// cancel handle fires first.
#[derive(Debug)]
pub struct SimulatedGate {
    delay: Duration,
    cancel: ScanCancel,
}

impl SimulatedGate {
    /// Gate that succeeds after `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            cancel: ScanCancel::new(),
        }
    }

    /// The cancel handle paired with this gate.
    pub fn cancel_handle(&self) -> ScanCancel {
        self.cancel.clone()
    }
}

impl Default for SimulatedGate {
    fn default() -> Self {
        // Matches the scan-progress animation length of the companion UI
        Self::new(Duration::from_millis(2500))
    }
}

#[async_trait]
impl ScanGate for SimulatedGate {
    async fn start_scan(&self, target_hint: Option<&str>) -> ScanOutcome {
        // Each scan re-arms the handle; a stale cancel from a previous
        // attempt must not abort this one
        self.cancel.rearm();
        tracing::debug!(target = ?target_hint, "Simulated scan started");
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => ScanOutcome::Success,
            _ = self.cancel.notify.notified() => ScanOutcome::Cancelled,
        }
    }
}

/// Policy for resolving a blind scan to a concrete equipment record.
///
/// A blind scan has no predetermined target; which equipment the user is
/// actually standing at must come from an identification mechanism. The
/// policy is injected so the orchestrator never hardcodes one.
pub trait EquipmentResolver: Send + Sync {
    /// Resolve the scanned equipment, or `None` if nothing identifiable.
    fn resolve(&self, catalog: &Catalog) -> Option<EquipmentRecord>;
}

/// Default policy: the first available record in catalog order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailableResolver;

impl EquipmentResolver for FirstAvailableResolver {
    fn resolve(&self, catalog: &Catalog) -> Option<EquipmentRecord> {
        catalog.first_available().cloned()
    }
}
