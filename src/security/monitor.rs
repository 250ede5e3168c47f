use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::scanner::sim::{TelemetrySource, DEFAULT_TARGET_IP};
use crate::security::store::SecurityEventStore;
use crate::security::{SecurityEvent, Severity};

/// Unresolved criticals that arrived after `last_seen_id`. Ids are
/// monotonic, so this is how alert consumers avoid re-raising the same
/// event on every snapshot.
pub fn fresh_criticals(snapshot: &[SecurityEvent], last_seen_id: u64) -> Vec<&SecurityEvent> {
    snapshot
        .iter()
        .filter(|e| e.id > last_seen_id && e.severity == Severity::Critical && !e.resolved)
        .collect()
}

/// Disposer for a periodic driver. `stop` halts future ticks; it is safe to
/// call at any point (including repeatedly, or after the owning task already
/// finished), and once called the driver mutates no store again.
pub struct MonitorHandle {
    task: JoinHandle<()>,
}

impl MonitorHandle {
    pub(crate) fn new(task: JoinHandle<()>) -> Self {
        Self { task }
    }

    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for MonitorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Periodic security driver: every tick it asks the telemetry source
/// whether an attack fires and, if so, records it through the store's
/// simulate path.
pub struct SecurityMonitor;

impl SecurityMonitor {
    pub fn start(
        store: SecurityEventStore,
        source: Arc<dyn TelemetrySource>,
        interval: Duration,
    ) -> MonitorHandle {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // interval fires immediately; the first real tick comes later
            ticker.tick().await;

            loop {
                ticker.tick().await;
                if let Some((attack, source_ip)) = source.next_attack() {
                    let event = store.simulate(attack, &source_ip, DEFAULT_TARGET_IP);
                    tracing::info!(
                        "simulated {} attack from {} (event {})",
                        attack.label(),
                        source_ip,
                        event.id
                    );
                }
            }
        });

        MonitorHandle::new(task)
    }
}
