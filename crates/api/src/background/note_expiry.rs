//! Periodic purge of expired notes.
//!
//! Listing notes already purges expired entries; this sweep additionally
//! reclaims notes that would otherwise sit in memory until the next list
//! call. Enabled by setting `NOTES_SWEEP_INTERVAL_SECS` above zero.

use std::sync::Arc;
use std::time::Duration;

use siloshare_core::store::NoteStore;
use tokio_util::sync::CancellationToken;

/// Run the expiry sweep loop until `cancel` is triggered.
pub async fn run(store: Arc<NoteStore>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        retention_secs = store.config().retention_secs,
        "Note expiry sweep started"
    );

    let mut ticker = tokio::time::interval(interval);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Note expiry sweep stopping");
                break;
            }
            _ = ticker.tick() => {
                let purged = store.purge_expired();
                if purged == 0 {
                    tracing::debug!("Note expiry sweep: nothing to purge");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use siloshare_core::store::StoreConfig;

    use super::*;

    #[tokio::test]
    async fn test_sweep_purges_without_listing() {
        let store = Arc::new(NoteStore::new(StoreConfig { retention_secs: 1 }));
        store.add("short lived", vec![]);

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(
            Arc::clone(&store),
            Duration::from_millis(100),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(store.is_empty(), "sweep should have purged the note");

        cancel.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweep should stop after cancellation")
            .unwrap();
    }

    #[tokio::test]
    async fn test_sweep_keeps_notes_when_expiry_disabled() {
        let store = Arc::new(NoteStore::new(StoreConfig { retention_secs: 0 }));
        store.add("forever", vec![]);

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(
            Arc::clone(&store),
            Duration::from_millis(50),
            cancel.clone(),
        ));

        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel.cancel();
        handle.await.unwrap();

        assert_eq!(store.len(), 1);
    }
}
