//! # Store Flow
//!
//! Cache lifecycle and fetch coalescing under overlapping callers, driven
//! through a resource whose fetch-all the test can park and release.

#[cfg(test)]
mod tests {
    use crate::support::{user, StallingUsers};
    use fleetdesk_store::EntityStore;
    use parking_lot::Mutex;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;
    use std::time::Duration;

    async fn settle() {
        // Give spawned tasks a chance to reach their suspension point.
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    #[tokio::test]
    async fn test_overlapping_get_all_issues_single_fetch() {
        let resource = StallingUsers::with(vec![user("1", "A"), user("2", "B")]);
        let store = Arc::new(EntityStore::new(Arc::clone(&resource)));

        let loader = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.get_all(false).await })
        };
        settle().await;
        assert_eq!(resource.fetch_count.load(Ordering::SeqCst), 1);

        // Second caller coalesces into the in-flight fetch and gets the
        // current (empty) snapshot back instead of triggering another one.
        let coalesced = store.get_all(false).await.expect("coalesced");
        assert!(coalesced.is_empty());
        assert_eq!(resource.fetch_count.load(Ordering::SeqCst), 1);

        resource.release();
        let loaded = loader.await.expect("join").expect("loaded");
        assert_eq!(loaded.len(), 2);
        assert_eq!(resource.fetch_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_force_during_in_flight_fetch_coalesces() {
        let resource = StallingUsers::with(vec![user("1", "A")]);
        let store = Arc::new(EntityStore::new(Arc::clone(&resource)));

        let loader = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.get_all(false).await })
        };
        settle().await;

        // Even a forced refresh must not stack a second request on top of
        // the one already in flight.
        let coalesced = store.get_all(true).await.expect("coalesced");
        assert!(coalesced.is_empty());
        assert_eq!(resource.fetch_count.load(Ordering::SeqCst), 1);

        resource.release();
        loader.await.expect("join").expect("loaded");

        // Once the in-flight fetch has settled, force works again.
        resource.release();
        let refreshed = store.get_all(true).await.expect("refetched");
        assert_eq!(refreshed.len(), 1);
        assert_eq!(resource.fetch_count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_subscriber_observes_fetch_completion() {
        let resource = StallingUsers::with(vec![user("1", "A"), user("2", "B")]);
        let store = Arc::new(EntityStore::new(Arc::clone(&resource)));

        let deliveries = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&deliveries);
        let _handle = store.subscribe(move |snapshot| sink.lock().push(snapshot.len()));

        // Unset cache: no initial delivery.
        assert!(deliveries.lock().is_empty());

        let loader = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.get_all(false).await })
        };
        settle().await;
        assert!(deliveries.lock().is_empty(), "nothing delivered mid-flight");

        resource.release();
        loader.await.expect("join").expect("loaded");
        assert_eq!(*deliveries.lock(), vec![2]);
    }

    #[tokio::test]
    async fn test_late_subscriber_receives_current_snapshot() {
        let resource = StallingUsers::with(vec![user("1", "A")]);
        let store = EntityStore::new(Arc::clone(&resource));

        resource.release();
        store.get_all(false).await.expect("loaded");

        let deliveries = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&deliveries);
        let handle = store.subscribe(move |snapshot| sink.lock().push(snapshot.len()));
        assert_eq!(*deliveries.lock(), vec![1], "immediate snapshot delivery");

        drop(handle);
        assert_eq!(store.subscriber_count(), 0);
    }
}
