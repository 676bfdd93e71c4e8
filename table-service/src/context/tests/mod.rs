use super::*;
use crate::seed::initialize_demo_data;
use crate::storage::{KvBackend, LocalStorage, RedbBackend, StorageError, StorageResult};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps every notification for assertions
#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn last(&self) -> Option<Notification> {
        self.seen.lock().last().cloned()
    }

    fn count(&self) -> usize {
        self.seen.lock().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

/// In-memory backend whose writes can be switched off
struct FlakyBackend {
    inner: RedbBackend,
    fail_writes: AtomicBool,
}

impl FlakyBackend {
    fn new() -> Self {
        Self {
            inner: RedbBackend::open_in_memory().unwrap(),
            fail_writes: AtomicBool::new(false),
        }
    }

    fn set_failing(&self, failing: bool) {
        self.fail_writes.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> StorageResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("quota exceeded".into()));
        }
        Ok(())
    }
}

impl KvBackend for FlakyBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.check()?;
        self.inner.remove(key)
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        self.inner.keys()
    }
}

fn context_over(storage: LocalStorage) -> (RestaurantContext, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let ctx = RestaurantContext::load(
        Repositories::new(storage),
        Arc::new(SequentialIdGenerator::new("id")),
        notifier.clone(),
    );
    (ctx, notifier)
}

fn empty_context() -> (RestaurantContext, Arc<RecordingNotifier>) {
    context_over(LocalStorage::in_memory().unwrap())
}

fn seeded_context() -> (RestaurantContext, Arc<RecordingNotifier>) {
    let storage = LocalStorage::in_memory().unwrap();
    initialize_demo_data(&Repositories::new(storage.clone())).unwrap();
    context_over(storage)
}
