use std::{collections::VecDeque, sync::Arc};

use async_trait::async_trait;
use futures_util::{stream, StreamExt};
use models::RawPreferences;
use tokio::sync::{watch, Mutex, RwLock};

use super::{Mutation, PreferenceStore, SnapshotStream};
use crate::errors::ServiceError;

/// In-process preference store with injectable faults, for tests and
/// embedders that do not need persistence.
#[derive(Clone)]
pub struct MemoryPreferencesStore {
    inner: Arc<Inner>,
}

struct Inner {
    data: RwLock<RawPreferences>,
    version: watch::Sender<u64>,
    read_faults: Mutex<VecDeque<ServiceError>>,
    commit_faults: Mutex<VecDeque<ServiceError>>,
}

impl Default for MemoryPreferencesStore {
    fn default() -> Self {
        Self::with_snapshot(RawPreferences::new())
    }
}

impl MemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: RawPreferences) -> Self {
        let (version, _) = watch::channel(0);
        Self {
            inner: Arc::new(Inner {
                data: RwLock::new(snapshot),
                version,
                read_faults: Mutex::new(VecDeque::new()),
                commit_faults: Mutex::new(VecDeque::new()),
            }),
        }
    }

    pub async fn snapshot(&self) -> RawPreferences {
        self.inner.data.read().await.clone()
    }

    /// Replace the snapshot without going through a transaction and wake
    /// observers.
    pub async fn overwrite(&self, snapshot: RawPreferences) {
        *self.inner.data.write().await = snapshot;
        self.inner.version.send_modify(|v| *v += 1);
    }

    /// The next tick produced by any subscriber fails with `err`.
    pub async fn fail_next_read(&self, err: ServiceError) {
        self.inner.read_faults.lock().await.push_back(err);
    }

    /// The next transaction fails with `err` before applying its mutation.
    pub async fn fail_next_commit(&self, err: ServiceError) {
        self.inner.commit_faults.lock().await.push_back(err);
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferencesStore {
    fn data(&self) -> SnapshotStream {
        let rx = self.inner.version.subscribe();
        // weak so an open stream does not keep the store alive
        let inner = Arc::downgrade(&self.inner);
        stream::unfold((rx, true), move |(mut rx, first)| {
            let inner = inner.clone();
            async move {
                if !first && rx.changed().await.is_err() {
                    return None;
                }
                rx.borrow_and_update();
                let inner = inner.upgrade()?;
                let tick = match inner.read_faults.lock().await.pop_front() {
                    Some(err) => Err(err),
                    None => Ok(inner.data.read().await.clone()),
                };
                Some((tick, (rx, false)))
            }
        })
        .boxed()
    }

    async fn transact(&self, mutation: Mutation) -> Result<(), ServiceError> {
        let mut data = self.inner.data.write().await;
        if let Some(err) = self.inner.commit_faults.lock().await.pop_front() {
            return Err(err);
        }
        let mut next = data.clone();
        mutation(&mut next)?;
        if next != *data {
            *data = next;
            drop(data);
            self.inner.version.send_modify(|v| *v += 1);
        }
        Ok(())
    }
}
