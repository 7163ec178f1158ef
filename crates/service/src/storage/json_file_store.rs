use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, Weak},
};

use async_trait::async_trait;
use futures_util::{stream, StreamExt};
use models::RawPreferences;
use once_cell::sync::Lazy;
use tokio::{
    fs,
    sync::{watch, Mutex},
};
use tracing::{debug, warn};

use super::{Mutation, PreferenceStore, SnapshotStream};
use crate::errors::ServiceError;

/// JSON file-backed preference store.
///
/// Persists one namespace as a flat JSON object. Every tick re-reads the
/// file, so readers never see a cached copy that disagrees with disk.
/// Commits are serialized in-process and replace the file via rename.
#[derive(Clone)]
pub struct JsonPreferencesStore {
    inner: Arc<Inner>,
}

// canonical file path -> live store, so every open of one file shares a commit lock
static OPEN_STORES: Lazy<std::sync::Mutex<HashMap<PathBuf, Weak<Inner>>>> =
    Lazy::new(|| std::sync::Mutex::new(HashMap::new()));

struct Inner {
    file_path: PathBuf,
    commit_lock: Mutex<()>,
    version: watch::Sender<u64>,
}

impl JsonPreferencesStore {
    /// Open a store at `path`. The parent directory is created if missing; the
    /// file itself is written on the first commit. Opening a file that already
    /// has a live store in this process returns a handle to that store.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, ServiceError> {
        let requested = path.into();
        let file_name = requested
            .file_name()
            .ok_or_else(|| ServiceError::Store(format!("{} does not name a file", requested.display())))?
            .to_owned();
        let parent = match requested.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).await?;
        let file_path = fs::canonicalize(&parent).await?.join(file_name);

        let mut open_stores = OPEN_STORES.lock().unwrap_or_else(|e| e.into_inner());
        open_stores.retain(|_, store| store.strong_count() > 0);
        if let Some(inner) = open_stores.get(&file_path).and_then(Weak::upgrade) {
            debug!(path = %file_path.display(), event = "store_shared", "json preference store already open");
            return Ok(Self { inner });
        }
        let (version, _) = watch::channel(0);
        let inner = Arc::new(Inner { file_path: file_path.clone(), commit_lock: Mutex::new(()), version });
        open_stores.insert(file_path, Arc::downgrade(&inner));
        debug!(path = %inner.file_path.display(), event = "store_open", "json preference store opened");
        Ok(Self { inner })
    }

    pub fn file_path(&self) -> &Path {
        &self.inner.file_path
    }
}

async fn read_snapshot(path: &Path) -> Result<RawPreferences, ServiceError> {
    match fs::read(path).await {
        Ok(bytes) if bytes.is_empty() => Ok(RawPreferences::new()),
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Corrupt(format!("{}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(RawPreferences::new()),
        Err(e) => Err(e.into()),
    }
}

async fn write_snapshot(path: &Path, snapshot: &RawPreferences) -> Result<(), ServiceError> {
    let data = serde_json::to_vec(snapshot).map_err(|e| ServiceError::Store(e.to_string()))?;
    let tmp = path.with_extension(format!("json.tmp-{}", uuid::Uuid::new_v4()));
    fs::write(&tmp, data).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }
    Ok(())
}

#[async_trait]
impl PreferenceStore for JsonPreferencesStore {
    fn data(&self) -> SnapshotStream {
        let rx = self.inner.version.subscribe();
        let path = self.inner.file_path.clone();
        stream::unfold((rx, true), move |(mut rx, first)| {
            let path = path.clone();
            async move {
                // sender gone means the store was dropped
                if !first && rx.changed().await.is_err() {
                    return None;
                }
                rx.borrow_and_update();
                let tick = read_snapshot(&path).await;
                if let Err(e) = &tick {
                    warn!(path = %path.display(), error = %e, event = "read_failed", "preference snapshot read failed");
                }
                Some((tick, (rx, false)))
            }
        })
        .boxed()
    }

    async fn transact(&self, mutation: Mutation) -> Result<(), ServiceError> {
        let _guard = self.inner.commit_lock.lock().await;
        let path = &self.inner.file_path;
        let current = read_snapshot(path).await?;
        let mut next = current.clone();
        mutation(&mut next)?;
        if next == current {
            debug!(path = %path.display(), event = "commit_skipped", "snapshot unchanged");
            return Ok(());
        }
        write_snapshot(path, &next).await?;
        self.inner.version.send_modify(|v| *v += 1);
        debug!(path = %path.display(), entries = next.len(), event = "commit", "preference snapshot committed");
        Ok(())
    }
}
