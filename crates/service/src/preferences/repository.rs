use futures_util::{stream, stream::BoxStream, StreamExt};
use models::{current_sort_order, PreferenceKey, SortOrder, UserPreferences};
use tracing::{debug, error, info, warn};

use crate::errors::ServiceError;
use crate::storage::PreferenceStore;

pub type PreferencesStream = BoxStream<'static, Result<UserPreferences, ServiceError>>;

/// Saves and observes user preferences.
///
/// Holds no state of its own; every read and write goes to the store.
#[derive(Clone)]
pub struct UserPreferencesRepository<S> {
    store: S,
}

impl<S> UserPreferencesRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S> UserPreferencesRepository<S>
where
    S: PreferenceStore,
{
    /// Current preferences followed by one value per committed change.
    ///
    /// An io-class read fault yields the defaults for that tick and the stream
    /// continues. Any other fault, or a stored sort order that does not decode,
    /// is yielded once as `Err` and ends the stream.
    pub fn observe(&self) -> PreferencesStream {
        stream::unfold(Some(self.store.data()), |ticks| async move {
            let mut ticks = ticks?;
            let decoded = match ticks.next().await? {
                Ok(raw) => UserPreferences::decode(&raw).map_err(ServiceError::from),
                Err(e) if e.is_io() => {
                    warn!(error = %e, event = "read_fault_substituted", "using default preferences for this update");
                    Ok(UserPreferences::default())
                }
                Err(e) => Err(e),
            };
            match decoded {
                Ok(prefs) => Some((Ok(prefs), Some(ticks))),
                Err(e) => {
                    error!(error = %e, event = "observe_failed", "preference stream terminated");
                    Some((Err(e), None))
                }
            }
        })
        .boxed()
    }

    /// First value of `observe()`.
    pub async fn fetch_initial(&self) -> Result<UserPreferences, ServiceError> {
        match self.observe().next().await {
            Some(res) => res,
            None => Err(ServiceError::Store("preference stream closed before first snapshot".into())),
        }
    }

    pub async fn update_show_completed(&self, show_completed: bool) -> Result<(), ServiceError> {
        self.store
            .transact(Box::new(move |raw| {
                raw.set_bool(PreferenceKey::ShowCompleted, show_completed);
                Ok(())
            }))
            .await?;
        info!(show_completed, event = "show_completed_updated", "preference saved");
        Ok(())
    }

    pub async fn enable_sort_by_deadline(&self, enable: bool) -> Result<(), ServiceError> {
        self.update_sort_order("deadline", enable, SortOrder::with_deadline).await
    }

    pub async fn enable_sort_by_priority(&self, enable: bool) -> Result<(), ServiceError> {
        self.update_sort_order("priority", enable, SortOrder::with_priority).await
    }

    async fn update_sort_order(
        &self,
        criterion: &'static str,
        enable: bool,
        toggle: fn(SortOrder, bool) -> SortOrder,
    ) -> Result<(), ServiceError> {
        self.store
            .transact(Box::new(move |raw| {
                let current = current_sort_order(raw)?;
                let next = toggle(current, enable);
                raw.set_string(PreferenceKey::SortOrder, next.as_str());
                debug!(criterion, enable, from = %current, to = %next, event = "sort_order_recomputed", "sort order recomputed");
                Ok(())
            }))
            .await?;
        info!(criterion, enable, event = "sort_order_updated", "preference saved");
        Ok(())
    }
}
