use std::path::PathBuf;

use futures_util::StreamExt;
use models::{SortOrder, UserPreferences};
use service::{JsonPreferencesStore, MemoryPreferencesStore, PreferenceStore, UserPreferencesRepository};
use tokio_test::{assert_ok, assert_pending, assert_ready, assert_ready_eq};

fn tmp_file() -> PathBuf {
    std::env::temp_dir().join(format!("prefs_flow_{}", uuid::Uuid::new_v4())).join("user_preferences.json")
}

async fn run_scenario<S: PreferenceStore>(repo: &UserPreferencesRepository<S>) -> Result<(), anyhow::Error> {
    let mut ticks = repo.observe();
    let next = |t: Option<Result<UserPreferences, service::ServiceError>>| t.expect("tick").map_err(anyhow::Error::from);

    assert_eq!(next(ticks.next().await)?, UserPreferences::new(false, SortOrder::None));

    repo.enable_sort_by_deadline(true).await?;
    assert_eq!(next(ticks.next().await)?, UserPreferences::new(false, SortOrder::ByDeadline));

    repo.enable_sort_by_priority(true).await?;
    assert_eq!(next(ticks.next().await)?, UserPreferences::new(false, SortOrder::ByDeadlineAndPriority));

    repo.enable_sort_by_deadline(false).await?;
    assert_eq!(next(ticks.next().await)?, UserPreferences::new(false, SortOrder::ByPriority));

    repo.update_show_completed(true).await?;
    assert_eq!(next(ticks.next().await)?, UserPreferences::new(true, SortOrder::ByPriority));
    Ok(())
}

#[tokio::test]
async fn scenario_against_memory_store() -> Result<(), anyhow::Error> {
    let repo = UserPreferencesRepository::new(MemoryPreferencesStore::new());
    run_scenario(&repo).await
}

#[tokio::test]
async fn scenario_against_json_store_and_reopen() -> Result<(), anyhow::Error> {
    let path = tmp_file();
    let repo = UserPreferencesRepository::new(JsonPreferencesStore::open(&path).await?);
    run_scenario(&repo).await?;
    drop(repo);

    let reopened = UserPreferencesRepository::new(JsonPreferencesStore::open(&path).await?);
    assert_eq!(reopened.fetch_initial().await?, UserPreferences::new(true, SortOrder::ByPriority));

    let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    Ok(())
}

#[tokio::test]
async fn set_show_completed_then_read() -> Result<(), anyhow::Error> {
    let repo = UserPreferencesRepository::new(MemoryPreferencesStore::new());
    for b in [true, false] {
        repo.update_show_completed(b).await?;
        assert_eq!(repo.fetch_initial().await?.show_completed, b);
    }
    Ok(())
}

#[tokio::test]
async fn repeated_toggle_emits_no_new_tick() {
    let repo = UserPreferencesRepository::new(MemoryPreferencesStore::new());
    let mut ticks = tokio_test::task::spawn(repo.observe());
    assert_ready!(ticks.poll_next());

    assert_ok!(repo.enable_sort_by_priority(true).await);
    assert_ready_eq!(
        ticks.poll_next().map(|t| t.and_then(Result::ok)),
        Some(UserPreferences::new(false, SortOrder::ByPriority))
    );

    // same intent again leaves the snapshot as it was
    assert_ok!(repo.enable_sort_by_priority(true).await);
    assert_pending!(ticks.poll_next());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_toggles_do_not_lose_updates() -> Result<(), anyhow::Error> {
    let path = tmp_file();
    let repo = UserPreferencesRepository::new(JsonPreferencesStore::open(&path).await?);

    let mut handles = Vec::new();
    for i in 0..16 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            if i % 2 == 0 {
                repo.enable_sort_by_deadline(true).await
            } else {
                repo.enable_sort_by_priority(true).await
            }
        }));
    }
    for h in handles {
        h.await??;
    }
    assert_eq!(repo.fetch_initial().await?.sort_order, SortOrder::ByDeadlineAndPriority);

    let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn two_opens_of_one_file_do_not_lose_updates() -> Result<(), anyhow::Error> {
    for _ in 0..20 {
        let path = tmp_file();
        let deadline = UserPreferencesRepository::new(JsonPreferencesStore::open(&path).await?);
        let priority = UserPreferencesRepository::new(JsonPreferencesStore::open(&path).await?);

        let a = tokio::spawn(async move { deadline.enable_sort_by_deadline(true).await });
        let b = tokio::spawn(async move { priority.enable_sort_by_priority(true).await });
        a.await??;
        b.await??;

        let reopened = UserPreferencesRepository::new(JsonPreferencesStore::open(&path).await?);
        assert_eq!(reopened.fetch_initial().await?.sort_order, SortOrder::ByDeadlineAndPriority);
        let _ = tokio::fs::remove_dir_all(path.parent().unwrap()).await;
    }
    Ok(())
}
