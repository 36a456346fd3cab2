use progress_tracker::models::{Entry, MS_PER_HOUR};
use progress_tracker::{Record, Store};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const T0: i64 = 1_767_225_600_000;
const MINUTE: i64 = 60_000;

fn unique_data_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "progress_tracker_{name}_{}_{}",
        std::process::id(),
        nanos
    ));
    path.push("state.json");
    path
}

#[tokio::test]
async fn missing_file_loads_defaults() {
    let store = Store::new(unique_data_path("missing"));
    assert_eq!(store.load().await, Record::default());
}

#[tokio::test]
async fn corrupt_file_loads_defaults() {
    let path = unique_data_path("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, b"{\"total\": 5,").unwrap();

    let store = Store::new(&path);
    assert_eq!(store.load().await, Record::default());

    let record = store.add_delta(10, T0).await.unwrap();
    assert_eq!(record.total, 10);
    assert_eq!(store.load().await.total, 10);
}

#[tokio::test]
async fn negative_stored_total_loads_as_zero() {
    let path = unique_data_path("negative");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, br#"{"total": -9223372036854775808}"#).unwrap();

    let store = Store::new(&path);
    assert_eq!(store.load().await.total, 0);

    let record = store.add_delta(1, T0).await.unwrap();
    assert_eq!(record.total, 1);
    assert_eq!(record.history, vec![Entry { t: T0, delta: 1, after: 1 }]);
}

#[tokio::test]
async fn partial_settings_keep_stored_values() {
    let store = Store::new(unique_data_path("partial_settings"));
    store.apply_settings(Some(4_000), Some(2)).await.unwrap();

    let record = store.apply_settings(None, Some(3)).await.unwrap();
    assert_eq!(record.target, 4_000);
    assert_eq!(record.hours, 3);
    assert_eq!(record.timer.duration_ms, 3 * MS_PER_HOUR);

    let record = store.apply_settings(Some(900), None).await.unwrap();
    assert_eq!(record.target, 900);
    assert_eq!(store.load().await.hours, 3);
}

#[tokio::test]
async fn score_example_persists_each_step() {
    let store = Store::new(unique_data_path("score"));

    store.add_delta(150, T0).await.unwrap();
    let record = store.load().await;
    assert_eq!(record.total, 150);
    assert_eq!(record.history, vec![Entry { t: T0, delta: 150, after: 150 }]);

    store.add_delta(-200, T0 + 1).await.unwrap();
    let record = store.load().await;
    assert_eq!(record.total, 0);
    assert_eq!(record.history[1], Entry { t: T0 + 1, delta: -150, after: 0 });

    store.undo().await.unwrap();
    let record = store.load().await;
    assert_eq!(record.total, 150);
    assert_eq!(record.history.len(), 1);

    store.undo().await.unwrap();
    let record = store.load().await;
    assert_eq!(record.total, 0);
    assert!(record.history.is_empty());

    let record = store.undo().await.unwrap();
    assert_eq!(record.total, 0);
}

#[tokio::test]
async fn timer_example_survives_reloads() {
    let store = Store::new(unique_data_path("timer"));
    store.apply_settings(Some(100_000), Some(1)).await.unwrap();

    let record = store.start_timer(T0).await.unwrap();
    assert_eq!(
        progress_tracker::timer::remaining(&record.timer, T0),
        MS_PER_HOUR
    );

    let record = store.stop_timer(T0 + 10 * MINUTE).await.unwrap();
    assert_eq!(record.timer.elapsed_ms, 600_000);

    let resumed_at = T0 + 45 * MINUTE;
    store.start_timer(resumed_at).await.unwrap();
    let record = store.load().await;
    let now = resumed_at + 5 * MINUTE;
    assert_eq!(progress_tracker::timer::compute_elapsed(&record.timer, now), 900_000);
    assert_eq!(progress_tracker::timer::remaining(&record.timer, now), 2_700_000);

    let record = store.reset_timer().await.unwrap();
    assert!(!record.timer.running);
    assert_eq!(record.timer.elapsed_ms, 0);
    assert_eq!(store.load().await.timer.duration_ms, MS_PER_HOUR);
}

#[tokio::test]
async fn reset_score_keeps_settings() {
    let store = Store::new(unique_data_path("reset"));
    store.apply_settings(Some(2_000), Some(6)).await.unwrap();
    store.add_delta(700, T0).await.unwrap();

    store.reset_score().await.unwrap();
    let record = store.load().await;
    assert_eq!(record.total, 0);
    assert!(record.history.is_empty());
    assert_eq!(record.target, 2_000);
    assert_eq!(record.hours, 6);
    assert_eq!(record.timer.duration_ms, 6 * MS_PER_HOUR);
}

#[tokio::test]
async fn wipe_reverts_to_defaults() {
    let path = unique_data_path("wipe");
    let store = Store::new(&path);
    store.apply_settings(Some(5), Some(3)).await.unwrap();
    store.add_delta(9, T0).await.unwrap();
    assert!(path.exists());

    store.wipe_all().await.unwrap();
    assert!(!path.exists());
    assert_eq!(store.load().await, Record::default());

    // Wiping twice is fine.
    store.wipe_all().await.unwrap();
}

#[tokio::test]
async fn save_of_load_is_idempotent() {
    let path = unique_data_path("roundtrip");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        br#"{"target": 300, "total": 12, "history": [{"t": 5, "delta": 12, "after": 12}],
            "timer": {"elapsedMs": 42}, "note": "kept"}"#,
    )
    .unwrap();

    let store = Store::new(&path);
    let loaded = store.load().await;
    store.save(&loaded).await.unwrap();
    let reloaded = store.load().await;

    assert_eq!(reloaded, loaded);
    assert_eq!(reloaded.target, 300);
    assert_eq!(reloaded.timer.elapsed_ms, 42);
    assert_eq!(reloaded.extra.get("note"), Some(&serde_json::json!("kept")));
}

#[tokio::test]
async fn concurrent_mutations_do_not_lose_updates() {
    let store = Store::new(unique_data_path("concurrent"));

    let mut tasks = Vec::new();
    for step in 0..25 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            store.add_delta(2, T0 + step).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let record = store.load().await;
    assert_eq!(record.total, 50);
    assert_eq!(record.history.len(), 25);
}
