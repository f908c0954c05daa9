//! Symptom log tool tests
mod common;

use common::{draft, extract_id_from_response, get_test_handler};
use cycle_mcp::{Config, CycleServerHandler, KeyValueStore, Storage, SymptomLog, TrackerKind};

/// Store that reads as empty and refuses every write
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn load(&self, _key: &str) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn save(&self, key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("{} is read-only", key)
    }
}

#[test]
fn test_append_remove_round_trip() {
    let mut log = SymptomLog::new();
    let today = common::date(2024, 5, 1);
    log.append(draft("nausea", None), Some(6), today);
    log.append(draft("", Some("calm")), Some(6), today);
    let before = log.clone();

    let id = log
        .append(draft("heartburn", None), Some(7), today)
        .unwrap()
        .id
        .clone();
    assert_eq!(log.len(), 3);
    assert!(log.find(&id).is_some());

    log.remove(&id);
    assert_eq!(log, before);
}

#[tokio::test]
async fn test_add_without_prediction_stores_unknown_week() {
    let (handler, _temp_dir) = get_test_handler();

    let response = handler
        .handle_add_log(
            "period".to_string(),
            Some("cramps".to_string()),
            Some(String::new()),
        )
        .await
        .unwrap();
    let id = extract_id_from_response(&response);

    let log = handler.log_snapshot(TrackerKind::Period);
    let entry = log.find(&id).unwrap();
    assert_eq!(entry.week, None);
    assert_eq!(entry.week_label(), "?");
}

#[tokio::test]
async fn test_logs_keep_insertion_order() {
    let (handler, _temp_dir) = get_test_handler();

    for symptom in ["first", "second", "third"] {
        handler
            .handle_add_log("pregnancy".to_string(), Some(symptom.to_string()), None)
            .await
            .unwrap();
    }

    let list = handler
        .handle_list_logs("pregnancy".to_string())
        .await
        .unwrap();
    let first = list.find("first").unwrap();
    let second = list.find("second").unwrap();
    let third = list.find("third").unwrap();
    assert!(first < second && second < third);
}

#[tokio::test]
async fn test_prediction_week_applies_per_tracker() {
    let (handler, _temp_dir) = get_test_handler();

    handler
        .handle_calculate_gestation("2024-01-01".to_string(), Some("2024-04-01".to_string()))
        .await
        .unwrap();

    // A pregnancy prediction does not give period entries a week
    handler
        .handle_add_log("period".to_string(), Some("cramps".to_string()), None)
        .await
        .unwrap();
    handler
        .handle_add_log("pregnancy".to_string(), Some("fatigue".to_string()), None)
        .await
        .unwrap();

    assert_eq!(
        handler.log_snapshot(TrackerKind::Period).entries()[0].week,
        None
    );
    assert_eq!(
        handler.log_snapshot(TrackerKind::Pregnancy).entries()[0].week,
        Some(13)
    );
}

#[tokio::test]
async fn test_remove_unknown_id_is_not_an_error() {
    let (handler, _temp_dir) = get_test_handler();

    let result = handler
        .handle_remove_log("period".to_string(), "does-not-exist".to_string())
        .await
        .unwrap();
    assert!(result.contains("not found"));
}

#[tokio::test]
async fn test_week_info_tool() {
    let (handler, _temp_dir) = get_test_handler();

    let week20 = handler.handle_week_info(20).await.unwrap();
    assert!(week20.contains("banana"));
    assert!(week20.contains("Development:"));

    let week0 = handler.handle_week_info(0).await.unwrap();
    assert!(week0.contains("Stay healthy and hydrated"));
}

#[tokio::test]
async fn test_future_lmp_reports_zero_weeks() {
    let (handler, _temp_dir) = get_test_handler();

    let result = handler
        .handle_calculate_gestation("2024-06-01".to_string(), Some("2024-05-01".to_string()))
        .await
        .unwrap();
    assert!(result.contains("Gestational age: 0 weeks, 0 days"));
    assert_eq!(
        handler
            .last_gestation_prediction()
            .unwrap()
            .gestational_age_weeks,
        0
    );
}

#[tokio::test]
async fn test_save_failure_is_reported_to_client() {
    let handler = CycleServerHandler::with_storage(Storage::new(ReadOnlyStore), Config::default());

    let result = handler
        .handle_add_log("period".to_string(), Some("cramps".to_string()), None)
        .await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to save"));
}
