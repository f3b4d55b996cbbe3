/// End-to-end tests of the tracker against a mock HTTP service
use std::time::Duration;

use chrono::Weekday;
use habit_tracker::*;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;
use tempfile::TempDir;

fn open(server: &ServerGuard, dir: &TempDir) -> HabitTracker {
    let config = TrackerConfig::new(dir.path().join("local_storage.db"))
        .with_api_base_url(server.url())
        .with_request_timeout(Duration::from_secs(5));
    HabitTracker::open(&config).expect("Failed to open tracker")
}

#[cfg(test)]
mod http_integration_tests {
    use super::*;

    #[tokio::test]
    async fn test_load_and_toggle_against_service() {
        let mut server = Server::new_async().await;
        let dir = TempDir::new().unwrap();

        let _list = server
            .mock("GET", "/habits")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id": "7", "name": "Meditate", "frequency": "daily", "category": "Health",
                    "start_date": "2025-10-01", "completedDays": {"tuesday": true}}]"#,
            )
            .create_async()
            .await;
        let _health = server.mock("GET", "/health").with_status(200).create_async().await;
        let _theme = server
            .mock("GET", "/settings/theme")
            .with_status(200)
            .with_body(r#"{"theme": "dark"}"#)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/habits/7")
            .match_body(Matcher::PartialJson(json!({
                "id": 7,
                "completedDays": { "monday": true, "tuesday": true }
            })))
            .with_status(200)
            .create_async()
            .await;

        let mut tracker = open(&server, &dir);
        let (habits, theme) = tracker.load().await;
        assert_eq!(habits, HabitSource::Remote);
        assert_eq!(theme, ThemeSource::Remote);
        assert_eq!(tracker.theme(), Theme::Dark);

        let response = tracker.toggle_day(&HabitId::Remote(7), Weekday::Mon).await.unwrap();

        update.assert_async().await;
        assert!(response.sync.is_clean());
        assert_eq!(response.sync.updated, 1);
        let stored = tracker.gateway().local().load_habits().unwrap().unwrap();
        assert!(stored[0].completed_days.monday);
    }

    #[tokio::test]
    async fn test_unreachable_service_falls_back_to_seed() {
        let mut server = Server::new_async().await;
        let dir = TempDir::new().unwrap();
        let _list = server.mock("GET", "/habits").with_status(500).create_async().await;
        let _health = server.mock("GET", "/health").with_status(500).create_async().await;
        let _theme = server.mock("GET", "/settings/theme").with_status(500).create_async().await;

        let mut tracker = open(&server, &dir);
        let (habits, theme) = tracker.load().await;

        assert_eq!(habits, HabitSource::Seed);
        assert_eq!(theme, ThemeSource::System);
        assert_eq!(tracker.habits().len(), seed_habits().len());
    }

    #[tokio::test]
    async fn test_delete_sends_request_for_remote_habit() {
        let mut server = Server::new_async().await;
        let dir = TempDir::new().unwrap();
        let _list = server
            .mock("GET", "/habits")
            .with_status(200)
            .with_body(r#"[{"id": 3, "name": "Swim"}, {"id": 4, "name": "Cycle"}]"#)
            .create_async()
            .await;
        let _health = server.mock("GET", "/health").with_status(200).create_async().await;
        let _theme = server.mock("GET", "/settings/theme").with_status(404).create_async().await;
        let _update = server
            .mock("PUT", "/habits/4")
            .with_status(200)
            .create_async()
            .await;
        let delete = server.mock("DELETE", "/habits/3").with_status(200).create_async().await;

        let mut tracker = open(&server, &dir);
        tracker.load().await;
        let response = tracker.delete_habit(&HabitId::Remote(3)).await.unwrap();

        delete.assert_async().await;
        assert_eq!(response.sync.deleted, 1);
        assert_eq!(tracker.habits().len(), 1);
    }
}
