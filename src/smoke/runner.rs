use crate::api::{NewPosition, PositionsClient};
use crate::smoke::report::{CheckReport, SmokeSummary};
use tracing::{info, warn};

/// Drives the endpoint checks sequentially against one API server.
///
/// Every check absorbs its error into a failed report; nothing here returns
/// an `Err` or panics on server-shaped data, so a run always completes.
pub struct SmokeRunner {
    client: PositionsClient,
    payload: NewPosition,
}

impl SmokeRunner {
    pub fn new(client: PositionsClient, payload: NewPosition) -> Self {
        Self { client, payload }
    }

    /// Run the checks in order: list, create, and with `full` also update and
    /// delete of the position created in this run. Update/delete are skipped
    /// when create did not yield an id.
    pub async fn run(&self, full: bool) -> SmokeSummary {
        let mut summary = SmokeSummary::default();

        summary.push(self.check_list().await);

        let (report, created_id) = self.check_create().await;
        summary.push(report);

        if full {
            match created_id {
                Some(id) => {
                    summary.push(self.check_update(id).await);
                    summary.push(self.check_delete(id).await);
                }
                None => {
                    warn!("create did not return a position, skipping update/delete checks");
                }
            }
        }

        info!(
            passed = summary.passed_count(),
            failed = summary.failed_count(),
            "smoke run complete"
        );
        summary
    }

    /// GET the collection and render the count plus one `id: name` line per
    /// element, in array order.
    pub async fn check_list(&self) -> CheckReport {
        let name = "GET /public-api/positions";

        match self.client.list().await {
            Ok(positions) => {
                let mut lines = vec![format!("fetched {} positions", positions.len())];
                lines.extend(
                    positions
                        .iter()
                        .map(|position| format!("{}: {}", position.id, position.name)),
                );
                CheckReport::passed(name, lines)
            }
            Err(err) => CheckReport::from_error(name, &err),
        }
    }

    /// POST the fixed payload. Returns the created id so later checks can
    /// target the same resource.
    pub async fn check_create(&self) -> (CheckReport, Option<u64>) {
        let name = "POST /public-api/positions";

        match self.client.create(&self.payload).await {
            Ok(created) => {
                let lines = vec![format!("created position {}: {}", created.id, created.name)];
                (CheckReport::passed(name, lines), Some(created.id))
            }
            Err(err) => (CheckReport::from_error(name, &err), None),
        }
    }

    /// PUT the payload back onto the created position.
    pub async fn check_update(&self, id: u64) -> CheckReport {
        let name = format!("PUT /public-api/positions/{id}");

        match self.client.update(id, &self.payload).await {
            Ok(updated) => {
                let lines = vec![format!("updated position {}: {}", updated.id, updated.name)];
                CheckReport::passed(name, lines)
            }
            Err(err) => CheckReport::from_error(name, &err),
        }
    }

    /// DELETE the created position, cleaning up the row the POST added.
    pub async fn check_delete(&self, id: u64) -> CheckReport {
        let name = format!("DELETE /public-api/positions/{id}");

        match self.client.delete(id).await {
            Ok(()) => CheckReport::passed(name, vec![format!("deleted position {id}")]),
            Err(err) => CheckReport::from_error(name, &err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoke::report::CheckOutcome;
    use std::time::Duration;

    fn runner_for(server: &mockito::Server) -> SmokeRunner {
        SmokeRunner::new(
            PositionsClient::new(server.url()),
            NewPosition::default(),
        )
    }

    #[tokio::test]
    async fn test_list_prints_entries_in_array_order() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/public-api/positions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"name":"A"},{"id":2,"name":"B"}]"#)
            .create_async()
            .await;

        let report = runner_for(&server).check_list().await;

        assert_eq!(report.outcome, CheckOutcome::Passed);
        assert_eq!(
            report.lines,
            vec!["fetched 2 positions", "1: A", "2: B"]
        );
    }

    #[tokio::test]
    async fn test_list_not_found_reports_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/public-api/positions")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let report = runner_for(&server).check_list().await;

        assert_eq!(report.outcome, CheckOutcome::Failed);
        assert_eq!(report.lines.len(), 1);
        assert!(report.lines[0].contains("404"));
        assert!(report.lines[0].contains("not found"));
    }

    #[tokio::test]
    async fn test_list_missing_id_fails_as_malformed() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/public-api/positions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name":"A"}]"#)
            .create_async()
            .await;

        let report = runner_for(&server).check_list().await;

        assert_eq!(report.outcome, CheckOutcome::Failed);
        assert!(report.lines[0].contains("malformed position list response"));
    }

    #[tokio::test]
    async fn test_create_sends_fixed_payload_and_passes() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/public-api/positions")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "name": "Test Position from Python",
                "description": "Created via Python script",
                "active": true
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":9,"name":"Test Position from Python"}"#)
            .create_async()
            .await;

        let (report, created_id) = runner_for(&server).check_create().await;

        assert_eq!(report.outcome, CheckOutcome::Passed);
        assert_eq!(created_id, Some(9));
        assert!(report.lines[0].contains("created position 9"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_server_error_reports_500() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/public-api/positions")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let (report, created_id) = runner_for(&server).check_create().await;

        assert_eq!(report.outcome, CheckOutcome::Failed);
        assert_eq!(created_id, None);
        assert!(report.lines[0].contains("500"));
    }

    #[tokio::test]
    async fn test_unreachable_server_fails_both_routines_without_panicking() {
        let runner = SmokeRunner::new(
            PositionsClient::with_timeout("http://127.0.0.1:9", Duration::from_secs(1)),
            NewPosition::default(),
        );

        let summary = runner.run(false).await;

        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.failed_count(), 2);
        for report in &summary.reports {
            assert!(report.lines[0].contains("request failed"));
        }
    }

    #[tokio::test]
    async fn test_full_run_updates_and_deletes_created_position() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/public-api/positions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;
        server
            .mock("POST", "/public-api/positions")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":3,"name":"Test Position from Python"}"#)
            .create_async()
            .await;
        let update_mock = server
            .mock("PUT", "/public-api/positions/3")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":3,"name":"Test Position from Python"}"#)
            .create_async()
            .await;
        let delete_mock = server
            .mock("DELETE", "/public-api/positions/3")
            .with_status(204)
            .create_async()
            .await;

        let summary = runner_for(&server).run(true).await;

        assert_eq!(summary.reports.len(), 4);
        assert!(summary.all_passed());
        update_mock.assert_async().await;
        delete_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_full_run_skips_mutations_when_create_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/public-api/positions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;
        server
            .mock("POST", "/public-api/positions")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let summary = runner_for(&server).run(true).await;

        // list passed, create failed, no update/delete attempted
        assert_eq!(summary.reports.len(), 2);
        assert_eq!(summary.failed_count(), 1);
    }
}
