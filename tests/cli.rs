// ABOUTME: Integration tests for the render-deploy binary.
// ABOUTME: Validates input errors, exit codes and output against a stub API.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use support::stub_server::{StubResponse, StubServer};

const DEPLOYS: &str = "/v1/services/srv-abc/deploys";

/// The binary with a clean environment, so a CI runner's variables do not leak in.
fn render_deploy_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("render-deploy"));
    cmd.env_clear();
    cmd
}

fn against(server: &StubServer) -> Command {
    let mut cmd = render_deploy_cmd();
    cmd.env("INPUT_SERVICE_ID", "srv-abc")
        .env("INPUT_API_KEY", "rnd_key")
        .env("RENDER_API_URL", format!("{}/v1", server.url()));
    cmd
}

#[test]
fn help_shows_inputs() {
    render_deploy_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--service-id"))
        .stdout(predicate::str::contains("--wait-deploy"))
        .stdout(predicate::str::contains("--github-deployment"));
}

#[test]
fn missing_service_id_fails() {
    render_deploy_cmd()
        .env("INPUT_API_KEY", "rnd_key")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: input required and not supplied: service_id",
        ));
}

#[test]
fn missing_api_key_fails() {
    render_deploy_cmd()
        .args(["--service-id", "srv-abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "input required and not supplied: api_key",
        ));
}

#[test]
fn missing_input_is_reported_before_bad_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("render-deploy.yml"), "interval: [not, valid]\n").unwrap();

    render_deploy_cmd()
        .current_dir(dir.path())
        .env("INPUT_API_KEY", "rnd_key")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "input required and not supplied: service_id",
        ))
        .stderr(predicate::str::contains("settings").not());
}

#[test]
fn bad_settings_file_fails_once_inputs_are_valid() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("render-deploy.yml"), "poll_interval: 0s\n").unwrap();

    render_deploy_cmd()
        .current_dir(dir.path())
        .env("INPUT_SERVICE_ID", "srv-abc")
        .env("INPUT_API_KEY", "rnd_key")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "invalid settings: poll_interval must be greater than zero",
        ));
}

#[test]
fn invalid_boolean_fails() {
    render_deploy_cmd()
        .env("INPUT_SERVICE_ID", "srv-abc")
        .env("INPUT_API_KEY", "rnd_key")
        .env("INPUT_WAIT_DEPLOY", "maybe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("wait_deploy"));
}

#[test]
fn tracking_without_token_fails_before_any_request() {
    let server = StubServer::start();

    against(&server)
        .env("INPUT_GITHUB_DEPLOYMENT", "true")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "input required and not supplied: github_token",
        ));

    assert!(server.requests().is_empty());
}

#[test]
fn trigger_without_waiting_succeeds() {
    let server = StubServer::start();
    server.respond("POST", DEPLOYS, StubResponse::json(201, json!({ "id": "dep-1" })));

    against(&server)
        .args(["--clear-cache", "--output", "quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deploy triggered."));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].json(), json!({ "clearCache": "clear" }));
}

#[test]
fn not_found_exits_with_classified_message() {
    let server = StubServer::start();
    server.respond("POST", DEPLOYS, StubResponse::json(404, json!({})));

    against(&server)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: unable to find the requested resource",
        ));
}

#[test]
fn actions_mode_masks_key_and_reports_error_on_stdout() {
    let server = StubServer::start();
    server.respond("POST", DEPLOYS, StubResponse::json(429, json!({})));

    against(&server)
        .env("GITHUB_ACTIONS", "true")
        .assert()
        .failure()
        .stdout(predicate::str::contains("::add-mask::rnd_key"))
        .stdout(predicate::str::contains("::error::rate limit surpassed"));
}

#[test]
fn waits_until_live() {
    let server = StubServer::start();
    server
        .respond("POST", DEPLOYS, StubResponse::json(201, json!({ "id": "dep-1" })))
        .respond(
            "GET",
            &format!("{DEPLOYS}/dep-1"),
            StubResponse::json(200, json!({ "status": "build_in_progress" })),
        )
        .respond(
            "GET",
            &format!("{DEPLOYS}/dep-1"),
            StubResponse::json(200, json!({ "status": "live" })),
        );
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("render-deploy.yml"), "poll_interval: 10ms\n").unwrap();

    against(&server)
        .current_dir(dir.path())
        .args(["--wait-deploy", "--output", "normal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Waiting for deploy successful status."))
        .stdout(predicate::str::contains("Deploy status: build_in_progress."))
        .stdout(predicate::str::contains("The service has been deployed."));
}

#[test]
fn failed_deploy_exits_with_status() {
    let server = StubServer::start();
    server
        .respond("POST", DEPLOYS, StubResponse::json(201, json!({ "id": "dep-1" })))
        .respond(
            "GET",
            &format!("{DEPLOYS}/dep-1"),
            StubResponse::json(200, json!({ "status": "build_failed" })),
        );
    let dir = tempfile::tempdir().unwrap();
    let settings = dir.path().join("fast.yml");
    fs::write(&settings, "poll_interval: 10ms\n").unwrap();

    against(&server)
        .env("INPUT_WAIT_DEPLOY", "true")
        .arg("--config")
        .arg(&settings)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: deploy exited with status: build_failed",
        ));
}

#[test]
fn tracked_deploy_updates_github() {
    let server = StubServer::start();
    server
        .respond("POST", DEPLOYS, StubResponse::json(201, json!({ "id": "dep-1" })))
        .respond(
            "GET",
            "/v1/services/srv-abc/custom-domains",
            StubResponse::json(200, json!([])),
        )
        .respond(
            "GET",
            "/v1/services/srv-abc",
            StubResponse::json(200, json!({ "serviceDetails": { "url": "https://web.onrender.com" } })),
        )
        .respond(
            "POST",
            "/gh/repos/acme/web/deployments",
            StubResponse::json(201, json!({ "id": 42 })),
        )
        .respond(
            "POST",
            "/gh/repos/acme/web/deployments/42/statuses",
            StubResponse::json(201, json!({})),
        );

    against(&server)
        .env("INPUT_GITHUB_DEPLOYMENT", "true")
        .env("INPUT_GITHUB_TOKEN", "ghs_token")
        .env("GITHUB_REPOSITORY", "acme/web")
        .env("GITHUB_REF", "refs/heads/main")
        .env("GITHUB_API_URL", format!("{}/gh", server.url()))
        .assert()
        .success();

    let status = server
        .requests()
        .into_iter()
        .find(|r| r.path().ends_with("/statuses"))
        .unwrap();
    assert_eq!(
        status.json(),
        json!({
            "state": "success",
            "environment_url": "https://web.onrender.com",
            "log_url": "https://web.onrender.com",
        })
    );
}
