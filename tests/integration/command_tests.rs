//! End-to-end dispatcher tests: login, command, logout against the mock ENT.

use chrono::NaiveDate;
use clap::Parser;
use regex::Regex;
use serde_json::json;

use monecole::cli::{Cli, Command};
use monecole::commands;
use monecole::EntError;

use crate::mocks::{homework_days, summaries, MockEnt};

/// Wednesday
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

fn command(args: &[&str]) -> Command {
    let base = ["monecole", "-u", "x", "-p", "y", "--url", "http://localhost"];
    Cli::try_parse_from(base.iter().chain(args)).unwrap().command
}

async fn run(ent: &MockEnt, args: &[&str], today: NaiveDate) -> Result<String, EntError> {
    let mut out = Vec::new();
    commands::run(&ent.client(), &command(args), today, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

async fn session(ent: &MockEnt) {
    ent.mount_login_ok().await;
    ent.mount_logout(200, 1).await;
}

#[tokio::test]
async fn test_list_prints_one_line_per_summary() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_list(200, summaries()).await;

    let output = run(&ent, &["homeworks", "list"], today()).await.unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);

    let first = Regex::new(
        r"^CM1 - Classe de Mme Petit - 65a1f0 - by Claire Petit - last modified \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$",
    )
    .unwrap();
    let second = Regex::new(
        r"^Anglais - 65a1f1 - by John Smith - last modified \d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$",
    )
    .unwrap();
    assert!(first.is_match(lines[0]), "{}", lines[0]);
    assert!(second.is_match(lines[1]), "{}", lines[1]);
}

#[tokio::test]
async fn test_homeworks_defaults_to_list() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_list(200, summaries()).await;

    let output = run(&ent, &["homeworks"], today()).await.unwrap();
    assert_eq!(output.lines().count(), 2);
}

#[tokio::test]
async fn test_get_without_filter_prints_everything() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_get("65a1f0", 200, homework_days()).await;

    let output = run(&ent, &["homeworks", "get", "65a1f0"], today())
        .await
        .unwrap();
    assert_eq!(
        output,
        "📖 Monday, 08 of January 2024\n\
         \x20   📚 Maths: Exercices 4 et 5 p.12\n\
         \x20   📚 Lecture: Read ch.3\n\
         📖 Tuesday, 09 of January 2024\n\
         📖 Monday, 15 of January 2024\n\
         \x20   📚 Sciences: Apporter une plante\n"
    );
}

#[tokio::test]
async fn test_get_this_week() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_get("65a1f0", 200, homework_days()).await;

    let output = run(&ent, &["homeworks", "get", "65a1f0", "--thisweek"], today())
        .await
        .unwrap();
    assert_eq!(
        output,
        "📖 Monday, 08 of January 2024\n\
         \x20   📚 Maths: Exercices 4 et 5 p.12\n\
         \x20   📚 Lecture: Read ch.3\n\
         📖 Tuesday, 09 of January 2024\n"
    );
}

#[tokio::test]
async fn test_get_next_week() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_get("65a1f0", 200, homework_days()).await;

    let output = run(&ent, &["homeworks", "get", "65a1f0", "--nextweek"], today())
        .await
        .unwrap();
    assert_eq!(
        output,
        "📖 Monday, 15 of January 2024\n    📚 Sciences: Apporter une plante\n"
    );
}

#[tokio::test]
async fn test_get_day_without_entries_prints_header_only() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_get("65a1f0", 200, homework_days()).await;

    let tuesday = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
    let output = run(&ent, &["homeworks", "get", "65a1f0", "--today"], tuesday)
        .await
        .unwrap();
    assert_eq!(output, "📖 Tuesday, 09 of January 2024\n");
}

#[tokio::test]
async fn test_get_nothing_in_range() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_get("65a1f0", 200, homework_days()).await;

    let output = run(&ent, &["homeworks", "get", "65a1f0", "--tomorrow"], today())
        .await
        .unwrap();
    assert_eq!(output, "No homeworks\n");
}

#[tokio::test]
async fn test_get_empty_data() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_get("65a1f0", 200, json!({ "data": [] })).await;

    let output = run(&ent, &["homeworks", "get", "65a1f0"], today())
        .await
        .unwrap();
    assert_eq!(output, "No homeworks\n");
}

#[tokio::test]
async fn test_logout_runs_after_failed_command() {
    let ent = MockEnt::start().await;
    session(&ent).await;
    ent.mount_get("65a1f0", 500, json!({})).await;

    let err = run(&ent, &["homeworks", "get", "65a1f0"], today())
        .await
        .unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
    ent.server.verify().await;
}

#[tokio::test]
async fn test_command_error_wins_over_logout_error() {
    let ent = MockEnt::start().await;
    ent.mount_login_ok().await;
    ent.mount_logout(500, 1).await;
    ent.mount_list(200, json!({ "not": "a list" })).await;

    let err = run(&ent, &["homeworks", "list"], today()).await.unwrap_err();
    assert!(matches!(err, EntError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_logout_failure_is_reported() {
    let ent = MockEnt::start().await;
    ent.mount_login_ok().await;
    ent.mount_logout(502, 1).await;
    ent.mount_list(200, summaries()).await;

    let err = run(&ent, &["homeworks", "list"], today()).await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn test_failed_login_skips_command_and_logout() {
    let ent = MockEnt::start().await;
    ent.mount_login(302, None, 1).await;
    ent.mount_logout(200, 0).await;

    let err = run(&ent, &["homeworks", "list"], today()).await.unwrap_err();
    assert!(matches!(err, EntError::Authentication), "got {err:?}");
    ent.server.verify().await;
}
