//! CLI 子命令集成测试

#![cfg(feature = "cli")]

mod common;

use clap::Parser;
use serde_json::json;
use std::io::Write;

use tracklink_admin::cli::{Cli, Commands};
use tracklink_admin::interfaces::cli::{CliError, run_cli_command};
use tracklink_admin::rpc::methods;
use tracklink_admin::rpc::mock::MockReply;

use common::{click_stats, event_stats, signed_in, signed_out, tracker};

fn parse(args: &[&str]) -> Commands {
    let mut argv = vec!["tracklink-admin"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv)
        .unwrap()
        .command
        .expect("subcommand")
}

#[tokio::test]
async fn test_protected_commands_need_session() {
    let (ctx, mock) = signed_out();

    let err = run_cli_command(ctx, parse(&["trackers", "list"]))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::CommandError(_)));
    assert!(mock.requests().is_empty());
}

#[tokio::test]
async fn test_tracker_create_sends_params() {
    let (ctx, mock) = signed_in();
    mock.on(methods::TRACKER_CREATE, MockReply::ok(tracker("t1", "Spring", "web")));

    run_cli_command(
        ctx,
        parse(&["trackers", "create", "Spring", "--type", "web", "--mode", "js"]),
    )
    .await
    .unwrap();

    let sent = &mock.requests_for(methods::TRACKER_CREATE)[0];
    assert_eq!(sent.params["name"], json!("Spring"));
    assert_eq!(sent.params["type"], json!("web"));
    assert_eq!(sent.params["mode"], json!("js"));
}

#[tokio::test]
async fn test_tracker_update_keeps_unspecified_fields() {
    let (ctx, mock) = signed_in();
    mock.on(methods::TRACKER_LIST, MockReply::ok(json!([tracker("t1", "Spring", "ad")])));
    mock.on(methods::TRACKER_UPDATE, MockReply::ok(tracker("t1", "Spring", "ad")));

    run_cli_command(ctx, parse(&["trackers", "update", "t1", "--status", "inactive"]))
        .await
        .unwrap();

    let sent = &mock.requests_for(methods::TRACKER_UPDATE)[0];
    assert_eq!(sent.params["id"], json!("t1"));
    assert_eq!(sent.params["name"], json!("Spring"));
    assert_eq!(sent.params["mode"], json!("302"));
    assert_eq!(sent.params["status"], json!("inactive"));
}

#[tokio::test]
async fn test_tracker_update_unknown_id() {
    let (ctx, mock) = signed_in();
    mock.on(methods::TRACKER_LIST, MockReply::ok(json!([])));

    let err = run_cli_command(ctx, parse(&["trackers", "update", "nope", "--name", "x"]))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::CommandError(_)));
    assert_eq!(mock.call_count(methods::TRACKER_UPDATE), 0);
}

#[tokio::test]
async fn test_list_surfaces_backend_errors() {
    let (ctx, mock) = signed_in();
    mock.on(methods::SITE_LIST, MockReply::error(5000, "database down"));

    let err = run_cli_command(ctx, parse(&["sites", "list", "--json"]))
        .await
        .unwrap_err();

    match err {
        CliError::RpcError(e) => assert_eq!(e.rpc_code(), Some(5000)),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_channel_create_with_tags() {
    let (ctx, mock) = signed_in();
    mock.on(
        methods::CHANNEL_CREATE,
        MockReply::ok(common::channel("ch1", "t1", "c1", "Mail")),
    );

    run_cli_command(
        ctx,
        parse(&[
            "channels", "create", "--tracker", "t1", "--campaign", "c1", "Mail", "--source",
            "newsletter", "--tag", "utm=spring", "--tag", "region=eu",
        ]),
    )
    .await
    .unwrap();

    let sent = &mock.requests_for(methods::CHANNEL_CREATE)[0];
    assert_eq!(sent.params["tags"], json!({ "region": "eu", "utm": "spring" }));
    assert_eq!(sent.params["medium"], json!(""));
}

#[tokio::test]
async fn test_channel_import_from_file() {
    let (ctx, mock) = signed_in();
    mock.on(methods::CHANNEL_BATCH_IMPORT, MockReply::ok(json!({ "imported": 2 })));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"[{{"name":"a"}},{{"name":"b"}}]"#).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    run_cli_command(ctx, parse(&["channels", "import", &path]))
        .await
        .unwrap();

    let sent = &mock.requests_for(methods::CHANNEL_BATCH_IMPORT)[0];
    assert_eq!(sent.params["channels"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_channel_import_rejects_non_array() {
    let (ctx, mock) = signed_in();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"name":"a"}}"#).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let err = run_cli_command(ctx, parse(&["channels", "import", &path]))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::ParseError(_)));
    assert_eq!(mock.call_count(methods::CHANNEL_BATCH_IMPORT), 0);
}

#[tokio::test]
async fn test_token_generate_channel_needs_campaign() {
    let (ctx, mock) = signed_in();

    let err = run_cli_command(
        ctx,
        parse(&["tokens", "generate", "--tracker", "t1", "--target", "g1", "--channel", "ch1"]),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, CliError::ParseError(_)));
    assert_eq!(mock.call_count(methods::TOKEN_GENERATE), 0);
}

#[tokio::test]
async fn test_token_delete_with_yes_skips_prompt() {
    let (ctx, mock) = signed_in();
    mock.on(methods::TOKEN_DELETE, MockReply::ok(json!({ "ok": true })));

    run_cli_command(ctx, parse(&["tokens", "delete", "k1", "-y"]))
        .await
        .unwrap();

    assert_eq!(mock.requests_for(methods::TOKEN_DELETE)[0].params["id"], json!("k1"));
}

#[tokio::test]
async fn test_stats_custom_range_and_scopes() {
    let (ctx, mock) = signed_in();
    mock.on(methods::STATS_CLICKS, MockReply::ok(click_stats()));
    mock.on(methods::STATS_EVENTS, MockReply::ok(event_stats()));

    run_cli_command(
        ctx,
        parse(&[
            "stats", "--start", "2024-05-01", "--end", "2024-05-03", "--tracker", "t1", "--site",
            "s1", "--json",
        ]),
    )
    .await
    .unwrap();

    let clicks = &mock.requests_for(methods::STATS_CLICKS)[0];
    assert_eq!(clicks.params["start_date"], json!("2024-05-01"));
    assert_eq!(clicks.params["end_date"], json!("2024-05-03"));
    assert_eq!(clicks.params["tracker_id"], json!("t1"));
    assert!(!clicks.params.contains_key("site_id"));

    let events = &mock.requests_for(methods::STATS_EVENTS)[0];
    assert_eq!(events.params["site_id"], json!("s1"));
    assert!(!events.params.contains_key("tracker_id"));
}

#[tokio::test]
async fn test_stats_tolerates_one_failed_source() {
    let (ctx, mock) = signed_in();
    mock.on(methods::STATS_CLICKS, MockReply::ok(click_stats()));
    mock.on(methods::STATS_EVENTS, MockReply::error(5000, "events offline"));

    run_cli_command(ctx, parse(&["stats", "--period", "today"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_stats_fails_when_both_sources_fail() {
    let (ctx, mock) = signed_in();
    mock.on(methods::STATS_CLICKS, MockReply::error(5000, "down"));
    mock.on(methods::STATS_EVENTS, MockReply::error(5000, "down"));

    let err = run_cli_command(ctx, parse(&["stats"])).await.unwrap_err();
    assert!(matches!(err, CliError::CommandError(_)));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let (ctx, _mock) = signed_in();

    run_cli_command(ctx.clone(), parse(&["logout"])).await.unwrap();

    assert!(!ctx.auth().is_authenticated());
}
