//! 页面控制器端到端测试

mod common;

use std::time::Duration;

use serde_json::json;

use tracklink_admin::analytics::{Period, today_utc};
use tracklink_admin::models::RedirectMode;
use tracklink_admin::notify::ToastKind;
use tracklink_admin::pages::{DashboardPage, TokenGeneratorPage, TokensPage};
use tracklink_admin::router::Route;
use tracklink_admin::rpc::methods;
use tracklink_admin::rpc::mock::MockReply;

use common::{
    campaign, channel, click_stats, event_stats, signed_in, target, token, tracker,
};

#[tokio::test]
async fn test_dashboard_load_fills_counts_and_view() {
    let (ctx, mock) = signed_in();
    mock.on(
        methods::TRACKER_LIST,
        MockReply::ok(json!([tracker("t1", "Spring", "ad"), tracker("t2", "Site", "web")])),
    );
    mock.on(methods::CAMPAIGN_LIST, MockReply::ok(json!([campaign("c1", "t1", "Launch")])));
    mock.on(methods::CHANNEL_LIST, MockReply::ok(json!([])));
    mock.on(methods::SITE_LIST, MockReply::ok(json!(null)));
    mock.on(methods::STATS_CLICKS, MockReply::ok(click_stats()));
    mock.on(methods::STATS_EVENTS, MockReply::ok(event_stats()));

    let page = DashboardPage::new(ctx);
    page.load().await;

    let counts: Vec<_> = page.entity_counts().iter().map(|c| c.count).collect();
    assert_eq!(counts, [Some(2), Some(1), Some(0), Some(0)]);

    let view = page.view();
    assert_eq!(view.cards[0].value, "120");
    assert_eq!(view.trend.len(), 3);
    assert!(page.errors().is_empty());

    let sent = &mock.requests_for(methods::STATS_CLICKS)[0];
    let range = Period::Last7Days.range_ending(today_utc()).unwrap();
    assert_eq!(sent.params["start_date"], json!(range.start_str()));
    assert_eq!(sent.params["end_date"], json!(range.end_str()));
}

#[tokio::test]
async fn test_dashboard_load_on_spawned_task_fetches_all_channels() {
    let (ctx, mock) = signed_in();
    mock.on(methods::TRACKER_LIST, MockReply::ok(json!([])));
    mock.on(methods::CAMPAIGN_LIST, MockReply::ok(json!([])));
    mock.on(
        methods::CHANNEL_LIST,
        MockReply::ok(json!([channel("n1", "t1", "c1", "Newsletter")])),
    );
    mock.on(methods::SITE_LIST, MockReply::ok(json!([])));
    mock.on(methods::STATS_CLICKS, MockReply::ok(click_stats()));
    mock.on(methods::STATS_EVENTS, MockReply::ok(event_stats()));

    let page = DashboardPage::new(ctx);
    tokio::spawn(page.load()).await.unwrap();

    let sent = &mock.requests_for(methods::CHANNEL_LIST)[0];
    assert!(!sent.params.contains_key("tracker_id"));
    assert!(!sent.params.contains_key("campaign_id"));
    assert_eq!(page.entity_counts()[3].count, Some(1));
}

#[tokio::test]
async fn test_dashboard_period_change_refetches() {
    let (ctx, mock) = signed_in();
    mock.on(methods::STATS_CLICKS, MockReply::ok(click_stats()));
    mock.on(methods::STATS_EVENTS, MockReply::ok(event_stats()));

    let mut page = DashboardPage::new(ctx);
    page.set_period(Period::Today).await;

    let today = today_utc().format("%Y-%m-%d").to_string();
    let sent = &mock.requests_for(methods::STATS_EVENTS)[0];
    assert_eq!(sent.params["start_date"], json!(today));
    assert_eq!(sent.params["end_date"], json!(today));
}

#[tokio::test]
async fn test_dashboard_click_failure_keeps_events() {
    let (ctx, mock) = signed_in();
    mock.on(methods::STATS_CLICKS, MockReply::error(5000, "clicks offline"));
    mock.on(methods::STATS_EVENTS, MockReply::ok(event_stats()));

    let page = DashboardPage::new(ctx);
    page.refresh().await;

    assert_eq!(page.errors().len(), 1);
    let view = page.view();
    let events = view.cards.iter().find(|c| c.label == "Total Events").unwrap();
    assert_eq!(events.value, "40");
    let clicks = view.cards.iter().find(|c| c.label == "Total Clicks").unwrap();
    assert_eq!(clicks.value, "-");
}

#[tokio::test]
async fn test_generator_cascade_and_generate() {
    let (ctx, mock) = signed_in();
    mock.on(methods::TRACKER_LIST, MockReply::ok(json!([tracker("t1", "Spring", "ad")])));
    mock.on(methods::CAMPAIGN_LIST, MockReply::ok(json!([campaign("c1", "t1", "Launch")])));
    mock.on(methods::TARGET_LIST, MockReply::ok(json!([target("g1", "t1", "https://a.example")])));
    mock.on(methods::CHANNEL_LIST, MockReply::ok(json!([channel("ch1", "t1", "c1", "Mail")])));
    mock.on(methods::TOKEN_GENERATE, MockReply::ok(token("k1", "aB3xZ9")));

    let mut page = TokenGeneratorPage::new(ctx.clone());
    page.load().await;
    assert!(!page.can_generate());

    page.cycle_tracker(true).await;
    assert_eq!(page.tracker_id(), Some("t1"));
    assert_eq!(page.campaign_options().len(), 1);
    assert_eq!(page.target_options().len(), 1);

    page.cycle_campaign(true).await;
    page.cycle_channel(true);
    page.cycle_target(true);
    page.cycle_mode();
    assert_eq!(page.channel_id(), Some("ch1"));
    assert!(page.can_generate());

    assert!(page.generate().await);
    assert_eq!(page.generated().map(|t| t.short_code.as_str()), Some("aB3xZ9"));

    let sent = &mock.requests_for(methods::TOKEN_GENERATE)[0];
    assert_eq!(sent.params["tracker_id"], json!("t1"));
    assert_eq!(sent.params["campaign_id"], json!("c1"));
    assert_eq!(sent.params["channel_id"], json!("ch1"));
    assert_eq!(sent.params["target_id"], json!("g1"));
    assert_eq!(sent.params["mode"], json!("js"));
    assert_eq!(page.mode(), RedirectMode::Js);

    // 切换追踪器清空下级选择
    page.select_tracker(None).await;
    assert!(page.campaign_id().is_none());
    assert!(page.channel_id().is_none());
    assert!(page.target_id().is_none());
    assert!(page.campaign_options().is_empty());

    page.view_all();
    assert_eq!(ctx.current_route(), Route::Tokens);
}

#[tokio::test]
async fn test_token_delete_refetches_list() {
    let (ctx, mock) = signed_in();
    mock.once(methods::TOKEN_LIST, MockReply::ok(json!([token("k1", "aaa"), token("k2", "bbb")])));
    mock.on(methods::TOKEN_LIST, MockReply::ok(json!([token("k2", "bbb")])));
    mock.on(methods::TOKEN_DELETE, MockReply::ok(json!({ "ok": true })));

    let mut page = TokensPage::new(ctx.clone());
    page.load().await;
    let first = page.tokens()[0].clone();

    page.request_delete(&first);
    assert!(page.confirm_delete().await);
    assert!(page.pending_delete().is_none());
    assert_eq!(page.tokens().len(), 1);
    assert_eq!(mock.call_count(methods::TOKEN_LIST), 2);

    let toast = ctx.toasts().latest().unwrap();
    assert_eq!(toast.kind, ToastKind::Success);
}

#[tokio::test(start_paused = true)]
async fn test_toasts_expire_after_ttl() {
    let (ctx, _mock) = signed_in();
    let ttl = ctx.toasts().ttl();

    ctx.toasts().success("first");
    tokio::time::sleep(ttl / 2).await;
    ctx.toasts().error("second");
    assert_eq!(ctx.toasts().len(), 2);

    tokio::time::sleep(ttl / 2 + Duration::from_millis(1)).await;
    let remaining = ctx.toasts().snapshot();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].message, "second");

    tokio::time::sleep(ttl).await;
    assert!(ctx.toasts().is_empty());
}
