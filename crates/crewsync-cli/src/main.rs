//! Terminal demo for the crewsync sync loop.
//!
//! Connects to a running backend, prints the resolved navigation for the
//! demo profile, and streams status-change notifications to stdout until
//! Ctrl-C.
//!
//! Environment:
//! - `CREWSYNC_API_URL`   backend base URL (default `http://localhost:5000`)
//! - `CREWSYNC_TOKEN`     bearer token (required)
//! - `CREWSYNC_ROLE`      admin | project_manager | employee (default admin)
//! - `CREWSYNC_DESIGNATION` optional designation, e.g. `project_manager`

use std::env;
use std::sync::Arc;

use crewsync_core::api::RestApi;
use crewsync_core::config::ClientConfig;
use crewsync_core::domain::{Capability, Role, UserId, UserProfile, resolve_capabilities};
use crewsync_core::nav::navigation_for;
use crewsync_core::ports::{Notification, NotificationSink, Severity, SystemClock};
use crewsync_core::sync::{Poller, TaskSync};

/// Prints notifications the way the dashboard would toast them.
struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, notification: Notification) {
        match notification.severity() {
            Severity::Success => println!("[toast] {}", notification.message()),
            Severity::Error => eprintln!("[toast/error] {}", notification.message()),
        }
    }
}

fn profile_from_env() -> UserProfile {
    let role = match env::var("CREWSYNC_ROLE").as_deref() {
        Ok("project_manager") => Role::ProjectManager,
        Ok("employee") => Role::Employee,
        _ => Role::Admin,
    };

    UserProfile {
        id: UserId::new("demo"),
        first_name: "Demo".to_string(),
        last_name: "User".to_string(),
        email: "demo@example.com".to_string(),
        role,
        designation: env::var("CREWSYNC_DESIGNATION").ok(),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // (A) 設定とデモ用 profile
    let base_url =
        env::var("CREWSYNC_API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let Ok(token) = env::var("CREWSYNC_TOKEN") else {
        eprintln!("CREWSYNC_TOKEN is not set; sign in and export a bearer token first");
        std::process::exit(2);
    };
    let config = ClientConfig::new(base_url, token);
    let user = profile_from_env();

    // (B) ナビゲーションは profile から純関数で計算
    println!("Signed in as {} ({:?})", user.display_name(), user.role);
    for entry in navigation_for(&user) {
        println!("  {:<24} {}", entry.title, entry.path);
    }

    // (C) REST クライアントと同期 façade
    let api = match RestApi::new(&config) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            eprintln!("failed to build API client: {e}");
            std::process::exit(1);
        }
    };
    let sync = Arc::new(TaskSync::new(api, Arc::new(ConsoleSink), Arc::new(SystemClock)));

    // (D) ポーリングは capability で gate（管理者/PM のみ）
    let caps = resolve_capabilities(&user);
    if !caps.contains(Capability::ReceiveStatusUpdates) {
        println!("profile is not eligible for status polling; nothing to do");
        return;
    }

    let poller = Poller::spawn(Arc::clone(&sync), config.initial_delay, config.poll_interval);
    println!(
        "polling every {}s (first poll in {}s) — Ctrl-C to stop",
        config.poll_interval.as_secs(),
        config.initial_delay.as_secs()
    );

    // (E) Ctrl-C で graceful shutdown（タイマーを確実に解放する）
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "ctrl-c handler failed");
    }
    poller.shutdown().await;

    let counts = sync.store().counts().await;
    println!(
        "stopped. cached tasks: {} ({} pending, {} in progress, {} completed)",
        counts.total(),
        counts.pending,
        counts.in_progress,
        counts.completed
    );
}
