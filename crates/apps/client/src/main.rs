//! Headless session driver.
//!
//! Runs a scripted tour of the session core against the built-in dataset,
//! then, if a remote feed is configured, keeps the session ticking while
//! ingesting feed refreshes. Without a configured feed the binary exits
//! after the demo; a missing backend never blocks or fails startup.
//!
//! Configuration (all optional):
//! - `MOMENTA_FEED_URL`     base URL of the moment feed
//! - `MOMENTA_FEED_WS_URL`  websocket URL for change notifications
//! - `MOMENTA_SEED`         RNG seed for ticket/winner draws

mod remote;

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use foundation::time::EpochMs;
use session::auth::{DEMO_EMAIL, DEMO_PASSWORD};
use session::{Command, DetailTab, Session};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn now_ms() -> EpochMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let feed_url = env::var("MOMENTA_FEED_URL").ok();
    let ws_url = env::var("MOMENTA_FEED_WS_URL").ok();
    let seed: u64 = env::var("MOMENTA_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);

    let mut session = Session::new(
        feed::MomentProvider::with_mock_data(),
        session::Wallet::default(),
        seed,
        now_ms(),
    );

    let http = reqwest::Client::new();
    if let Some(base) = feed_url.as_deref() {
        let fetched = remote::fetch_active(&http, base).await;
        session.provider_mut().ingest(fetched);
    }

    let (notify_tx, mut notify_rx) = mpsc::channel::<()>(8);
    if let Some(url) = ws_url {
        tokio::spawn(remote::subscribe(url, notify_tx));
    }

    run_demo(&mut session);

    if feed_url.is_none() {
        info!("no feed configured; demo session complete");
        return;
    }

    let mut ticks = tokio::time::interval(Duration::from_millis(250));
    loop {
        tokio::select! {
            _ = ticks.tick() => {
                session.tick(now_ms());
                if session.provider().needs_refresh() {
                    if let Some(base) = feed_url.as_deref() {
                        let fetched = remote::fetch_active(&http, base).await;
                        session.provider_mut().ingest(fetched);
                    }
                }
                log_events(&mut session);
            }
            Some(()) = notify_rx.recv() => {
                session.provider_mut().notify_changed();
            }
        }
    }
}

/// A scripted pass over the main flows: login, browse, unlock, buy, draw.
fn run_demo(session: &mut Session) {
    let script = [
        Command::Login {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        },
        Command::SelectMoment { id: "m10".into() },
        Command::SwitchTab {
            tab: DetailTab::Raffle,
        },
        Command::AttemptUnlock { id: "m10".into() },
        Command::SwitchTab {
            tab: DetailTab::Market,
        },
        Command::PurchaseItem {
            moment_id: "m10".into(),
            item_id: "wong-2".to_string(),
        },
        Command::StartRaffleDraw,
    ];

    for command in script {
        if let Err(error) = session.apply(command) {
            warn!(%error, "demo command failed");
        }
    }

    // Drive the clock until the raffle draw resolves.
    let mut now = session.current_tick().at_ms;
    while session
        .raffle_console()
        .map(|c| c.winner().is_none())
        .unwrap_or(false)
    {
        now += 150;
        session.tick(now);
    }

    if let Some(console) = session.raffle_console() {
        for line in console.logs() {
            info!("{line}");
        }
    }
    info!(
        balance = session.balance(),
        unlocked = session.unlocked().len(),
        purchases = session.purchases().len(),
        "demo flows complete"
    );
    log_events(session);
}

fn log_events(session: &mut Session) {
    for event in session.drain_events() {
        info!(kind = event.kind, tick = event.tick_index, "{}", event.message);
    }
}
