//! Remote feed transport: HTTP fetch plus a websocket change subscription.
//!
//! The transport only produces fetch results and change pings; all
//! replace/retain semantics live in `feed::MomentProvider`.

use catalog::records::Moment;
use feed::{decode_moments, FeedError};
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Fetches the full active moment set.
pub async fn fetch_active(client: &reqwest::Client, base: &str) -> Result<Vec<Moment>, FeedError> {
    let url = format!("{}/moments?status=active", base.trim_end_matches('/'));
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;
    if !response.status().is_success() {
        return Err(FeedError::Transport(format!(
            "{url}: HTTP {}",
            response.status()
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|e| FeedError::Transport(e.to_string()))?;
    decode_moments(&body)
}

/// Listens for change events and pings the session loop on each one.
///
/// Any message counts as a change; the payload is never inspected because
/// the response is always a full re-fetch. A failed or closed connection is
/// logged and the task ends; there is no retry, the current set simply
/// stops refreshing.
pub async fn subscribe(url: String, notify: mpsc::Sender<()>) {
    match tokio_tungstenite::connect_async(url.as_str()).await {
        Ok((mut stream, _)) => {
            info!(%url, "subscribed to moment changes");
            while let Some(message) = stream.next().await {
                match message {
                    Ok(m) if m.is_text() || m.is_binary() => {
                        if notify.send(()).await.is_err() {
                            return;
                        }
                    }
                    Ok(_) => {}
                    Err(error) => {
                        warn!(%error, "change subscription closed");
                        return;
                    }
                }
            }
        }
        Err(error) => {
            warn!(%error, "change subscription unavailable");
        }
    }
}
