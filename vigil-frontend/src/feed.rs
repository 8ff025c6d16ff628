use std::time::{Duration, Instant};

use eventsource_stream::Eventsource;
use futures::StreamExt;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use tokio::sync::mpsc::Sender;

use crate::{
    error::AppError,
    event::{Envelope, Message, MessageSource},
    model::record::EditRecord,
};

pub const RECENT_CHANGE_URL: &str = "https://stream.wikimedia.org/v2/stream/recentchange";
pub const THROTTLE_INTERVAL: Duration = Duration::from_millis(2000);
pub const WINDOW_LIMIT: usize = 100;

/// Consumes the event stream until the transport ends. Messages inside the
/// throttle interval are dropped before decoding; malformed payloads are
/// rejected and logged. There is no reconnect, re-subscription happens only
/// through a url change in the model.
pub async fn stream(url: &str, sender: &Sender<Envelope>) -> Result<(), AppError> {
    let response = reqwest::Client::new()
        .get(url)
        .header(ACCEPT, "text/event-stream")
        .send()
        .await?
        .error_for_status()?;

    tracing::info!("feed subscription opened: {}", url);

    let mut throttle = Throttle::new(THROTTLE_INTERVAL);
    let mut events = response.bytes_stream().eventsource();

    while let Some(event) = events.next().await {
        let event = match event {
            Ok(it) => it,
            Err(error) => {
                tracing::warn!("feed transport failed: {:?}", error);
                break;
            }
        };

        if !throttle.admit(Instant::now()) {
            tracing::trace!("dropping message inside throttle interval");
            continue;
        }

        match decode_change(&event.data) {
            Ok(record) => {
                let envelope = Envelope {
                    messages: vec![Message::FeedRecord(Box::new(record))],
                    source: MessageSource::Feed,
                };

                if sender.send(envelope).await.is_err() {
                    break;
                }
            }
            Err(error) => {
                tracing::warn!("rejecting malformed change event: {:?}", error);
            }
        }
    }

    tracing::info!("feed subscription closed: {}", url);

    Ok(())
}

/// Rate limiter, not a sampler: dropped messages are discarded, never
/// batched.
struct Throttle {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Throttle {
    fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    fn admit(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecentChange {
    meta: ChangeMeta,
    title: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    comment: String,
    user: String,
    #[serde(default)]
    bot: bool,
    #[serde(default)]
    minor: bool,
    #[serde(default)]
    namespace: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ChangeMeta {
    id: String,
    domain: String,
}

fn decode_change(data: &str) -> Result<EditRecord, serde_json::Error> {
    let change: RecentChange = serde_json::from_str(data)?;

    Ok(EditRecord {
        id: change.meta.id,
        domain: change.meta.domain,
        title: change.title,
        kind: change.kind,
        comment: change.comment,
        user: change.user,
        bot: change.bot,
        minor: change.minor,
        namespace: change.namespace,
        seen: false,
    })
}
