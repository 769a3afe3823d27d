use super::messages::TranscriptMessage;
use crate::session::TranscriptEvent;
use anyhow::{Context, Result};
use async_nats::Client;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

pub struct NatsClient {
    client: Client,
    subject: String,
}

impl NatsClient {
    /// Connect to NATS server
    pub async fn connect(url: &str, subject: impl Into<String>) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS successfully");

        Ok(Self {
            client,
            subject: subject.into(),
        })
    }

    /// Publish one appended transcript
    pub async fn publish_transcript(&self, event: &TranscriptEvent) -> Result<()> {
        let message = TranscriptMessage::from(event);
        let payload = serde_json::to_vec(&message)?;

        self.client
            .publish(self.subject.clone(), payload.into())
            .await
            .context("Failed to publish transcript")?;

        info!(
            "Published transcript {} to {} (session={})",
            message.transcript_id, self.subject, message.session_id
        );

        Ok(())
    }

    /// Forward every event from the store's feed until the feed closes
    pub fn spawn_forwarder(self, mut events: broadcast::Receiver<TranscriptEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!("Transcript forwarding task started");

            loop {
                match events.recv().await {
                    Ok(event) => {
                        if let Err(e) = self.publish_transcript(&event).await {
                            error!("Failed to forward transcript: {:#}", e);
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!("Transcript forwarder lagged, skipped {} events", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            info!("Transcript forwarding task stopped");
        })
    }
}
