use thiserror::Error;

use crate::event::Envelope;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sending messages to the main loop failed")]
    ActionSendFailed(#[from] tokio::sync::mpsc::error::SendError<Envelope>),
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Encoding or decoding persisted state failed")]
    SerializationFailed(#[from] serde_json::Error),
    #[error("State directory is not resolvable")]
    StateDirUnresolved,
    #[error("Feed subscription failed")]
    SubscriptionFailed(#[from] reqwest::Error),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
