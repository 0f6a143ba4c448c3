use thiserror::Error;

pub type Result<T, E = PublishError> = std::result::Result<T, E>;

/// Every variant is fatal. The benchmark's validity depends on an
/// uninterrupted steady-state send loop, so errors are never retried or
/// masked; the process reports the failing operation and exits.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to initialize messaging channel.")]
    ChannelInit(#[source] anyhow::Error),

    #[error("Failed to connect to endpoint.")]
    Connect(#[source] anyhow::Error),

    #[error("Failed to send payload on channel.")]
    Send(#[source] anyhow::Error),
}
