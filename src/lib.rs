pub mod args;
pub mod channel;
pub mod error;
pub mod publisher;
