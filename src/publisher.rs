//! The throughput-generating send loop.

use crate::args::Config;
use crate::channel::MessageChannel;
use crate::error::Result;
use log::{info, trace};
use std::convert::Infallible;

/// Owns a single outbound channel and floods it with fixed-size payloads
/// until the transport reports an error.
pub struct ThroughputPublisher<C> {
    channel: C,
    payload_size: usize,
}

impl<C: MessageChannel> ThroughputPublisher<C> {
    /// Connects `channel` to the configured endpoint. The connect is
    /// attempted exactly once; failure is fatal to the benchmark.
    pub fn connect(mut channel: C, config: Config) -> Result<Self> {
        channel.connect(&config.endpoint)?;
        info!(
            "connected to {}, streaming {}-byte payloads",
            config.endpoint, config.payload_size
        );

        Ok(Self {
            channel,
            payload_size: config.payload_size,
        })
    }

    /// Sends payloads for as long as the transport accepts them. A fresh
    /// buffer is allocated each iteration and handed to the channel; the
    /// blocking send is the only throttle on the loop. The loop has no
    /// success exit, so `Ok` is uninhabited.
    pub fn run(mut self) -> Result<Infallible> {
        loop {
            let payload = vec![0u8; self.payload_size];
            self.channel.send(payload)?;
            trace!("payload accepted by transport");
        }
    }
}
