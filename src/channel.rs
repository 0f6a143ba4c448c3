//! The outbound transport seam.
//!
//! `MessageChannel` is the thin boundary between the send loop and the
//! messaging library. The production implementation is a ZeroMQ PUSH
//! socket; tests substitute scripted channels.

use crate::error::{PublishError, Result};

pub trait MessageChannel {
    /// Connect the channel to `endpoint`. Called exactly once, before any
    /// send. There is no reconnect path.
    fn connect(&mut self, endpoint: &str) -> Result<()>;

    /// Hand `payload` to the transport, blocking until it is accepted for
    /// delivery. The transport's own flow control is the only
    /// backpressure applied to the caller.
    fn send(&mut self, payload: Vec<u8>) -> Result<()>;
}

/// ZeroMQ PUSH channel. The socket and its context are released when the
/// value is dropped, on error paths included.
pub struct ZmqChannel {
    socket: zmq::Socket,
    // Sockets must not outlive their context.
    _context: zmq::Context,
}

impl ZmqChannel {
    pub fn open() -> Result<Self> {
        let context = zmq::Context::new();
        let socket = context
            .socket(zmq::PUSH)
            .map_err(|e| PublishError::ChannelInit(e.into()))?;

        Ok(Self {
            socket,
            _context: context,
        })
    }
}

impl MessageChannel for ZmqChannel {
    fn connect(&mut self, endpoint: &str) -> Result<()> {
        self.socket
            .connect(endpoint)
            .map_err(|e| PublishError::Connect(e.into()))
    }

    fn send(&mut self, payload: Vec<u8>) -> Result<()> {
        self.socket
            .send(payload, 0)
            .map_err(|e| PublishError::Send(e.into()))
    }
}
