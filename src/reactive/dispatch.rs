//! Message passing from the animation side back to the application side.
//!
//! Animations may be advanced by a compositor or render thread, but lifecycle
//! notifications must run where the application handles events. Completions
//! and imperative open/close requests are therefore posted as
//! [`ModalMessage`]s and applied when the modal drains its [`Mailbox`].

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, OnceLock};

use calloop::ping::{make_ping, Ping, PingSource};

use crate::animation::Phase;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalMessage {
    /// An enter or exit animation ran to completion. `generation` identifies
    /// the show/hide cycle that started it.
    AnimationFinished { phase: Phase, generation: u64 },
    Open,
    Close,
}

/// Sending half of a [`Mailbox`]. Cheap to clone and `Send`.
#[derive(Clone)]
pub struct MessageSender {
    tx: Sender<ModalMessage>,
    waker: Arc<OnceLock<Ping>>,
}

impl MessageSender {
    /// Post a message and wake the host event loop, if one is attached.
    /// Messages sent after the mailbox is dropped are discarded.
    pub fn send(&self, message: ModalMessage) {
        if self.tx.send(message).is_err() {
            log::debug!("Mailbox closed, dropping {:?}", message);
            return;
        }
        if let Some(ping) = self.waker.get() {
            ping.ping();
        }
    }
}

pub struct Mailbox {
    rx: Receiver<ModalMessage>,
    tx: Sender<ModalMessage>,
    waker: Arc<OnceLock<Ping>>,
}

impl Mailbox {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            rx,
            tx,
            waker: Arc::new(OnceLock::new()),
        }
    }

    pub fn sender(&self) -> MessageSender {
        MessageSender {
            tx: self.tx.clone(),
            waker: self.waker.clone(),
        }
    }

    /// Create a calloop ping that fires whenever a message is posted. Insert
    /// the returned source into the host's event loop and call
    /// `Modal::pump` from its callback. Only the first call installs a waker.
    pub fn attach_wakeup(&self) -> Result<PingSource> {
        let (ping, source) = make_ping()?;
        if self.waker.set(ping).is_err() {
            log::warn!("Mailbox wakeup already attached, new ping will never fire");
        }
        Ok(source)
    }

    /// Take every message posted so far, in order.
    pub fn drain(&self) -> Vec<ModalMessage> {
        self.rx.try_iter().collect()
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new()
    }
}
