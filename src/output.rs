//! Output sink
//!
//! Every line the shell produces is pushed through an unbounded channel. The
//! owner of the receiving end (the terminal loop in the binary, or a test)
//! decides how lines are displayed. Senders can be cloned into background
//! workers, which keeps the search worker away from any presentation state.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Receiving half of the output channel.
pub type OutputReceiver = UnboundedReceiver<String>;

#[derive(Clone, Debug)]
pub struct Output {
    tx: UnboundedSender<String>,
}

impl Output {
    pub fn channel() -> (Self, OutputReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue one line of output. Lines sent after the receiver is gone are dropped.
    pub fn line(&self, text: impl Into<String>) {
        if self.tx.send(text.into()).is_err() {
            tracing::debug!("Output receiver closed, dropping line");
        }
    }
}

/// Drain every line currently queued without waiting for more.
pub fn drain(rx: &mut OutputReceiver) -> Vec<String> {
    let mut lines = Vec::new();
    while let Ok(line) = rx.try_recv() {
        lines.push(line);
    }
    lines
}
