use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

/// A readable byte stream with push/close semantics. Attachment bodies are
/// delivered through it immediately; list output is pushed by a background
/// task after the configured delay, after which the stream closes.
#[derive(Debug)]
pub struct ByteStream {
    inner: ReceiverStream<Bytes>,
}

impl ByteStream {
    pub(crate) fn new(rx: mpsc::Receiver<Bytes>) -> Self {
        Self {
            inner: ReceiverStream::new(rx),
        }
    }

    // Single-chunk stream, already closed on the sender side.
    pub(crate) fn from_bytes(bytes: Bytes) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let _ = tx.try_send(bytes);
        Self::new(rx)
    }

    /// Drains the stream into one buffer.
    pub async fn collect_bytes(mut self) -> Bytes {
        let mut buf = BytesMut::new();
        while let Some(chunk) = self.next().await {
            buf.extend_from_slice(&chunk);
        }
        buf.freeze()
    }
}

impl Stream for ByteStream {
    type Item = Bytes;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}
