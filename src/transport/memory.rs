//! # In-Memory Transport
//!
//! Records every call and every written chunk. Each phase can be told to
//! fail, and writes can be held back until released, which makes flush
//! pipelining observable in tests.

use std::io;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::Sink;

/// A sink call, in the order it was received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Open,
    Write(Vec<u8>),
    Close,
}

#[derive(Debug, Default)]
struct State {
    events: Vec<SinkEvent>,
    fail_open: bool,
    fail_write: bool,
    fail_close: bool,
    hold_writes: bool,
}

/// Recording sink
///
/// ```
/// use escpos_buffer::transport::{MemorySink, Sink};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> std::io::Result<()> {
/// let sink = MemorySink::new();
/// sink.write(vec![0x1B, 0x40]).await?;
/// assert_eq!(sink.written(), vec![0x1B, 0x40]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<State>,
    release: Notify,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_open(&self) {
        self.lock().fail_open = true;
    }

    pub fn fail_write(&self) {
        self.lock().fail_write = true;
    }

    pub fn fail_close(&self) {
        self.lock().fail_close = true;
    }

    /// Make writes wait for [`MemorySink::release`] before completing.
    ///
    /// The data is recorded when the write starts.
    pub fn hold_writes(&self) {
        self.lock().hold_writes = true;
    }

    /// Let one held write complete.
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.lock().events.clone()
    }

    /// Each `write` call's bytes, in order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.lock()
            .events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Write(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    /// All written bytes concatenated.
    pub fn written(&self) -> Vec<u8> {
        self.writes().concat()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        // A panic while holding this lock can only come from a test
        // assertion; keep recording anyway.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn injected(phase: &str) -> io::Error {
    io::Error::other(format!("injected {} failure", phase))
}

#[async_trait]
impl Sink for MemorySink {
    async fn open(&self) -> io::Result<()> {
        let mut state = self.lock();
        state.events.push(SinkEvent::Open);
        if state.fail_open {
            return Err(injected("open"));
        }
        Ok(())
    }

    async fn write(&self, data: Vec<u8>) -> io::Result<()> {
        let hold = {
            let mut state = self.lock();
            state.events.push(SinkEvent::Write(data));
            if state.fail_write {
                return Err(injected("write"));
            }
            state.hold_writes
        };
        if hold {
            self.release.notified().await;
        }
        Ok(())
    }

    async fn close(&self) -> io::Result<()> {
        let mut state = self.lock();
        state.events.push(SinkEvent::Close);
        if state.fail_close {
            return Err(injected("close"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_events() {
        let sink = MemorySink::new();
        sink.open().await.unwrap();
        sink.write(vec![1, 2]).await.unwrap();
        sink.write(vec![3]).await.unwrap();
        sink.close().await.unwrap();

        assert_eq!(
            sink.events(),
            vec![
                SinkEvent::Open,
                SinkEvent::Write(vec![1, 2]),
                SinkEvent::Write(vec![3]),
                SinkEvent::Close,
            ]
        );
        assert_eq!(sink.written(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let sink = MemorySink::new();
        sink.fail_open();
        sink.fail_write();
        sink.fail_close();
        assert!(sink.open().await.is_err());
        assert!(sink.write(vec![1]).await.is_err());
        assert!(sink.close().await.is_err());
    }

    #[tokio::test]
    async fn test_held_write_waits_for_release() {
        let sink = std::sync::Arc::new(MemorySink::new());
        sink.hold_writes();

        let writer = {
            let sink = sink.clone();
            tokio::spawn(async move { sink.write(vec![9]).await })
        };
        tokio::task::yield_now().await;
        assert!(!writer.is_finished());

        sink.release();
        writer.await.unwrap().unwrap();
        assert_eq!(sink.written(), vec![9]);
    }
}
