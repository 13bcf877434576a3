//! # TCP Transport
//!
//! Most Ethernet and Wi-Fi receipt printers accept raw ESC/POS on TCP port
//! 9100. There is no framing: the command stream is written as-is.

use std::io;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use super::{Sink, not_connected};

/// Default raw printing port
pub const DEFAULT_PORT: u16 = 9100;

/// Default connect timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// # Network Printer Transport
///
/// ```no_run
/// use std::sync::Arc;
/// use escpos_buffer::{Printer, transport::NetworkSink};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), escpos_buffer::EscposError> {
/// let mut printer = Printer::new(Arc::new(NetworkSink::new("192.168.1.50:9100")));
/// printer.open().await?;
/// printer.init().write_line("Hello", None)?.cut(false);
/// printer.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NetworkSink {
    addr: String,
    connect_timeout: Duration,
    stream: Mutex<Option<TcpStream>>,
}

impl NetworkSink {
    /// `addr` is `host:port`; a bare host gets [`DEFAULT_PORT`].
    pub fn new(addr: impl Into<String>) -> Self {
        let mut addr = addr.into();
        if !has_port(&addr) {
            addr = format!("{}:{}", addr, DEFAULT_PORT);
        }
        Self {
            addr,
            connect_timeout: CONNECT_TIMEOUT,
            stream: Mutex::new(None),
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }
}

/// True when `addr` ends in `:port` (bracketed IPv6 included).
fn has_port(addr: &str) -> bool {
    match addr.rsplit_once(':') {
        Some((host, port)) => {
            port.parse::<u16>().is_ok() && (!host.contains(':') || host.ends_with(']'))
        }
        None => false,
    }
}

#[async_trait]
impl Sink for NetworkSink {
    async fn open(&self) -> io::Result<()> {
        let stream = tokio::time::timeout(self.connect_timeout, TcpStream::connect(&self.addr))
            .await
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::TimedOut,
                    format!("connect to {} timed out", self.addr),
                )
            })??;
        stream.set_nodelay(true)?;
        debug!("connected to {}", self.addr);
        *self.stream.lock().await = Some(stream);
        Ok(())
    }

    async fn write(&self, data: Vec<u8>) -> io::Result<()> {
        let mut guard = self.stream.lock().await;
        let stream = guard.as_mut().ok_or_else(not_connected)?;
        stream.write_all(&data).await?;
        stream.flush().await
    }

    async fn close(&self) -> io::Result<()> {
        if let Some(mut stream) = self.stream.lock().await.take() {
            stream.shutdown().await?;
            debug!("disconnected from {}", self.addr);
        }
        Ok(())
    }
}
