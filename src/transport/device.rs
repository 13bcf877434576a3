//! # Character Device Transport
//!
//! Writes to a device node: USB line printers (`/dev/usb/lp0`), serial
//! ports (`/dev/ttyUSB0`) or a Bluetooth RFCOMM binding (`/dev/rfcomm0`).
//! A path to a regular file captures the stream instead, replacing whatever
//! the file held before.
//!
//! ## TTY Configuration
//!
//! When the device is a TTY it is switched to raw mode so binary data is
//! transmitted without modification:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, INLCR, IGNCR, ICRNL
//! - **No software flow control**: IXON, IXOFF, IXANY (0x11/0x13 occur in raster data)
//! - **No output processing**: OPOST (no LF to CR LF translation)
//! - **8-bit characters**: CS8, no parity
//!
//! ## Chunking
//!
//! Large writes are split into chunks with an optional pause in between,
//! which keeps slow links (Bluetooth SPP especially) from overrunning the
//! printer's receive buffer.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, trace};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{Sink, not_connected};

/// Default chunk size for writes (bytes)
const CHUNK_SIZE: usize = 4096;

/// # Device Printer Transport
///
/// ```no_run
/// use std::sync::Arc;
/// use escpos_buffer::{Printer, transport::DeviceSink};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), escpos_buffer::EscposError> {
/// let sink = DeviceSink::new("/dev/usb/lp0");
/// let mut printer = Printer::new(Arc::new(sink));
/// printer.open().await?;
/// printer.init().feed(3).cut(true);
/// printer.close().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceSink {
    path: PathBuf,
    chunk_size: usize,
    chunk_delay: Duration,
    file: Mutex<Option<File>>,
}

impl DeviceSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            chunk_size: CHUNK_SIZE,
            chunk_delay: Duration::ZERO,
            file: Mutex::new(None),
        }
    }

    /// Set the chunk size for large writes. Default is 4096 bytes.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    /// Set the pause between chunks. Default is none.
    pub fn with_chunk_delay(mut self, delay: Duration) -> Self {
        self.chunk_delay = delay;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Sink for DeviceSink {
    async fn open(&self) -> io::Result<()> {
        let path = self.path.clone();
        let file = tokio::task::spawn_blocking(move || -> io::Result<std::fs::File> {
            let file = open_for_writing(&path)?;
            configure_tty_raw(&file)?;
            Ok(file)
        })
        .await
        .map_err(io::Error::other)??;

        debug!("opened {}", self.path.display());
        *self.file.lock().await = Some(File::from_std(file));
        Ok(())
    }

    async fn write(&self, data: Vec<u8>) -> io::Result<()> {
        let mut guard = self.file.lock().await;
        let file = guard.as_mut().ok_or_else(not_connected)?;

        let mut chunks = data.chunks(self.chunk_size).peekable();
        while let Some(chunk) = chunks.next() {
            file.write_all(chunk).await?;
            trace!("{}: wrote {} bytes", self.path.display(), chunk.len());
            if chunks.peek().is_some() && !self.chunk_delay.is_zero() {
                tokio::time::sleep(self.chunk_delay).await;
            }
        }
        file.flush().await
    }

    async fn close(&self) -> io::Result<()> {
        if let Some(mut file) = self.file.lock().await.take() {
            file.flush().await?;
            debug!("closed {}", self.path.display());
        }
        Ok(())
    }
}

/// Device nodes are opened as they are. A regular file, or a path that does
/// not exist yet, is created or truncated so each job replaces the last.
fn open_for_writing(path: &Path) -> io::Result<std::fs::File> {
    let regular = match std::fs::metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => true,
        Err(e) => return Err(e),
    };

    let mut options = OpenOptions::new();
    options.write(true);
    if regular {
        options.create(true).truncate(true);
    }
    options.open(path)
}

/// Put `file` into raw mode if it is a TTY; other devices are left alone.
#[cfg(unix)]
fn configure_tty_raw(file: &std::fs::File) -> io::Result<()> {
    use std::mem::MaybeUninit;
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    if unsafe { libc::isatty(fd) } != 1 {
        return Ok(());
    }

    let mut termios = MaybeUninit::uninit();
    if unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) } != 0 {
        return Err(io::Error::last_os_error());
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) } != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn configure_tty_raw(_file: &std::fs::File) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("escpos-buffer-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_writes_chunks_to_file() {
        let path = temp_path("chunks");
        std::fs::write(&path, b"").unwrap();

        let sink = DeviceSink::new(&path).with_chunk_size(3);
        sink.open().await.unwrap();
        sink.write(b"abcdefgh".to_vec()).await.unwrap();
        sink.write(b"ij".to_vec()).await.unwrap();
        sink.close().await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"abcdefghij".to_vec());
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_replaces_previous_file_contents() {
        let path = temp_path("replace");
        std::fs::write(&path, b"OLDOLDOLDOLD").unwrap();

        let sink = DeviceSink::new(&path);
        sink.open().await.unwrap();
        sink.write(vec![0x1B, 0x40]).await.unwrap();
        sink.close().await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![0x1B, 0x40]);
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_creates_missing_file() {
        let path = temp_path("created.bin");
        let _ = std::fs::remove_file(&path);

        let sink = DeviceSink::new(&path);
        sink.open().await.unwrap();
        sink.write(b"hi".to_vec()).await.unwrap();
        sink.close().await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hi".to_vec());
        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_missing_device() {
        let sink = DeviceSink::new(temp_path("missing/lp0"));
        let err = sink.open().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_write_before_open() {
        let sink = DeviceSink::new(temp_path("never-opened"));
        let err = sink.write(vec![1]).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotConnected);
    }
}
