//! # Transport Selection
//!
//! Parses a target string into the sink that reaches it.
//!
//! | Target string | Sink |
//! |---------------|------|
//! | `tcp://host` or `tcp://host:port` | [`NetworkSink`] |
//! | `host:port` | [`NetworkSink`] |
//! | `/dev/usb/lp0`, `./out.bin`, any path with `/` | [`DeviceSink`] |

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use super::{DeviceSink, NetworkSink, Sink};
use crate::error::EscposError;

/// Where a print job is sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Network(String),
    Device(PathBuf),
}

impl Target {
    /// Build the sink for this target. Nothing is opened yet.
    pub fn sink(&self) -> Arc<dyn Sink> {
        match self {
            Self::Network(addr) => Arc::new(NetworkSink::new(addr.clone())),
            Self::Device(path) => Arc::new(DeviceSink::new(path)),
        }
    }
}

impl FromStr for Target {
    type Err = EscposError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(addr) = s.strip_prefix("tcp://") {
            if addr.is_empty() {
                return Err(EscposError::Config("tcp:// target has no host".into()));
            }
            return Ok(Self::Network(addr.to_string()));
        }
        if s.contains('/') {
            return Ok(Self::Device(PathBuf::from(s)));
        }
        match s.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() && port.parse::<u16>().is_ok() => {
                Ok(Self::Network(s.to_string()))
            }
            _ => Err(EscposError::Config(format!(
                "Cannot tell what '{}' is; use tcp://host[:port] or a device path",
                s
            ))),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(addr) => write!(f, "tcp://{}", addr),
            Self::Device(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_network() {
        assert_eq!(
            "tcp://10.0.0.7".parse::<Target>().unwrap(),
            Target::Network("10.0.0.7".into())
        );
        assert_eq!(
            "printer.local:9100".parse::<Target>().unwrap(),
            Target::Network("printer.local:9100".into())
        );
    }

    #[test]
    fn test_parse_device() {
        assert_eq!(
            "/dev/usb/lp0".parse::<Target>().unwrap(),
            Target::Device(PathBuf::from("/dev/usb/lp0"))
        );
        assert_eq!(
            "./receipt.bin".parse::<Target>().unwrap(),
            Target::Device(PathBuf::from("./receipt.bin"))
        );
    }

    #[test]
    fn test_parse_ambiguous() {
        assert!("printer".parse::<Target>().is_err());
        assert!("tcp://".parse::<Target>().is_err());
        assert!(":9100".parse::<Target>().is_err());
    }

    #[test]
    fn test_display() {
        let target: Target = "tcp://host:9100".parse().unwrap();
        assert_eq!(target.to_string(), "tcp://host:9100");
    }
}
