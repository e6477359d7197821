use core::fmt;
use core::net::SocketAddrV4;

use std::io;

/// An error that can occur when building or sending magic packets.
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    #[inline]
    pub(super) fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[derive(Debug)]
pub(super) enum ErrorKind {
    InvalidMacAddress { input: Box<str> },
    InvalidDestinationAddress { input: Box<str> },
    InvalidPort { input: Box<str> },
    PortNotAllowed { port: u16 },
    PasswordUnsupported,
    Bind(io::Error),
    SetBroadcast(io::Error),
    Send { target: SocketAddrV4, error: io::Error },
}

impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMacAddress { input } => {
                write!(f, "Invalid MAC address `{input}`")
            }
            Self::InvalidDestinationAddress { input } => {
                write!(f, "Invalid destination address `{input}`")
            }
            Self::InvalidPort { input } => write!(f, "Invalid port `{input}`"),
            Self::PortNotAllowed { port } => {
                write!(f, "Port {port} not supported, use 0, 7, or 9")
            }
            Self::PasswordUnsupported => {
                write!(f, "Password-protected Wake-on-LAN is not supported")
            }
            Self::Bind(..) => write!(f, "Failed to bind socket"),
            Self::SetBroadcast(..) => write!(f, "Failed to set socket broadcast option"),
            Self::Send { target, .. } => {
                write!(f, "Failed to send magic packet to {target}")
            }
        }
    }
}

impl core::error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Bind(e) => Some(e),
            ErrorKind::SetBroadcast(e) => Some(e),
            ErrorKind::Send { error, .. } => Some(error),
            _ => None,
        }
    }
}
