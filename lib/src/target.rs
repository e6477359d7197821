use core::fmt;
use core::net::{Ipv4Addr, SocketAddrV4};

use crate::error::{Error, ErrorKind};

/// Resolve a textual destination address.
///
/// The empty string resolves to the limited broadcast address. Anything else
/// has to parse as a strict dotted-quad IPv4 address; hostnames and IPv6
/// literals are rejected rather than silently replaced by the broadcast
/// address.
pub fn resolve_addr(input: &str) -> Result<Ipv4Addr, Error> {
    if input.is_empty() {
        return Ok(Ipv4Addr::BROADCAST);
    }

    match input.parse::<Ipv4Addr>() {
        Ok(addr) => Ok(addr),
        Err(..) => Err(ErrorKind::InvalidDestinationAddress {
            input: input.into(),
        }
        .into()),
    }
}

/// A destination port for a magic packet.
///
/// Wake-on-LAN conventionally targets the discard (9) or echo (7) service,
/// neither of which elicits an application-level response. Port 0 is passed
/// through to the stack as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Port(u16);

impl Port {
    /// Pass-through destination port 0.
    pub const ANY: Self = Self(0);
    /// The echo service.
    pub const ECHO: Self = Self(7);
    /// The discard service, the conventional Wake-on-LAN destination.
    pub const DISCARD: Self = Self(9);

    /// Resolve a textual destination port.
    ///
    /// The empty string resolves to [`Port::DISCARD`]. Anything else has to
    /// be a decimal number equal to 0, 7, or 9.
    pub fn resolve(input: &str) -> Result<Self, Error> {
        if input.is_empty() {
            return Ok(Self::DISCARD);
        }

        let Ok(port) = input.parse::<u16>() else {
            return Err(ErrorKind::InvalidPort {
                input: input.into(),
            }
            .into());
        };

        match port {
            0 | 7 | 9 => Ok(Self(port)),
            port => Err(ErrorKind::PortNotAllowed { port }.into()),
        }
    }

    /// Get the port number.
    pub fn number(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Port {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A resolved destination for a magic packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    addr: Ipv4Addr,
    port: Port,
}

impl Target {
    /// Resolve the textual `ip` and `port` pair into a destination, applying
    /// the documented defaults for empty inputs.
    pub fn resolve(ip: &str, port: &str) -> Result<Self, Error> {
        Ok(Self {
            addr: resolve_addr(ip)?,
            port: Port::resolve(port)?,
        })
    }

    /// The destination address.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The destination port.
    pub fn port(&self) -> Port {
        self.port
    }

    pub(crate) fn socket_addr(self) -> SocketAddrV4 {
        SocketAddrV4::new(self.addr, self.port.0)
    }
}

impl fmt::Display for Target {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use core::net::Ipv4Addr;

    use super::{Port, Target, resolve_addr};
    use crate::error::ErrorKind;

    #[test]
    fn empty_addr_is_broadcast() {
        assert_eq!(resolve_addr("").unwrap(), Ipv4Addr::BROADCAST);
    }

    #[test]
    fn valid_addr_passes_through() {
        assert_eq!(
            resolve_addr("192.168.1.255").unwrap(),
            Ipv4Addr::new(192, 168, 1, 255)
        );
    }

    #[test]
    fn malformed_addrs_rejected() {
        let inputs = ["999.1.1.1", "256.256.256.256", "invalid.ip.address", "::1", "10.0.0"];

        for input in inputs {
            let err = resolve_addr(input).unwrap_err();

            assert!(
                matches!(err.kind(), ErrorKind::InvalidDestinationAddress { .. }),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn empty_port_is_discard() {
        assert_eq!(Port::resolve("").unwrap(), Port::DISCARD);
    }

    #[test]
    fn accepted_ports() {
        assert_eq!(Port::resolve("0").unwrap(), Port::ANY);
        assert_eq!(Port::resolve("7").unwrap(), Port::ECHO);
        assert_eq!(Port::resolve("9").unwrap(), Port::DISCARD);
    }

    #[test]
    fn out_of_range_port_rejected() {
        let err = Port::resolve("80").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::PortNotAllowed { port: 80 }));
    }

    #[test]
    fn non_numeric_port_rejected() {
        for input in ["x", "-1", "9999999999", "7.0"] {
            let err = Port::resolve(input).unwrap_err();

            assert!(
                matches!(err.kind(), ErrorKind::InvalidPort { .. }),
                "{input}: {err:?}"
            );
        }
    }

    #[test]
    fn defaults_match_explicit_values() {
        assert_eq!(
            Target::resolve("", "").unwrap(),
            Target::resolve("255.255.255.255", "9").unwrap()
        );
    }

    #[test]
    fn display_is_addr_and_port() {
        let target = Target::resolve("", "").unwrap();
        assert_eq!(target.to_string(), "255.255.255.255:9");
    }
}
