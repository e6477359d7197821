use crate::error::{Error, ErrorKind};
use crate::packet::{self, MagicPacket};
use crate::socket::WakeSocket;
use crate::target::Target;

/// Builds a magic packet for `mac` and sends it to `ip:port` over UDP/IPv4.
///
/// An empty `ip` falls back to the limited broadcast address and an empty
/// `port` to the discard port. A non-empty `password` requests a SecureON
/// packet, which is not implemented; it is rejected before any socket is
/// opened. Every validation or transmission failure is returned to the
/// caller, nothing is retried.
pub async fn send_magic(mac: &str, password: &str, ip: &str, port: &str) -> Result<(), Error> {
    if !password.is_empty() {
        return Err(ErrorKind::PasswordUnsupported.into());
    }

    let address = packet::parse_mac(mac)?;
    let packet = MagicPacket::new(address);
    let target = Target::resolve(ip, port)?;

    let socket = WakeSocket::bind().await?;
    socket.send(&packet, target).await?;

    tracing::debug!(%address, %target, "sent magic packet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::send_magic;
    use crate::error::ErrorKind;

    #[tokio::test]
    async fn password_rejected_before_anything_else() {
        // Even an unparseable MAC is not looked at when a password is given.
        let err = send_magic("not-a-mac", "secret", "", "").await.unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::PasswordUnsupported));
    }

    #[tokio::test]
    async fn invalid_mac_aborts_before_transmission() {
        let err = send_magic("bad-mac", "", "255.255.255.255", "9")
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::InvalidMacAddress { .. }));
        assert!(err.to_string().contains("bad-mac"));
    }

    #[tokio::test]
    async fn invalid_destination_aborts() {
        let err = send_magic("00:11:22:33:44:55", "", "999.1.1.1", "9")
            .await
            .unwrap_err();

        assert!(matches!(
            err.kind(),
            ErrorKind::InvalidDestinationAddress { .. }
        ));
    }

    #[tokio::test]
    async fn invalid_port_aborts() {
        let err = send_magic("00:11:22:33:44:55", "", "255.255.255.255", "80")
            .await
            .unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::PortNotAllowed { port: 80 }));
    }

    #[tokio::test]
    async fn sends_to_loopback() {
        send_magic("00:11:22:33:44:55", "", "127.0.0.1", "9")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn hyphen_notation_and_default_port() {
        send_magic("00-11-22-33-44-55", "", "127.0.0.1", "")
            .await
            .unwrap();
    }
}
