use core::net::{Ipv4Addr, SocketAddrV4};

use tokio::net::UdpSocket;

use crate::error::{Error, ErrorKind};
use crate::packet::MagicPacket;
use crate::target::Target;

const FROM: SocketAddrV4 = SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0);

/// Configure a broadcast socket used for sending Wake-on-LAN magic packets.
pub struct WakeSocket {
    socket: UdpSocket,
}

impl WakeSocket {
    /// Creates a new UDP socket bound to an ephemeral local port that can
    /// send broadcast messages.
    pub async fn bind() -> Result<Self, Error> {
        let socket = UdpSocket::bind(FROM).await.map_err(ErrorKind::Bind)?;
        socket.set_broadcast(true).map_err(ErrorKind::SetBroadcast)?;
        Ok(Self { socket })
    }

    /// Sends the given magic packet via this socket to `target` as a single
    /// datagram.
    ///
    /// A successful return means the datagram was handed to the local network
    /// stack, not that the remote host is now awake.
    pub async fn send(&self, packet: &MagicPacket, target: Target) -> Result<(), Error> {
        let to = target.socket_addr();

        self.socket
            .send_to(packet.as_bytes(), to)
            .await
            .map_err(|error| ErrorKind::Send { target: to, error })?;

        tracing::trace!(%to, "magic packet handed to the network stack");
        Ok(())
    }
}
