use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use log::debug;
use socket2::{Domain, Protocol, SockAddr, Socket, Type};

use crate::error::WolError;

/// Resolves `destination` to a UDP endpoint. A destination that already names
/// a port (`10.0.0.255:7`, `[ff02::1]:9`) keeps it, anything else gets `port`.
/// IPv4 results are preferred since broadcast only exists there.
pub fn resolve_destination(destination: &str, port: u16) -> Result<SocketAddr, WolError> {
    let failed = |source: io::Error| WolError::DestinationResolutionFailed {
        destination: destination.to_string(),
        source,
    };

    let host = destination.trim();
    if host.is_empty() {
        return Err(failed(io::Error::new(
            io::ErrorKind::InvalidInput,
            "empty destination",
        )));
    }

    if let Ok(addr) = host.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let addrs: Vec<SocketAddr> = (host, port).to_socket_addrs().map_err(failed)?.collect();
    addrs
        .iter()
        .find(|addr| addr.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| {
            failed(io::Error::new(
                io::ErrorKind::NotFound,
                "destination resolved to no addresses",
            ))
        })
}

/// A UDP socket allowed to send to broadcast addresses. Closed on drop.
pub struct BroadcastSocket {
    inner: Socket,
}

impl BroadcastSocket {
    pub fn open(destination: &SocketAddr) -> io::Result<Self> {
        let socket = Socket::new(
            Domain::for_address(*destination),
            Type::DGRAM,
            Some(Protocol::UDP),
        )?;
        if destination.is_ipv4() {
            socket.set_broadcast(true)?;
        }
        Ok(Self { inner: socket })
    }

    /// Sends `buf` as a single datagram. A short write is reported as an
    /// error since a truncated datagram is useless to the receiver.
    pub fn send_to(&self, buf: &[u8], destination: &SocketAddr) -> io::Result<()> {
        let sent = self.inner.send_to(buf, &SockAddr::from(*destination))?;
        debug!("sent {} of {} bytes to {}", sent, buf.len(), destination);
        if sent != buf.len() {
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("short datagram write: {} of {} bytes", sent, buf.len()),
            ));
        }
        Ok(())
    }
}
