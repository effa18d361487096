use std::net::SocketAddr;

use log::{debug, info};

use crate::error::WolError;
use crate::net::{resolve_destination, BroadcastSocket};
use crate::packet::{print_packet, MagicPacket};

/// The discard port. Any port works since the NIC matches the payload, not
/// the port, but 9 is what most receivers expect.
pub const DEFAULT_PORT: u16 = 9;

pub const DEFAULT_BROADCAST: &str = "255.255.255.255";

#[derive(Debug, Clone, Copy)]
pub struct Sender {
    port: u16,
}

impl Default for Sender {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

impl Sender {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    /// Builds a magic packet for `mac_address` and writes it to `destination`
    /// as one datagram. Success only means the local stack accepted it.
    pub fn send(&self, mac_address: &str, destination: &str) -> Result<(), WolError> {
        let (packet, destination) = self.prepare(mac_address, destination)?;

        let socket = BroadcastSocket::open(&destination).map_err(WolError::TransmissionFailed)?;
        socket
            .send_to(&packet.to_bytes(), &destination)
            .map_err(WolError::TransmissionFailed)?;

        info!("Sent magic packet for {} to {}", packet.target(), destination);
        Ok(())
    }

    /// Like `send`, but prints the packet instead of opening a socket.
    pub fn dry_run(
        &self,
        mac_address: &str,
        destination: &str,
        quiet: bool,
    ) -> Result<MagicPacket, WolError> {
        let (packet, destination) = self.prepare(mac_address, destination)?;
        info!(
            "Dryrun: would send magic packet for {} to {}",
            packet.target(),
            destination
        );
        if !quiet {
            print_packet(&packet);
        }
        Ok(packet)
    }

    fn prepare(
        &self,
        mac_address: &str,
        destination: &str,
    ) -> Result<(MagicPacket, SocketAddr), WolError> {
        let packet = MagicPacket::build(mac_address)?;
        let destination = resolve_destination(destination, self.port)?;
        debug!("Resolved destination {}", destination);
        Ok((packet, destination))
    }
}

pub fn send(mac_address: &str, destination: &str) -> Result<(), WolError> {
    Sender::default().send(mac_address, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_invalid_address() {
        let res = Sender::new(9).send("00:11:22:33:44", "127.0.0.1");
        assert!(matches!(res, Err(WolError::InvalidHardwareAddress(_))));
    }

    #[test]
    fn test_send_unresolvable_destination() {
        let res = send("00:11:22:33:44:55", "");
        assert!(matches!(
            res,
            Err(WolError::DestinationResolutionFailed { .. })
        ));
    }

    #[test]
    fn test_address_checked_before_destination() {
        let res = send("GG:11:22:33:44:55", "");
        assert!(matches!(res, Err(WolError::InvalidHardwareAddress(_))));
    }

    #[test]
    fn test_dry_run() {
        let packet = Sender::default()
            .dry_run("00:11:22:33:44:55", DEFAULT_BROADCAST, true)
            .unwrap();
        assert_eq!(packet, MagicPacket::build("00-11-22-33-44-55").unwrap());
    }
}
