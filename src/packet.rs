use thiserror::Error;

use crate::error::WolError;
use crate::net::MacAddress;

pub const SYNC_LEN: usize = 6;
pub const REPETITIONS: usize = 16;
pub const BODY_LEN: usize = MacAddress::LENGTH * REPETITIONS;
pub const PACKET_LEN: usize = SYNC_LEN + BODY_LEN;

const SYNCHRONIZATION_SCHEME: [u8; SYNC_LEN] = [0xff; SYNC_LEN];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("payload is {0} bytes, magic packet needs 102")]
    TooShort(usize),
    #[error("payload does not start with the synchronization stream")]
    BadSync,
    #[error("address copy {0} differs from the first copy")]
    Mismatch(usize),
}

/// A Wake-on-LAN magic packet: six `0xff` bytes followed by the target's
/// hardware address repeated sixteen times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicPacket {
    header: [u8; SYNC_LEN],
    body: [u8; BODY_LEN],
}

impl MagicPacket {
    pub fn new(mac_address: &MacAddress) -> Self {
        let mut body = [0u8; BODY_LEN];
        for chunk in body.chunks_exact_mut(MacAddress::LENGTH) {
            chunk.copy_from_slice(mac_address.as_bytes());
        }
        Self {
            header: SYNCHRONIZATION_SCHEME,
            body,
        }
    }

    pub fn build(mac_address: &str) -> Result<Self, WolError> {
        let mac_address = MacAddress::parse(mac_address)?;
        Ok(Self::new(&mac_address))
    }

    /// Checks that `payload` starts with a well-formed magic packet. Anything
    /// past the first `PACKET_LEN` bytes is ignored.
    pub fn parse(payload: &[u8]) -> Result<Self, PayloadError> {
        if payload.len() < PACKET_LEN {
            return Err(PayloadError::TooShort(payload.len()));
        }
        if payload[..SYNC_LEN] != SYNCHRONIZATION_SCHEME {
            return Err(PayloadError::BadSync);
        }

        let body = &payload[SYNC_LEN..PACKET_LEN];
        let first = &body[..MacAddress::LENGTH];
        if let Some(i) = body
            .chunks_exact(MacAddress::LENGTH)
            .position(|chunk| chunk != first)
        {
            return Err(PayloadError::Mismatch(i));
        }

        let mut octets = [0u8; MacAddress::LENGTH];
        octets.copy_from_slice(first);
        Ok(Self::new(&MacAddress::new(octets)))
    }

    pub fn header(&self) -> &[u8] {
        &self.header
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn target(&self) -> MacAddress {
        let mut octets = [0u8; MacAddress::LENGTH];
        octets.copy_from_slice(&self.body[..MacAddress::LENGTH]);
        MacAddress::new(octets)
    }

    pub fn to_bytes(&self) -> [u8; PACKET_LEN] {
        let mut data = [0u8; PACKET_LEN];
        data[..SYNC_LEN].copy_from_slice(&self.header);
        data[SYNC_LEN..].copy_from_slice(&self.body);
        data
    }
}

fn hex_line(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_packet(packet: &MagicPacket) -> String {
    let mut out = format!("magic packet for {}\n", packet.target());
    out.push_str(&format!("sync  {}\n", hex_line(packet.header())));
    for (i, chunk) in packet.body().chunks(MacAddress::LENGTH).enumerate() {
        out.push_str(&format!("{:>4}  {}\n", i, hex_line(chunk)));
    }
    out
}

pub fn print_packet(packet: &MagicPacket) {
    print!("{}", format_packet(packet));
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAC: [u8; 6] = [0x00, 0x11, 0x22, 0x33, 0x44, 0x55];

    #[test]
    fn test_layout() {
        let packet = MagicPacket::build("00:11:22:33:44:55").unwrap();
        let bytes = packet.to_bytes();
        assert_eq!(bytes.len(), 102);
        assert_eq!(&bytes[..6], &[0xff; 6]);
        for i in 0..16 {
            assert_eq!(&bytes[6 + 6 * i..12 + 6 * i], &MAC, "copy {i}");
        }
        assert_eq!(packet.header(), &bytes[..6]);
        assert_eq!(packet.body(), &bytes[6..]);
        assert_eq!(packet.target().octets(), MAC);
    }

    #[test]
    fn test_build_is_deterministic() {
        let a = MagicPacket::build("aa:bb:cc:dd:ee:ff").unwrap();
        let b = MagicPacket::build("AA:BB:CC:DD:EE:FF").unwrap();
        let c = MagicPacket::build("aa-bb-cc-dd-ee-ff").unwrap();
        assert_eq!(a.to_bytes(), b.to_bytes());
        assert_eq!(a.to_bytes(), c.to_bytes());
        assert_eq!(a, MagicPacket::build("aa:bb:cc:dd:ee:ff").unwrap());
    }

    #[test]
    fn test_build_rejects_bad_addresses() {
        for s in [
            "",
            "GG:11:22:33:44:55",
            "00:11:22:33:44",
            "00:11:22",
            "00:11:22:33:44:55:66:77",
            "00/11/22/33/44/55",
        ] {
            assert!(
                matches!(
                    MagicPacket::build(s),
                    Err(WolError::InvalidHardwareAddress(_))
                ),
                "{s}"
            );
        }
    }

    #[test]
    fn test_parse_payload() {
        let packet = MagicPacket::new(&MacAddress::new(MAC));
        let mut payload = packet.to_bytes().to_vec();
        assert_eq!(MagicPacket::parse(&payload), Ok(packet.clone()));

        // trailing bytes are ignored
        payload.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(MagicPacket::parse(&payload), Ok(packet));

        assert_eq!(
            MagicPacket::parse(&payload[..101]),
            Err(PayloadError::TooShort(101))
        );

        payload[2] = 0;
        assert_eq!(MagicPacket::parse(&payload), Err(PayloadError::BadSync));
        payload[2] = 0xff;

        payload[6 + 6 * 7 + 3] ^= 0x01;
        assert_eq!(MagicPacket::parse(&payload), Err(PayloadError::Mismatch(7)));
    }

    #[test]
    fn test_format_packet() {
        let packet = MagicPacket::new(&MacAddress::new(MAC));
        let out = format_packet(&packet);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2 + 16);
        assert_eq!(lines[0], "magic packet for 00:11:22:33:44:55");
        assert_eq!(lines[1], "sync  ff ff ff ff ff ff");
        assert_eq!(lines[17], "  15  00 11 22 33 44 55");
    }
}
