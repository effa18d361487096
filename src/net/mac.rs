use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMacError {
    #[error("malformed hardware address")]
    Format,
    #[error("hardware address is {0} bytes, expected 6")]
    Length(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacAddress(eui48::MacAddress);

impl MacAddress {
    pub const LENGTH: usize = 6;

    pub fn new(bytes: [u8; 6]) -> Self {
        MacAddress(eui48::MacAddress::new(bytes))
    }

    pub fn octets(&self) -> [u8; 6] {
        self.0.to_array()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Parses colon or hyphen notation with 1 or 2 hex digits per group, or
    /// dotted notation with 4 hex digits per group.
    ///
    /// Well-formed text that decodes to anything other than 6 bytes is a
    /// `Length` error; everything else that fails is a `Format` error.
    pub fn parse(s: &str) -> Result<Self, ParseMacError> {
        let bytes = decode(s)?;
        let octets: [u8; 6] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ParseMacError::Length(bytes.len()))?;
        Ok(Self::new(octets))
    }
}

// EUI-64 is the longest notation worth decoding; past that the exact length
// no longer matters.
const MAX_DECODED_LEN: usize = 8;

fn decode(s: &str) -> Result<Vec<u8>, ParseMacError> {
    if s.is_empty() {
        return Err(ParseMacError::Length(0));
    }

    let sep = s
        .chars()
        .find(|c| !c.is_ascii_hexdigit())
        .ok_or(ParseMacError::Format)?;

    let mut bytes = Vec::new();
    match sep {
        ':' | '-' => {
            for group in s.split(sep) {
                if group.is_empty() || group.len() > 2 {
                    return Err(ParseMacError::Format);
                }
                bytes.push(hex_group(group)? as u8);
                if bytes.len() > MAX_DECODED_LEN {
                    return Err(ParseMacError::Length(bytes.len()));
                }
            }
        }
        '.' => {
            for group in s.split(sep) {
                if group.len() != 4 {
                    return Err(ParseMacError::Format);
                }
                bytes.extend_from_slice(&hex_group(group)?.to_be_bytes());
                if bytes.len() > MAX_DECODED_LEN {
                    return Err(ParseMacError::Length(bytes.len()));
                }
            }
        }
        _ => return Err(ParseMacError::Format),
    }

    Ok(bytes)
}

fn hex_group(group: &str) -> Result<u16, ParseMacError> {
    // from_str_radix tolerates a leading '+'
    if !group.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseMacError::Format);
    }
    u16::from_str_radix(group, 16).map_err(|_| ParseMacError::Format)
}

impl FromStr for MacAddress {
    type Err = ParseMacError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = self.octets();
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}
