//! Build and send Wake-on-LAN magic packets.

pub mod error;
pub mod net;
pub mod packet;
pub mod send;

pub use error::WolError;
pub use net::MacAddress;
pub use packet::MagicPacket;
pub use send::{send, Sender};
