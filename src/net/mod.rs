pub mod mac;
pub mod socket;

pub use mac::{MacAddress, ParseMacError};
pub use socket::{resolve_destination, BroadcastSocket};
