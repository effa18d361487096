use std::io;

use thiserror::Error;

use crate::net::mac::ParseMacError;

#[derive(Debug, Error)]
pub enum WolError {
    #[error(transparent)]
    InvalidHardwareAddress(#[from] ParseMacError),

    #[error("could not resolve destination {destination:?}")]
    DestinationResolutionFailed {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("transmission failed")]
    TransmissionFailed(#[source] io::Error),
}
