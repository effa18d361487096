use clap::Parser;

use wol_rs::send::{DEFAULT_BROADCAST, DEFAULT_PORT};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Send Wake-on-LAN magic packets", long_about = None)]
pub struct Config {
    /// Hardware addresses to wake (e.g. aa:bb:cc:dd:ee:ff)
    #[arg(required = true)]
    pub mac_addresses: Vec<String>,

    /// Broadcast address to send to, optionally with a port
    #[arg(short, long, default_value_t = String::from(DEFAULT_BROADCAST))]
    pub broadcast: String,

    /// UDP port used when the broadcast address has none
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_PORT,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub port: u16,

    /// Don't actually send packets
    #[arg(short, long)]
    pub dryrun: bool,

    /// In dryrun mode, suppress printing packets
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, default_value_t = log::LevelFilter::Info)]
    pub log_level: log::LevelFilter,
}
