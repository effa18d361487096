use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use log::warn;

use config::Config;
use wol_rs::Sender;

mod config;

fn error_chain(e: &dyn Error) -> String {
    let mut msg = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}

fn main() -> ExitCode {
    let config = Config::parse();

    env_logger::builder()
        .filter_level(config.log_level)
        .format_target(false)
        .init();

    let sender = Sender::new(config.port);
    let mut failures = 0;

    for mac_address in &config.mac_addresses {
        let res = if config.dryrun {
            sender
                .dry_run(mac_address, &config.broadcast, config.quiet)
                .map(|_| ())
        } else {
            sender.send(mac_address, &config.broadcast)
        };

        if let Err(e) = res {
            let reason = error_chain(&e);
            warn!("Could not wake {mac_address}. Reason: {reason}");
            failures += 1;
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
