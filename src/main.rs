//! Command line tool for sending magic Wake-on-LAN packets.
//!
//! ```sh
//! wakeonlan --mac 00:11:22:33:44:55
//! ```
//!
//! The magic packet is broadcast to `255.255.255.255:9` unless a destination
//! is specified:
//!
//! ```sh
//! wakeonlan --mac 00-11-22-33-44-55 --ip 192.168.1.255 --port 7
//! ```
//!
//! Sending is fire-and-forget. A successful run means the datagram was
//! handed to the local network stack; whether the target machine actually
//! wakes up depends on its firmware and network interface configuration.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser)]
struct Opts {
    /// Target MAC address, as six hex pairs separated by `:` or `-`.
    #[clap(long)]
    mac: String,
    /// Destination IP address.
    #[clap(long, default_value = "255.255.255.255")]
    ip: String,
    /// Destination port: 0 (any), 7 (echo), or 9 (discard).
    #[clap(long, default_value = "9")]
    port: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(err) = inner().await {
        tracing::error!("Error: {err}");

        for e in err.chain().skip(1) {
            tracing::error!("Caused by: {e}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn inner() -> Result<()> {
    let opts = Opts::parse();

    tracing::info!(mac = %opts.mac, ip = %opts.ip, port = %opts.port, "sending magic packet");

    lib::send_magic(&opts.mac, "", &opts.ip, &opts.port)
        .await
        .context("sending magic packet")?;

    tracing::info!("magic packet sent");
    Ok(())
}
