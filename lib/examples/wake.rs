use anyhow::{Context, Result};
use clap::Parser;
use lib::{MagicPacket, Target, WakeSocket};

#[derive(Parser)]
struct Opts {
    /// MAC address of the host to wake.
    mac: String,
    /// Destination IP address. Defaults to the limited broadcast address.
    #[clap(long, default_value = "")]
    ip: String,
    /// Destination port: 0, 7 or 9. Defaults to 9.
    #[clap(long, default_value = "")]
    port: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let opts = Opts::try_parse()?;

    let address = lib::parse_mac(&opts.mac)?;
    let packet = MagicPacket::new(address);
    let target = Target::resolve(&opts.ip, &opts.port)?;

    let socket = WakeSocket::bind().await.context("binding socket")?;
    socket.send(&packet, target).await?;

    println!("woke {address} via {target}");
    Ok(())
}
