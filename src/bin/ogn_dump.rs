//! Decodes an OGN APRS-IS feed read from stdin, e.g.
//!
//! ```sh
//! (ogn-dump --login --call N0CALL --lat 48.0 --lon 7.85; cat) | nc aprs.glidernet.org 14580 | ogn-dump --sbs1
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ogn_aprs::{
    format_login_string, MessageType, OgnFormatter, OgnMessage, OutputFormatter, Sbs1Formatter,
};

#[derive(Parser, Debug)]
#[command(
    name = "ogn-dump",
    about = "Decode OGN APRS-IS lines from stdin and print them in the chosen format."
)]
struct Args {
    /// Print SBS-1 BaseStation lines instead of the raw APRS lines
    #[arg(long = "sbs1", default_value_t = false)]
    sbs1: bool,
    /// Print the login line for the server and exit
    #[arg(long = "login", default_value_t = false)]
    login: bool,
    /// Callsign used to log in
    #[arg(long = "call", default_value = "N0CALL")]
    call: String,
    /// Latitude of the range filter
    #[arg(long = "lat", default_value_t = 0.0, allow_negative_numbers = true)]
    lat: f64,
    /// Longitude of the range filter
    #[arg(long = "lon", default_value_t = 0.0, allow_negative_numbers = true)]
    lon: f64,
    /// Radius of the range filter in kilometers
    #[arg(long = "radius", default_value_t = 99)]
    radius: u32,
    #[arg(long = "app-name", default_value = env!("CARGO_PKG_NAME"))]
    app_name: String,
    #[arg(long = "app-version", default_value = env!("CARGO_PKG_VERSION"))]
    app_version: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.login {
        let login = format_login_string(
            &args.call,
            args.lat,
            args.lon,
            args.radius,
            &args.app_name,
            &args.app_version,
        );
        out.write_all(login.as_bytes())
            .context("failed to write login line")?;
        return Ok(());
    }

    let formatter: Box<dyn OutputFormatter> = if args.sbs1 {
        Box::new(Sbs1Formatter)
    } else {
        Box::new(OgnFormatter)
    };

    let mut lines = 0usize;
    let mut unknown = 0usize;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        lines += 1;

        let message = OgnMessage::parse(&line);
        if message.message_type == MessageType::Unknown {
            unknown += 1;
            debug!("undecodable line: {}", line);
        }

        if let Some(formatted) = formatter.format(&message) {
            writeln!(out, "{}", formatted).context("failed to write to stdout")?;
        }
    }

    info!("{} lines read, {} undecodable", lines, unknown);

    Ok(())
}
