//! # escpos CLI
//!
//! Command-line interface for sending ESC/POS jobs to a receipt printer.
//!
//! ## Usage
//!
//! ```bash
//! # Print a JSON job over the network
//! escpos print job.json --target tcp://192.168.1.50:9100
//!
//! # Print a sample receipt on a USB printer
//! escpos demo --target /dev/usb/lp0 --profile generic-58
//!
//! # Show the bytes a job produces without printing
//! escpos print job.json --dry-run
//!
//! # List printer profiles
//! escpos profiles
//! ```
//!
//! Set `RUST_LOG=debug` to see flush and transport activity.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use log::info;

use escpos_buffer::{
    EscposError, Printer, Sink,
    job::Job,
    printer::PrinterProfile,
    protocol::barcode::{BarcodeType, Position},
    protocol::text::{Font, Justification, TextMode, Underline},
    transport::{MemorySink, Target},
};

/// escpos - ESC/POS receipt printer utility
#[derive(Parser, Debug)]
#[command(name = "escpos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct Output {
    /// Printer target: tcp://host[:port], host:port, or a device path
    #[arg(long)]
    target: Option<Target>,

    /// Printer profile (see `escpos profiles`)
    #[arg(long, default_value = "tm-t20")]
    profile: PrinterProfile,

    /// Print the command bytes as hex instead of sending them
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a JSON job file
    Print {
        /// Job file
        job: PathBuf,

        #[command(flatten)]
        output: Output,
    },
    /// Print a sample receipt
    Demo {
        #[command(flatten)]
        output: Output,
    },
    /// List built-in printer profiles
    Profiles,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), EscposError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print { job, output } => {
            let job = Job::load(&job)?;
            send(&output, |printer| job.apply(printer, &output.profile)).await
        }
        Commands::Demo { output } => {
            let profile = output.profile;
            send(&output, |printer| demo_receipt(printer, &profile)).await
        }
        Commands::Profiles => {
            println!("{:<18} {:>6} {:>6}  {:<8} encoding", "profile", "dots", "bytes", "table");
            for p in PrinterProfile::built_in() {
                println!(
                    "{:<18} {:>6} {:>6}  {:<8} {}",
                    p.name,
                    p.width_dots,
                    p.width_bytes(),
                    format!("{:?}", p.code_table),
                    p.encoding
                );
            }
            Ok(())
        }
    }
}

/// Open the output, let `build` queue commands, then flush and close.
async fn send<F>(output: &Output, build: F) -> Result<(), EscposError>
where
    F: FnOnce(&mut Printer<dyn Sink>) -> Result<(), EscposError>,
{
    let memory = Arc::new(MemorySink::new());
    let sink: Arc<dyn Sink> = match (&output.target, output.dry_run) {
        (_, true) => memory.clone(),
        (Some(target), false) => {
            info!("printing to {}", target);
            target.sink()
        }
        (None, false) => {
            return Err(EscposError::Config(
                "--target is required unless --dry-run is given".into(),
            ));
        }
    };

    let mut printer = Printer::new(sink);
    printer.open().await?;
    if let Err(e) = build(&mut printer) {
        printer.clear_buffer();
        // Closing is best effort; the build error is what matters.
        let _ = printer.close().await;
        return Err(e);
    }
    printer.close().await?;

    if output.dry_run {
        print_hex(&memory.written());
    } else {
        info!("done");
    }
    Ok(())
}

fn print_hex(data: &[u8]) {
    for (i, row) in data.chunks(16).enumerate() {
        let hex: Vec<String> = row.iter().map(|b| format!("{:02X}", b)).collect();
        let ascii: String = row
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        println!("{:08X}  {:<47}  {}", i * 16, hex.join(" "), ascii);
    }
}

fn demo_receipt(
    printer: &mut Printer<dyn Sink>,
    profile: &PrinterProfile,
) -> Result<(), EscposError> {
    let enc = Some(profile.encoding);

    printer
        .init()
        .set_code_table(profile.code_table)
        .set_justification(Justification::Center)
        .set_text_mode(TextMode::DualWidthAndHeight)
        .write_line("CORNER CAFÉ", enc)?
        .set_text_mode(TextMode::Normal)
        .write_line("Calle Mayor 12, Madrid", enc)?
        .feed(1)
        .set_justification(Justification::Left)
        .write_line("2x Café con leche     3.80", enc)?
        .write_line("1x Tostada            2.10", enc)?
        .set_underline(Underline::OneDotThick)
        .write_line("                          ", enc)?
        .set_underline(Underline::NoUnderline)
        .set_bold(true)
        .write_line("TOTAL                 5.90", enc)?
        .reset_to_default()
        .feed(1)
        .set_justification(Justification::Center)
        .barcode("0001234", BarcodeType::Code39, 60, 2, Font::B, Position::Below)?
        .feed(1)
        .write_line("¡Gracias por su visita!", enc)?
        .reset_to_default()
        .feed(4)
        .cut(true);

    Ok(())
}
