use std::io::Write;

use clap::Parser;
use roster_core::{run_demo, StudentManagementClient, StudentSystemAdapter};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "roster-demo")]
#[command(about = "Student roster walkthrough over the legacy record store")]
#[command(version)]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the final roster as JSON after the walkthrough
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout only carries the roster rendering.
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    info!("Starting roster demo v{}", env!("CARGO_PKG_VERSION"));

    let mut system = StudentSystemAdapter::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let report = run_demo(&mut system, &mut out)?;
    info!(
        "Roster totals: {} registered, {} after removal, {} after update",
        report.after_register, report.after_remove, report.after_update
    );

    if args.json {
        writeln!(out)?;
        StudentManagementClient::new(&mut system).write_snapshot_json(&mut out)?;
    }

    out.flush()?;
    Ok(())
}
