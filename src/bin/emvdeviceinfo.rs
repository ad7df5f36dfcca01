//! emvdeviceinfo - prints the EMV 3-D Secure device parameter envelope.
//!
//! Reads build metadata from `build.prop` and network state from `/proc/net`,
//! then writes the JSON envelope to stdout. Logs go to stderr.
//!
//! Usage:
//!   emvdeviceinfo                        # no permissions granted, C010 is RE03
//!   emvdeviceinfo --grant-all            # resolve the IP address too
//!   emvdeviceinfo --grant internet --grant network-state
//!   emvdeviceinfo --build-prop ./build.prop --pretty

use clap::Parser;
use tracing::{Level, debug, error};
use tracing_subscriber::EnvFilter;

use emvdeviceinfo::ReportBuilder;
use emvdeviceinfo::collector::{ProcfsHost, RealFs};
use emvdeviceinfo::get_device_info;
use emvdeviceinfo::model::Permission;

/// Prints EMV 3-D Secure device parameters as JSON.
#[derive(Parser)]
#[command(name = "emvdeviceinfo", about = "EMV 3DS device parameter collector", version)]
struct Args {
    /// Path to the Android build properties file.
    #[arg(long, default_value = "/system/build.prop")]
    build_prop: String,

    /// Path to /proc filesystem.
    #[arg(long, default_value = "/proc")]
    proc_path: String,

    /// Grant a permission (internet, network-state or a manifest name). Repeatable.
    #[arg(long = "grant", value_name = "PERMISSION")]
    grants: Vec<Permission>,

    /// Grant every permission the collector consults.
    #[arg(long, conflicts_with = "grants")]
    grant_all: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is warn level.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes the tracing subscriber on stderr so stdout stays pure JSON.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("emvdeviceinfo={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let grants = if args.grant_all {
        vec![Permission::Internet, Permission::AccessNetworkState]
    } else {
        args.grants
    };

    debug!(
        "Config: build_prop={}, proc={}, grants={:?}",
        args.build_prop, args.proc_path, grants
    );

    let host = grants.into_iter().fold(
        ProcfsHost::new(RealFs::new(), args.build_prop, args.proc_path),
        |host, permission| host.grant(permission),
    );

    if args.pretty {
        match ReportBuilder::new().build(&host).to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("failed to serialize device report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", get_device_info(&host));
    }
}
