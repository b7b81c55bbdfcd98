//! Command-line frontend: scan a directory of mod archives and report the
//! assets that were indexed.

use clap::Parser;
use resloc_core::{ResourceKind, logging};
use resloc_ingest::PackScanner;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "resloc",
    version,
    about = "Scan a directory of mod archives and index the assets inside them"
)]
struct Cli {
    /// Root directory to scan for archives
    #[arg(value_name = "ROOT")]
    root: PathBuf,

    /// Print every extracted identifier, not just per-pack counts
    #[arg(long)]
    list: bool,

    /// Log to stderr at debug level as well as to the log file
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let _guard = logging::init_logging("resloc", cli.verbose);

    info!("scanning {}", cli.root.display());
    let outcome = PackScanner::new(&cli.root).scan();

    for pack in &outcome.packs {
        println!(
            "{}: {} client assets, {} data entries",
            pack.name(),
            pack.len(ResourceKind::Client),
            pack.len(ResourceKind::Data)
        );

        if cli.list {
            for kind in [ResourceKind::Client, ResourceKind::Data] {
                for namespace in pack.namespaces(kind) {
                    let mut ids: Vec<String> = pack
                        .find_resources(kind, namespace, "")
                        .map(|(id, stream)| format!("{id} ({} bytes)", stream.get_ref().len()))
                        .collect();
                    ids.sort();
                    for id in ids {
                        println!("  {id}");
                    }
                }
            }
        }
    }

    let stats = &outcome.stats;
    println!(
        "{} archives scanned, {} unpacked, {} failed in {:?}",
        stats.candidates, stats.unpacked, stats.failed, stats.duration
    );
}
