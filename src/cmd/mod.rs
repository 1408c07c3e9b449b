//! Command-line surface.
//!
//! Usage:
//!   # 100 customers, 50 products, 200 orders with line items, to stdout
//!   shop-seeder -c 100 -p 50 -o 200
//!
//!   # full dataset to a gzipped dump, reproducible seed
//!   shop-seeder -c 1000 -p 200 -o 5000 -r 800 --shipments \
//!       --seed 42 --output seed.sql.gz

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::SeedFileConfig;
use crate::dump::{open_output, DumpWriter};
use crate::executor::MemoryDb;
use crate::faker::FakerSource;
use crate::insert::DEFAULT_CHUNK_SIZE;
use crate::pipeline::{self, SeedPlan};
use crate::report::Report;

#[derive(Parser, Debug)]
#[command(name = "shop-seeder")]
#[command(version)]
#[command(about = "Generate fake e-commerce data as batched SQL inserts", long_about = None)]
pub struct Cli {
    /// Number of customers to generate
    #[arg(short, long)]
    pub customers: Option<usize>,

    /// Number of products to generate
    #[arg(short, long)]
    pub products: Option<usize>,

    /// Number of orders to generate (line items are generated with them)
    #[arg(short, long)]
    pub orders: Option<usize>,

    /// Number of reviews to generate
    #[arg(short, long)]
    pub reviews: Option<usize>,

    /// Derive shipments for shipped/delivered orders
    #[arg(long)]
    pub shipments: bool,

    /// Upper bound on derived shipment rows
    #[arg(long)]
    pub shipment_cap: Option<usize>,

    /// Rows per batched INSERT
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the SQL dump (default: stdout; .gz gzips)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// YAML plan file; command-line flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Verify pre-existing parent rows for stages whose parents are not
    /// generated in this run, before writing anything
    #[arg(long)]
    pub check: bool,

    /// Generate into memory only; print the summary and discard the rows
    #[arg(long)]
    pub dry_run: bool,

    /// Emit the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Show a progress spinner on stderr
    #[arg(long)]
    pub progress: bool,
}

/// Merge the CLI flags over the optional config file into a plan.
fn build_plan(cli: &Cli, file: &SeedFileConfig) -> SeedPlan {
    SeedPlan {
        customers: cli.customers.or(file.customers).unwrap_or(0),
        products: cli.products.or(file.products).unwrap_or(0),
        orders: cli.orders.or(file.orders).unwrap_or(0),
        reviews: cli.reviews.or(file.reviews).unwrap_or(0),
        shipments: cli.shipments || file.shipments.unwrap_or(false),
        shipment_cap: cli.shipment_cap.or(file.shipment_cap),
        chunk_size: cli
            .chunk_size
            .or(file.chunk_size)
            .unwrap_or(DEFAULT_CHUNK_SIZE),
        sanity_check: cli.check || file.sanity_check.unwrap_or(false),
    }
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let file = match &cli.config {
        Some(path) => SeedFileConfig::load(path)?,
        None => SeedFileConfig::default(),
    };
    let plan = build_plan(&cli, &file);
    let seed = cli.seed.or(file.seed).unwrap_or(12345);

    let mut src = FakerSource::new(seed);
    let mut report = Report::new();

    let spinner = if cli.progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
        pb.set_message("generating rows...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = if cli.dry_run {
        let mut db = MemoryDb::new();
        pipeline::run(&mut db, &mut src, &plan, Some(&mut report))
    } else {
        let out = open_output(cli.output.as_deref()).context("failed to open output")?;
        let mut writer = DumpWriter::new(out);
        let run = pipeline::run(&mut writer, &mut src, &plan, Some(&mut report));
        if run.is_ok() {
            writer.finish().context("failed to flush output")?;
        }
        run
    };

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    result?;

    if cli.json {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_empty() {
        eprintln!("Nothing to generate (all counts are 0).");
    } else {
        eprintln!("Generated:");
        eprintln!("{report}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_config_file() {
        let cli = Cli::parse_from(["shop-seeder", "-c", "7", "--chunk-size", "25"]);
        let file = SeedFileConfig {
            customers: Some(100),
            products: Some(3),
            ..Default::default()
        };
        let plan = build_plan(&cli, &file);
        assert_eq!(plan.customers, 7);
        assert_eq!(plan.products, 3);
        assert_eq!(plan.chunk_size, 25);
        assert_eq!(plan.orders, 0);
    }
}
