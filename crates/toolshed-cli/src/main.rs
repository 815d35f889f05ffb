use clap::Parser;

use toolshed_core::Directory;
use toolshed_fetch::{DEFAULT_SOURCE_URL, Loader};

mod display;

/// Searchable directory of internal tool links.
#[derive(Parser)]
#[command(name = "toolshed", version)]
struct Args {
    /// Location of the directory CSV resource.
    #[arg(long, env = "TOOLSHED_SOURCE", default_value = DEFAULT_SOURCE_URL)]
    source: String,

    /// Case-insensitive filter over entry names and descriptions.
    #[arg(long, short)]
    query: Option<String>,

    /// Emit the categorized buckets as JSON instead of cards.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let loader = Loader::new(args.source);
    let report = loader.load().await?;
    tracing::info!(
        source = report.source.as_str(),
        count = report.items.len(),
        "directory loaded"
    );

    let directory = Directory::new(report.items);
    let query = args.query.as_deref().unwrap_or("");
    let buckets = directory.search(query);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&buckets)?);
    } else {
        display::print_buckets(&buckets, query, report.source);
    }

    Ok(())
}
