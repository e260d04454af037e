mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands, OutputArgs, SearchArgs, ShowArgs};
use imovel_scout::format::summary_line;
use imovel_scout::{filter_properties, Config, FilterSpec, PropertyRecord};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging, RUST_LOG wins over the flags
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    match cli.command {
        Commands::Search(args) => run_search(&config, args).await,
        Commands::Featured(output) => run_featured(&config, output).await,
        Commands::Show(args) => run_show(&config, args).await,
    }
}

async fn run_search(config: &Config, args: SearchArgs) -> Result<()> {
    let base = match &args.url {
        Some(url) => FilterSpec::from_url(url)?,
        None => FilterSpec::default(),
    };
    let spec = base.overlay(args.flag_spec());
    info!("Filters: {:?}", spec);

    let source = config
        .clone()
        .with_properties_file(args.output.file.clone())
        .source()?;
    let properties = source.fetch_available().await?;

    let matched = filter_properties(&properties, &spec)?;
    info!("{} of {} properties match", matched.len(), properties.len());

    print_records(&matched, args.output.json)
}

async fn run_featured(config: &Config, output: OutputArgs) -> Result<()> {
    let source = config.clone().with_properties_file(output.file.clone()).source()?;
    let properties = source.fetch_featured().await?;
    let refs: Vec<&PropertyRecord> = properties.iter().collect();
    print_records(&refs, output.json)
}

async fn run_show(config: &Config, args: ShowArgs) -> Result<()> {
    let source = config
        .clone()
        .with_properties_file(args.output.file.clone())
        .source()?;

    match source.fetch_by_id(&args.id).await? {
        Some(property) => print_records(&[&property], args.output.json),
        None => anyhow::bail!("Property {} not found", args.id),
    }
}

fn print_records(records: &[&PropertyRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("Nenhum imóvel encontrado. Tente ajustar seus filtros.");
        return Ok(());
    }

    for (i, property) in records.iter().enumerate() {
        println!("{}", summary_line(i, property));
        println!();
    }
    Ok(())
}
