//! Command-line interface

use clap::{Args, Parser, Subcommand};
use imovel_scout::FilterSpec;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "imovel-scout")]
#[command(about = "Search the property catalogue", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search available properties
    Search(SearchArgs),
    /// List featured properties
    Featured(OutputArgs),
    /// Show a single property
    Show(ShowArgs),
}

/// Where to read from and how to print
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Read properties from a JSON export instead of the hosted database
    #[arg(short, long, env = "IMOVEL_PROPERTIES_FILE")]
    pub file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text query, e.g. "rua ipanema" or "apart piscina"
    #[arg(short = 'q', long)]
    pub search: Option<String>,

    /// Property type, e.g. Casa, Apartamento, Terreno
    #[arg(short = 't', long = "type")]
    pub property_type: Option<String>,

    #[arg(long)]
    pub price_min: Option<String>,

    #[arg(long)]
    pub price_max: Option<String>,

    /// Minimum number of bedrooms
    #[arg(long)]
    pub bedrooms: Option<String>,

    /// Minimum number of bathrooms
    #[arg(long)]
    pub bathrooms: Option<String>,

    /// Listing URL whose query string seeds the filters; flags override it
    #[arg(long)]
    pub url: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl SearchArgs {
    /// Filters given explicitly as flags
    pub fn flag_spec(&self) -> FilterSpec {
        FilterSpec {
            search: self.search.clone(),
            price_min: self.price_min.clone(),
            price_max: self.price_max.clone(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            property_type: self.property_type.clone(),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Property id
    pub id: String,

    #[command(flatten)]
    pub output: OutputArgs,
}
