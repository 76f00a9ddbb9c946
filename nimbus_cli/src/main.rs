mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nimbus_api::{Client, Config};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "nimbus")]
#[command(about = "Query and export virtual machine images from Nimbus Compute")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Organization ID. Defaults to the NIMBUS_ORGANIZATION environment variable
    #[arg(long, global = true)]
    organization: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up or list customer images
    Images(commands::images::ImagesArgs),
    /// Look up or list provider OS images
    OsImages(commands::os_images::OsImagesArgs),
    /// Export a customer image to an OVF package
    Export(commands::export::ExportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nimbus=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let mut config = Config::from_env();
    if let Some(organization) = &cli.organization {
        config = config.with_organization(organization.clone());
    }
    let client = Client::new(config)?;

    match &cli.command {
        Commands::Images(args) => commands::images::run(args, &client, &format).await?,
        Commands::OsImages(args) => commands::os_images::run(args, &client, &format).await?,
        Commands::Export(args) => commands::export::run(args, &client).await?,
    }

    Ok(())
}
