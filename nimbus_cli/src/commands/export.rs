use anyhow::Result;
use clap::Args;
use nimbus_api::Client;

#[derive(Args)]
pub struct ExportArgs {
    /// ID of the customer image to export
    #[arg(long)]
    pub id: String,

    /// Prefix for the generated OVF package files
    #[arg(long)]
    pub prefix: String,
}

pub async fn run(args: &ExportArgs, client: &Client) -> Result<()> {
    let export_id = client.export_customer_image(&args.id, &args.prefix).await?;
    println!("{}", export_id);
    eprintln!(
        "export of image '{}' accepted; the image stays in PENDING_CHANGE until the OVF package is ready",
        args.id
    );
    Ok(())
}
