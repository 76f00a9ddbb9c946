use anyhow::{bail, Result};
use clap::Args;
use nimbus_api::{Client, ImageQuery, Query};

use crate::output::{print_json, print_os_images_table, OutputFormat};

#[derive(Args)]
pub struct OsImagesArgs {
    /// Get a single image by ID
    #[arg(long, conflicts_with = "name")]
    pub id: Option<String>,

    /// Find a single image by exact name (requires --datacenter)
    #[arg(long, requires = "datacenter")]
    pub name: Option<String>,

    /// Filter by datacenter ID (e.g. NA9)
    #[arg(long)]
    pub datacenter: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long)]
    pub page_size: Option<i64>,
}

pub async fn run(args: &OsImagesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(id) = &args.id {
        match client.get_os_image(id).await? {
            Some(image) => match format {
                OutputFormat::Table => print_os_images_table(std::slice::from_ref(&image)),
                OutputFormat::Json => print_json(&image)?,
            },
            None => bail!("OS image '{}' was not found", id),
        }
        return Ok(());
    }

    if let Some(name) = &args.name {
        let datacenter = args.datacenter.as_deref().unwrap_or_default();
        match client.find_os_image(name, datacenter).await? {
            Some(image) => match format {
                OutputFormat::Table => print_os_images_table(std::slice::from_ref(&image)),
                OutputFormat::Json => print_json(&image)?,
            },
            None => bail!("no OS image named '{}' in datacenter '{}'", name, datacenter),
        }
        return Ok(());
    }

    let mut query = ImageQuery::default().with_page(args.page);
    if let Some(page_size) = args.page_size {
        query = query.with_page_size(page_size);
    }
    if let Some(datacenter) = &args.datacenter {
        query = query.with_datacenter(datacenter);
    }

    let page = client.list_os_images(&query).await?;
    match format {
        OutputFormat::Table => {
            print_os_images_table(&page.images);
            eprintln!(
                "page {} ({} of {} images)",
                page.page_number, page.page_count, page.total_count
            );
        }
        OutputFormat::Json => print_json(&page)?,
    }

    Ok(())
}
