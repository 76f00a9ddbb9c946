use anyhow::Result;
use nimbus_api::types::{CustomerImage, OsImage};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct ImageRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Datacenter")]
    datacenter: String,
    #[tabled(rename = "OS")]
    os: String,
    #[tabled(rename = "CPU")]
    cpu: String,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "Created")]
    created: String,
    #[tabled(rename = "State")]
    state: String,
}

impl ImageRow {
    fn from_customer_image(image: &CustomerImage) -> Self {
        Self {
            id: image.id.clone(),
            name: image.name.clone(),
            datacenter: image.datacenter_id.clone(),
            os: image.operating_system.display_name.clone(),
            cpu: format!("{}x {}", image.cpu.count, image.cpu.speed),
            memory: format!("{} GB", image.memory_gb),
            created: image.create_time.format("%Y-%m-%d").to_string(),
            state: image.state.to_string(),
        }
    }

    fn from_os_image(image: &OsImage) -> Self {
        Self {
            id: image.id.clone(),
            name: image.name.clone(),
            datacenter: image.datacenter_id.clone(),
            os: image.operating_system.display_name.clone(),
            cpu: format!("{}x {}", image.cpu.count, image.cpu.speed),
            memory: format!("{} GB", image.memory_gb),
            created: image.create_time.format("%Y-%m-%d").to_string(),
            state: image.state.to_string(),
        }
    }
}

pub fn print_images_table(images: &[CustomerImage]) {
    let rows: Vec<ImageRow> = images.iter().map(ImageRow::from_customer_image).collect();
    print_table(rows);
}

pub fn print_os_images_table(images: &[OsImage]) {
    let rows: Vec<ImageRow> = images.iter().map(ImageRow::from_os_image).collect();
    print_table(rows);
}

fn print_table(rows: Vec<ImageRow>) {
    if rows.is_empty() {
        println!("(no images)");
        return;
    }
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
