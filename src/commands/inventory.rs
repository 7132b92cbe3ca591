use std::path::Path;

use tokio_util::sync::CancellationToken;

use crate::bmc::DumpSource;
use crate::cli::Commands;
use crate::config::AppConfig;
use crate::hardware::types::Device;
use crate::hardware::{collect_inventory, VendorTable};
use crate::output::{output_data, print_info, print_success};

pub fn handle_command(
    cmd: &Commands,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Inventory { source, format } => {
            let device = collect(source, config)?;
            output_data(&device, format)?;
        }
        Commands::Health { source, format } => {
            let device = collect(source, config)?;
            output_data(&device.status, format)?;
        }
        Commands::PostInventory { source, url } => {
            print_info("Collecting hardware inventory...");
            let device = collect(source, config)?;

            let base_url = url.as_deref().unwrap_or(config.post_url());
            let api_url = format!("{}/api/v1/servers/inventory", base_url.trim_end_matches('/'));
            print_info(&format!("Posting inventory to: {}", api_url));

            let client = reqwest::blocking::Client::new();
            let response = client
                .post(&api_url)
                .json(&device)
                .send()?;

            if response.status().is_success() {
                let result: serde_json::Value = response.json()?;
                print_success("Inventory posted");
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                let status = response.status();
                let error_text = response.text()?;
                eprintln!("{}", error_text);
                return Err(format!("Failed to post inventory: HTTP {}", status).into());
            }
        }
    }
    Ok(())
}

fn collect(source: &Path, config: &AppConfig) -> Result<Device, Box<dyn std::error::Error>> {
    let client = DumpSource::from_path(source)?;
    let vendors = VendorTable::with_entries(config.vendors());
    let cancel = CancellationToken::new();

    Ok(collect_inventory(&client, &vendors, config.sources(), &cancel)?)
}
