use anyhow::{Context, Result, bail};
use contracts_core::DataContract;
use contracts_parser::parse_file;
use serde_json::json;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(contract_path: &str, format: &str) -> Result<()> {
    info!("Checking contract: {}", contract_path);

    // Parse the contract file
    let path = Path::new(contract_path);
    let contract = parse_file(path)
        .with_context(|| format!("Failed to parse contract file: {}", contract_path))?;

    match format {
        "json" => print_json_summary(&contract),
        "text" => print_text_summary(&contract),
        other => bail!("Unsupported output format: {}. Supported formats: text, json", other),
    }
}

fn service_level_names(contract: &DataContract) -> Vec<&'static str> {
    contract
        .servicelevels
        .as_ref()
        .map(|levels| levels.populated().map(|(d, _)| d.as_str()).collect())
        .unwrap_or_default()
}

fn field_count(contract: &DataContract) -> usize {
    contract.models.values().map(|m| m.fields.len()).sum()
}

fn print_text_summary(contract: &DataContract) -> Result<()> {
    let info = contract.info()?;
    let id = contract.id.as_deref().unwrap_or("N/A");

    output::print_info(&format!(
        "Contract loaded: {} v{} (owner: {})",
        id,
        info.version.as_deref().unwrap_or("N/A"),
        info.owner.as_deref().unwrap_or("N/A")
    ));
    output::print_success("Contract is ready for export");

    output::print_header("CONTRACT SUMMARY");
    println!("  Id:            {}", id);
    println!("  Title:         {}", info.title.as_deref().unwrap_or("N/A"));
    println!("  Version:       {}", info.version.as_deref().unwrap_or("N/A"));
    println!("  Status:        {}", info.status.as_deref().unwrap_or("N/A"));
    println!("  Owner:         {}", info.owner.as_deref().unwrap_or("N/A"));
    println!(
        "  Description:   {}",
        info.description.as_deref().unwrap_or("N/A")
    );
    if !contract.tags.is_empty() {
        println!("  Tags:          {}", contract.tags.join(", "));
    }

    println!("\nServers:");
    for (name, server) in &contract.servers {
        println!(
            "  {} ({}, {})",
            name,
            server.server_type.as_deref().unwrap_or("unknown type"),
            server.location.as_deref().unwrap_or("no location")
        );
    }

    println!("\nModels:");
    for (name, model) in &contract.models {
        println!("  {} ({} fields)", name, model.fields.len());
    }
    println!("  Fields:        {}", field_count(contract));
    println!("  Quality Rules: {}", contract.quality_rule_count());

    let levels = service_level_names(contract);
    if !levels.is_empty() {
        println!("\nService Levels: {}", levels.join(", "));
    }

    if let Some(billing) = contract.terms.as_ref().and_then(|t| t.billing.as_deref()) {
        println!("\nBilling:         {}", billing);
    }

    Ok(())
}

fn print_json_summary(contract: &DataContract) -> Result<()> {
    let info = contract.info()?;

    let summary = json!({
        "id": contract.id,
        "title": info.title,
        "version": info.version,
        "status": info.status,
        "owner": info.owner,
        "servers": contract.servers.keys().collect::<Vec<_>>(),
        "models": contract.models.keys().collect::<Vec<_>>(),
        "field_count": field_count(contract),
        "quality_rule_count": contract.quality_rule_count(),
        "service_levels": service_level_names(contract),
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
