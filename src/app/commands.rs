use crate::config::{AppConfig, Command, ReportFormat};
use crate::core::endpoints::build_endpoint;
use crate::core::labels::{label_of, LabelRegistry};
use crate::core::packages::summarize_packages;
use crate::core::text::{normalize_string, shorten_name};
use crate::domain::model::{LabelDomain, PackageRecord};
use crate::utils::error::{PlanningError, Result};
use std::io::Write;

/// Executes one CLI command, writing its result to `out`.
pub fn run_command<W: Write>(
    command: &Command,
    config: &AppConfig,
    registry: &LabelRegistry,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Label { domain, code } => {
            let domain = parse_domain(domain)?;
            writeln!(out, "{}", label_of(registry, domain, code.as_deref()))?;
        }
        Command::Labels { domain, all_label } => {
            let domain = parse_domain(domain)?;
            let Some(table) = registry.table(domain) else {
                return Ok(());
            };
            let options = match all_label {
                Some(all) => table.filter_options(all),
                None => table.options().to_vec(),
            };
            for option in options {
                writeln!(out, "{}\t{}", option.value, option.label)?;
            }
        }
        Command::Shorten { name } => writeln!(out, "{}", shorten_name(name))?,
        Command::Normalize { text } => writeln!(out, "{}", normalize_string(Some(text)))?,
        Command::Endpoint {
            template,
            params,
            resolve,
        } => {
            let path = build_endpoint(template, params.iter().map(|(k, v)| (k, v)));
            if *resolve {
                writeln!(out, "{}", config.endpoint_url(&path)?)?;
            } else {
                writeln!(out, "{}", path)?;
            }
        }
        Command::Remaining { input, format } => {
            let content = std::fs::read_to_string(input)?;
            let packages: Vec<PackageRecord> = serde_json::from_str(&content)?;
            tracing::info!("📦 Loaded {} package(s) from {}", packages.len(), input.display());
            write_report(registry, &packages, *format, out)?;
        }
    }
    Ok(())
}

fn parse_domain(raw: &str) -> Result<LabelDomain> {
    raw.parse()
        .map_err(|_| PlanningError::UnknownDomainError {
            domain: raw.to_string(),
        })
}

pub fn write_report<W: Write>(
    registry: &LabelRegistry,
    packages: &[PackageRecord],
    format: ReportFormat,
    out: &mut W,
) -> Result<()> {
    let summaries = summarize_packages(registry, packages);
    match format {
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &summaries)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for summary in &summaries {
                writer.serialize(summary)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
