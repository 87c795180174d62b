use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "equiplan")]
#[command(about = "Labels, name formatting and package arithmetic for the riding-school planner")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Display label of one enum code
    Label { domain: String, code: Option<String> },

    /// List every code and label of a domain
    Labels {
        domain: String,
        #[arg(long, help = "Prepend an \"all\" filter entry with this label")]
        all_label: Option<String>,
    },

    /// Shorten a full name to "First I I"
    Shorten { name: String },

    /// Accent- and case-insensitive form of a string
    Normalize { text: String },

    /// Expand an endpoint template with key=value parameters
    Endpoint {
        template: String,
        #[arg(value_parser = parse_key_val)]
        params: Vec<(String, String)>,
        #[arg(long, help = "Print the full URL against api.base_url")]
        resolve: bool,
    },

    /// Remaining lessons report for a JSON array of packages
    Remaining {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, value_enum, default_value = "json")]
        format: ReportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Json,
    Csv,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_endpoint_params_in_order() {
        let cli = CliConfig::parse_from([
            "equiplan",
            "endpoint",
            "/riders/:id/packages/:pkg",
            "id=3",
            "pkg=9",
            "--resolve",
        ]);
        match cli.command {
            Command::Endpoint {
                template,
                params,
                resolve,
            } => {
                assert_eq!(template, "/riders/:id/packages/:pkg");
                assert_eq!(
                    params,
                    vec![("id".to_string(), "3".to_string()), ("pkg".to_string(), "9".to_string())]
                );
                assert!(resolve);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_malformed_param() {
        assert!(CliConfig::try_parse_from(["equiplan", "endpoint", "/x/:id", "id"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = CliConfig::parse_from(["equiplan", "shorten", "Jean Pierre", "--verbose"]);
        assert!(cli.verbose);
    }
}
