//! urlparts CLI - break a URL or hostname into its parts

use std::io::{self, Write};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use urlparts::{extract_domain_parts, parse_url, DomainParts, ParseOutcome};

/// Output format for both subcommands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Human-readable breakdown
    Text,
}

/// urlparts - URL and domain breakdown tool
#[derive(Parser, Debug)]
#[command(name = "urlparts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short, global = true, default_value = "json", env = "URLPARTS_OUTPUT")]
    output: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); overridden by URLPARTS_LOG
    #[arg(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a URL, with or without a scheme
    Parse {
        /// Raw URL input, e.g. "example.com/path?x=1"
        input: String,
    },
    /// Split a hostname into subdomain, domain and TLD
    Domain {
        /// Hostname, e.g. "shop.example.co.uk"
        hostname: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Parse { input } => {
            let outcome = parse_url(&input);
            match cli.output {
                OutputFormat::Json => writeln_safe(&to_json(&outcome)),
                OutputFormat::Text => writeln_safe(&format_outcome_text(&outcome)),
            }
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Commands::Domain { hostname } => {
            let parts = extract_domain_parts(&hostname);
            match cli.output {
                OutputFormat::Json => writeln_safe(&to_json(&parts)),
                OutputFormat::Text => writeln_safe(&format_domain_text(&parts)),
            }
        }
    }
}

/// Install a stderr subscriber; `URLPARTS_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("URLPARTS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Error serializing output: {}", e);
        std::process::exit(1);
    })
}

/// Format a parse outcome as an aligned "label: value" listing
fn format_outcome_text(outcome: &ParseOutcome) -> String {
    if let Some(ref err) = outcome.error {
        return format!("Error: {}", err);
    }

    let c = &outcome.components;
    if c.is_empty() {
        return "No URL entered".to_string();
    }

    let mut lines = Vec::new();
    let mut push = |label: &str, value: Option<&str>| {
        if let Some(value) = value {
            lines.push(format!("{:<10} {}", format!("{}:", label), value));
        }
    };

    push("Protocol", c.protocol.as_deref());
    push("Hostname", c.hostname.as_deref());
    push("Port", c.port.as_deref());
    push("Path", c.pathname.as_deref());
    push("Query", c.search.as_deref());
    push("Hash", c.hash.as_deref());
    push("Origin", c.origin.as_deref());
    push("Subdomain", c.subdomain.as_deref());
    push("Domain", c.domain.as_deref());
    push("TLD", c.tld.as_deref());

    if c.is_tld_known == Some(false) {
        lines.push("(TLD not in known list)".to_string());
    }

    if let Some(ref params) = c.query_params {
        lines.push("Parameters:".to_string());
        for (key, value) in params {
            lines.push(format!("  {} = {}", key, value));
        }
    }

    lines.join("\n")
}

fn format_domain_text(parts: &DomainParts) -> String {
    let mut output = String::new();
    output.push_str(&format!("Subdomain: {}\n", display_or_dash(&parts.subdomain)));
    output.push_str(&format!("Domain:    {}\n", display_or_dash(&parts.domain)));
    output.push_str(&format!("TLD:       {}", display_or_dash(&parts.tld)));
    if parts.is_tld_known == Some(false) {
        output.push_str(" (unknown)");
    }
    if let Some(registrable) = parts.registrable_domain() {
        output.push_str(&format!("\nRegistrable: {}", registrable));
    }
    output
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Write to stdout, exit silently on broken pipe
fn writeln_safe(s: &str) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", s) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        eprintln!("Error writing to stdout: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_format_outcome_text() {
        let outcome = parse_url("http://api.example.com:8080/search?q=rust#top");
        let output = format_outcome_text(&outcome);

        assert!(output.contains("Protocol:  http"));
        assert!(output.contains("Port:      8080"));
        assert!(output.contains("Subdomain: api"));
        assert!(output.contains("TLD:       com"));
        assert!(output.contains("  q = rust"));
        assert!(!output.contains("not in known list"));
    }

    #[test]
    fn test_format_outcome_text_error() {
        let outcome = parse_url("://invalid");
        assert_eq!(format_outcome_text(&outcome), "Error: Invalid URL format");
    }

    #[test]
    fn test_format_outcome_text_empty() {
        assert_eq!(format_outcome_text(&parse_url("  ")), "No URL entered");
    }

    #[test]
    fn test_format_domain_text() {
        let output = format_domain_text(&extract_domain_parts("example.unknown-tld"));
        assert!(output.contains("Subdomain: -"));
        assert!(output.contains("TLD:       unknown-tld (unknown)"));
        assert!(output.contains("Registrable: example.unknown-tld"));

        let single = format_domain_text(&extract_domain_parts("localhost"));
        assert!(single.contains("Domain:    localhost"));
        assert!(!single.contains("Registrable"));
    }
}
