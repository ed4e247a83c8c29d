//! Boletines CLI
//!
//! Local entry point: searches the configured gazettes for a
//! comma-separated keyword list and prints or exports the results.

use std::path::PathBuf;

use boletines::{
    error::{AppError, Result},
    models::{Config, DocumentRecord, SearchContext},
    pipeline,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Boletines - Official Gazette Keyword Search
#[derive(Parser, Debug)]
#[command(
    name = "boletines",
    version,
    about = "Searches Spanish official gazettes (BOE, BOC, BOP) for keyword-relevant publications"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, default_value = "boletines.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search all gazettes for the given keywords
    Search {
        /// Comma-separated keywords, e.g. "urbanismo, planeamiento"
        keywords: String,

        /// Date treated as today, YYYY-MM-DD (default: today in the
        /// bulletin-local timezone)
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Write results as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Split the comma-separated keyword input into raw keyword strings.
fn split_keywords(input: &str) -> Vec<String> {
    input.split(',').map(|kw| kw.trim().to_string()).collect()
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize results as CSV with a UTF-8 byte-order mark, the way common
/// spreadsheet tools expect Spanish text.
fn to_csv(documents: &[DocumentRecord]) -> String {
    let mut out = String::from("\u{feff}source_name,title,url,published_date,summary\n");
    for doc in documents {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            csv_field(doc.gazette.as_str()),
            csv_field(&doc.title),
            csv_field(&doc.url),
            csv_field(&doc.published_date),
            csv_field(&doc.summary),
        ));
    }
    out
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Search { keywords, date, csv } => {
            let ctx = match date {
                Some(today) => SearchContext::new(today),
                None => SearchContext::now_local(),
            };
            log::info!("Searching gazettes for {}", ctx.today);

            let keywords = split_keywords(&keywords);
            let results = match pipeline::run_search(&config, &ctx, &keywords).await {
                Ok(results) => results,
                Err(AppError::EmptyKeywords) => {
                    log::error!("Please provide at least one keyword.");
                    return Err(AppError::EmptyKeywords);
                }
                Err(error) => return Err(error),
            };

            if results.is_empty() {
                log::info!("No publications matched the given keywords.");
            } else {
                log::info!("{} document(s) found:", results.len());
                for doc in &results {
                    println!(
                        "[{}] {} | {} | {}",
                        doc.gazette, doc.published_date, doc.title, doc.url
                    );
                }
            }

            if let Some(path) = csv {
                std::fs::write(&path, to_csv(&results))?;
                log::info!("Results written to {}", path.display());
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "Config OK ({} domain keywords, {} provincial sources)",
                config.search.domain_keywords.len(),
                config.provincial.len()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use boletines::models::Gazette;

    #[test]
    fn test_split_keywords() {
        assert_eq!(
            split_keywords("urbanismo, planeamiento , "),
            vec!["urbanismo", "planeamiento", ""]
        );
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_to_csv_has_bom_and_header() {
        let documents = vec![DocumentRecord {
            gazette: Gazette::Boc,
            title: "DECRETO, APROBACIÓN".to_string(),
            url: "https://example.com/1.pdf".to_string(),
            published_date: "2025-03-10".to_string(),
            summary: "(Extraído de PDF)".to_string(),
        }];
        let csv = to_csv(&documents);
        assert!(csv.starts_with("\u{feff}source_name,title,url,published_date,summary\n"));
        assert!(csv.contains("BOC,\"DECRETO, APROBACIÓN\",https://example.com/1.pdf"));
    }
}
