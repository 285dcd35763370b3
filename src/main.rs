//! sql-util binary entry point.
//!
//! Runs a SQL file against a named connection and exports the rows, or
//! clears previously exported results.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use sql_util::services::credentials::CREDENTIALS_FILE;
use sql_util::{
    clear_all_results, get_db_credentials_from, get_query_from_file, to_csv, to_json, Backend,
    ConnectionFactory,
};

/// Query MySQL or SingleStore and export the results
#[derive(Parser, Debug)]
#[command(name = "sql-util", version, about, long_about = None)]
struct Cli {
    /// Path to the credentials file
    #[arg(long, global = true, default_value = CREDENTIALS_FILE, env = "SQL_UTIL_CREDENTIALS")]
    credentials: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a query file and export its rows
    Run {
        /// Connection name in the credentials file
        #[arg(long)]
        conn: String,

        /// Database backend
        #[arg(long, default_value = "mysql", value_parser = parse_backend)]
        backend: Backend,

        /// Directory holding the query file
        #[arg(long, default_value = ".")]
        query_dir: PathBuf,

        /// Query file name, including its extension
        #[arg(long)]
        query: String,

        /// Directory to write results into
        #[arg(long, default_value = "results")]
        out: PathBuf,

        /// Output file name without extension (defaults to the query file stem)
        #[arg(long)]
        name: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
    /// Delete exported .csv and .json files from a directory
    Clear {
        /// Directory to clean
        #[arg(long, default_value = "results")]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
    Both,
}

fn parse_backend(s: &str) -> Result<Backend, String> {
    Backend::from_str(s).ok_or_else(|| format!("unknown backend `{}`", s))
}

fn main() -> Result<()> {
    sql_util::logging::init()?;

    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            conn,
            backend,
            query_dir,
            query,
            out,
            name,
            format,
        } => {
            let credentials = get_db_credentials_from(&cli.credentials, &conn)?;
            let sql = get_query_from_file(&query_dir, &query)?;
            let name = name.unwrap_or_else(|| {
                query
                    .rsplit_once('.')
                    .map(|(stem, _)| stem.to_string())
                    .unwrap_or_else(|| query.clone())
            });

            let mut connection = ConnectionFactory::create(backend, credentials);
            connection.connect()?;
            tracing::info!("Running {} on {}", query, connection.display_name());
            let rows = connection.execute_and_fetchall(&sql, &[]);
            connection.close()?;
            let rows = rows?;

            tracing::info!("Fetched {} rows", rows.len());
            std::fs::create_dir_all(&out)?;

            if matches!(format, Format::Csv | Format::Both) {
                match to_csv(&out, &name, &rows)? {
                    Some(path) => tracing::info!("Wrote {}", path.display()),
                    None => tracing::info!("No rows, CSV export skipped"),
                }
            }
            if matches!(format, Format::Json | Format::Both) {
                let path = to_json(&out, &name, &rows)?;
                tracing::info!("Wrote {}", path.display());
            }
        }
        Command::Clear { out } => {
            let removed = clear_all_results(&out)?;
            tracing::info!("Removed {} result files from {}", removed, out.display());
        }
    }

    Ok(())
}
