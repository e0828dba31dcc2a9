use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use folio::config::ServerConfig;
use folio::query::{Searcher, SearcherOptions};
use folio::{index, output, server, utils};
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Title search and document extraction over a fixed text corpus")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Search query (when no subcommand is given); serve when empty
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    #[command(flatten)]
    source: SourceArgs,

    #[command(flatten)]
    serve: ServeArgs,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct SourceArgs {
    /// Corpus text file
    #[arg(long, global = true, env = "FOLIO_CORPUS", default_value = "completeworks.txt")]
    corpus: PathBuf,

    /// JSON catalog of titles and boundary exceptions (built-in Shakespeare catalog if unset)
    #[arg(long, global = true, env = "FOLIO_CATALOG")]
    catalog: Option<PathBuf>,

    /// Start even if boundary exceptions no longer match the corpus
    #[arg(long, global = true)]
    no_validate: bool,
}

/// Listener settings, shared by `serve` and the bare `folio` invocation
#[derive(Args)]
struct ServeArgs {
    /// Address to listen on
    #[arg(long, global = true, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, global = true, env = "PORT", default_value_t = 3001)]
    port: u16,

    /// Directory of static assets
    #[arg(long, global = true, default_value = "static")]
    static_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the search endpoint and static files over HTTP
    Serve,
    /// Print the document matching a query
    Query {
        /// Words of the query
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,

        /// Print only the document text
        #[arg(long)]
        no_heading: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog titles in document order
    Titles,
    /// Show corpus, index and per-document statistics
    Stats,
    /// Check the catalog's boundary exceptions against the corpus
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::init(cli.verbose);

    let mut config = ServerConfig {
        host: cli.serve.host,
        port: cli.serve.port,
        corpus_path: cli.source.corpus,
        catalog_path: cli.source.catalog,
        static_dir: cli.serve.static_dir,
        validate_exceptions: !cli.source.no_validate,
    };

    match cli.command {
        Some(Commands::Serve) => run_server(&config)?,
        Some(Commands::Query {
            query,
            no_heading,
            no_color,
            json,
        }) => {
            let searcher = load_searcher(&config)?;
            run_query(&searcher, &query.join(" "), !no_heading, !no_color, json)?;
        }
        Some(Commands::Titles) => {
            let catalog = config.load_catalog()?;
            output::print_titles(catalog.titles())?;
        }
        Some(Commands::Stats) => {
            let searcher = load_searcher(&config)?;
            index::stats::show_stats(&searcher)?;
        }
        Some(Commands::Check) => {
            config.validate_exceptions = true;
            let searcher = load_searcher(&config)?;
            println!(
                "OK: {} titles, {} boundary exceptions match {}",
                searcher.catalog().len(),
                searcher.catalog().exceptions().len(),
                config.corpus_path.display()
            );
        }
        None if cli.query.is_empty() => run_server(&config)?,
        None => {
            let searcher = load_searcher(&config)?;
            run_query(&searcher, &cli.query.join(" "), true, true, false)?;
        }
    }

    Ok(())
}

/// Read the corpus and build the index; any failure here is fatal
fn load_searcher(config: &ServerConfig) -> Result<Searcher> {
    let catalog = config.load_catalog().context("Failed to load catalog")?;
    let options = SearcherOptions {
        show_progress: true,
        ..config.searcher_options()
    };

    Searcher::load(&config.corpus_path, catalog, &options)
        .with_context(|| format!("Failed to index {}", config.corpus_path.display()))
}

fn run_server(config: &ServerConfig) -> Result<()> {
    let searcher = Arc::new(load_searcher(config)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(server::serve(config, searcher))
}

fn run_query(
    searcher: &Searcher,
    query: &str,
    heading: bool,
    color: bool,
    json: bool,
) -> Result<()> {
    let result = searcher.search(query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_search_result(&result, color, heading)?;
    }

    Ok(())
}
