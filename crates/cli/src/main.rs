//! Command line front end for the signing client.
//!
//! Loads endpoint and key settings from a TOML file (environment
//! overrides apply), performs one signed API call, and prints the raw
//! response.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use error_stack::{Report, ResultExt};

use intersight_client::{ApiRequest, IntersightClient, IntersightError, Method, Settings};

#[derive(Parser)]
#[command(name = "iscli")]
#[command(about = "Signed REST calls against an Intersight API endpoint")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "intersight.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// GET a resource collection or instance
    Get(CallArgs),
    /// POST a new resource
    Post(CallArgs),
    /// PATCH an existing resource by moid or name
    Patch(CallArgs),
    /// DELETE an existing resource by moid or name
    Delete(CallArgs),
}

#[derive(clap::Args)]
struct CallArgs {
    /// Resource path, e.g. /ntp/Policies
    path: String,

    /// Query parameter as key=value; repeatable
    #[arg(long = "query", short = 'q')]
    query: Vec<String>,

    /// JSON object body
    #[arg(long)]
    body: Option<String>,

    /// Managed object identifier (24 bytes)
    #[arg(long)]
    moid: Option<String>,

    /// Object name, resolved to a moid with a filtered lookup
    #[arg(long)]
    name: Option<String>,

    /// Proxy URL for this call
    #[arg(long)]
    proxy: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::builder().filter_level(filter).init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Report<IntersightError>> {
    let settings =
        Settings::from_file(&cli.config).change_context(IntersightError::Configuration {
            message: format!("failed to load settings from {}", cli.config.display()),
        })?;
    let client = IntersightClient::from_settings(&settings)?;

    let (method, args) = match &cli.command {
        Commands::Get(args) => (Method::Get, args),
        Commands::Post(args) => (Method::Post, args),
        Commands::Patch(args) => (Method::Patch, args),
        Commands::Delete(args) => (Method::Delete, args),
    };

    let request = build_request(method, args)?;
    let response = client.call(&request)?;

    println!("HTTP {}", response.status);
    let body = response.body_text();
    if !body.is_empty() {
        println!("{body}");
    }

    Ok(())
}

fn build_request(method: Method, args: &CallArgs) -> Result<ApiRequest, Report<IntersightError>> {
    let mut request = ApiRequest::new(method, args.path.clone());

    for pair in &args.query {
        let (key, value) = pair.split_once('=').ok_or_else(|| {
            Report::new(IntersightError::InvalidArgument {
                message: format!("query parameter must be key=value, got {pair:?}"),
            })
        })?;
        request = request.with_query(key, value);
    }

    if let Some(body) = &args.body {
        let value = serde_json::Value::from_str(body).map_err(|e| {
            Report::new(IntersightError::InvalidArgument {
                message: format!("the *body* value is not valid JSON: {e}"),
            })
        })?;
        request = request.with_body(value);
    }

    if let Some(moid) = &args.moid {
        request = request.with_moid(moid);
    }
    if let Some(name) = &args.name {
        request = request.with_name(name);
    }
    if let Some(proxy) = &args.proxy {
        request = request.with_proxy(proxy);
    }

    Ok(request)
}
