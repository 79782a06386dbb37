//! paramlist - resolve the outbound header block of a request definition.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use paramlist::{HeaderResolver, RequestDefinition, ResolverConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "paramlist")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the request definition (TOML)
    request: PathBuf,

    /// Path to the resolver configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli
        .config
        .map(ResolverConfig::from_file)
        .unwrap_or_default();

    let request = match RequestDefinition::from_file(&cli.request) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!("Fail to load {}: {err}", cli.request.display());
            return ExitCode::FAILURE;
        }
    };

    let headers = request.resolve_headers(&HeaderResolver::new(config));
    print!(
        "{} {}\r\n{}\r\n",
        request.method.as_str(),
        request.url,
        headers.stringify()
    );
    ExitCode::SUCCESS
}
