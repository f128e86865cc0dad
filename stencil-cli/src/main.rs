//! Stencil — placeholder template renderer speaking a JSON compiler protocol.
//!
//! # Usage
//!
//! ```text
//! stencil [--input <FILE>] [--pretty]
//! ```
//!
//! Reads one request envelope (`templateSource`, `data`, `frontmatter`, ...)
//! from stdin, renders it, and writes one response envelope (`content`, plus
//! `diagnostics` when leftover markers were found) to stdout. Logging goes to
//! stderr; stdout carries only the response.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use stencil_renderer::{RenderRequest, RenderResponse, Renderer};

#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    version,
    about = "Render {{variable}} templates from a JSON request envelope",
    long_about = None,
)]
struct Cli {
    /// Read the request envelope from a file instead of stdin.
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Pretty-print the response envelope.
    #[arg(long)]
    pretty: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn read_request(cli: &Cli) -> Result<RenderRequest> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open request envelope {}", path.display()))?;
            RenderRequest::from_reader(BufReader::new(file))
                .with_context(|| format!("invalid request envelope in {}", path.display()))
        }
        None => RenderRequest::from_reader(io::stdin().lock())
            .context("invalid request envelope on stdin"),
    }
}

fn write_response(cli: &Cli, response: &RenderResponse) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.pretty {
        serde_json::to_writer_pretty(&mut out, response)
            .context("failed to write response envelope")?;
        out.write_all(b"\n")?;
        out.flush()?;
    } else {
        response
            .write_to(&mut out)
            .context("failed to write response envelope")?;
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let request = read_request(&cli)?;
    if let Some(path) = &request.template_path {
        debug!(template = %path, "rendering template");
    }
    debug!(bytes = request.template_source.len(), "request envelope received");

    let renderer = Renderer::new().context("failed to initialise renderer")?;
    let data = request.merged_data();
    let content = renderer.render(&request.template_source, &data);

    let diagnostics = renderer.diagnostics(&content);
    for diag in &diagnostics {
        warn!("{diag}");
    }

    write_response(&cli, &RenderResponse::new(content, diagnostics))
}
