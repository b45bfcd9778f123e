//! `bdui` command line.
//!
//! ```bash
//! # Render a local document and fire the submit button
//! bdui render --file screen.json --type nameInput=Ada --tap submitButton
//!
//! # Fetch a stored document
//! bdui render --key complex_content
//!
//! # Render a bundled sample and tap its cart button
//! bdui render --example complex --tap addToCartButton
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use bdui::action::HostEvent;
use bdui::config::Config;
use bdui::demos;
use bdui::loader::{DocumentSource, FileSource, HttpSource, LiteralSource, ScreenConfig};
use bdui::logging::init_tracing;
use bdui::mapper::ElementMapper;
use bdui::ui::navigator::Navigator;
use bdui::ui::session::ScreenSession;

/// Render backend-driven UI documents
#[derive(Parser, Debug)]
#[command(name = "bdui")]
#[command(version)]
struct Cli {
    /// Config file (default: ~/.config/bdui/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a document and print its render tree
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Read the document from a file
    #[arg(long, conflicts_with_all = ["key", "url", "json", "example"])]
    file: Option<PathBuf>,

    /// Fetch the document stored under this key on the configured endpoint
    #[arg(long, conflicts_with_all = ["url", "json", "example"])]
    key: Option<String>,

    /// Fetch the document from this URL
    #[arg(long, conflicts_with_all = ["json", "example"])]
    url: Option<String>,

    /// Render this JSON document given inline
    #[arg(long, value_name = "DOCUMENT", conflicts_with = "example")]
    json: Option<String>,

    /// Render a bundled sample document
    #[arg(long, value_enum)]
    example: Option<Example>,

    /// Query parameter sent with --url, as NAME=VALUE
    #[arg(long = "param", value_parser = parse_pair, requires = "url")]
    params: Vec<(String, String)>,

    /// Navigation title of the first screen
    #[arg(long)]
    title: Option<String>,

    /// Type into the text input with this id, as ID=TEXT
    #[arg(long = "type", value_parser = parse_pair)]
    typed: Vec<(String, String)>,

    /// Tap the element with this id (after any --type)
    #[arg(long = "tap")]
    taps: Vec<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Example {
    Simple,
    Complex,
}

impl Example {
    fn document(self) -> &'static str {
        match self {
            Example::Simple => demos::SIMPLE,
            Example::Complex => demos::COMPLEX,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Example::Simple => "simple",
            Example::Complex => "complex",
        }
    }
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    match cli.command {
        Command::Render(args) => render(&config, args).await,
    }
}

async fn render(config: &Config, args: RenderArgs) -> Result<()> {
    let mapper = ElementMapper::from(&config.mapper);
    let timeout = Duration::from_secs(u64::from(config.loader.timeout_seconds));

    if let Some(path) = &args.file {
        let root = titled(
            ScreenConfig::custom(format!("file://{}", path.display()), BTreeMap::new()),
            &args,
        );
        return drive(FileSource::new(path), root, mapper, &args).await;
    }
    if let Some(document) = &args.json {
        let root = titled(ScreenConfig::custom("bdui:inline", BTreeMap::new()), &args);
        return drive(LiteralSource::new(document.as_str()), root, mapper, &args).await;
    }
    if let Some(example) = args.example {
        let root = titled(
            ScreenConfig::custom(format!("bdui:example/{}", example.name()), BTreeMap::new()),
            &args,
        );
        return drive(LiteralSource::new(example.document()), root, mapper, &args).await;
    }

    let screen = match (&args.key, &args.url) {
        (Some(key), _) => ScreenConfig::storage(key),
        (None, Some(url)) => ScreenConfig::custom(url, args.params.iter().cloned().collect()),
        (None, None) => bail!("one of --file, --key, --url, --json or --example is required"),
    }
    .with_settings(&config.loader);
    let screen = titled(screen, &args);

    let source = HttpSource::new(screen.clone(), timeout)?;
    drive(source, screen, mapper, &args).await
}

fn titled(config: ScreenConfig, args: &RenderArgs) -> ScreenConfig {
    match &args.title {
        Some(title) => config.with_title(title),
        None => config,
    }
}

async fn drive<S: DocumentSource>(
    source: S,
    root: ScreenConfig,
    mapper: ElementMapper,
    args: &RenderArgs,
) -> Result<()> {
    let mut session = ScreenSession::new(source, mapper);
    let mut navigator = Navigator::new(root);

    session.load().await;
    print_state(&session)?;

    for (id, text) in &args.typed {
        if !session.change_text(id, text) {
            tracing::debug!(id, "Text change fired no action");
        }
    }
    for id in &args.taps {
        if !session.tap(id) {
            eprintln!("Warning: tapping '{}' fired no action", id);
        }
    }

    let events = session.process_events(&mut navigator).await;
    for event in &events {
        println!("{}", describe(event));
    }
    if events
        .iter()
        .any(|event| matches!(event, HostEvent::Reload { .. }))
    {
        print_state(&session)?;
    }
    if !events.is_empty() {
        match navigator.current() {
            Some(screen) => {
                let location = screen
                    .request_url()
                    .map(|url| url.to_string())
                    .unwrap_or_else(|_| screen.endpoint.clone());
                match navigator.title() {
                    Some(title) => println!(
                        "screen: {} \"{}\" (depth {})",
                        location,
                        title,
                        navigator.depth()
                    ),
                    None => println!("screen: {} (depth {})", location, navigator.depth()),
                }
            }
            None => println!("screen: closed"),
        }
    }

    session.close();
    Ok(())
}

fn print_state<S: DocumentSource>(session: &ScreenSession<S>) -> Result<()> {
    let state = session.state();
    if let Some(message) = state.error_message() {
        bail!("{}", message);
    }
    if let Some(tree) = &state.tree {
        print!("{}", tree.outline());
    }
    Ok(())
}

fn describe(event: &HostEvent) -> String {
    match event {
        HostEvent::Navigate { route, parameters } => {
            format!("navigate {} {}", route, bdui::schema::Value::Map(parameters.clone()))
        }
        HostEvent::Reload { view_id } => {
            format!("reload {}", view_id.as_deref().unwrap_or("<all>"))
        }
        HostEvent::Dismiss { animated } => format!("dismiss animated={}", animated),
        HostEvent::Custom { name, payload } => {
            format!("custom {} {}", name, bdui::schema::Value::Map(payload.clone()))
        }
    }
}
