//! Button Kit CLI - render buttons and inspect the variant table.
//!
//! Output is HTML or JSON so other tooling can consume it directly.

use anyhow::{Context, Result};
use button_kit::node::validate_attribute_name;
use button_kit::{
    parse_keys, ApiResponse, AttrValue, Button, ButtonConfig, ButtonProps, ClassNameExt, Element,
    Node, VariantEntry,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "button-kit")]
#[command(about = "Render variant buttons as HTML or JSON")]
#[command(version)]
struct Cli {
    /// Config file (defaults to $BUTTON_KIT_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single button
    Render {
        /// Button label
        label: String,
        /// Intent: default, destructive, outline, secondary, ghost, link
        #[arg(short, long)]
        intent: Option<String>,
        /// Size: default, sm, lg, icon
        #[arg(short, long)]
        size: Option<String>,
        /// Render the loading spinner
        #[arg(long)]
        loading: bool,
        /// Mark the button disabled
        #[arg(long)]
        disabled: bool,
        /// Delegate rendering to a child element with this tag
        #[arg(long, value_name = "TAG")]
        as_child: Option<String>,
        /// Extra classes merged over the variant classes
        #[arg(short, long)]
        class: Option<String>,
        /// Pass-through attribute, `name=value` or bare `name`
        #[arg(short, long = "attr", value_name = "NAME[=VALUE]")]
        attrs: Vec<String>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,
    },
    /// List resolved variant classes
    Variants {
        /// Only this intent
        #[arg(short, long)]
        intent: Option<String>,
        /// Only this size
        #[arg(short, long)]
        size: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Html,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::warn!(error = %e, "button-kit command failed");
            let body = ApiResponse::<()>::err(format!("{:#}", e));
            match serde_json::to_string_pretty(&body) {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    match cli.command {
        Commands::Render {
            label,
            intent,
            size,
            loading,
            disabled,
            as_child,
            class,
            attrs,
            format,
        } => {
            let config = match cli.config {
                Some(path) => ButtonConfig::load_from_path(&path),
                None => ButtonConfig::load(),
            }
            .context("loading config")?;

            let delegate = as_child.is_some();
            let children = match as_child {
                Some(tag) => Node::from(Element::new(tag).child(label)),
                None => Node::text(label),
            };

            let mut props = ButtonProps::new(children)
                .loading(loading)
                .disabled(disabled)
                .as_child(delegate);
            (props.intent, props.size) = parse_keys(intent.as_deref(), size.as_deref())?;
            if let Some(class) = class {
                props.class_name = ClassNameExt::base(class);
            }
            for attr in &attrs {
                let (name, value) = parse_attr(attr)?;
                props.attributes.set(name, value);
            }

            let node = Button::render_with(&props, &config)?;
            Ok(match format {
                Format::Html => node.to_html(),
                Format::Json => serde_json::to_string_pretty(&ApiResponse::ok(node))?,
            })
        }
        Commands::Variants { intent, size } => {
            let (intent, size) = parse_keys(intent.as_deref(), size.as_deref())?;
            let entries = VariantEntry::list(intent, size);
            Ok(serde_json::to_string_pretty(&ApiResponse::ok(entries))?)
        }
    }
}

fn parse_attr(raw: &str) -> Result<(String, AttrValue)> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, AttrValue::from(value)),
        None => (raw, AttrValue::Bool(true)),
    };
    validate_attribute_name(name)?;
    Ok((name.to_string(), value))
}
