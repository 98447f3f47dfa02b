use clap::Parser;

use related_images::adapters::outbound::formatters::{EnvFormatter, JsonFormatter, TextFormatter};
use related_images::images::domain::Component;
use related_images::ports::outbound::ImageFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Env,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "env" | "dotenv" => Ok(OutputFormat::Env),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text', 'json' or 'env'",
                s
            )),
        }
    }
}

impl OutputFormat {
    /// Creates a formatter instance for the specified output format
    pub fn create_formatter(&self) -> Box<dyn ImageFormatter> {
        match self {
            OutputFormat::Text => Box::new(TextFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
            OutputFormat::Env => Box::new(EnvFormatter::new()),
        }
    }
}

/// Print container image pull specs for compliance operator components
#[derive(Parser, Debug)]
#[command(name = "related-images")]
#[command(version)]
#[command(
    about = "Print container image pull specs for compliance operator components",
    long_about = "Print container image pull specs for compliance operator components.\n\n\
                  Each component's image comes from its RELATED_IMAGE_* environment variable \
                  when set and non-empty, otherwise from the built-in default."
)]
pub struct Args {
    /// Component to resolve: openscap, operator or content (defaults to all)
    pub component: Option<Component>,

    /// Output format: text, json or env
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Registry prefix for default images (e.g. quay.io/compliance-operator)
    #[arg(short, long)]
    pub registry: Option<String>,

    /// Path to a config file (defaults to ./related-images.config.yml when present)
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
