use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use paintstyle::logging::{init_logging, LoggingConfig};
use paintstyle::{compose_style, parse_paints, Error, PaintStyle};

/// How each composed paint is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// The bare declaration fragment
    Css,
    /// A full rule wrapped around `--selector`
    Rule,
    /// A JSON array of `{property, value}` objects
    Json,
}

/// Compose paint JSON documents into CSS text-fill styles
#[derive(Debug, Parser)]
#[command(name = "paintstyle", version, about)]
struct CliConfig {
    /// Paint JSON file (a paint, null, or an array of those); `-` or nothing reads stdin
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
    format: OutputFormat,

    /// Selector used by `--format rule`
    #[arg(long, default_value = ".paint")]
    selector: String,

    /// Print the style fingerprint after each style
    #[arg(long)]
    digest: bool,

    /// env_logger filter, overrides RUST_LOG
    #[arg(long)]
    log_level: Option<String>,
}

impl CliConfig {
    fn validate(&self) -> paintstyle::Result<()> {
        if self.format == OutputFormat::Rule && self.selector.trim().is_empty() {
            return Err(Error::ConfigError("--selector must not be empty".into()));
        }
        Ok(())
    }

    fn read_input(&self) -> paintstyle::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
            _ => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }

    fn render(&self, style: &PaintStyle) -> anyhow::Result<String> {
        Ok(match self.format {
            OutputFormat::Css => style.to_string(),
            OutputFormat::Rule => style.to_rule(&self.selector),
            OutputFormat::Json => serde_json::to_string(style)?,
        })
    }

    /// Compose every paint in `input` and write one output per paint.
    fn write_styles<W: Write>(&self, input: &str, out: &mut W) -> anyhow::Result<()> {
        let paints = parse_paints(input).context("failed to decode paints")?;
        log::debug!("decoded {} paint(s)", paints.len());

        for paint in &paints {
            let style = paint.as_ref().map(compose_style).unwrap_or_default();
            writeln!(out, "{}", self.render(&style)?)?;
            if self.digest {
                writeln!(out, "{}", style.fingerprint())?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

fn run(config: &CliConfig) -> anyhow::Result<()> {
    config.validate()?;
    let input = config.read_input().context("failed to read paint input")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    config.write_styles(&input, &mut out)
}

fn main() {
    let config = CliConfig::parse();
    init_logging(LoggingConfig {
        env_filter: config.log_level.clone(),
        ..Default::default()
    });

    if let Err(e) = run(&config) {
        eprintln!("paintstyle: {:#}", e);
        std::process::exit(1);
    }
}
