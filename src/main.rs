use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tagsheet::form::{safe_file_name, FONT_OPTIONS};
use tagsheet::{compute_sheet_layout, sanitize, RawForm, TagSheetConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    /// Printable sheet
    #[default]
    Svg,
    /// Computed layout (grid, font size, tag positions)
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Json => "json",
        }
    }
}

/// Generate a printable sheet of name + QR contact tags
#[derive(Parser, Debug)]
#[command(name = "tagsheet", version, about)]
struct Args {
    /// Name printed on every tag (at most 12 characters are kept)
    #[arg(short, long)]
    name: String,

    /// Contact URL encoded in the QR code
    #[arg(short, long)]
    url: String,

    /// Text and QR color as #rgb or #rrggbb
    #[arg(short, long, default_value = "#000000")]
    color: String,

    /// Name font label (unknown labels use the first font)
    #[arg(short, long, default_value = FONT_OPTIONS[0].label)]
    font: String,

    /// JSON file overriding sheet geometry and font bounds
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
    format: OutputFormat,

    /// Output file, `-` for stdout (defaults to maigo-tag-<name>.<ext>)
    #[arg(short, long)]
    output: Option<String>,

    /// Leave the sheet background transparent
    #[arg(long)]
    transparent: bool,
}

fn run(args: Args) -> tagsheet::Result<()> {
    let config = match &args.config {
        Some(path) => TagSheetConfig::load(path)?,
        None => TagSheetConfig::default(),
    };

    let raw = RawForm {
        name: args.name,
        contact_url: args.url,
        text_color: args.color,
        font_family: args.font,
    };
    let form = sanitize(&raw)?;
    let layout = compute_sheet_layout(&form.name, &config.geometry, &config.font_bounds);
    if layout.tag_count == 0 {
        tracing::warn!(geometry = ?config.geometry, "no tags fit on the sheet");
    }

    let body = match args.format {
        OutputFormat::Svg => {
            tagsheet::svg::render_sheet_svg(&form, &layout, &config.geometry, args.transparent)?
        }
        OutputFormat::Json => serde_json::to_string_pretty(&layout)?,
    };

    let output = args
        .output
        .unwrap_or_else(|| safe_file_name(&form.name, args.format.extension()));
    if output == "-" {
        let mut stdout = io::stdout().lock();
        stdout.write_all(body.as_bytes())?;
        stdout.write_all(b"\n")?;
    } else {
        fs::write(&output, body)?;
        eprintln!(
            "Wrote {} tags ({}x{}, name {}mm) to {}",
            layout.tag_count, layout.columns, layout.rows, layout.name_font_size_mm, output
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TAGSHEET_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
