//! footer-builder - command line front end for saved footer designs

#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::{Level as TraceLevel, error, info};
use tracing_subscriber::FmtSubscriber;

use footer_builder::codegen::{self, ExportOptions, Highlight};
use footer_builder::config::BuilderSettings;
use footer_builder::constants::grid::MAX_TRACKS;
use footer_builder::editor::FooterEditor;
use footer_builder::error::PersistenceError;
use footer_builder::notify::{AutoConfirm, TracingNotifier};
use footer_builder::persistence::{self, DesignLibrary, FileStore};
use footer_builder::types::{CellSize, Device};

#[derive(Parser)]
#[command(name = "footer-builder", version, about = "Build responsive footer layouts")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Answer yes to overwrite and delete prompts
    #[arg(long, short = 'y', alias = "force", global = true)]
    yes: bool,

    /// Saved designs directory (overrides the settings file)
    #[arg(long, value_name = "DIR", global = true)]
    storage: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a design with empty grids and save it
    New {
        name: String,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_TRACKS as i64))]
        columns: Option<u32>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_TRACKS as i64))]
        rows: Option<u32>,
        #[arg(long)]
        gap: Option<u32>,
        /// Cell width, e.g. `1fr`, `120px` or `auto`
        #[arg(long)]
        cell_width: Option<String>,
    },
    /// List saved designs
    List,
    /// Print the per-device summary of a saved design
    Show { design: String },
    /// Import a design file into the library
    Import {
        file: PathBuf,
        /// Name to save under (defaults to the name stored in the file)
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete a saved design
    Delete { design: String },
    /// Write HTML, CSS and a standalone page for a saved design
    Export {
        design: String,
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
        /// Prefix for image sources (overrides the settings file)
        #[arg(long)]
        origin: Option<String>,
        /// Also write the raw design file
        #[arg(long)]
        json: bool,
    },
    /// Print the preview stylesheet and markup for one device
    Preview {
        design: String,
        #[arg(long, default_value = "desktop")]
        device: Device,
    },
}

fn init_logging(settings: &BuilderSettings) -> Result<()> {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.log_level.clone());
    let log_level = match level.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")?;
    Ok(())
}

/// Turn a library error into the message shown on the terminal
fn describe(e: PersistenceError) -> anyhow::Error {
    match e.suggestion() {
        Some(hint) => anyhow::anyhow!("{} {}", e.user_message(), hint),
        None => anyhow::anyhow!("{}", e.user_message()),
    }
}

fn open_library(storage: PathBuf) -> Result<DesignLibrary<FileStore>> {
    let store = FileStore::open(&storage)
        .with_context(|| format!("Failed to open design storage at {:?}", storage))?;
    DesignLibrary::open(store).context("Failed to read saved design list")
}

fn resolve_id(library: &DesignLibrary<FileStore>, design: &str) -> Result<String> {
    library
        .resolve(design)
        .map(|found| found.id.clone())
        .with_context(|| format!("No saved design matches '{design}'"))
}

fn run(cli: Cli, settings: BuilderSettings) -> Result<()> {
    let confirm = AutoConfirm(cli.yes);
    let storage = cli.storage.unwrap_or_else(|| settings.storage_root());
    let mut library = open_library(storage)?;

    match cli.command {
        Command::New {
            name,
            columns,
            rows,
            gap,
            cell_width,
        } => {
            let mut editor = FooterEditor::new(&settings);
            if let Some(columns) = columns {
                editor.set_columns(columns);
            }
            if let Some(rows) = rows {
                editor.set_rows(rows);
            }
            if let Some(gap) = gap {
                editor.set_gap(gap);
            }
            if let Some(width) = cell_width {
                editor.set_cell_width(CellSize::from(width));
            }
            let saved = library
                .save(&name, editor.configurations(), &confirm)
                .map_err(describe)?;
            println!("{}  {}", saved.id, saved.name);
        }
        Command::List => {
            if library.list().is_empty() {
                println!("No saved designs");
            }
            for design in library.list() {
                println!("{:<24} {:<24} {}", design.id, design.name, design.timestamp);
            }
        }
        Command::Show { design } => {
            let id = resolve_id(&library, &design)?;
            let file = library.load(&id)?;
            println!("{}", file.display_name(&id));
            for summary in persistence::device_summaries(&file.configurations) {
                println!("  {summary}");
            }
        }
        Command::Import { file, name } => {
            let design = persistence::import_file(&file)
                .with_context(|| format!("Failed to import {:?}", file))?;
            let fallback = file
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Imported design".to_string());
            let name = name.unwrap_or_else(|| design.display_name(&fallback).to_string());

            // Round-trip through the editor so missing class names get filled in
            let mut editor = FooterEditor::new(&settings);
            editor.load_design(design, &TracingNotifier);
            let saved = library
                .save(&name, editor.configurations(), &confirm)
                .map_err(describe)?;
            println!("{}  {}", saved.id, saved.name);
        }
        Command::Delete { design } => {
            let id = resolve_id(&library, &design)?;
            library
                .delete(&id, &confirm)
                .map_err(describe)?;
        }
        Command::Export {
            design,
            out,
            origin,
            json,
        } => {
            let id = resolve_id(&library, &design)?;
            let file = library.load(&id)?;
            let options = ExportOptions {
                origin: origin.unwrap_or_else(|| settings.origin.clone()),
                highlight: Highlight::disabled(),
            };
            let bundle = codegen::export(&file.configurations, &options);

            fs::create_dir_all(&out)
                .with_context(|| format!("Failed to create output directory {:?}", out))?;
            for (name, contents) in [
                ("footer.html", &bundle.html),
                ("footer.css", &bundle.css),
                ("index.html", &bundle.document),
            ] {
                let path = out.join(name);
                fs::write(&path, contents)
                    .with_context(|| format!("Failed to write {:?}", path))?;
            }
            if json {
                library.export_saved(&id, &out.join(format!("{id}.json")))?;
            }
            info!(design = %id, out = ?out, "Exported footer");
        }
        Command::Preview { design, device } => {
            let id = resolve_id(&library, &design)?;
            let file = library.load(&id)?;
            let mut editor = FooterEditor::new(&settings);
            editor.load_design(file, &TracingNotifier);
            editor.switch_device(device);
            editor.flush();
            let preview = editor.preview();
            println!("/* {} preview, {}px */", device, preview.width);
            println!("{}", preview.preview_css);
            println!("{}", preview.html);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = BuilderSettings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load settings, using defaults: {e:#}");
        BuilderSettings::default()
    });
    init_logging(&settings)?;

    if let Err(e) = run(cli, settings) {
        error!(error = %format!("{e:#}"), "Command failed");
        return Err(e);
    }
    Ok(())
}
