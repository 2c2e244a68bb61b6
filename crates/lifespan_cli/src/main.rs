//! Command-line surface for the lifespan timeline.
//!
//! # Responsibility
//! - Map user commands (add/list/show/export) onto `TimelineService`.
//! - Print diagnostics to stderr and results to stdout or files.

use clap::{Parser, Subcommand, ValueEnum};
use lifespan_core::{
    init_logging, to_svg, to_text, AddPersonOutcome, AppConfig, Diagnostic, DiagnosticSink,
    ExportFormat, JsonFileStore, TimelineRenderer, TimelineService, WikidataLookup, YearWindow,
    MAX_TIMELINE_YEAR, MIN_TIMELINE_YEAR,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "lifespan", version, about = "Lifespan timeline of famous people")]
struct Cli {
    /// TOML config file.
    #[arg(long, env = "LIFESPAN_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Record store file (overrides config).
    #[arg(long, env = "LIFESPAN_DATA_FILE", global = true)]
    data_file: Option<PathBuf>,
    /// Absolute directory for log files (overrides config).
    #[arg(long, env = "LIFESPAN_LOG_DIR", global = true)]
    log_dir: Option<PathBuf>,
    /// trace|debug|info|warn|error (overrides config).
    #[arg(long, env = "LIFESPAN_LOG_LEVEL", global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a Wikipedia title and add the person to the timeline.
    Add {
        /// Wikipedia title, e.g. `Albert_Einstein` or `Albert Einstein`.
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },
    /// List stored people.
    List,
    /// Draw the timeline for people born inside a year window.
    Show {
        /// Earliest birth year, inclusive.
        #[arg(long, value_parser = year_in_range)]
        from: Option<i32>,
        /// Latest birth year, inclusive.
        #[arg(long, value_parser = year_in_range)]
        to: Option<i32>,
        /// Also write the chart as an SVG file.
        #[arg(long)]
        svg: Option<PathBuf>,
    },
    /// Export all stored records.
    Export {
        #[arg(long, value_enum)]
        format: FormatArg,
        /// Output file; `-` or omitted prints to stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        eprintln!("{}: {}", diagnostic.level.as_str(), diagnostic.message);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli)?;
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        lifespan_core::core_version()
    );

    let store = JsonFileStore::new(config.data_file.clone());
    let lookup = WikidataLookup::new(&config.user_agent, config.http_timeout())?
        .with_endpoints(&config.wikipedia_api_url, &config.wikidata_entity_url);
    let service = TimelineService::new(store, lookup)
        .with_renderer(TimelineRenderer::new(config.chart_title.clone()));

    match cli.command {
        Command::Add { title } => match service.add_person(&title.join(" "))? {
            AddPersonOutcome::Added(record) => {
                println!(
                    "{} added to timeline ({} - {}).",
                    record.name, record.birth, record.death
                );
            }
            AddPersonOutcome::AlreadyExists(name) => {
                eprintln!("warning: {name} already exists in timeline.");
            }
        },
        Command::List => {
            for record in service.list_people()? {
                println!("{}\t{}\t{}", record.name, record.birth, record.death);
            }
        }
        Command::Show { from, to, svg } => {
            let window = YearWindow::new(from, to)?;
            let mut sink = StderrSink;
            if let Some(chart) = service.build_timeline(window, &mut sink)? {
                print!("{}", to_text(&chart));
                if let Some(path) = svg {
                    std::fs::write(&path, to_svg(&chart))?;
                    eprintln!("info: chart written to {}", path.display());
                }
            }
        }
        Command::Export { format, out } => {
            let format = ExportFormat::from(format);
            let payload = service.export(format)?;
            match out {
                Some(path) if path.as_os_str() != "-" => {
                    std::fs::write(&path, payload)?;
                    eprintln!(
                        "info: exported {} to {}",
                        format.mime_type(),
                        path.display()
                    );
                }
                _ => print!("{payload}"),
            }
        }
    }

    Ok(())
}

fn year_in_range(value: &str) -> Result<i32, String> {
    let year: i32 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a year"))?;
    if (MIN_TIMELINE_YEAR..=MAX_TIMELINE_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(format!(
            "year must be between {MIN_TIMELINE_YEAR} and {MAX_TIMELINE_YEAR}"
        ))
    }
}

fn resolve_config(cli: &Cli) -> Result<AppConfig, Box<dyn Error>> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(data_file) = &cli.data_file {
        config.data_file = data_file.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::year_in_range;

    #[test]
    fn year_bounds_are_inclusive() {
        assert_eq!(year_in_range("1678"), Ok(1678));
        assert_eq!(year_in_range("2025"), Ok(2025));
        assert!(year_in_range("1677").is_err());
        assert!(year_in_range("twenty").is_err());
    }
}
