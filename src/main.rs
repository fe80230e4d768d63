use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use katsuyou::config::{self, Config};
use katsuyou::descriptor;
use katsuyou::loader;
use katsuyou::{Batch, Mood, Report};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One tab-separated line per verb and form.
    Tsv,
    /// One JSON object per verb and form.
    Json,
}

#[derive(Parser)]
struct Args {
    /// Verb files or directories to load. Overrides the paths in the
    /// configuration.
    #[arg(name = "paths")]
    paths: Vec<PathBuf>,
    /// Path to the configuration file.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,
    /// Only generate the specified forms, like `past_indicative`. Overrides
    /// the forms in the configuration.
    #[arg(long = "form", name = "form")]
    forms: Vec<String>,
    /// Also generate english glosses.
    #[arg(long)]
    english: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Tsv)]
    format: Format,
    /// List the fields of a complete record and exit.
    #[arg(long)]
    list_fields: bool,
    /// List available `--form` arguments and exit.
    #[arg(long)]
    list_forms: bool,
    /// Exit with an error if any record was rejected or any form failed.
    #[arg(long)]
    strict: bool,
}

/// Log filter read from `RUST_LOG`, reporting failures and the summary of a
/// run if it is unset.
fn filter_builder() -> tracing_subscriber::filter::Builder {
    EnvFilter::builder().with_default_directive(LevelFilter::INFO.into())
}

fn main() -> Result<()> {
    let filter = filter_builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
        .try_init()?;

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list_fields {
        for name in descriptor::note_field_names() {
            writeln!(out, "{name}")?;
        }

        return Ok(());
    }

    if args.list_forms {
        writeln!(out, "Available `--form` arguments:")?;

        for mood in Mood::ALL {
            writeln!(out, "  {} - {}", mood.name(), mood.describe())?;
        }

        return Ok(());
    }

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILE));

    let config = Config::load(&config_path)?;

    let paths = if args.paths.is_empty() {
        let root = config_path.parent().unwrap_or(Path::new(""));
        config.resolve_paths(root)
    } else {
        args.paths.clone()
    };

    let moods = if args.forms.is_empty() {
        config.moods()?
    } else {
        config::parse_forms(&args.forms)?
    };

    let english = args.english || config.english;

    let start = Instant::now();

    let loaded = loader::load_paths(&paths)?;

    let batch = Batch::new(config::select_descriptors(&moods)).with_english(english);
    let report = batch.run(&loaded.verbs);

    match args.format {
        Format::Tsv => write_tsv(&mut out, &report)?,
        Format::Json => write_json(&mut out, &report)?,
    }

    out.flush()?;

    let duration = Instant::now().duration_since(start);

    tracing::info!(
        verbs = loaded.verbs.len(),
        forms = batch.descriptors().len(),
        rows = report.rows.len(),
        failures = report.failures.len(),
        rejected = loaded.rejected.len(),
        disabled = loaded.disabled,
        duplicates = loaded.duplicates,
        ?duration,
        "Done"
    );

    if args.strict && (!report.is_clean() || !loaded.rejected.is_empty()) {
        bail!(
            "{} failed forms and {} rejected records",
            report.failures.len(),
            loaded.rejected.len()
        );
    }

    Ok(())
}

fn write_tsv<O>(out: &mut O, report: &Report) -> Result<()>
where
    O: ?Sized + Write,
{
    for row in &report.rows {
        let level = row.level.as_deref().unwrap_or_default();
        write!(out, "{}\t{}\t{}\t{level}", row.kanji, row.kana, row.form)?;

        for field in &row.fields {
            write!(out, "\t{}", field.value)?;
        }

        for english in &row.english {
            write!(out, "\t{english}")?;
        }

        writeln!(out)?;
    }

    Ok(())
}

fn write_json<O>(out: &mut O, report: &Report) -> Result<()>
where
    O: ?Sized + Write,
{
    for row in &report.rows {
        serde_json::to_writer(&mut *out, row)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::filter_builder;

    #[test]
    fn failures_are_logged_by_default() {
        let filter = filter_builder().parse_lossy("");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));

        let filter = filter_builder().parse_lossy("error");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
