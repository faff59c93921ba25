use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use iconstub::{
    GeneratorConfig, IconWriter,
    config::{self, FlagOverrides},
};

/// Write placeholder PNG icons named after each target size.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Directory to write icons into (created if missing)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Comma-separated icon sizes, e.g. 72,96,192
    #[arg(short, long, value_name = "N,...", value_delimiter = ',')]
    sizes: Option<Vec<u32>>,

    /// JSON config file to use instead of the per-user one
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn resolve_config(cli: &Cli) -> Result<GeneratorConfig> {
    let file = cli.config.clone().or_else(config::user_config_file);
    let flags = FlagOverrides {
        output_dir: cli.output_dir.clone(),
        sizes: cli.sizes.clone(),
    };

    GeneratorConfig::resolve(file.as_deref(), |key| env::var(key).ok(), &flags).with_context(|| {
        match &file {
            Some(path) => format!("Invalid configuration (file {})", path.display()),
            None => "Invalid configuration".to_string(),
        }
    })
}

fn main() -> Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("Failed to read .env");
        }
    }
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(&Cli::parse())
}

fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let writer = IconWriter::from_config(config)?;
    let report = writer.generate_with(|path| println!("Wrote {}", path.display()))?;
    debug!(
        "{} icons of {} bytes each",
        report.written.len(),
        report.bytes_per_file
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli_for(temp_dir: &TempDir, extra: &[&str]) -> Cli {
        let config_path = temp_dir.path().join("config.json");
        if !config_path.exists() {
            fs::write(&config_path, "{}").unwrap();
        }
        let out_dir = temp_dir.path().join("icons");
        let mut args = vec![
            "iconstub".to_string(),
            "-c".to_string(),
            config_path.display().to_string(),
            "-o".to_string(),
            out_dir.display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn sizes_flag_splits_on_commas() {
        let temp_dir = TempDir::new().unwrap();
        let cli = cli_for(&temp_dir, &["-s", "72,96"]);
        assert_eq!(cli.sizes, Some(vec![72, 96]));
    }

    #[test]
    fn print_config_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        run(&cli_for(&temp_dir, &["--print-config"])).unwrap();
        assert!(!temp_dir.path().join("icons").exists());
    }

    #[test]
    fn run_writes_requested_sizes() {
        let temp_dir = TempDir::new().unwrap();
        run(&cli_for(&temp_dir, &["--sizes", "16,32"])).unwrap();

        let out_dir = temp_dir.path().join("icons");
        assert!(out_dir.join("icon-16.png").is_file());
        assert!(out_dir.join("icon-32.png").is_file());
        assert_eq!(fs::read_dir(&out_dir).unwrap().count(), 2);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("absent.json").display().to_string();
        let cli = Cli::try_parse_from(["iconstub", "-c", missing.as_str()]).unwrap();

        assert!(run(&cli).is_err());
    }
}
