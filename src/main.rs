//! Binary entrypoint for the dirgewear builder tool.
//!
//! Commands:
//! - `init` - write a starter `config.toml` with the default clothing rules
//! - `check [seed]` - load a wardrobe seed through the coverage engine and report problems
//! - `describe [seed]` - print how the seeded wearer looks and what they carry
//!
//! When no seed path is given, `[seeds].wardrobe` from the config is used.
//! See the library crate docs for module-level details: `dirgewear::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{debug, error, info};

use dirgewear::config::Config;
use dirgewear::wardrobe::{
    format_inventory, load_wardrobe_from_json, render_appearance, BodySlot, Wearer,
};

#[derive(Parser)]
#[command(name = "dirgewear")]
#[command(about = "Clothing coverage and layering tools for Dirge builders")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Validate a wardrobe seed by replaying it through the coverage engine
    Check {
        /// Wardrobe seed JSON (defaults to the configured seed)
        seed: Option<String>,
    },
    /// Print the appearance and inventory of a seeded wearer
    Describe {
        /// Wardrobe seed JSON (defaults to the configured seed)
        seed: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init writes the config, so it must not require one to exist.
    // Other commands fall back to defaults only when the file is absent.
    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Some(Config::load_or_default(&cli.config).await?),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Init => {
            info!("Initializing new wardrobe configuration");
            if tokio::fs::metadata(&cli.config).await.is_ok() {
                return Err(anyhow!(
                    "{} already exists; remove it first to regenerate defaults",
                    cli.config
                ));
            }
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Check { seed } => {
            let config = pre_config.unwrap_or_default();
            let path = seed.unwrap_or_else(|| config.seeds.wardrobe.clone());
            match load_wardrobe_from_json(&path, &config.clothing) {
                Ok(wearer) => {
                    log_slot_stacks(&wearer);
                    println!(
                        "{}: ok ({} items, {} worn)",
                        path,
                        wearer.items().len(),
                        wearer.worn_count()
                    );
                }
                Err(e) => {
                    error!("Wardrobe seed {} failed: {}", path, e);
                    return Err(anyhow!("{}: {}", path, e));
                }
            }
        }
        Commands::Describe { seed } => {
            let config = pre_config.unwrap_or_default();
            let path = seed.unwrap_or_else(|| config.seeds.wardrobe.clone());
            let wearer = load_wardrobe_from_json(&path, &config.clothing)
                .map_err(|e| anyhow!("{}: {}", path, e))?;
            println!("{}", wearer.name);
            println!();
            let appearance = render_appearance(&wearer);
            if appearance.is_empty() {
                println!("(nothing to see)");
            } else {
                println!("{}", appearance);
            }
            println!();
            for line in format_inventory(&wearer) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn log_slot_stacks(wearer: &Wearer) {
    for slot in BodySlot::ALL {
        let stack = wearer.slot(slot);
        if !stack.is_empty() {
            let names: Vec<String> = stack.iter().map(|id| wearer.item_name(id)).collect();
            debug!("{}: {}", slot, names.join(" < "));
        }
    }
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|cfg| cfg.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|cfg| cfg.logging.file.as_ref())
        .and_then(|path| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Mirror to the console only when someone is watching it
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
