//! Command handlers

use crate::cli::{Cli, Commands};
use notefleet_app::{
    open_logistics, open_notebook, Config, Console, LogisticsCli, Menu, MenuExit, NotebookCli,
};
use notefleet_types::{OutputFormat, Result};
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Notebook { first_id } => {
            if let Some(first_id) = first_id {
                config.first_note_id = first_id;
            }
            cmd_notebook(&config, output_format)
        }

        Commands::Logistics {
            fleet,
            vehicles,
            first_id,
        } => {
            if fleet.is_some() {
                config.fleet_file = fleet;
            }
            if let Some(vehicles) = vehicles {
                config.fleet_file = None;
                config.fleet_size = vehicles;
            }
            if let Some(first_id) = first_id {
                config.first_order_id = first_id;
            }
            cmd_logistics(&config, output_format)
        }

        Commands::Config {
            show,
            set_output,
            set_fleet_size,
            set_fleet_file,
            clear_fleet_file,
            set_first_order_id,
            set_first_note_id,
            reset,
        } => cmd_config(
            output_format,
            ConfigUpdate {
                show,
                set_output,
                set_fleet_size,
                set_fleet_file,
                clear_fleet_file,
                set_first_order_id,
                set_first_note_id,
                reset,
            },
        ),
    }
}

fn cmd_notebook(config: &Config, output_format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout().lock());
    let mut menu = NotebookCli::new(open_notebook(config), console, output_format);

    let exit = menu.run()?;
    debug!(?exit, notes = menu.notebook().get_num_notes(), "notebook closed");
    Ok(())
}

fn cmd_logistics(config: &Config, output_format: OutputFormat) -> Result<()> {
    let system = open_logistics(config)?;
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout().lock());
    let mut menu = LogisticsCli::new(system, console, output_format);

    let exit = menu.run()?;
    if exit == MenuExit::EndOfInput {
        debug!("input closed before quit");
    }
    debug!(orders = menu.system().order_count(), "logistics closed");
    Ok(())
}

/// Requested changes from `config` flags
struct ConfigUpdate {
    show: bool,
    set_output: Option<OutputFormat>,
    set_fleet_size: Option<u32>,
    set_fleet_file: Option<PathBuf>,
    clear_fleet_file: bool,
    set_first_order_id: Option<u64>,
    set_first_note_id: Option<u64>,
    reset: bool,
}

/// Apply flag changes, returning whether anything changed
fn apply_update(config: &mut Config, update: &ConfigUpdate) -> bool {
    let mut modified = false;

    if let Some(output_format) = update.set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(fleet_size) = update.set_fleet_size {
        config.fleet_size = fleet_size;
        modified = true;
    }

    if let Some(ref fleet_file) = update.set_fleet_file {
        config.fleet_file = Some(fleet_file.clone());
        modified = true;
    }

    if update.clear_fleet_file {
        config.fleet_file = None;
        modified = true;
    }

    if let Some(first_order_id) = update.set_first_order_id {
        config.first_order_id = first_order_id;
        modified = true;
    }

    if let Some(first_note_id) = update.set_first_note_id {
        config.first_note_id = first_note_id;
        modified = true;
    }

    modified
}

fn cmd_config(output_format: OutputFormat, update: ConfigUpdate) -> Result<()> {
    if update.reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        print_config(&config, output_format)?;
        return Ok(());
    }

    let mut config = Config::load()?;
    let modified = apply_update(&mut config, &update);

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if update.show || !modified {
        print_config(&config, output_format)?;
    }

    Ok(())
}

fn print_config(config: &Config, output_format: OutputFormat) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(config)?;
        println!("{}", content);
    } else {
        println!("\n{}", config);
    }
    Ok(())
}
