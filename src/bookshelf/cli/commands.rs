use super::render::{render_banners, render_table};
use super::setup::{Cli, Commands, OutputFormat};
use super::shell;
use bookshelf::commands::config::{self, ConfigAction, ConfigReport};
use bookshelf::error::{Result, ShelfError};
use bookshelf::init::{initialize, resolve_data_dir, FsCatalog, DATA_DIR_ENV};
use bookshelf::logging;
use bookshelf::view::{ClickTarget, Form};
use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let env_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
    let data_dir = resolve_data_dir(env_dir, cli.data_dir.as_deref())?;

    // Config never opens the catalog, so a rejected slot can still be changed.
    if let Some(Commands::Config { key, value }) = cli.command {
        return handle_config(&data_dir, key, value);
    }

    let mut api = initialize(&data_dir)?;
    match cli.command {
        Some(Commands::Add {
            title,
            author,
            isbn,
        }) => handle_add(&mut api, Form::new(title, author, isbn)),
        Some(Commands::List { output }) => handle_list(&mut api, output),
        Some(Commands::Remove { rows }) => handle_remove(&mut api, rows),
        Some(Commands::Shell) => handle_shell(&mut api),
        Some(Commands::Config { .. }) | None => handle_list(&mut api, OutputFormat::Table),
    }
}

fn handle_add(api: &mut FsCatalog, form: Form) -> Result<()> {
    let now = Utc::now();
    api.load(now)?;
    api.submit(form, now)?;
    print_view(api);
    Ok(())
}

fn handle_list(api: &mut FsCatalog, output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Table => {
            api.load(Utc::now())?;
            print_view(api);
        }
        OutputFormat::Json => {
            let books = api.books()?;
            let json = serde_json::to_string_pretty(&books).map_err(ShelfError::Serialization)?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn handle_remove(api: &mut FsCatalog, rows: Vec<usize>) -> Result<()> {
    let now = Utc::now();
    api.load(now)?;

    let shown = api.view().rows().len();
    let mut rows = rows;
    if let Some(bad) = rows.iter().find(|&&r| r == 0 || r > shown) {
        return Err(ShelfError::Api(format!("Row {} not found", bad)));
    }

    // Highest first, so earlier removals don't shift the rows still to go.
    rows.sort_unstable_by(|a, b| b.cmp(a));
    rows.dedup();
    for row in rows {
        api.click(ClickTarget::DeleteControl { row: row - 1 }, now)?;
    }

    print_view(api);
    Ok(())
}

fn handle_shell(api: &mut FsCatalog) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell::run(api, stdin.lock(), &mut stdout, Utc::now)?;
    stdout.flush()?;
    Ok(())
}

fn handle_config(data_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    print_config(&config::run(data_dir, action)?);
    Ok(())
}

fn print_view(api: &FsCatalog) {
    print!("{}", render_banners(api.view().banners()));
    print!("{}", render_table(api.view().rows()));
}

fn print_config(report: &ConfigReport) {
    match &report.updated {
        Some(message) => println!("{}", message.green()),
        None => {
            for (key, value) in &report.entries {
                println!("{} = {}", key, value);
            }
        }
    }
}
