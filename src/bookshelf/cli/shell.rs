//! Interactive session: the form is read field by field, the table and live
//! banners are redrawn after every action, and expired banners are dropped.

use super::render::{prompt_for, render_banners, render_table, style_message};
use bookshelf::api::CatalogApi;
use bookshelf::error::{Result, ShelfError};
use bookshelf::model::Field;
use bookshelf::store::DataStore;
use bookshelf::view::{ClickTarget, Form, Severity};
use chrono::{DateTime, Utc};
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  a, add        fill in the form and submit it
  d, delete N   click the delete control of row N
  l, list       redraw the catalog
  h, help       show this help
  q, quit       leave
";

pub fn run<S, R, W, C>(api: &mut CatalogApi<S>, input: R, out: &mut W, clock: C) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
    C: Fn() -> DateTime<Utc>,
{
    report(out, api.load(clock()))?;
    draw(api, out)?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let mut words = line.split_whitespace();

        match words.next() {
            None | Some("l" | "list") => {}
            Some("q" | "quit" | "exit") => break,
            Some("h" | "help") => write!(out, "{}", HELP)?,
            Some("a" | "add") => {
                let mut form = Form::default();
                for field in Field::ALL {
                    write!(out, "{}", prompt_for(field))?;
                    out.flush()?;
                    match lines.next() {
                        Some(value) => form.set(field, value?),
                        None => return Ok(()),
                    }
                }
                report(out, api.submit(form, clock()))?;
            }
            Some("d" | "delete" | "rm") => match words.next().map(str::parse::<usize>) {
                Some(Ok(n)) if n >= 1 => {
                    let target = ClickTarget::DeleteControl { row: n - 1 };
                    if let Some(None) = report(out, api.click(target, clock()))? {
                        warn(out, &format!("No row {}", n))?;
                    }
                }
                _ => warn(out, "Usage: delete <row number>")?,
            },
            Some(other) => warn(out, &format!("Unknown command: {} (try 'help')", other))?,
        }

        api.tick(clock());
        draw(api, out)?;
    }

    Ok(())
}

fn draw<S: DataStore, W: Write>(api: &CatalogApi<S>, out: &mut W) -> Result<()> {
    write!(out, "{}", render_banners(api.view().banners()))?;
    write!(out, "{}", render_table(api.view().rows()))?;
    Ok(())
}

fn warn<W: Write>(out: &mut W, message: &str) -> Result<()> {
    writeln!(out, "{}", style_message(message, Severity::Danger))?;
    Ok(())
}

/// Show a failed action without ending the session. A corrupt slot already
/// has its banner, other failures get a line of their own.
fn report<T, W: Write>(out: &mut W, result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(ShelfError::CorruptStore { .. }) => Ok(None),
        Err(e) => {
            warn(out, &format!("Error: {}", e))?;
            Ok(None)
        }
    }
}
