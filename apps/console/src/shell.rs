//! # Interactive Shell
//!
//! The event source: maps terminal input to intents and dispatches them to
//! the handlers. Parsing a command line is a pure function; only the prompt
//! plumbing touches the terminal.
//!
//! ## Commands
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add              prompt for name/quantity/category, then submit        │
//! │  edit <row>       seed the form from a row, prompt, then submit         │
//! │  toggle <row>     flip a row between "To buy" and "Purchased"           │
//! │  delete <row>     confirm, then delete a row                            │
//! │  filter <cat|all> narrow the view to one category                       │
//! │  search [text]    narrow the view by name (empty text clears)           │
//! │  reset            clear the form back to new-product mode               │
//! │  list             redraw the current view                               │
//! │  reload           refetch the whole collection from the remote          │
//! │  help / quit                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Row numbers refer to the currently rendered (filtered) view and resolve
//! to product ids before dispatch, so the handlers never see row numbers.

use basket_core::{Category, CategoryFilter, FormValues, ProductId};
use basket_sync::RemoteStore;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use thiserror::Error;

use crate::commands::App;
use crate::render::RenderSink;

// =============================================================================
// Intents
// =============================================================================

/// A parsed user action, ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    List,
    Reload,
    Add,
    Edit(usize),
    Toggle(usize),
    Delete(usize),
    Filter(CategoryFilter),
    Search(String),
    Reset,
    Help,
    Quit,
}

/// A command line the shell could not make sense of.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{0}' expects a row number")]
    ExpectedRow(&'static str),

    #[error("unknown category '{0}' (try one of: all, fruits_veg, bakery, dairy, meat, drinks, other)")]
    UnknownCategory(String),
}

/// Parses one command line into an intent.
///
/// An empty line redraws the list, which doubles as a cheap refresh of the
/// row numbers after a resize.
pub fn parse_intent(line: &str) -> Result<Intent, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Ok(Intent::List);
    };
    let rest: Vec<&str> = parts.collect();

    match command {
        "list" | "ls" => Ok(Intent::List),
        "reload" => Ok(Intent::Reload),
        "add" | "a" => Ok(Intent::Add),
        "edit" | "e" => row_number("edit", &rest).map(Intent::Edit),
        "toggle" | "t" => row_number("toggle", &rest).map(Intent::Toggle),
        "delete" | "del" | "rm" => row_number("delete", &rest).map(Intent::Delete),
        "filter" | "f" => {
            let key = rest.first().copied().unwrap_or("all");
            if key == "all" {
                Ok(Intent::Filter(CategoryFilter::All))
            } else {
                Category::from_key(key)
                    .map(|category| Intent::Filter(CategoryFilter::Only(category)))
                    .ok_or_else(|| ParseError::UnknownCategory(key.to_string()))
            }
        }
        "search" | "s" => Ok(Intent::Search(rest.join(" "))),
        "reset" => Ok(Intent::Reset),
        "help" | "?" => Ok(Intent::Help),
        "quit" | "q" | "exit" => Ok(Intent::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn row_number(command: &'static str, rest: &[&str]) -> Result<usize, ParseError> {
    rest.first()
        .and_then(|raw| raw.parse::<usize>().ok())
        .filter(|n| *n >= 1)
        .ok_or(ParseError::ExpectedRow(command))
}

// =============================================================================
// Shell Loop
// =============================================================================

/// Runs the interactive loop until the user quits.
pub async fn run<R: RemoteStore, S: RenderSink>(app: &mut App<R, S>) -> dialoguer::Result<()> {
    let theme = ColorfulTheme::default();
    print_help();

    loop {
        let line: String = Input::with_theme(&theme)
            .with_prompt("basket")
            .allow_empty(true)
            .interact_text()?;

        let intent = match parse_intent(&line) {
            Ok(intent) => intent,
            Err(err) => {
                println!("{}", style(err).yellow());
                continue;
            }
        };

        match intent {
            Intent::Quit => break,
            Intent::Help => print_help(),
            Intent::List => app.render(),
            Intent::Reload => app.on_load().await,
            Intent::Add => {
                let seed = app.form().values().clone();
                let values = prompt_form(&theme, &seed)?;
                app.on_submit(values).await;
            }
            Intent::Edit(row) => match row_id(app, row) {
                Some(id) => {
                    if let Some(seed) = app.on_edit(id) {
                        let values = prompt_form(&theme, &seed)?;
                        app.on_submit(values).await;
                    }
                }
                None => no_such_row(row),
            },
            Intent::Toggle(row) => match row_id(app, row) {
                Some(id) => app.on_toggle(id).await,
                None => no_such_row(row),
            },
            Intent::Delete(row) => match row_target(app, row) {
                Some((id, name)) => {
                    let confirmed = Confirm::with_theme(&theme)
                        .with_prompt(format!("Delete \"{name}\" from your list?"))
                        .default(false)
                        .interact()?;
                    if confirmed {
                        app.on_delete(id).await;
                    }
                }
                None => no_such_row(row),
            },
            Intent::Filter(filter) => app.on_filter_change(filter),
            Intent::Search(text) => app.on_search_change(text),
            Intent::Reset => app.on_reset(),
        }
    }

    Ok(())
}

/// Resolves a 1-based row number in the current view to a product id.
fn row_id<R: RemoteStore, S: RenderSink>(app: &App<R, S>, row: usize) -> Option<ProductId> {
    app.view().rows.get(row.checked_sub(1)?).map(|r| r.id)
}

/// Like [`row_id`], but also yields the name for the confirmation prompt.
fn row_target<R: RemoteStore, S: RenderSink>(
    app: &App<R, S>,
    row: usize,
) -> Option<(ProductId, String)> {
    let view = app.view();
    let target = view.rows.get(row.checked_sub(1)?)?;
    Some((target.id, target.name.clone()))
}

fn no_such_row(row: usize) {
    println!("{}", style(format!("no row {row} in the current view")).yellow());
}

fn print_help() {
    println!(
        "  {}",
        style("add · edit <row> · toggle <row> · delete <row> · filter <category|all> · search [text] · reset · list · reload · quit").dim()
    );
}

/// Prompts for the three form fields, seeded from the current form state.
///
/// The category prompt is a fixed selector; it can only produce the known
/// keys, never a raw free-text value.
fn prompt_form(theme: &ColorfulTheme, seed: &FormValues) -> dialoguer::Result<FormValues> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Name")
        .with_initial_text(seed.name.clone())
        .allow_empty(true)
        .interact_text()?;

    let quantity: String = Input::with_theme(theme)
        .with_prompt("Quantity")
        .with_initial_text(seed.quantity.clone())
        .allow_empty(true)
        .interact_text()?;

    let labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
    let seeded_index = Category::from_key(&seed.category)
        .and_then(|seeded| Category::ALL.iter().position(|c| *c == seeded))
        .unwrap_or(Category::ALL.len() - 1);
    let selected = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(seeded_index)
        .interact()?;

    Ok(FormValues {
        name,
        quantity,
        category: Category::ALL[selected].key().to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands_parse() {
        assert_eq!(parse_intent("list"), Ok(Intent::List));
        assert_eq!(parse_intent(""), Ok(Intent::List));
        assert_eq!(parse_intent("add"), Ok(Intent::Add));
        assert_eq!(parse_intent("reset"), Ok(Intent::Reset));
        assert_eq!(parse_intent("quit"), Ok(Intent::Quit));
        assert_eq!(parse_intent("  help  "), Ok(Intent::Help));
    }

    #[test]
    fn test_row_commands_need_a_valid_row() {
        assert_eq!(parse_intent("toggle 3"), Ok(Intent::Toggle(3)));
        assert_eq!(parse_intent("edit 1"), Ok(Intent::Edit(1)));
        assert_eq!(parse_intent("delete 2"), Ok(Intent::Delete(2)));
        assert_eq!(parse_intent("rm 2"), Ok(Intent::Delete(2)));

        assert_eq!(parse_intent("toggle"), Err(ParseError::ExpectedRow("toggle")));
        assert_eq!(parse_intent("toggle x"), Err(ParseError::ExpectedRow("toggle")));
        assert_eq!(parse_intent("toggle 0"), Err(ParseError::ExpectedRow("toggle")));
    }

    #[test]
    fn test_filter_parses_the_selector_set() {
        assert_eq!(parse_intent("filter"), Ok(Intent::Filter(CategoryFilter::All)));
        assert_eq!(parse_intent("filter all"), Ok(Intent::Filter(CategoryFilter::All)));
        assert_eq!(
            parse_intent("filter dairy"),
            Ok(Intent::Filter(CategoryFilter::Only(Category::Dairy)))
        );
        assert_eq!(
            parse_intent("filter frozen"),
            Err(ParseError::UnknownCategory("frozen".into()))
        );
    }

    #[test]
    fn test_search_takes_the_rest_of_the_line() {
        assert_eq!(
            parse_intent("search almond milk"),
            Ok(Intent::Search("almond milk".into()))
        );
        // Bare `search` clears the query.
        assert_eq!(parse_intent("search"), Ok(Intent::Search(String::new())));
    }

    #[test]
    fn test_unknown_commands_are_rejected() {
        assert_eq!(
            parse_intent("frobnicate"),
            Err(ParseError::UnknownCommand("frobnicate".into()))
        );
    }
}
