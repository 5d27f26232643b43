//! Interactive menu loop
//!
//! Reads a choice, dispatches to a handler in `commands::items`, repeats
//! until the user exits or input ends.

use crate::commands::items;
use itemdb_core::model::ItemId;
use itemdb_store::ItemStore;
use std::io::{self, BufRead, Write};

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Read,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Parse the user's menu selection
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::Create),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Read),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Outcome of prompting for an item id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdInput {
    Id(ItemId),
    Invalid,
    Eof,
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== CRUD Application Menu ===")?;
    writeln!(out, "1. Create new item")?;
    writeln!(out, "2. Read all items")?;
    writeln!(out, "3. Read specific item")?;
    writeln!(out, "4. Update item")?;
    writeln!(out, "5. Delete item")?;
    writeln!(out, "6. Exit")?;
    writeln!(out, "===========================")
}

/// Print `text` and read one line, without its line terminator
///
/// Returns `None` at end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Prompt for an item id, reporting non-numeric input to the user
pub fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<IdInput> {
    let Some(raw) = prompt(input, out, text)? else {
        return Ok(IdInput::Eof);
    };

    match raw.trim().parse::<ItemId>() {
        Ok(id) => Ok(IdInput::Id(id)),
        Err(_) => {
            tracing::debug!(input = %raw, "rejected non-numeric item id");
            writeln!(out, "Invalid ID. Please enter a number.")?;
            Ok(IdInput::Invalid)
        }
    }
}

/// Run the menu until the user exits or input ends
///
/// Storage failures abort the loop and are returned to the caller.
pub fn run<R: BufRead, W: Write>(
    store: &ItemStore,
    mut input: R,
    mut out: W,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        print_menu(&mut out)?;

        let Some(raw) = prompt(&mut input, &mut out, "Enter your choice (1-6): ")? else {
            writeln!(out)?;
            break;
        };

        let flow = match MenuChoice::parse(&raw) {
            Some(MenuChoice::Create) => items::create(store, &mut input, &mut out)?,
            Some(MenuChoice::List) => items::list(store, &mut out)?,
            Some(MenuChoice::Read) => items::read(store, &mut input, &mut out)?,
            Some(MenuChoice::Update) => items::update(store, &mut input, &mut out)?,
            Some(MenuChoice::Delete) => items::delete(store, &mut input, &mut out)?,
            Some(MenuChoice::Exit) => Flow::Exit,
            None => {
                writeln!(out, "Invalid choice. Please try again.")?;
                Flow::Continue
            }
        };

        if flow == Flow::Exit {
            break;
        }
    }

    writeln!(out, "Goodbye!")?;
    out.flush()?;
    Ok(())
}
