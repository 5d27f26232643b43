//! Item actions: create, list, read, update, delete
//!
//! Every handler returns `Flow::Exit` when input ends mid-prompt.

use crate::menu::{prompt, prompt_id, Flow, IdInput};
use itemdb_core::model::ItemId;
use itemdb_store::ItemStore;
use std::io::{BufRead, Write};

pub type ActionResult = Result<Flow, Box<dyn std::error::Error>>;

const NOT_FOUND: &str = "Item not found.";

/// Prompt for an id; `Err(flow)` short-circuits the handler
fn read_id<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Result<ItemId, Flow>, std::io::Error> {
    Ok(match prompt_id(input, out, text)? {
        IdInput::Id(id) => Ok(id),
        IdInput::Invalid => Err(Flow::Continue),
        IdInput::Eof => Err(Flow::Exit),
    })
}

/// Create: prompt for name and description, print the new id
///
/// The description is stored exactly as typed, including empty text.
pub fn create<R: BufRead, W: Write>(
    store: &ItemStore,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let Some(name) = prompt(input, out, "Enter item name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(description) = prompt(input, out, "Enter item description: ")? else {
        return Ok(Flow::Exit);
    };

    let id = store.create(&name, Some(&description))?;
    writeln!(out, "Item created successfully with ID: {}", id)?;
    Ok(Flow::Continue)
}

/// List: print every item or a "no items" message
pub fn list<W: Write>(store: &ItemStore, out: &mut W) -> ActionResult {
    let items = store.read_all()?;
    if items.is_empty() {
        writeln!(out, "No items found.")?;
        return Ok(Flow::Continue);
    }

    writeln!(out, "\nAll Items:")?;
    for item in &items {
        writeln!(out, "{}", item)?;
    }
    Ok(Flow::Continue)
}

/// Read: prompt for an id and print that item
pub fn read<R: BufRead, W: Write>(
    store: &ItemStore,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let id = match read_id(input, out, "Enter item ID: ")? {
        Ok(id) => id,
        Err(flow) => return Ok(flow),
    };

    match store.read_one(id)? {
        Some(item) => {
            writeln!(out, "\nItem found:")?;
            writeln!(out, "{}", item)?;
        }
        None => writeln!(out, "{}", NOT_FOUND)?,
    }
    Ok(Flow::Continue)
}

/// Update: prompt for an id and both new fields
pub fn update<R: BufRead, W: Write>(
    store: &ItemStore,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let id = match read_id(input, out, "Enter item ID to update: ")? {
        Ok(id) => id,
        Err(flow) => return Ok(flow),
    };
    let Some(name) = prompt(input, out, "Enter new name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(description) = prompt(input, out, "Enter new description: ")? else {
        return Ok(Flow::Exit);
    };

    if store.update(id, &name, Some(&description))? {
        writeln!(out, "Item updated successfully.")?;
    } else {
        writeln!(out, "{}", NOT_FOUND)?;
    }
    Ok(Flow::Continue)
}

/// Delete: prompt for an id and remove that item
pub fn delete<R: BufRead, W: Write>(
    store: &ItemStore,
    input: &mut R,
    out: &mut W,
) -> ActionResult {
    let id = match read_id(input, out, "Enter item ID to delete: ")? {
        Ok(id) => id,
        Err(flow) => return Ok(flow),
    };

    if store.delete(id)? {
        writeln!(out, "Item deleted successfully.")?;
    } else {
        writeln!(out, "{}", NOT_FOUND)?;
    }
    Ok(Flow::Continue)
}
