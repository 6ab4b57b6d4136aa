//! Interactive terminal front-end for the CD inventory.
//!
//! Thin presentation glue: reads user intent from stdin, calls into the
//! `cd-inventory` table operations, and loads/saves the backing store on
//! demand. All data semantics live in the library.

mod config;
mod logger;
mod ui;

use anyhow::Context;
use cd_inventory::prelude::{CdRecord, Store};
use log::{error, info};

use crate::config::Config;
use crate::ui::MenuChoice;

fn main() -> anyhow::Result<()> {
    logger::init().context("failed to install logger")?;
    let config = Config::from_args();
    let store = Store::new(&config.store_path);

    store
        .ensure_exists()
        .context("failed to initialise the inventory store")?;
    let mut inventory = store
        .load()
        .context("failed to load the inventory store")?;
    info!(
        "Loaded {} records from {}",
        inventory.len(),
        store.path().display()
    );

    loop {
        ui::print_menu();
        match ui::menu_choice()? {
            MenuChoice::Exit => break,
            MenuChoice::Load => {
                println!("WARNING: reloading discards all unsaved changes.");
                if ui::confirm("Reload the inventory from file? [y/n] ")? {
                    match store.load() {
                        Ok(reloaded) => {
                            inventory = reloaded;
                            ui::show_inventory(&inventory);
                        }
                        Err(err) => error!("Failed to reload the inventory: {err}"),
                    }
                } else {
                    println!("The inventory was NOT reloaded.");
                }
            }
            MenuChoice::Add => {
                // generating the identifier up front keeps it unique without
                // ever asking the user for one
                let id = inventory.next_id()?;
                let (title, artist) = ui::ask_new_entry()?;
                inventory.append(CdRecord::new(id.to_string(), title, artist));
                ui::show_inventory(&inventory);
            }
            MenuChoice::Display => ui::show_inventory(&inventory),
            MenuChoice::Delete => {
                ui::show_inventory(&inventory);
                match ui::ask_id_to_delete()? {
                    Some(id) => {
                        match inventory.delete(&id) {
                            Some(_) => println!("Deleted ID #{id}"),
                            None => println!("No record with ID #{id}"),
                        }
                        ui::show_inventory(&inventory);
                    }
                    None => println!("Please enter an integer for the ID."),
                }
            }
            MenuChoice::Save => {
                ui::show_inventory(&inventory);
                if ui::confirm("Save this inventory to file? [y/n] ")? {
                    match store.save(&inventory) {
                        Ok(()) => info!(
                            "Saved {} records to {}",
                            inventory.len(),
                            store.path().display()
                        ),
                        Err(err) => error!("Failed to save the inventory: {err}"),
                    }
                } else {
                    println!("The inventory was NOT saved to file.");
                }
            }
        }
    }

    Ok(())
}
