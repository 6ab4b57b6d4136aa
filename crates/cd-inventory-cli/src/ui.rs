//! Terminal prompts and inventory rendering.

use std::io::{self, Write};

use cd_inventory::prelude::{
    CdInventoryResult, Inventory, MaxStrlenValidator, ReservedCharsValidator, Validate,
};

/// Maximum accepted length in bytes for title and artist input.
const MAX_FIELD_LEN: usize = 512;

/// One menu operation selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Add,
    Display,
    Delete,
    Save,
    Exit,
}

impl MenuChoice {
    fn from_input(input: &str) -> Option<Self> {
        match input {
            "l" => Some(Self::Load),
            "a" => Some(Self::Add),
            "i" => Some(Self::Display),
            "d" => Some(Self::Delete),
            "s" => Some(Self::Save),
            "x" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Displays the menu of operations.
pub fn print_menu() {
    println!();
    println!("Menu");
    println!();
    println!("[l] Load Inventory from File");
    println!("[a] Add CD");
    println!("[i] Display Current Inventory");
    println!("[d] Delete CD from Inventory");
    println!("[s] Save Inventory to File");
    println!("[x] Exit");
    println!();
}

/// Reads menu choices until the user enters a valid one.
pub fn menu_choice() -> io::Result<MenuChoice> {
    loop {
        let input = prompt("Which operation would you like to perform? [l, a, i, d, s or x]: ")?;
        if let Some(choice) = MenuChoice::from_input(&input.to_lowercase()) {
            return Ok(choice);
        }
    }
}

/// Renders the inventory as a table, one record per row.
pub fn show_inventory(inventory: &Inventory) {
    println!();
    println!("======= The Current Inventory: =======");
    println!("ID\tCD Title (by: Artist)");
    println!();
    for record in inventory {
        println!("{}\t{} (by: {})", record.id, record.title, record.artist);
    }
    println!("======================================");
    println!();
}

/// Asks for title and artist of a new entry, re-prompting until both fields
/// pass validation.
pub fn ask_new_entry() -> io::Result<(String, String)> {
    let title = ask_field("What is the CD's title? ")?;
    let artist = ask_field("What is the artist's name? ")?;
    Ok((title, artist))
}

/// Asks which record to delete; `None` when the input is not an integer.
pub fn ask_id_to_delete() -> io::Result<Option<String>> {
    let input = prompt("Which ID would you like to delete? ")?;
    Ok(normalize_id(&input))
}

/// Asks a yes/no question; only `y`/`Y` counts as a yes.
pub fn confirm(question: &str) -> io::Result<bool> {
    let answer = prompt(question)?;
    Ok(answer.eq_ignore_ascii_case("y"))
}

fn ask_field(question: &str) -> io::Result<String> {
    loop {
        let value = prompt(question)?;
        if value.is_empty() {
            println!("A value is required.");
            continue;
        }
        if let Err(err) = validate_field(&value) {
            println!("{err}");
            continue;
        }
        return Ok(value);
    }
}

fn validate_field(value: &str) -> CdInventoryResult<()> {
    ReservedCharsValidator.validate(value)?;
    MaxStrlenValidator(MAX_FIELD_LEN).validate(value)
}

/// Normalizes user input to the canonical text form of an integer
/// identifier, so `"02"` matches a stored `"2"`.
fn normalize_id(input: &str) -> Option<String> {
    input.trim().parse::<i64>().ok().map(|id| id.to_string())
}

fn prompt(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_should_parse_menu_choices() {
        assert_eq!(MenuChoice::from_input("l"), Some(MenuChoice::Load));
        assert_eq!(MenuChoice::from_input("a"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::from_input("i"), Some(MenuChoice::Display));
        assert_eq!(MenuChoice::from_input("d"), Some(MenuChoice::Delete));
        assert_eq!(MenuChoice::from_input("s"), Some(MenuChoice::Save));
        assert_eq!(MenuChoice::from_input("x"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("q"), None);
    }

    #[test]
    fn test_should_normalize_integer_ids() {
        assert_eq!(normalize_id("2"), Some("2".to_string()));
        assert_eq!(normalize_id("02"), Some("2".to_string()));
        assert_eq!(normalize_id(" 7 "), Some("7".to_string()));
        assert_eq!(normalize_id("two"), None);
        assert_eq!(normalize_id(""), None);
    }

    #[test]
    fn test_should_validate_fields() {
        assert!(validate_field("Abbey Road").is_ok());
        assert!(validate_field("Crosby, Stills & Nash").is_err());
        assert!(validate_field(&"x".repeat(MAX_FIELD_LEN + 1)).is_err());
    }
}
