//! The interactive menu.
//!
//! Each field is prompted for separately and validated on the spot, so the
//! operator can retry a bad value without starting over. An empty answer
//! cancels the current add. The accepted raw answers are then handed to
//! `CatalogApi::add_product`, which validates them again as a whole.

use super::print::{render_message, render_products};
use catalog::api::{CatalogApi, CmdMessage};
use catalog::error::{CatalogError, Result};
use catalog::store::Storage;
use catalog::validation::{ValidationError, Validator};
use std::io::{BufRead, Write};

const MENU_ITEMS: [&str; 3] = ["Add Product", "List Products", "Exit"];
const RETRY_HINT: &str = "Please enter again or press Enter to cancel.";

enum Choice {
    Add,
    List,
    Exit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<usize>().ok()? {
            1 => Some(Choice::Add),
            2 => Some(Choice::List),
            3 => Some(Choice::Exit),
            _ => None,
        }
    }
}

pub(super) struct Shell<'a, S: Storage, R: BufRead, W: Write> {
    api: &'a mut CatalogApi<S>,
    input: R,
    output: W,
}

impl<'a, S: Storage, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub(super) fn new(api: &'a mut CatalogApi<S>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs until the operator picks Exit or input ends.
    pub(super) fn run(&mut self) -> Result<()> {
        loop {
            self.display_menu()?;
            let Some(answer) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match Choice::parse(&answer) {
                Some(Choice::Add) => self.add_product()?,
                Some(Choice::List) => self.list_products()?,
                Some(Choice::Exit) => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                None => writeln!(self.output, "Invalid choice! Please try again.")?,
            }
        }
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nMenu:")?;
        for (index, item) in MENU_ITEMS.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, item)?;
        }
        Ok(())
    }

    /// `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // Bytes, not `read_line`: invalid UTF-8 should fail validation, not end the shell
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Re-prompts until `validate` accepts the answer. Returns the raw answer with
    /// its validated value, or `None` when the operator cancels.
    fn ask<T>(
        &mut self,
        text: &str,
        validate: impl Fn(&Validator, &str) -> std::result::Result<T, ValidationError>,
    ) -> Result<Option<(String, T)>> {
        let validator = *self.api.validator();
        loop {
            let Some(answer) = self.prompt(text)? else {
                return Ok(None);
            };
            if answer.trim().is_empty() {
                return Ok(None);
            }
            match validate(&validator, &answer) {
                Ok(value) => return Ok(Some((answer, value))),
                Err(e) => {
                    let message = CmdMessage::error(format!("{} {}", e, RETRY_HINT));
                    writeln!(self.output, "{}", render_message(&message))?;
                }
            }
        }
    }

    fn add_product(&mut self) -> Result<()> {
        let Some((raw_id, id)) = self.ask(
            "Enter product ID (or press Enter to cancel): ",
            Validator::validate_id,
        )?
        else {
            return Ok(());
        };

        if self.api.product_exists(id) {
            let message =
                CmdMessage::warning(format!("{} {}", CatalogError::DuplicateId(id), RETRY_HINT));
            writeln!(self.output, "{}", render_message(&message))?;
            return Ok(());
        }

        let Some((raw_name, _)) = self.ask(
            "Enter product name (or press Enter to cancel): ",
            Validator::validate_name,
        )?
        else {
            return Ok(());
        };
        let Some((raw_price, _)) = self.ask(
            "Enter product price (or press Enter to cancel): ",
            Validator::validate_price,
        )?
        else {
            return Ok(());
        };
        let Some((raw_quantity, _)) = self.ask(
            "Enter product quantity (or press Enter to cancel): ",
            Validator::validate_quantity,
        )?
        else {
            return Ok(());
        };

        match self
            .api
            .add_product(&raw_id, &raw_name, &raw_price, &raw_quantity)
        {
            Ok(result) => {
                for message in &result.messages {
                    writeln!(self.output, "{}", render_message(message))?;
                }
            }
            Err(e) if e.is_recoverable() => {
                writeln!(self.output, "{}", render_message(&CmdMessage::error(e.to_string())))?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn list_products(&mut self) -> Result<()> {
        let result = self.api.list_products()?;
        if !result.listed_products.is_empty() {
            writeln!(self.output, "{}", render_products(&result.listed_products))?;
        }
        for message in &result.messages {
            writeln!(self.output, "{}", render_message(message))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::store::memory::MemStorage;
    use std::io::Cursor;

    fn api() -> CatalogApi<MemStorage> {
        CatalogApi::new(MemStorage::new(), Validator::default()).unwrap()
    }

    fn run_session(api: &mut CatalogApi<MemStorage>, script: &str) -> String {
        run_bytes(api, script.as_bytes())
    }

    fn run_bytes(api: &mut CatalogApi<MemStorage>, script: &[u8]) -> String {
        colored::control::set_override(false);
        let mut output = Vec::new();
        Shell::new(api, Cursor::new(script.to_vec()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn invalid_utf8_is_rejected_not_fatal() {
        let mut api = api();
        let out = run_bytes(&mut api, b"\xff\n1\n\xfe\xfd\n7\nBolt\n0.25\n100\n3\n");
        assert!(out.contains("Invalid choice! Please try again."));
        assert!(out.contains("Product ID should be a valid integer."));
        assert!(out.contains("Goodbye!"));
        assert!(api.product_exists(7));
    }

    #[test]
    fn exit_says_goodbye() {
        let mut api = api();
        let out = run_session(&mut api, "3\n");
        assert!(out.contains("1. Add Product"));
        assert!(out.contains("3. Exit"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut api = api();
        let out = run_session(&mut api, "");
        assert!(out.contains("Enter your choice: "));
    }

    #[test]
    fn invalid_choices_are_reported() {
        let mut api = api();
        let out = run_session(&mut api, "9\nabc\n3\n");
        assert_eq!(out.matches("Invalid choice! Please try again.").count(), 2);
    }

    #[test]
    fn adds_product_with_retries() {
        let mut api = api();
        let out = run_session(&mut api, "1\nabc\n1\n   \n");
        // Blank name cancels the add
        assert!(out.contains("Product ID should be a valid integer."));
        assert!(!api.product_exists(1));

        let out = run_session(&mut api, "1\n1\nWidget\n-2\n9.99\n-1\n5\n3\n");
        assert!(out.contains("Product price must be greater than 0."));
        assert!(out.contains("Product quantity cannot be negative."));
        assert!(out.contains("Product added successfully."));
        assert_eq!(api.get_product(1).unwrap().quantity(), 5);
    }

    #[test]
    fn zero_quantity_is_added() {
        let mut api = api();
        run_session(&mut api, "1\n4\nWasher\n0.10\n0\n3\n");
        assert_eq!(api.get_product(4).unwrap().quantity(), 0);
    }

    #[test]
    fn duplicate_id_returns_to_menu() {
        let mut api = api();
        api.add_product("1", "Widget", "9.99", "5").unwrap();

        let out = run_session(&mut api, "1\n1\n3\n");
        assert!(out.contains("Duplicate product ID 1!"));
        assert!(!out.contains("Enter product name"));
        assert_eq!(api.get_product(1).unwrap().name(), "Widget");
    }

    #[test]
    fn lists_products() {
        let mut api = api();
        let out = run_session(&mut api, "2\n3\n");
        assert!(out.contains("No products available."));

        api.add_product("1", "Widget", "9.99", "5").unwrap();
        let out = run_session(&mut api, "2\n3\n");
        assert!(out.contains("ID: 1 | Name: Widget | Price: $9.99 | Quantity: 5"));
    }
}
