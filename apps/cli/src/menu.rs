//! # Store Menu
//!
//! The interactive text loop. It is the only place where core errors are
//! caught and turned into messages for the user.
//!
//! ## Screen Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │     Store Menu                                                          │
//! │     ----------                                                          │
//! │  1. List all products in store ──► numbered active products             │
//! │  2. Show total amount in store ──► "Total of 850 items in store"        │
//! │  3. Make an order ───────────────► pick # and amount until blank line,  │
//! │                                     then Store::order                   │
//! │  4. Quit ────────────────────────► "Goodbye!"                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product numbers are positions in the active listing printed at the start
//! of the order, so a sold-out product shifts the numbering of the rest.

use std::io::{BufRead, Write};

use stockroom_core::{OrderLine, ProductId, Store};
use tracing::{debug, info, warn};

use crate::error::CliError;

/// Outcome of one round of order item entry.
enum Entry {
    /// Blank line or end of input.
    Done,
    /// Bad input, already reported.
    Retry,
    Line(OrderLine),
}

/// Menu loop over any line-oriented input and any output.
///
/// The store is borrowed for the lifetime of the menu; nothing else touches
/// it while the loop runs.
pub struct Menu<'a, R, W> {
    store: &'a mut Store,
    store_name: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut Store, store_name: impl Into<String>, input: R, output: W) -> Self {
        Menu {
            store,
            store_name: store_name.into(),
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Please choose a number: ")? else {
                writeln!(self.output, "Goodbye!")?;
                return Ok(());
            };
            debug!(choice = %choice, "Menu choice");

            match choice.as_str() {
                "1" => {
                    self.print_active_products()?;
                }
                "2" => {
                    let total = self.store.total_quantity();
                    writeln!(self.output, "Total of {} items in store", total)?;
                }
                "3" => self.make_order()?,
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Error with your choice! Try again!")?,
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), CliError> {
        let title = format!("{} Menu", self.store_name);
        writeln!(self.output)?;
        writeln!(self.output, "   {}", title)?;
        writeln!(self.output, "   {}", "-".repeat(title.chars().count()))?;
        writeln!(self.output, "1. List all products in store")?;
        writeln!(self.output, "2. Show total amount in store")?;
        writeln!(self.output, "3. Make an order")?;
        writeln!(self.output, "4. Quit")?;
        Ok(())
    }

    /// Prints the numbered active listing and returns the ids in that order.
    fn print_active_products(&mut self) -> Result<Vec<ProductId>, CliError> {
        let products = self.store.active_products();

        writeln!(self.output, "------")?;
        for (idx, product) in products.iter().enumerate() {
            writeln!(self.output, "{}. {}", idx + 1, product)?;
        }
        writeln!(self.output, "------")?;

        Ok(products.iter().map(|p| p.id()).collect())
    }

    fn make_order(&mut self) -> Result<(), CliError> {
        let listed = self.print_active_products()?;
        let mut lines = Vec::new();

        loop {
            match self.read_entry(&listed)? {
                Entry::Done => break,
                Entry::Retry => {}
                Entry::Line(line) => {
                    debug!(product_id = %line.product_id, quantity = line.quantity, "Line added");
                    lines.push(line);
                    writeln!(self.output, "Product added to list!")?;
                }
            }
        }

        if lines.is_empty() {
            return Ok(());
        }

        match self.store.order(&lines) {
            Ok(total) => {
                info!(lines = lines.len(), total = %total, "Order placed");
                writeln!(self.output, "********")?;
                writeln!(self.output, "Order made! Total payment: {}", total)?;
            }
            Err(e) => {
                warn!(error = %e, "Order rejected");
                writeln!(self.output, "Error making order: {}", e)?;
            }
        }
        Ok(())
    }

    /// Reads one product/amount pair. Bad input is reported here.
    fn read_entry(&mut self, listed: &[ProductId]) -> Result<Entry, CliError> {
        let Some(product_input) = self.prompt("Which product # do you want? ")? else {
            return Ok(Entry::Done);
        };
        if product_input.is_empty() {
            return Ok(Entry::Done);
        }

        let Ok(number) = product_input.parse::<i64>() else {
            writeln!(self.output, "Invalid input. Try again!")?;
            return Ok(Entry::Retry);
        };
        let Some(&product_id) = usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| listed.get(idx))
        else {
            writeln!(self.output, "Invalid product number. Try again!")?;
            return Ok(Entry::Retry);
        };

        let Some(quantity_input) = self.prompt("What amount do you want? ")? else {
            return Ok(Entry::Done);
        };
        if quantity_input.is_empty() || !quantity_input.chars().all(|c| c.is_ascii_digit()) {
            writeln!(self.output, "Quantity must be a positive number.")?;
            return Ok(Entry::Retry);
        }
        // All digits, so the only parse failure is a number past i64::MAX.
        // Clamp it and let the stock check report it.
        let quantity = quantity_input.parse::<i64>().unwrap_or(i64::MAX);
        if quantity <= 0 {
            writeln!(self.output, "Quantity must be greater than zero.")?;
            return Ok(Entry::Retry);
        }

        Ok(Entry::Line(OrderLine::new(product_id, quantity)))
    }

    /// Writes `text`, then reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::demo_inventory;

    fn run_menu(store: &mut Store, input: &str) -> String {
        let mut output = Vec::new();
        Menu::new(store, "Store", input.as_bytes(), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn quantities(store: &Store) -> Vec<i64> {
        store.active_products().iter().map(|p| p.quantity()).collect()
    }

    #[test]
    fn test_menu_header() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "4\n");
        assert!(out.contains("   Store Menu\n   ----------\n1. List all products in store\n"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_list_products() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "1\n4\n");
        assert!(out.contains(
            "------\n\
             1. MacBook Air M2, Price: $1450, Quantity: 100\n\
             2. Bose QuietComfort Earbuds, Price: $250, Quantity: 500\n\
             3. Google Pixel 7, Price: $500, Quantity: 250\n\
             ------\n"
        ));
    }

    #[test]
    fn test_show_total() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "2\n4\n");
        assert!(out.contains("Total of 850 items in store"));
    }

    #[test]
    fn test_make_order() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "3\n1\n2\n2\n3\n\n2\n4\n");

        assert_eq!(out.matches("Product added to list!").count(), 2);
        assert!(out.contains("********\nOrder made! Total payment: $3650\n"));
        assert!(out.contains("Total of 845 items in store"));
        assert_eq!(quantities(&store), vec![98, 497, 250]);
    }

    #[test]
    fn test_failed_order_is_reported_and_loop_continues() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "3\n1\n60\n1\n41\n\n2\n4\n");

        assert!(out.contains(
            "Error making order: Not enough stock for 'MacBook Air M2': available 100, requested 101"
        ));
        assert!(out.contains("Total of 850 items in store"));
        assert!(out.ends_with("Goodbye!\n"));
        assert_eq!(quantities(&store), vec![100, 500, 250]);
    }

    #[test]
    fn test_bad_entries_reprompt() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "3\nabc\n9\n0\n-1\n1\nx\n1\n0\n3\n1\n\n4\n");

        assert_eq!(out.matches("Invalid input. Try again!").count(), 1);
        assert_eq!(out.matches("Invalid product number. Try again!").count(), 3);
        assert!(out.contains("Quantity must be a positive number."));
        assert!(out.contains("Quantity must be greater than zero."));
        assert!(out.contains("Order made! Total payment: $500"));
        assert_eq!(quantities(&store), vec![100, 500, 249]);
    }

    #[test]
    fn test_oversized_quantity_is_reported_as_stock_error() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "3\n1\n99999999999999999999\n\n4\n");

        assert!(!out.contains("Invalid input. Try again!"));
        assert!(out.contains(
            "Error making order: Not enough stock for 'MacBook Air M2': available 100, requested 9223372036854775807"
        ));
        assert_eq!(quantities(&store), vec![100, 500, 250]);
    }

    #[test]
    fn test_empty_order_does_nothing() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "3\n\n4\n");
        assert!(!out.contains("Order made!"));
        assert!(!out.contains("Error making order"));
        assert_eq!(store.total_quantity(), 850);
    }

    #[test]
    fn test_sold_out_product_shifts_numbering() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "3\n1\n100\n\n1\n4\n");

        assert!(out.contains("Order made! Total payment: $145000"));
        assert!(out.contains(
            "------\n\
             1. Bose QuietComfort Earbuds, Price: $250, Quantity: 500\n\
             2. Google Pixel 7, Price: $500, Quantity: 250\n\
             ------\n"
        ));
    }

    #[test]
    fn test_invalid_choice() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "7\n\n4\n");
        assert_eq!(out.matches("Error with your choice! Try again!").count(), 2);
    }

    #[test]
    fn test_end_of_input_quits() {
        let mut store = demo_inventory().unwrap();
        let out = run_menu(&mut store, "");
        assert!(out.ends_with("Please choose a number: Goodbye!\n"));

        // EOF in the middle of item entry still places the pending order
        let out = run_menu(&mut store, "3\n3\n5");
        assert!(out.contains("Order made! Total payment: $2500"));
    }

    #[test]
    fn test_custom_store_name() {
        let mut store = Store::default();
        let mut output = Vec::new();
        Menu::new(&mut store, "Best Buy", "2\n4\n".as_bytes(), &mut output)
            .run()
            .unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("   Best Buy Menu\n   -------------\n"));
        assert!(out.contains("Total of 0 items in store"));
    }
}
