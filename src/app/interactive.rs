use std::io::{self, BufRead, Write};

use crate::core::{PriceCatalog, Tally};
use crate::utils::error::Result;

const COMMAND_EXIT: i64 = -1;
const COMMAND_EMPTY_LIST: i64 = 0;

const DEMO_BARCODES: &str = "7290004127336, 7290000144474, 7290000311203, 7290004131074";

/// Keyboard front end: barcodes are typed instead of photographed, so lookup
/// skips the decoder entirely. `0` empties the list, `-1` (or end of input)
/// prints the final list and exits.
pub fn run(catalog: &PriceCatalog) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut tally = Tally::new();

    println!("DEMO: here are some barcodes to test with: {DEMO_BARCODES}\n");
    println!("Type  0 to empty the list");
    println!("Type -1 to exit");

    loop {
        print!("Scan an item to continue\t");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        let barcode: i64 = match input.parse() {
            Ok(value) => value,
            Err(_) => {
                println!("Not an integer:{input}");
                continue;
            }
        };

        match barcode {
            COMMAND_EMPTY_LIST => {
                tally.reset();
                println!("Shopping list emptied successfully");
            }
            COMMAND_EXIT => break,
            _ => match catalog.lookup(barcode) {
                Ok(name) => {
                    tally.add(name);
                    println!("Beep!");
                    println!("{tally}\n");
                }
                Err(e) => println!("{e}"),
            },
        }
    }

    println!("Here's your shopping list, goodbye!");
    println!("{}", "-".repeat(40));
    println!("{tally}");
    println!("{}", "-".repeat(40));

    Ok(())
}
