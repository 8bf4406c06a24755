//! Console menu for the warehouse tracker.
//!
//! Thin presentation shell: reads raw lines, hands them to the warehouse
//! core, and renders the structured results. All validation and stock rules
//! live in `depot-warehouse`.

mod render;

use std::io::{self, BufRead, Write};

use depot_warehouse::Warehouse;

fn main() -> anyhow::Result<()> {
    depot_observability::init();

    let mut warehouse = Warehouse::seeded();
    tracing::info!(units = warehouse.describe().len(), "warehouse seeded");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Choose an option (1-5): ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                let Some(raw) = prompt(
                    &mut lines,
                    "Enter the product to add (separate batch products with spaces): ",
                )?
                else {
                    break;
                };
                match warehouse.add_entry(&raw) {
                    Ok(added) => println!("{}", render::added_line(&added)),
                    Err(err) => println!("{err}"),
                }
            }
            "2" => {
                let Some(raw) = prompt(
                    &mut lines,
                    "Enter the product to remove (separate batch products with spaces): ",
                )?
                else {
                    break;
                };
                match warehouse.remove_entry(&raw) {
                    Ok(outcome) => println!("{}", render::removal_lines(&outcome)),
                    Err(err) => println!("{err}"),
                }
            }
            "3" => println!("{}", render::alert_lines(warehouse.alerts())),
            "4" => println!("{}", render::ledger_line(warehouse.describe())),
            "5" => {
                println!("Goodbye.");
                break;
            }
            other => println!("Invalid option {other:?}. Please choose 1-5."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("Menu:");
    println!("1. Add product(s)");
    println!("2. Remove product(s)");
    println!("3. Show alerts");
    println!("4. Show stock");
    println!("5. Quit");
}

/// Print a prompt and read one line; `None` means stdin closed.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> anyhow::Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
