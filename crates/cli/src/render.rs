//! Text rendering of core results for the console.

use depot_core::ProductCode;
use depot_warehouse::{AlertEntry, RemoveOutcome};

/// Render the ledger as the queue it behaves like: `<- A1 Z8 ... <-`.
///
/// An empty ledger renders as an empty string.
pub fn ledger_line(units: &[ProductCode]) -> String {
    if units.is_empty() {
        return String::new();
    }
    let mut line = String::from("<- ");
    for unit in units {
        line.push_str(&unit.to_string());
        line.push(' ');
    }
    line.push_str("<-");
    line
}

/// Render the alert table, one line per tracked product.
pub fn alert_lines(alerts: &[AlertEntry]) -> String {
    if alerts.is_empty() {
        return "No alerts".to_string();
    }
    let lines: Vec<String> = alerts
        .iter()
        .map(|e| format!("Alert: {} is low on stock ({} left)", e.code, e.remaining))
        .collect();
    lines.join("\n")
}

/// Render the result of an addition.
pub fn added_line(added: &[ProductCode]) -> String {
    let rendered: Vec<String> = added.iter().map(|c| c.to_string()).collect();
    format!("Added: {}", rendered.join(" "))
}

/// Render the result of a removal.
pub fn removal_lines(outcome: &RemoveOutcome) -> String {
    match outcome {
        RemoveOutcome::Single(unit) => format!("Outbound parcel: [{unit}]"),
        RemoveOutcome::Batch { packed, not_found } => {
            let mut lines = vec!["Outbound parcel:".to_string()];
            for unit in packed {
                lines.push(format!("[{unit}]"));
            }
            if !not_found.is_empty() {
                let missing: Vec<String> = not_found.iter().map(|c| c.to_string()).collect();
                lines.push(format!("Not in stock: {}", missing.join(" ")));
            }
            lines.join("\n")
        }
        RemoveOutcome::NotFound { requested } => {
            let missing: Vec<String> = requested.iter().map(|c| c.to_string()).collect();
            if missing.len() == 1 {
                format!("{} is not in stock", missing[0])
            } else {
                format!("None of {} are in stock", missing.join(" "))
            }
        }
    }
}
