//! Text and JSON rendering of registry records

use innkeep_core::Customer;

const HEADERS: [&str; 5] = ["Room", "Name", "Contact", "Address", "Checked in"];

fn row(customer: &Customer) -> [String; 5] {
    [
        customer.room_number.to_string(),
        customer.name.clone(),
        customer.contact.clone(),
        customer.address.clone(),
        customer.check_in_display(),
    ]
}

/// Render guests as an aligned text table
///
/// An empty slice renders a single notice line instead of a bare header.
pub fn render_table(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "No guests are checked in.\n".to_string();
    }

    let rows: Vec<[String; 5]> = customers.iter().map(row).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for r in &rows {
        for (width, cell) in widths.iter_mut().zip(r.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header = HEADERS.map(String::from);
    let rule = widths.map(|w| "-".repeat(w));

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    push_line(&mut out, &rule, &widths);
    for r in &rows {
        push_line(&mut out, r, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(padded.join("  ").trim_end());
    out.push('\n');
}

/// Render one guest as labelled lines
pub fn render_customer(customer: &Customer) -> String {
    let mut out = format!("Guest #{}\n", customer.id);
    for (label, value) in HEADERS.iter().zip(row(customer)) {
        out.push_str(&format!("  {:<12}{}\n", format!("{}:", label), value));
    }
    out
}

pub fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
