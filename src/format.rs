//! Text rendering for listings.

use crate::models::PropertyRecord;

/// Format a price the way listing cards show it: `R$ 1.250.000`, no cents
pub fn format_brl(price: f64) -> String {
    let rounded = price.round();
    let digits = format!("{}", rounded.abs() as u64);

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-R$ {}", grouped)
    } else {
        format!("R$ {}", grouped)
    }
}

/// Multi-line summary of one record for terminal listings, numbered from 1
pub fn summary_line(index: usize, record: &PropertyRecord) -> String {
    let mut out = format!(
        "{}. {} ({})\n   {}\n   {} · {} quartos, {} banheiros",
        index + 1,
        record.title,
        format_brl(record.price),
        record.location,
        record.property_type,
        record.bedrooms,
        record.bathrooms,
    );
    if !record.features.is_empty() {
        out.push_str(&format!("\n   Features: {}", record.features.join(", ")));
    }
    out.push_str(&format!("\n   ID: {}", record.id));
    out
}
