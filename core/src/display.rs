//! Text shared by the browser and terminal renderers.

use crate::matcher::{HeadlineCapacity, VenueView};

/// Shown under an empty venues reply.
pub const NO_MATCH_TITLE: &str = "No venues found matching your criteria";
pub const NO_MATCH_SUGGESTIONS: [&str; 4] = [
    "Looking for venues in nearby areas?",
    "Would you like to explore venues with different capacity ranges?",
    "How about checking venues on different dates?",
    "I can help you find venues with specific amenities instead",
];

/// Formats a rupee amount with Indian digit grouping (`2,50,000`), up to three decimals.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let scaled = (amount.abs() * 1000.0).round() as u64;
    let whole = group_indian(&(scaled / 1000).to_string());
    let fraction = format!("{:03}", scaled % 1000);
    let fraction = fraction.trim_end_matches('0');

    let sign = if amount < 0.0 && scaled > 0 { "-" } else { "" };
    if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Card header line, e.g. `Matching Capacity: 200, 250 guests`.
pub fn capacity_label(view: &VenueView<'_>) -> String {
    match &view.headline {
        HeadlineCapacity::Aggregate(_) => format!("Total Capacity: {} guests", view.headline),
        HeadlineCapacity::MatchedList(_) => {
            format!("Matching Capacity: {} guests", view.headline)
        }
    }
}

pub fn halls_heading(view: &VenueView<'_>) -> String {
    match view.requested {
        Some(requested) => {
            format!("Banquet Halls Matching Your Capacity ({requested} guests):")
        }
        None => "Available Banquet Halls:".to_string(),
    }
}
