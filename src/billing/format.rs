//! Display formatting for money and dates.

use chrono::NaiveDate;

/// Format a money amount with zero decimal places and Indian digit-grouping:
/// the last three digits form one group, every group before it has two
/// digits (150000 -> "₹1,50,000").
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let grouped = group_indian(&digits);

    if rounded < 0 {
        format!("-{symbol}{grouped}")
    } else {
        format!("{symbol}{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let head_chars: Vec<char> = head.chars().collect();

    let mut groups: Vec<String> = Vec::new();
    let mut end = head_chars.len();
    while end > 2 {
        groups.push(head_chars[end - 2..end].iter().collect());
        end -= 2;
    }
    if end > 0 {
        groups.push(head_chars[..end].iter().collect());
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a date as "DD Mon YYYY" (e.g. "05 Jan 2025"). An unset date
/// formats to an empty string.
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d %b %Y").to_string(),
        None => String::new(),
    }
}
