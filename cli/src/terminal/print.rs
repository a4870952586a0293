use colored::*;
use lanwake_common::network::endpoint::InterfaceBinding;

use crate::terminal::{colors, format};

pub const TOTAL_WIDTH: usize = 64;
const KEY_WIDTH: usize = 7;

/// A section title centred in a rule of `TOTAL_WIDTH` columns.
pub fn header(title: &str) {
    let label = format!("⟦ {} ⟧", title.to_uppercase());
    let padding = TOTAL_WIDTH.saturating_sub(label.chars().count());
    let (left, right) = (padding / 2, padding - padding / 2);

    println!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        label.bright_green(),
        "─".repeat(right).color(colors::SEPARATOR)
    );
}

/// The source address of a binding, followed by one branch per destination.
pub fn binding(idx: usize, binding: &InterfaceBinding) {
    println!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        binding.local().to_string().color(colors::PRIMARY)
    );

    let endpoints = binding.endpoints();
    for (i, endpoint) in endpoints.iter().enumerate() {
        let branch = if i + 1 < endpoints.len() { "├─" } else { "└─" };
        let (key, value) = format::endpoint_to_detail(endpoint);
        println!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(KEY_WIDTH.saturating_sub(key.len())).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        );
    }
}
