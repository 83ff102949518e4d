use crate::utils::colors::styled;
use ansi_term::{Colour, Style};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLOR: AtomicBool = AtomicBool::new(true);

/// Turn ANSI styling of messages on or off (`--no-color`)
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

fn style(colour: Colour) -> Style {
    styled(Style::new().bold().fg(colour), COLOR.load(Ordering::Relaxed))
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", style(Colour::Blue).paint(ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", style(Colour::Green).paint(ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", style(Colour::Yellow).paint(ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", style(Colour::Red).paint(ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!(
        "{}",
        style(Colour::Blue).paint(format!("====================== {msg}\n"))
    );
}
