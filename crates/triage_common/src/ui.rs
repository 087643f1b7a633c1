//! Terminal UI helpers for consistent output styling.

/// ANSI color codes using true color (24-bit)
pub mod colors {
    pub const HEADER: &str = "\x1b[38;2;255;210;120m";
    pub const ERR: &str = "\x1b[38;2;255;100;100m";
    pub const WARN: &str = "\x1b[38;2;255;200;100m";
    pub const DIM: &str = "\x1b[38;2;140;140;140m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Width of the horizontal rule under each detail block
pub const MAX_RULE: usize = 78;

/// Print an error line with X
pub fn print_err(message: &str) {
    println!("{}✗{} {}", colors::ERR, colors::RESET, message);
}
