//! ANSI colour codes for tables and the db summary.

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Open sessions are highlighted, closed ones greyed out.
pub fn color_for_open(open: bool) -> &'static str {
    if open { YELLOW } else { GREY }
}
