//! Terminal output for status lines and summaries.
//!
//! Everything here writes to stderr.
//!
//! ```no_run
//! use tsdocs_cli::ui;
//!
//! ui::init_colors(false);
//! let spinner = ui::Spinner::new("Reading extract...");
//! spinner.finish("Extract loaded");
//! ui::success("Documentation written");
//! ```

mod format;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_size, print_generate_summary};
pub use messages::{success, warning};
pub use spinner::Spinner;

static COLORS_ENABLED: AtomicBool = AtomicBool::new(true);

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to terminal
/// detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Decides once whether status output is colored.
pub fn init_colors(no_color: bool) {
    COLORS_ENABLED.store(!no_color && should_use_color(), Ordering::Relaxed);
}

pub(crate) fn colors_enabled() -> bool {
    COLORS_ENABLED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_color_flag_disables_colors() {
        init_colors(true);
        assert!(!colors_enabled());
    }
}
