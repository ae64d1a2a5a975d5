//! Styled status lines for the terminal. `NO_COLOR` turns styling off.

use console::Style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some()
}

/// `=== text ===`, bold cyan when `color`.
#[must_use]
pub fn header_line(text: &str, color: bool) -> String {
    let line = format!("=== {text} ===");
    if color {
        Style::new().bold().cyan().apply_to(line).to_string()
    } else {
        line
    }
}

/// `text` behind a status tag such as `[OK]`.
#[must_use]
pub fn tagged_line(tag: &str, paint: &Style, text: &str, color: bool) -> String {
    if color {
        format!("{} {text}", paint.apply_to(tag))
    } else {
        format!("{tag} {text}")
    }
}

pub fn print_header(text: &str) {
    println!("{}", header_line(text, !is_color_disabled()));
}

pub fn print_success(text: &str) {
    let paint = Style::new().green().bold();
    println!("{}", tagged_line("[OK]", &paint, text, !is_color_disabled()));
}

/// Errors go to stderr.
pub fn print_error(text: &str) {
    let paint = Style::new().red().bold();
    eprintln!("{}", tagged_line("[ERROR]", &paint, text, !is_color_disabled()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_header() {
        assert_eq!(header_line("Sweep", false), "=== Sweep ===");
    }

    #[test]
    fn plain_tags() {
        let paint = Style::new().green();
        assert_eq!(tagged_line("[OK]", &paint, "done", false), "[OK] done");
        assert_eq!(
            tagged_line("[ERROR]", &paint, "capacity exceeded", false),
            "[ERROR] capacity exceeded"
        );
    }

    #[test]
    fn colored_lines_keep_the_text() {
        assert!(header_line("Sweep", true).contains("=== Sweep ==="));
        assert!(tagged_line("[OK]", &Style::new().green(), "done", true).ends_with(" done"));
    }
}
