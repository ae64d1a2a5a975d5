//! Progress bar for the benchmark sweep.

use indicatif::{ProgressBar, ProgressStyle};

const SWEEP_TEMPLATE: &str = "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} offsets";

/// Create a progress bar over `len` offsets, hidden when `quiet`.
#[must_use]
pub fn sweep_progress(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    match ProgressStyle::with_template(SWEEP_TEMPLATE) {
        Ok(style) => bar.set_style(style),
        Err(e) => {
            tracing::debug!("falling back to default progress style: {e}");
        }
    }
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_is_valid() {
        assert!(ProgressStyle::with_template(SWEEP_TEMPLATE).is_ok());
    }

    #[test]
    fn quiet_bar_is_hidden() {
        let bar = sweep_progress(10, true);
        assert!(bar.is_hidden());
        bar.inc(3);
        assert_eq!(bar.position(), 3);
    }
}
