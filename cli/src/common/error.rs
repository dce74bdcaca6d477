//! Error handling utilities for the CLI.

use cistern::{Error, RenderConfig, render_error_to};

/// Render an error to stderr.
pub fn render(error: &Error, no_color: bool) {
    let config = RenderConfig {
        color: !no_color,
        ..Default::default()
    };
    render_error_to(error, &mut std::io::stderr(), &config).ok();
}
