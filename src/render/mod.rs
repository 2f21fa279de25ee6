//! Response rendering.
//!
//! This module turns a [`ResponseSummary`] into the text printed on stdout:
//! - Protocol and status line, colored by status class
//! - Final URL, the redirect target if one was not followed, and timing
//! - Response headers (the default allow-list, or all of them)
//! - The body, with escaped Unicode expanded for display
//!
//! Rendering is a pure function of the summary and the [`DisplayOptions`].

mod body;

use std::io::{self, Write};

use colored::Colorize;

use crate::config::is_allow_listed;
use crate::response::ResponseSummary;

pub use body::{decode_unicode_escapes, DecodeError};

/// Display toggles for one rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Print every header instead of the default allow-list
    pub show_all_headers: bool,
    /// Suppress the body entirely
    pub hide_body: bool,
    /// Decorate the status line with ANSI colors
    pub color: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_all_headers: false,
            hide_body: false,
            color: true,
        }
    }
}

/// Color class of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// 2xx
    Success,
    /// 3xx
    Caution,
    /// Everything else
    Error,
}

/// Classifies a status code for display.
///
/// `[200, 300)` is a success, `[300, 400)` a caution, any other code an error.
/// The classification only affects coloring.
pub fn classify(code: u16) -> StatusTone {
    match code {
        200..=299 => StatusTone::Success,
        300..=399 => StatusTone::Caution,
        _ => StatusTone::Error,
    }
}

/// Writes the formatted summary to `out`.
///
/// The output ends with a blank line. When the body cannot be decoded for
/// display its raw bytes are written unchanged.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn render_to<W: Write>(
    out: &mut W,
    summary: &ResponseSummary,
    opts: &DisplayOptions,
) -> io::Result<()> {
    let tone = classify(summary.status_code());
    writeln!(
        out,
        "{} {}",
        paint_protocol(summary.protocol(), opts.color),
        paint_status(summary.status_text(), tone, opts.color)
    )?;

    writeln!(out, "Final url: {}", summary.final_url())?;
    if !summary.redirect_location().is_empty() {
        writeln!(out, "Redirect url: {}", summary.redirect_location())?;
    }
    writeln!(out, "Response time: {:.2?}", summary.elapsed())?;

    for (name, values) in summary
        .headers()
        .iter()
        .filter(|(name, _)| opts.show_all_headers || is_allow_listed(name))
    {
        writeln!(out, "{}: {}", name, values.join(","))?;
    }
    writeln!(out)?;

    if opts.hide_body {
        return Ok(());
    }

    let raw = summary.body();
    let ends_with_newline = match decode_unicode_escapes(raw) {
        Ok(text) => {
            out.write_all(text.as_bytes())?;
            text.ends_with('\n')
        }
        Err(e) => {
            log::debug!("Showing raw body: {e}");
            out.write_all(raw)?;
            raw.ends_with(b"\n")
        }
    };
    if !raw.is_empty() && !ends_with_newline {
        writeln!(out)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Renders the summary into a string.
///
/// Bodies that are not valid UTF-8 are converted lossily; use [`render_to`]
/// to get the exact bytes.
pub fn render(summary: &ResponseSummary, opts: &DisplayOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> cannot fail
    let _ = render_to(&mut buf, summary, opts);
    String::from_utf8_lossy(&buf).into_owned()
}

fn paint_protocol(protocol: &str, color: bool) -> String {
    if color {
        protocol.bright_blue().to_string()
    } else {
        protocol.to_string()
    }
}

fn paint_status(status: &str, tone: StatusTone, color: bool) -> String {
    if !color {
        return status.to_string();
    }
    match tone {
        StatusTone::Success => status.bright_green().to_string(),
        StatusTone::Caution => status.bright_yellow().to_string(),
        StatusTone::Error => status.bright_red().to_string(),
    }
}
