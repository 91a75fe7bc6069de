use std::io::Write;

use colored::Colorize;
use macrolens_core::domain::{
    image::ImageAsset,
    rendering::{DisplayBlock, DisplayItem},
    submission::SubmissionView,
};

/// Terminal stand-in for the upload page: preview line, loading line,
/// results container and alerts.
pub struct TerminalView<W: Write> {
    out: W,
    html: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, html: bool) -> Self {
        Self { out, html }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> SubmissionView for TerminalView<W> {
    fn show_preview(&mut self, asset: &ImageAsset) {
        let line = format!(
            "Selected {} ({}, {} bytes)",
            asset.display_name(),
            asset.mime_type,
            asset.bytes.len()
        );
        self.line(line.dimmed());
    }

    fn hide_preview(&mut self) {}

    fn set_loading(&mut self, loading: bool) {
        if loading {
            self.line("Analyzing...".yellow());
        }
    }

    fn hide_results(&mut self) {}

    fn show_results(&mut self, block: &DisplayBlock) {
        if self.html {
            let html = block.to_html();
            self.line(html);
            return;
        }

        self.line("Analysis Results".bold().underline());
        for item in &block.items {
            match item {
                DisplayItem::Field(field) => {
                    let line = format!("{} {}", format!("{}:", field.label).bold(), field.value);
                    self.line(line);
                }
                DisplayItem::Text(text) => self.line(text),
            }
        }
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message.red().bold());
    }
}
