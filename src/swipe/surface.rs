use crate::core::{CardView, TagStyle};
use std::io::Write;

/// Display target for the swipe card
pub trait CardSurface {
    /// Whether the page has a card to draw into
    fn has_card_container(&self) -> bool;

    /// Replace the card with a closing message
    fn show_exhausted(&mut self, message: &str);

    /// Fill the card with a candidate
    fn show_card(&mut self, card: &CardView);
}

/// Renders the card as plain text
///
/// Shared interests are wrapped in `*` so they stand out.
pub struct TextSurface<W: Write> {
    out: W,
}

impl<W: Write> TextSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_card(&mut self, card: &CardView) -> std::io::Result<()> {
        let tags: Vec<String> = card
            .tags
            .iter()
            .map(|tag| match tag.style {
                TagStyle::Shared => format!("*{}*", tag.label),
                TagStyle::Plain => tag.label.clone(),
            })
            .collect();

        writeln!(self.out, "{}  {}", card.avatar, card.heading)?;
        writeln!(self.out, "{} | {}", card.role, card.badge)?;
        writeln!(self.out, "{}", card.shared_text)?;
        writeln!(self.out, "{}", tags.join("  "))?;
        writeln!(self.out, "{}", card.about)?;
        self.out.flush()
    }
}

impl<W: Write> CardSurface for TextSurface<W> {
    fn has_card_container(&self) -> bool {
        true
    }

    fn show_exhausted(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{}", message).and_then(|_| self.out.flush()) {
            tracing::warn!("Failed to draw card: {}", e);
        }
    }

    fn show_card(&mut self, card: &CardView) {
        if let Err(e) = self.write_card(card) {
            tracing::warn!("Failed to draw card: {}", e);
        }
    }
}
