//! Render adapter — converts log messages into safe displayable content.
//!
//! User input and plain notices stay one literal paragraph; markup
//! replies are parsed into a structured tree whose text nodes are always
//! literal. A rendering surface consumes the tree directly, or uses the
//! escaped-HTML emitter in `html` — raw service output never reaches a
//! display surface unparsed.

pub mod html;
pub mod markup;

#[cfg(test)]
mod tests;

use valora_types::message::{Message, Origin, RenderHint};

use crate::markup::{parse_markup, Block, Inline};

/// A message prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub origin: Origin,
    pub blocks: Vec<Block>,
}

/// Prepare a message for display.
pub fn render_message(message: &Message) -> RenderedMessage {
    let blocks = match message.render_hint {
        RenderHint::Markup => parse_markup(&message.content),
        RenderHint::Plain => vec![Block::Paragraph {
            inlines: vec![Inline::Text(message.content.clone())],
        }],
    };
    RenderedMessage {
        origin: message.origin,
        blocks,
    }
}

/// Flatten a rendered message to plain terminal text.
pub fn plain_text(message: &RenderedMessage) -> String {
    let mut out = String::new();
    for block in &message.blocks {
        match block {
            Block::Heading { inlines, .. } => {
                push_inlines(&mut out, inlines);
                out.push('\n');
            }
            Block::Paragraph { inlines } => {
                push_inlines(&mut out, inlines);
                out.push('\n');
            }
            Block::Bullet { inlines } => {
                out.push_str("  - ");
                push_inlines(&mut out, inlines);
                out.push('\n');
            }
            Block::NumberedItem { index, inlines } => {
                out.push_str(&format!("  {}. ", index));
                push_inlines(&mut out, inlines);
                out.push('\n');
            }
        }
    }
    out.trim_end().to_string()
}

fn push_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text)
            | Inline::Strong(text)
            | Inline::Emph(text)
            | Inline::Code(text) => out.push_str(text),
        }
    }
}
