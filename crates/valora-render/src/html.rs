//! Escaped-HTML emitter for rendered messages.
//!
//! Every text node passes through `escape` on its way out; the tree
//! carries literal strings only, so nothing in a service reply can
//! smuggle markup into the surface.

use crate::markup::{Block, Inline};
use crate::RenderedMessage;

/// Escape the HTML metacharacters in literal text.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(PartialEq)]
enum ListKind {
    Unordered,
    Ordered,
}

/// Emit a rendered message as HTML. Adjacent list items are grouped
/// into a single list element.
pub fn to_html(message: &RenderedMessage) -> String {
    let mut out = String::new();
    let mut open: Option<ListKind> = None;

    for block in &message.blocks {
        match block {
            Block::Bullet { inlines } => {
                open_list(&mut out, &mut open, ListKind::Unordered);
                out.push_str("<li>");
                push_inlines(&mut out, inlines);
                out.push_str("</li>");
            }
            Block::NumberedItem { inlines, .. } => {
                open_list(&mut out, &mut open, ListKind::Ordered);
                out.push_str("<li>");
                push_inlines(&mut out, inlines);
                out.push_str("</li>");
            }
            Block::Heading { level, inlines } => {
                close_list(&mut out, &mut open);
                out.push_str(&format!("<h{}>", level));
                push_inlines(&mut out, inlines);
                out.push_str(&format!("</h{}>", level));
            }
            Block::Paragraph { inlines } => {
                close_list(&mut out, &mut open);
                out.push_str("<p>");
                push_inlines(&mut out, inlines);
                out.push_str("</p>");
            }
        }
    }
    close_list(&mut out, &mut open);
    out
}

fn open_list(out: &mut String, open: &mut Option<ListKind>, kind: ListKind) {
    if open.as_ref() == Some(&kind) {
        return;
    }
    close_list(out, open);
    out.push_str(match kind {
        ListKind::Unordered => "<ul>",
        ListKind::Ordered => "<ol>",
    });
    *open = Some(kind);
}

fn close_list(out: &mut String, open: &mut Option<ListKind>) {
    match open.take() {
        Some(ListKind::Unordered) => out.push_str("</ul>"),
        Some(ListKind::Ordered) => out.push_str("</ol>"),
        None => {}
    }
}

fn push_inlines(out: &mut String, inlines: &[Inline]) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push_str(&escape(text)),
            Inline::Strong(text) => {
                out.push_str("<strong>");
                out.push_str(&escape(text));
                out.push_str("</strong>");
            }
            Inline::Emph(text) => {
                out.push_str("<em>");
                out.push_str(&escape(text));
                out.push_str("</em>");
            }
            Inline::Code(text) => {
                out.push_str("<code>");
                out.push_str(&escape(text));
                out.push_str("</code>");
            }
        }
    }
}
