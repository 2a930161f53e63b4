//! Markdown-subset parser for assistant replies.
//!
//! Produces a structured tree; text nodes stay literal so emitters can
//! escape them at the last step. Raw HTML in the input has no meaning
//! here — it survives only as text. Unrecognized syntax stays literal,
//! so parsing never fails.
//!
//! Supported: `#`..`######` headings, `-`/`*` bullets, `1.` numbered
//! items, paragraphs (consecutive lines merged), and one level of
//! `**strong**`, `*emphasis*`, and `` `code` `` inline spans.

use serde::{Deserialize, Serialize};

/// Block-level node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Heading { level: u8, inlines: Vec<Inline> },
    Paragraph { inlines: Vec<Inline> },
    Bullet { inlines: Vec<Inline> },
    NumberedItem { index: u32, inlines: Vec<Inline> },
}

/// Inline node. The payload is always literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inline {
    Text(String),
    Strong(String),
    Emph(String),
    Code(String),
}

/// Parse a markup string into block nodes.
pub fn parse_markup(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for raw in input.lines() {
        let line = raw.trim();
        if line.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some((level, rest)) = heading_prefix(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading {
                level,
                inlines: parse_inlines(rest),
            });
        } else if let Some(rest) = bullet_prefix(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Bullet {
                inlines: parse_inlines(rest),
            });
        } else if let Some((index, rest)) = numbered_prefix(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::NumberedItem {
                index,
                inlines: parse_inlines(rest),
            });
        } else {
            paragraph.push(line.to_string());
        }
    }
    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn flush_paragraph(paragraph: &mut Vec<String>, blocks: &mut Vec<Block>) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.join(" ");
    paragraph.clear();
    blocks.push(Block::Paragraph {
        inlines: parse_inlines(&text),
    });
}

fn heading_prefix(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, rest.trim_start()))
}

fn bullet_prefix(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

fn numbered_prefix(line: &str) -> Option<(u32, &str)> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix(". ")?;
    let index = line[..digits].parse().ok()?;
    Some((index, rest))
}

/// Scan a line for inline spans. Unclosed or empty markers fall back to
/// literal text.
fn parse_inlines(text: &str) -> Vec<Inline> {
    let markers: [(&str, fn(String) -> Inline); 3] = [
        ("**", Inline::Strong),
        ("*", Inline::Emph),
        ("`", Inline::Code),
    ];

    let mut inlines = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while !rest.is_empty() {
        let span = markers.iter().find_map(|(marker, make)| {
            let body = rest.strip_prefix(marker)?;
            let end = body.find(marker)?;
            if end == 0 {
                return None;
            }
            Some((make(body[..end].to_string()), marker.len() * 2 + end))
        });

        match span {
            Some((inline, consumed)) => {
                flush_literal(&mut literal, &mut inlines);
                inlines.push(inline);
                rest = &rest[consumed..];
            }
            None => {
                if let Some(c) = rest.chars().next() {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
    }
    flush_literal(&mut literal, &mut inlines);
    inlines
}

fn flush_literal(literal: &mut String, inlines: &mut Vec<Inline>) {
    if literal.is_empty() {
        return;
    }
    inlines.push(Inline::Text(std::mem::take(literal)));
}
