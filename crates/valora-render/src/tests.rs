#[cfg(test)]
mod tests {
    use crate::html::{escape, to_html};
    use crate::markup::{parse_markup, Block, Inline};
    use crate::{plain_text, render_message, RenderedMessage};
    use valora_types::message::{Message, Origin};

    // ─── Markup Parser Tests ─────────────────────────────────

    #[test]
    fn test_parse_paragraph() {
        let blocks = parse_markup("Apple grew faster than Tesla.");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                inlines: vec![Inline::Text("Apple grew faster than Tesla.".to_string())],
            }]
        );
    }

    #[test]
    fn test_parse_merges_consecutive_lines() {
        let blocks = parse_markup("line one\nline two\n\nline three");
        assert_eq!(blocks.len(), 2);
        assert_eq!(
            blocks[0],
            Block::Paragraph {
                inlines: vec![Inline::Text("line one line two".to_string())],
            }
        );
    }

    #[test]
    fn test_parse_heading() {
        let blocks = parse_markup("## Key findings");
        assert_eq!(
            blocks,
            vec![Block::Heading {
                level: 2,
                inlines: vec![Inline::Text("Key findings".to_string())],
            }]
        );
    }

    #[test]
    fn test_parse_hash_without_space_is_text() {
        let blocks = parse_markup("#hashtag");
        assert!(matches!(blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn test_parse_bullets() {
        let blocks = parse_markup("- strong margins\n* rising debt");
        assert_eq!(blocks.len(), 2);
        assert!(matches!(blocks[0], Block::Bullet { .. }));
        assert!(matches!(blocks[1], Block::Bullet { .. }));
    }

    #[test]
    fn test_parse_numbered_items() {
        let blocks = parse_markup("1. liquidity\n2. leverage");
        assert_eq!(
            blocks[0],
            Block::NumberedItem {
                index: 1,
                inlines: vec![Inline::Text("liquidity".to_string())],
            }
        );
        assert_eq!(
            blocks[1],
            Block::NumberedItem {
                index: 2,
                inlines: vec![Inline::Text("leverage".to_string())],
            }
        );
    }

    #[test]
    fn test_parse_inline_spans() {
        let blocks = parse_markup("**Apple** grew *faster* with `AAPL`");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                inlines: vec![
                    Inline::Strong("Apple".to_string()),
                    Inline::Text(" grew ".to_string()),
                    Inline::Emph("faster".to_string()),
                    Inline::Text(" with ".to_string()),
                    Inline::Code("AAPL".to_string()),
                ],
            }]
        );
    }

    #[test]
    fn test_parse_unclosed_marker_stays_literal() {
        let blocks = parse_markup("**unclosed bold");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                inlines: vec![Inline::Text("**unclosed bold".to_string())],
            }]
        );
    }

    #[test]
    fn test_parse_never_fails() {
        assert!(parse_markup("").is_empty());
        let _ = parse_markup("*** ` ** # - 1.");
        let _ = parse_markup("<script>alert(1)</script>");
    }

    #[test]
    fn test_parse_keeps_html_as_text() {
        let blocks = parse_markup("<b>not bold</b>");
        assert_eq!(
            blocks,
            vec![Block::Paragraph {
                inlines: vec![Inline::Text("<b>not bold</b>".to_string())],
            }]
        );
    }

    // ─── Render Adapter Tests ────────────────────────────────

    #[test]
    fn test_render_user_message_is_literal() {
        let msg = Message::user(0, "**not markup** <b>either</b>");
        let rendered = render_message(&msg);
        assert_eq!(rendered.origin, Origin::User);
        assert_eq!(
            rendered.blocks,
            vec![Block::Paragraph {
                inlines: vec![Inline::Text("**not markup** <b>either</b>".to_string())],
            }]
        );
    }

    #[test]
    fn test_render_assistant_message_parses_markup() {
        let msg = Message::assistant(1, "**Apple** grew faster");
        let rendered = render_message(&msg);
        assert_eq!(rendered.origin, Origin::Assistant);
        assert_eq!(
            rendered.blocks[0],
            Block::Paragraph {
                inlines: vec![
                    Inline::Strong("Apple".to_string()),
                    Inline::Text(" grew faster".to_string()),
                ],
            }
        );
    }

    #[test]
    fn test_render_notice_is_literal() {
        let msg = Message::notice(2, "Error: Could not reach backend.");
        let rendered = render_message(&msg);
        assert_eq!(
            rendered.blocks,
            vec![Block::Paragraph {
                inlines: vec![Inline::Text("Error: Could not reach backend.".to_string())],
            }]
        );
    }

    #[test]
    fn test_plain_text_flattens_blocks() {
        let msg = Message::assistant(0, "## Summary\n- **strong** margins\n- rising debt");
        let text = plain_text(&render_message(&msg));
        assert_eq!(text, "Summary\n  - strong margins\n  - rising debt");
    }

    // ─── HTML Emitter Tests ──────────────────────────────────

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_to_html_paragraph_and_heading() {
        let msg = Message::assistant(0, "# Verdict\n**Apple** grew faster");
        let html = to_html(&render_message(&msg));
        assert_eq!(
            html,
            "<h1>Verdict</h1><p><strong>Apple</strong> grew faster</p>"
        );
    }

    #[test]
    fn test_to_html_groups_list_items() {
        let msg = Message::assistant(0, "- one\n- two\n\ndone");
        let html = to_html(&render_message(&msg));
        assert_eq!(html, "<ul><li>one</li><li>two</li></ul><p>done</p>");
    }

    #[test]
    fn test_to_html_ordered_list() {
        let msg = Message::assistant(0, "1. first\n2. second");
        let html = to_html(&render_message(&msg));
        assert_eq!(html, "<ol><li>first</li><li>second</li></ol>");
    }

    #[test]
    fn test_to_html_escapes_injected_markup() {
        // A hostile reply must come out inert.
        let msg = Message::assistant(0, "<img src=x onerror=alert(1)>");
        let html = to_html(&render_message(&msg));
        assert_eq!(html, "<p>&lt;img src=x onerror=alert(1)&gt;</p>");
    }

    #[test]
    fn test_to_html_escapes_user_text() {
        let msg = Message::user(0, "5 > 3 & 2 < 4");
        let html = to_html(&render_message(&msg));
        assert_eq!(html, "<p>5 &gt; 3 &amp; 2 &lt; 4</p>");
    }

    #[test]
    fn test_rendered_message_equality() {
        let msg = Message::assistant(0, "same");
        let a = render_message(&msg);
        let b: RenderedMessage = render_message(&msg);
        assert_eq!(a, b);
    }
}
