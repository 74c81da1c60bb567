//! Minimal reader for the HTML-ish markup bot replies carry.
//!
//! Only `<strong>`/`<b>`, `<em>`/`<i>` and `<br>` change the output; any
//! other tag is dropped. Whitespace collapses the way a browser would.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<\s*(/?)\s*([A-Za-z][A-Za-z0-9]*)[^>]*>").expect("tag pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub strong: bool,
    pub emphasis: bool,
}

#[derive(Default)]
struct SpanBuilder {
    spans: Vec<Span>,
    strong: usize,
    emphasis: usize,
}

impl SpanBuilder {
    fn at_line_start(&self) -> bool {
        self.spans.last().is_none_or(|span| span.text.ends_with('\n'))
    }

    fn push_text(&mut self, raw: &str) {
        let decoded = decode_entities(raw);
        let mut text = collapse_whitespace(&decoded);
        if self.at_line_start() {
            text = text.trim_start().to_string();
        }
        if text.is_empty() {
            return;
        }

        let (strong, emphasis) = (self.strong > 0, self.emphasis > 0);
        match self.spans.last_mut() {
            Some(last) if last.strong == strong && last.emphasis == emphasis => {
                last.text.push_str(&text);
            }
            _ => self.spans.push(Span {
                text,
                strong,
                emphasis,
            }),
        }
    }

    fn push_break(&mut self) {
        match self.spans.last_mut() {
            Some(last) => {
                let trimmed = last.text.trim_end_matches(' ').len();
                last.text.truncate(trimmed);
                last.text.push('\n');
            }
            None => self.spans.push(Span {
                text: "\n".to_string(),
                strong: false,
                emphasis: false,
            }),
        }
    }

    fn finish(mut self) -> Vec<Span> {
        if let Some(last) = self.spans.last_mut() {
            let trimmed = last.text.trim_end_matches(' ').len();
            last.text.truncate(trimmed);
        }
        self.spans.retain(|span| !span.text.is_empty());
        self.spans
    }
}

pub fn parse(markup: &str) -> Vec<Span> {
    let mut builder = SpanBuilder::default();
    let mut cursor = 0;

    for caps in TAG.captures_iter(markup) {
        let Some(whole) = caps.get(0) else { continue };
        builder.push_text(&markup[cursor..whole.start()]);
        cursor = whole.end();

        let closing = !caps[1].is_empty();
        match caps[2].to_ascii_lowercase().as_str() {
            "br" => builder.push_break(),
            "strong" | "b" => toggle(&mut builder.strong, closing),
            "em" | "i" => toggle(&mut builder.emphasis, closing),
            _ => {}
        }
    }
    builder.push_text(&markup[cursor..]);

    builder.finish()
}

pub fn to_plain_text(markup: &str) -> String {
    parse(markup).into_iter().map(|span| span.text).collect()
}

fn toggle(depth: &mut usize, closing: bool) {
    if closing {
        *depth = depth.saturating_sub(1);
    } else {
        *depth += 1;
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

fn decode_entities(text: &str) -> String {
    // &amp; goes last so "&amp;lt;" stays a literal "&lt;".
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}
