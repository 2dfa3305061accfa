//! Light formatting for chatbot replies.
//!
//! Replies are plain text with a few Markdown-ish conventions. Each line is
//! classified on its own, first match wins: blank, `**bold**` spans, bullet,
//! numbered item, header, paragraph.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub is_bold: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageBlock {
    /// An empty line, kept for spacing.
    Break,
    Paragraph(Vec<TextSpan>),
    Bullet(String),
    Numbered { marker: String, text: String },
    Header { level: usize, text: String },
}

impl MessageBlock {
    /// CSS font size and weight for a header of the given level.
    pub fn header_style(level: usize) -> (&'static str, &'static str) {
        match level {
            1 => ("20px", "bold"),
            2 => ("18px", "bold"),
            _ => ("16px", "600"),
        }
    }
}

pub fn format_message(text: &str) -> Vec<MessageBlock> {
    text.split('\n').map(|line| format_line(line.trim())).collect()
}

fn format_line(line: &str) -> MessageBlock {
    if line.is_empty() {
        return MessageBlock::Break;
    }
    if line.contains("**") {
        return MessageBlock::Paragraph(bold_spans(line));
    }
    if let Some(rest) = line.strip_prefix('•').or_else(|| line.strip_prefix('-')) {
        return MessageBlock::Bullet(rest.trim().to_string());
    }
    if let Some((marker, text)) = numbered_item(line) {
        return MessageBlock::Numbered { marker: marker.to_string(), text: text.to_string() };
    }
    if line.starts_with('#') {
        let level = line.chars().take_while(|c| *c == '#').count();
        let text = line[level..].trim_start();
        return MessageBlock::Header { level, text: text.to_string() };
    }
    MessageBlock::Paragraph(vec![TextSpan { text: line.to_string(), is_bold: false }])
}

/// Splits on `**`; every odd segment is bold. Empty segments are dropped.
fn bold_spans(line: &str) -> Vec<TextSpan> {
    line.split("**")
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(index, part)| TextSpan { text: part.to_string(), is_bold: index % 2 == 1 })
        .collect()
}

/// `"12. text"` → `("12.", "text")`. Needs digits, a dot, one whitespace and some text.
fn numbered_item(line: &str) -> Option<(&str, &str)> {
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let after_digits = &line[digits..];
    let after_dot = after_digits.strip_prefix('.')?;
    let mut chars = after_dot.chars();
    let space = chars.next()?;
    if !space.is_whitespace() {
        return None;
    }
    let text = chars.as_str();
    if text.is_empty() {
        return None;
    }
    Some((&line[..digits + 1], text))
}
