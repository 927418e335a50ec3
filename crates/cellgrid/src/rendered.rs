//! Styled text output.
//!
//! A [`Rendered`] value is a run of [`Span`]s, each carrying an optional
//! style name. Style names are resolved against a [`Theme`](crate::Theme)
//! only when the table is turned into terminal text, so the same output can
//! be printed plain, styled, or inspected in tests.

use std::fmt;

use crate::types::Align;
use crate::util::{display_width, padding, single_line, take_width};

/// A piece of text with an optional theme style name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Option<String>,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: None,
        }
    }

    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Span {
            text: text.into(),
            style: Some(style.into()),
        }
    }

    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// Rendered cell or label content.
///
/// # Example
///
/// ```rust
/// use cellgrid::Rendered;
///
/// let out = Rendered::styled("▲", "change.increase").plain(" 3");
/// assert_eq!(out.plain_text(), "▲ 3");
/// assert_eq!(out.to_markup(), "[change.increase]▲[/change.increase] 3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    spans: Vec<Span>,
}

impl Rendered {
    pub fn new() -> Self {
        Rendered::default()
    }

    /// Starts a rendered value with one styled span.
    pub fn styled(text: impl Into<String>, style: impl Into<String>) -> Self {
        Rendered::new().span(Span::styled(text, style))
    }

    /// Appends an unstyled span.
    pub fn plain(self, text: impl Into<String>) -> Self {
        self.span(Span::plain(text))
    }

    /// Appends a styled span.
    pub fn with_styled(self, text: impl Into<String>, style: impl Into<String>) -> Self {
        self.span(Span::styled(text, style))
    }

    /// Appends a span. Empty spans are dropped.
    pub fn span(mut self, span: Span) -> Self {
        self.push(span);
        self
    }

    /// Appends a span, merging it into the last one when the styles match.
    /// Line breaks and other control characters become spaces.
    pub fn push(&mut self, mut span: Span) {
        if span.text.is_empty() {
            return;
        }
        if span.text.chars().any(char::is_control) {
            span.text = single_line(&span.text);
        }
        match self.spans.last_mut() {
            Some(last) if last.style == span.style => last.text.push_str(&span.text),
            _ => self.spans.push(span),
        }
    }

    /// Appends all spans of `other`.
    pub fn append(&mut self, other: Rendered) {
        for span in other.spans {
            self.push(span);
        }
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Concatenated text with styles dropped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Text with `[style]...[/style]` tags around styled spans.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for span in &self.spans {
            match &span.style {
                Some(style) => {
                    out.push_str(&format!("[{style}]{}[/{style}]", span.text));
                }
                None => out.push_str(&span.text),
            }
        }
        out
    }

    /// Gives unstyled spans the given style; styled spans keep their own.
    pub fn with_base_style(mut self, style: Option<&str>) -> Self {
        if let Some(style) = style {
            for span in &mut self.spans {
                if span.style.is_none() {
                    span.style = Some(style.to_string());
                }
            }
        }
        self
    }

    /// Truncates to `width` columns (ending in `…` when cut) and pads
    /// according to `align`.
    pub fn fit(&self, width: usize, align: Align) -> Rendered {
        let out = if self.width() <= width {
            self.clone()
        } else {
            self.truncate(width)
        };
        let (left, right) = padding(out.width(), width, align);
        let mut padded = Rendered::new().plain(" ".repeat(left));
        padded.append(out);
        padded.plain(" ".repeat(right))
    }

    fn truncate(&self, width: usize) -> Rendered {
        let mut out = Rendered::new();
        if width == 0 {
            return out;
        }
        let mut budget = width - 1;
        let mut last_style = None;
        for span in &self.spans {
            let w = span.width();
            if w <= budget {
                budget -= w;
                out.push(span.clone());
                last_style = span.style.clone();
                continue;
            }
            let head = take_width(&span.text, budget);
            out.push(Span {
                text: head,
                style: span.style.clone(),
            });
            last_style = span.style.clone();
            break;
        }
        out.push(Span {
            text: "…".to_string(),
            style: last_style,
        });
        out
    }
}

impl From<&str> for Rendered {
    fn from(text: &str) -> Self {
        Rendered::new().plain(text)
    }
}

impl From<String> for Rendered {
    fn from(text: String) -> Self {
        Rendered::new().plain(text)
    }
}

impl From<Span> for Rendered {
    fn from(span: Span) -> Self {
        Rendered::new().span(span)
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}
