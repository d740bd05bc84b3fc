use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Accumulates wrapped output for one logical line at a time.
struct LineWrapper {
    width: usize,
    out: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    current_width: usize,
    word: Vec<(char, Style)>,
    word_width: usize,
    emitted_any: bool,
}

impl LineWrapper {
    fn new(width: usize, capacity: usize) -> Self {
        Self {
            width,
            out: Vec::with_capacity(capacity),
            current: Vec::new(),
            current_width: 0,
            word: Vec::new(),
            word_width: 0,
            emitted_any: false,
        }
    }

    fn emit_line(&mut self) {
        self.out.push(Line::from(std::mem::take(&mut self.current)));
        self.current_width = 0;
        self.emitted_any = true;
    }

    /// Append to the current row, merging with the previous span when the
    /// style matches.
    fn append(&mut self, ch: char, style: Style) {
        match self.current.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push(ch),
            _ => self.current.push(Span::styled(ch.to_string(), style)),
        }
    }

    fn push_char(&mut self, ch: char, style: Style) {
        if ch == ' ' {
            self.flush_word();
            // A space that does not fit ends the row and is dropped
            if self.current_width < self.width {
                self.append(' ', style);
                self.current_width += 1;
            } else {
                self.emit_line();
            }
        } else {
            self.word_width += ch.width().unwrap_or(0);
            self.word.push((ch, style));
        }
    }

    /// Place the pending word, moving it to a fresh row when it does not fit
    /// and breaking it when it is wider than a whole row.
    fn flush_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        if self.current_width > 0 && self.current_width + self.word_width > self.width {
            self.emit_line();
        }
        for (ch, style) in std::mem::take(&mut self.word) {
            let ch_width = ch.width().unwrap_or(0);
            if self.current_width > 0 && self.current_width + ch_width > self.width {
                self.emit_line();
            }
            self.append(ch, style);
            self.current_width += ch_width;
        }
        self.word_width = 0;
    }

    fn finish_line(&mut self) {
        self.flush_word();
        if !self.current.is_empty() {
            self.emit_line();
        }
        if !self.emitted_any {
            self.out.push(Line::from(""));
        }
        self.emitted_any = false;
    }
}

/// Pre-wrap `lines` to `width` columns at word boundaries, keeping span
/// styles. Rendering the result without ratatui's own wrapping makes the row
/// count exactly `result.len()`, which is what scrolling is bounded by.
pub fn prewrap_lines(lines: &[Line], width: u16) -> Vec<Line<'static>> {
    if width == 0 {
        return lines
            .iter()
            .map(|line| {
                Line::from(
                    line.spans
                        .iter()
                        .map(|span| Span::styled(span.content.to_string(), span.style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();
    }

    let mut wrapper = LineWrapper::new(width as usize, lines.len());
    for line in lines {
        for span in &line.spans {
            for ch in span.content.chars() {
                wrapper.push_char(ch, span.style);
            }
        }
        wrapper.finish_line();
    }
    wrapper.out
}

pub fn max_scroll_offset(total_rows: usize, viewport_height: u16) -> u16 {
    u16::try_from(total_rows)
        .unwrap_or(u16::MAX)
        .saturating_sub(viewport_height)
}
