//! Small rendering helpers shared by the widgets.

use ratatui::layout::Rect;
use ratatui::text::Line;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// An empty line, used as a spacer.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// Shorten `text` to at most `max_width` terminal columns, ending with `…`
/// when something was cut. Wide characters are never split.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}

/// Rect of `width` x `height` centered in `area`, clipped to it.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rect covering the given percentages of `area`, centered.
pub fn centered_percent(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    centered_fixed(
        area.width * percent_x / 100,
        area.height * percent_y / 100,
        area,
    )
}

/// Render a buffer as text, one line per row, trailing spaces trimmed and
/// blank rows dropped.
#[cfg(test)]
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    lines.join("\n")
}
