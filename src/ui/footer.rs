use crate::ui::app::App;
use crate::ui::input::{key_hints, KeyHint};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// Single-line legend, e.g. ` f: Favorite │ q: Quit`.
pub fn legend(hints: &[KeyHint]) -> String {
    let entries: Vec<String> = hints
        .iter()
        .map(|h| format!("{}: {}", h.keys, h.action))
        .collect();
    format!(" {}", entries.join(SEPARATOR))
}

/// Key legend for the current context, with the version right-aligned
/// when there is room for it.
pub fn widget(app: &App, area: Rect) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let hints = legend(key_hints(app));
    let version = format!("v{VERSION} ");

    // Widths in chars; the arrows are multi-byte.
    let content_width = area.width.saturating_sub(2) as usize;
    let used = hints.chars().count() + version.chars().count();

    let mut spans = vec![Span::styled(hints, text_style)];
    if used <= content_width {
        spans.push(Span::styled(" ".repeat(content_width - used), text_style));
        spans.push(Span::styled(version, text_style));
    }

    Paragraph::new(Line::from(spans)).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
