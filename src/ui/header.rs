use crate::ui::app::App;
use crate::ui::catalog::CatalogState;
use crate::ui::theme::{
    FAVORITE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (indicator, indicator_style) = match app.catalog() {
            CatalogState::Loading => ("…", text_style),
            CatalogState::Loaded { .. } => ("●", Style::default().fg(STATUS_OK)),
            CatalogState::Failed { .. } => ("●", Style::default().fg(STATUS_ERROR)),
        };

        let movies = app.movies();
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(indicator, indicator_style),
            Span::styled("  ", text_style),
            Span::styled("Movies", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{} of {}", movies.len(), movies.collection.len()),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("♥ ", Style::default().fg(FAVORITE)),
            Span::styled(movies.favorite_count().to_string(), text_style),
        ];

        let narrowed = movies.len() < movies.collection.len();
        if movies.is_showing_only_favorites() && !movies.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("favorites only", Style::default().fg(FAVORITE)));
        } else if narrowed && !movies.predicate.is_empty() {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("filtered", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
