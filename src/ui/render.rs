use crate::catalog::Movie;
use crate::ui::app::{App, PopupKind};
use crate::ui::catalog::CatalogState;
use crate::ui::filter::{FilterDialogState, FilterSection};
use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FAVORITE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
    STATUS_OK,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(app), regions.header);
    frame.render_widget(Clear, regions.body);
    draw_body(frame, app, regions.body);
    draw_status(frame, app, regions.status);
    frame.render_widget(footer::widget(app, regions.footer), regions.footer);

    match app.popup_kind() {
        Some(PopupKind::Filter) => draw_filter_popup(frame, app.filter_dialog(), regions.body),
        Some(PopupKind::Details) => {
            if let Some(movie) = app.details() {
                draw_details_popup(frame, app, movie, regions.body);
            }
        }
        None => {}
    }
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: Rect) {
    match app.catalog() {
        CatalogState::Loading => {
            let widget = Paragraph::new("Loading movies...")
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center);
            frame.render_widget(widget, vertically_centered(area));
        }
        CatalogState::Failed { message } => {
            let lines = vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(STATUS_ERROR))),
                Line::from(Span::styled(
                    "Press r to retry, q to quit",
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            let widget = Paragraph::new(lines).alignment(Alignment::Center);
            frame.render_widget(widget, vertically_centered(area));
        }
        CatalogState::Loaded { .. } => draw_movie_list(frame, app, area),
    }
}

fn draw_movie_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let movies = app.movies();
    if movies.is_empty() {
        let widget = Paragraph::new("No movies match the current filters.")
            .style(Style::default().fg(MUTED_TEXT))
            .alignment(Alignment::Center);
        frame.render_widget(widget, vertically_centered(area));
        return;
    }

    let items: Vec<ListItem> = movies
        .visible()
        .map(|movie| movie_item(movie, movies.is_favorite(movie.id)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn movie_item(movie: &Movie, favorite: bool) -> ListItem<'static> {
    let heart = if favorite {
        Span::styled("♥ ", Style::default().fg(FAVORITE))
    } else {
        Span::styled("♡ ", Style::default().fg(MUTED_TEXT))
    };
    let title = Line::from(vec![
        heart,
        Span::styled(
            movie.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]);
    let detail = Line::from(Span::styled(
        format!(
            "   {} · {} · ★ {}",
            movie.director, movie.year, movie.rating
        ),
        Style::default().fg(MUTED_TEXT),
    ));
    ListItem::new(vec![title, detail])
}

fn draw_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(status) = app.status() else {
        return;
    };
    let color = if status.is_error() { STATUS_ERROR } else { STATUS_OK };
    let widget = Paragraph::new(format!(" {}", status.text())).style(Style::default().fg(color));
    frame.render_widget(widget, area);
}

fn draw_filter_popup(frame: &mut Frame<'_>, dialog: &FilterDialogState, body: Rect) {
    let FilterDialogState::Visible {
        section: focused,
        cursor,
        ..
    } = dialog
    else {
        return;
    };

    let mut lines = Vec::new();
    for section in FilterSection::ALL {
        let is_focused = section == *focused;
        let title_style = if is_focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        lines.push(Line::from(Span::styled(section.title(), title_style)));

        let options = dialog.options(section);
        if options.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(MUTED_TEXT),
            )));
        }
        for (idx, option) in options.iter().enumerate() {
            let mark = if option.selected { "[x]" } else { "[ ]" };
            let mut line = Line::from(format!("  {mark} {}", option.label));
            if option.selected {
                line = line.style(Style::default().fg(ACCENT));
            }
            if is_focused && idx == *cursor {
                line = line.patch_style(Style::default().bg(ACTIVE_HIGHLIGHT));
            }
            lines.push(line);
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Tab: Section  ↑↓: Move  Space: Toggle  r: Reset  Enter: Apply  Esc: Close",
        Style::default().fg(MUTED_TEXT),
    )));

    draw_popup(frame, "Filter Movies", lines, body);
}

fn draw_details_popup(frame: &mut Frame<'_>, app: &App, movie: &Movie, body: Rect) {
    let favorite = app.movies().is_favorite(movie.id);
    let lines = vec![
        Line::from(Span::styled(
            movie.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Director: {}", movie.director)),
        Line::from(format!("Year: {}", movie.year)),
        Line::from(format!("Rating: {}", movie.rating)),
        Line::from(format!("Poster: {}", movie.poster)),
        Line::from(Span::styled(
            if favorite { "♥ Favorite" } else { "♡ Not a favorite" },
            Style::default().fg(if favorite { FAVORITE } else { MUTED_TEXT }),
        )),
        Line::from(""),
        Line::from(Span::styled("Esc: Close", Style::default().fg(MUTED_TEXT))),
    ];
    draw_popup(frame, "Details", lines, body);
}

fn draw_popup(frame: &mut Frame<'_>, title: &'static str, lines: Vec<Line<'static>>, body: Rect) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup_width = content_width.saturating_add(4).max(40);
    let popup_height = lines.len().saturating_add(2) as u16;
    let area = centered_rect_by_size(body, popup_width, popup_height);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn vertically_centered(area: Rect) -> Rect {
    let height = area.height.min(2);
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height,
    }
}
