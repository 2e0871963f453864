use ratatui::layout::Rect;

/// Regions of the main screen, top to bottom.
pub struct Regions {
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let status_height = 1.min(area.height.saturating_sub(header_height + footer_height));
    let body_height = area
        .height
        .saturating_sub(header_height + footer_height + status_height);

    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: body_height,
    };
    let status = Rect {
        x: area.x,
        y: body.y + body_height,
        width: area.width,
        height: status_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    Regions {
        header,
        body,
        status,
        footer,
    }
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
