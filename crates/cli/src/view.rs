use ansi_to_tui::IntoText;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{app::Focus, styles};

/// Everything the renderer needs for one frame.
pub struct ViewSnap<'a> {
    pub url: &'a str,
    pub caret_col: u16,
    pub content: &'a Text<'static>,
    pub scroll: u16,
    pub status: &'a str,
    pub focus: Focus,
}

/// Size of the content pane as last rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContentMetrics {
    /// Visible rows inside the border.
    pub height: u16,
    /// Rows the wrapped content occupies in total.
    pub lines: usize,
}

/// Converts the display buffer, ANSI styling included, into widget text.
pub fn to_text(display: &str) -> Text<'static> {
    display
        .as_bytes()
        .into_text()
        .unwrap_or_else(|_| Text::raw(display.to_string()))
}

/// URL bar, content pane and status line, top to bottom.
pub fn layout(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3), Constraint::Length(3)])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

fn bordered(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { styles::focused_border() } else { styles::border() };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

pub fn render(frame: &mut Frame, snap: &ViewSnap) -> ContentMetrics {
    let [url_area, content_area, status_area] = layout(frame.area());

    // URL field, scrolled horizontally so the caret stays visible
    let url_width = url_area.width.saturating_sub(2);
    let url_offset = snap.caret_col.saturating_sub(url_width.saturating_sub(1));
    let url = Paragraph::new(snap.url)
        .style(styles::url_field())
        .scroll((0, url_offset))
        .block(bordered(" URL ", snap.focus == Focus::Url));
    frame.render_widget(url, url_area);

    if snap.focus == Focus::Url {
        frame.set_cursor_position(Position {
            x: url_area.x + 1 + snap.caret_col - url_offset,
            y: url_area.y + 1,
        });
    }

    // Content pane
    let inner_width = content_area.width.saturating_sub(2);
    let page = Paragraph::new(snap.content.clone())
        .style(styles::content())
        .wrap(Wrap { trim: false });
    let metrics = ContentMetrics {
        height: content_area.height.saturating_sub(2),
        lines: page.line_count(inner_width),
    };
    let page = page
        .scroll((snap.scroll, 0))
        .block(bordered(" Page ", snap.focus == Focus::Content));
    frame.render_widget(page, content_area);

    // Status line
    let status = Paragraph::new(snap.status)
        .style(styles::status())
        .alignment(Alignment::Center)
        .block(bordered(" Status ", false));
    frame.render_widget(status, status_area);

    metrics
}
