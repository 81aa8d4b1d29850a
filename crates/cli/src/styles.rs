use ratatui::style::{Color, Modifier, Style};

pub fn url_field() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

pub fn content() -> Style {
    Style::default().fg(Color::White).bg(Color::Black)
}

pub fn status() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

pub fn border() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn focused_border() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
