use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::Alignment,
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;

/// Read-only text area showing the last value a trigger produced.
pub struct ResultDisplayProps<'a> {
    pub title: &'a str,
    pub text: Option<&'a str>,
}

#[derive(Default)]
pub struct ResultDisplay;

impl Component<Action> for ResultDisplay {
    type Props<'a> = ResultDisplayProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ResultDisplayProps<'_>) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" {} ", props.title))
            .title_style(Style::default().fg(Color::Cyan));

        let paragraph = match props.text {
            Some(text) => Paragraph::new(text.to_string()).bold(),
            None => Paragraph::new("-").fg(Color::DarkGray),
        };

        frame.render_widget(
            paragraph
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }
}
