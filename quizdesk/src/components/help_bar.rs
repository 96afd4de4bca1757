use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Trigger;

pub struct HelpBarProps;

#[derive(Default)]
pub struct HelpBar;

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: HelpBarProps) {
        let key_style = Style::default().fg(Color::Yellow);
        let sep_style = Style::default().fg(Color::DarkGray);

        let hotkeys: Vec<(String, &str)> = Trigger::ALL
            .iter()
            .map(|t| (t.hotkey().to_string(), t.label()))
            .chain(std::iter::once(("q/Esc".to_string(), "quit")))
            .collect();

        let mut spans = Vec::new();
        for (key, desc) in hotkeys {
            spans.push(Span::styled(key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(desc));
            spans.push(Span::styled(" | ", sep_style));
        }

        // Remove trailing separator
        spans.pop();

        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            area,
        );
    }
}
