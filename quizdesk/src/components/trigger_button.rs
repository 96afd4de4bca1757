//! A button bound to one trigger
//!
//! The button does not know which request it starts: the action it emits is
//! handed to it when the UI is wired up.

use crossterm::event::KeyCode;
use quizdesk_core::EventKind;
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::Alignment,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::action::Action;
use crate::state::{Trigger, TriggerState};

pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct TriggerButtonProps<'a> {
    pub state: &'a TriggerState,
    pub tick_count: u32,
}

pub struct TriggerButton {
    trigger: Trigger,
    on_press: Action,
}

impl TriggerButton {
    pub fn new(trigger: Trigger, on_press: Action) -> Self {
        Self { trigger, on_press }
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }
}

impl Component<Action> for TriggerButton {
    type Props<'a> = TriggerButtonProps<'a>;

    /// Pressing the hotkey always emits, even while busy.
    fn handle_event<'a>(&mut self, event: &EventKind, _props: Self::Props<'a>) -> Vec<Action>
    where
        'a: 'a,
    {
        match event {
            EventKind::Key(key) if key.code == KeyCode::Char(self.trigger.hotkey()) => {
                vec![self.on_press.clone()]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: TriggerButtonProps<'_>) {
        let (border, marker) = if props.state.busy {
            let spinner = SPINNERS[(props.tick_count as usize / 2) % SPINNERS.len()];
            (Color::Yellow, format!(" {}", spinner))
        } else {
            (Color::Rgb(80, 80, 100), String::new())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));

        let line = Line::from(vec![
            Span::styled(
                format!("[{}] ", self.trigger.hotkey()),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(self.trigger.label()).bold(),
            Span::styled(marker, Style::default().fg(Color::Yellow)),
        ]);

        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizdesk_core::testing::*;

    #[test]
    fn test_hotkey_emits_bound_action() {
        let mut button = TriggerButton::new(Trigger::RandomNumber, Action::RandomFetch);
        let state = TriggerState::default();

        let actions = button.handle_event(
            &EventKind::Key(key("r")),
            TriggerButtonProps {
                state: &state,
                tick_count: 0,
            },
        );
        actions.assert_count(1);
        actions.assert_first(Action::RandomFetch);
    }

    #[test]
    fn test_busy_does_not_block_press() {
        let mut button = TriggerButton::new(Trigger::Ping, Action::PingSend);
        let state = TriggerState { busy: true };

        let actions = button.handle_event(
            &EventKind::Key(key("p")),
            TriggerButtonProps {
                state: &state,
                tick_count: 0,
            },
        );
        actions.assert_first(Action::PingSend);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut button = TriggerButton::new(Trigger::RandomNumber, Action::RandomFetch);
        let state = TriggerState::default();

        let actions = button.handle_event(
            &EventKind::Key(key("x")),
            TriggerButtonProps {
                state: &state,
                tick_count: 0,
            },
        );
        actions.assert_empty();
    }

    #[test]
    fn test_render_busy_shows_spinner() {
        let mut render = RenderHarness::new(30, 3);
        let mut button = TriggerButton::new(Trigger::RandomNumber, Action::RandomFetch);
        let state = TriggerState { busy: true };

        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            button.render(
                frame,
                area,
                TriggerButtonProps {
                    state: &state,
                    tick_count: 0,
                },
            );
        });

        assert!(output.contains("[r] Random number"));
        assert!(output.contains(SPINNERS[0]));
    }

    #[test]
    fn test_render_idle_has_no_spinner() {
        let mut render = RenderHarness::new(30, 3);
        let mut button = TriggerButton::new(Trigger::CreateQuestion, Action::QuestionCreate);
        let state = TriggerState::default();

        let output = render.render_to_string_plain(|frame| {
            let area = frame.area();
            button.render(
                frame,
                area,
                TriggerButtonProps {
                    state: &state,
                    tick_count: 0,
                },
            );
        });

        assert!(output.contains("Create question"));
        assert!(!SPINNERS.iter().any(|s| output.contains(s)));
    }
}
