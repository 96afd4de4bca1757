//! Top-level screen
//!
//! Owns one [`TriggerButton`] per trigger. The buttons are built by the
//! caller with the action each one should emit, so the mapping from key to
//! request lives at the wiring site.

use crossterm::event::KeyCode;
use quizdesk_core::EventKind;
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};

use super::{
    Component, HelpBar, HelpBarProps, ResultDisplay, ResultDisplayProps, TriggerButton,
    TriggerButtonProps,
};
use crate::action::Action;
use crate::state::{AppState, Trigger};

pub struct DashboardProps<'a> {
    pub state: &'a AppState,
}

pub struct Dashboard {
    buttons: Vec<TriggerButton>,
    random_display: ResultDisplay,
    ping_display: ResultDisplay,
}

impl Dashboard {
    pub fn new(buttons: Vec<TriggerButton>) -> Self {
        Self {
            buttons,
            random_display: ResultDisplay,
            ping_display: ResultDisplay,
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(vec![
            TriggerButton::new(Trigger::CreateQuestion, Action::QuestionCreate),
            TriggerButton::new(Trigger::RandomNumber, Action::RandomFetch),
            TriggerButton::new(Trigger::Ping, Action::PingSend),
        ])
    }
}

impl Component<Action> for Dashboard {
    type Props<'a> = DashboardProps<'a>;

    fn handle_event<'a>(&mut self, event: &EventKind, props: Self::Props<'a>) -> Vec<Action>
    where
        'a: 'a,
    {
        if let EventKind::Key(key) = event {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return vec![Action::Quit];
            }
        }

        let state = props.state;
        self.buttons
            .iter_mut()
            .flat_map(|button| {
                let trigger_state = state.trigger(button.trigger());
                button.handle_event(
                    event,
                    TriggerButtonProps {
                        state: trigger_state,
                        tick_count: state.tick_count,
                    },
                )
            })
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DashboardProps<'_>) {
        let state = props.state;

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" Quizdesk - {} ", state.endpoint))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let rows = Layout::vertical([
            Constraint::Length(3), // Buttons
            Constraint::Min(3),    // Displays
            Constraint::Length(1), // Help bar
        ])
        .split(inner);

        let count = self.buttons.len().max(1) as u32;
        let button_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, count); self.buttons.len()])
                .split(rows[0]);
        for (button, button_area) in self.buttons.iter_mut().zip(button_areas.iter()) {
            let trigger_state = state.trigger(button.trigger());
            button.render(
                frame,
                *button_area,
                TriggerButtonProps {
                    state: trigger_state,
                    tick_count: state.tick_count,
                },
            );
        }

        let displays = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        self.random_display.render(
            frame,
            displays[0],
            ResultDisplayProps {
                title: "Random number",
                text: state.random_display.as_deref(),
            },
        );
        self.ping_display.render(
            frame,
            displays[1],
            ResultDisplayProps {
                title: "Server says",
                text: state.ping_display.as_deref(),
            },
        );

        let mut help = HelpBar;
        help.render(frame, rows[2], HelpBarProps);
    }
}
