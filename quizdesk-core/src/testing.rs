//! Test utilities for quizdesk components and reducers
//!
//! - [`key`]: Create a `KeyEvent` from a string (e.g. `key("ctrl+c")`)
//! - [`RenderHarness`]: Render into an in-memory buffer and read it back
//! - [`ActionAssertions`]: Assertions over the actions a component emits
//!
//! ```ignore
//! use quizdesk_core::testing::*;
//!
//! let actions = component.handle_event(&EventKind::Key(key("r")), props);
//! actions.assert_first(Action::RandomFetch);
//!
//! let mut render = RenderHarness::new(60, 10);
//! let output = render.render_to_string_plain(|frame| {
//!     component.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Random number"));
//! ```

use std::fmt::Debug;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

/// Parse a key string such as `"q"`, `"esc"`, `"f5"` or `"ctrl+c"`.
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let key_part = parts.last()?.trim();

    let mut modifiers = KeyModifiers::empty();
    for part in &parts[..parts.len() - 1] {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Create a `KeyEvent` from a key string.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Render components into a `TestBackend` buffer.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("create test terminal");
        Self { terminal }
    }

    /// Render a frame and return a copy of the resulting buffer.
    pub fn render<F>(&mut self, render_fn: F) -> Buffer
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal
            .draw(render_fn)
            .expect("draw to test terminal")
            .buffer
            .clone()
    }

    /// Render a frame and return its text, one line per row, styles dropped.
    pub fn render_to_string_plain<F>(&mut self, render_fn: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        let buffer = self.render(render_fn);
        buffer_to_string_plain(&buffer)
    }
}

/// Convert a buffer to plain text, one line per row.
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::with_capacity((area.width as usize + 1) * area.height as usize);
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

/// Assertions over a list of emitted actions.
pub trait ActionAssertions {
    type Item;

    fn assert_empty(&self);
    fn assert_count(&self, n: usize);
    fn assert_first(&self, expected: Self::Item);
}

impl<A> ActionAssertions for Vec<A>
where
    A: PartialEq + Debug,
{
    type Item = A;

    fn assert_empty(&self) {
        assert!(self.is_empty(), "Expected no actions, got: {:?}", self);
    }

    fn assert_count(&self, n: usize) {
        assert_eq!(self.len(), n, "Expected {} actions, got: {:?}", n, self);
    }

    fn assert_first(&self, expected: A) {
        assert_eq!(
            self.first(),
            Some(&expected),
            "First action mismatch in: {:?}",
            self
        );
    }
}
