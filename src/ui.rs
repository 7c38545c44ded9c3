use skim_tuikit::prelude::{Attr, Color, Effect, Event, Key as TermKey, Term};
use tracing::debug;

use crate::{
    errors::TuiError,
    model::Decision,
    notice,
    state::{Key, PickerState, Transition},
    view::{self, Style},
};

pub struct Picker {
    colors: bool,
}

impl Default for Picker {
    fn default() -> Self {
        Self::new()
    }
}

impl Picker {
    pub fn new() -> Self {
        Self {
            colors: notice::colors_enabled(),
        }
    }

    /// Run the picker until launch or quit. `None` means the user quit.
    ///
    /// The terminal is restored before this returns.
    pub fn pick(&self, mut state: PickerState) -> Result<Option<Decision>, TuiError> {
        let term: Term<()> = Term::new().map_err(TuiError::new)?;
        loop {
            self.paint(&term, &state)?;
            let event = term.poll_event().map_err(TuiError::new)?;
            let Some(key) = key_for(event) else { continue };
            match state.step(key) {
                Transition::Stay => {}
                Transition::Launch | Transition::Quit => break,
            }
        }
        drop(term);

        debug!(
            event = "launcher.picker.closed",
            quitted = state.quitted(),
            selected = ?state.selection().indices()
        );
        Ok(state.into_decision())
    }

    fn paint(&self, term: &Term<()>, state: &PickerState) -> Result<(), TuiError> {
        term.clear().map_err(TuiError::new)?;
        for (row, line) in view::render(state).iter().enumerate() {
            let mut col = 0;
            for span in line {
                col += term
                    .print_with_attr(row, col, &span.text, self.attr(span.style))
                    .map_err(TuiError::new)?;
            }
        }
        term.present().map_err(TuiError::new)
    }

    fn attr(&self, style: Style) -> Attr {
        if !self.colors {
            let effect = match style {
                Style::ActiveHeader | Style::ActiveItem | Style::Cursor => Effect::BOLD,
                _ => Effect::empty(),
            };
            return Attr { fg: Color::Default, bg: Color::Default, effect };
        }
        let (fg, effect) = match style {
            Style::Title => (Color::Rgb(0xA8, 0x55, 0xF7), Effect::BOLD),
            Style::Muted | Style::Unchecked | Style::Help => {
                (Color::Rgb(0x6C, 0x7B, 0x7F), Effect::empty())
            }
            Style::Header => (Color::AnsiValue(15), Effect::BOLD),
            Style::ActiveHeader | Style::ActiveItem => (Color::Rgb(0xFF, 0x6B, 0x9D), Effect::BOLD),
            Style::Cursor => (Color::Rgb(0x4E, 0xCD, 0xC4), Effect::BOLD),
            Style::Checked => (Color::Rgb(0x96, 0xCE, 0xB4), Effect::empty()),
            Style::Item => (Color::Rgb(0xEC, 0xF0, 0xF1), Effect::empty()),
            Style::Origin => (Color::Rgb(0x45, 0xB7, 0xD1), Effect::empty()),
        };
        Attr { fg, bg: Color::Default, effect }
    }
}

/// Map terminal input onto picker keys; everything else only triggers a redraw.
fn key_for(event: Event) -> Option<Key> {
    let Event::Key(key) = event else { return None };
    let key = match key {
        TermKey::Up => Key::Up,
        TermKey::Down => Key::Down,
        TermKey::Tab => Key::Tab,
        TermKey::Enter => Key::Enter,
        TermKey::Ctrl('c') => Key::CtrlC,
        TermKey::Char(' ') => Key::Space,
        TermKey::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(key)
}
