use std::str::FromStr;

use crate::model::{Decision, Flag, LaunchFlags, McpFile, Selection};

/// Keyboard events the picker reacts to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    Up,
    Down,
    Tab,
    Space,
    Enter,
    CtrlC,
    Char(char),
}

impl FromStr for Key {
    type Err = String;

    /// Canonical key names: `up`, `down`, `tab`, `space`, `enter`, `ctrl+c`,
    /// or a single character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "up" => Key::Up,
            "down" => Key::Down,
            "tab" => Key::Tab,
            "space" | " " => Key::Space,
            "enter" => Key::Enter,
            "ctrl+c" => Key::CtrlC,
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return Err(format!("unknown key: {s}")),
                }
            }
        };
        Ok(key)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Focus {
    Mcp,
    Flags,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Transition {
    Stay,
    Launch,
    Quit,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    mcp_files: Vec<McpFile>,
    selection: Selection,
    cursor: usize,
    flag_cursor: usize,
    focus: Focus,
    flags: LaunchFlags,
    quitted: bool,
}

impl PickerState {
    pub fn new(mcp_files: Vec<McpFile>, flags: LaunchFlags) -> Self {
        Self {
            mcp_files,
            selection: Selection::Nothing,
            cursor: 0,
            flag_cursor: 0,
            focus: Focus::Mcp,
            flags,
            quitted: false,
        }
    }

    pub fn mcp_files(&self) -> &[McpFile] {
        &self.mcp_files
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn flag_cursor(&self) -> usize {
        self.flag_cursor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn flags(&self) -> LaunchFlags {
        self.flags
    }

    pub fn quitted(&self) -> bool {
        self.quitted
    }

    /// Number of choices, including "No mcp servers" at index 0.
    pub fn choice_count(&self) -> usize {
        self.mcp_files.len() + 1
    }

    /// With no files there is nothing to pick besides index 0.
    pub fn selection_enabled(&self) -> bool {
        !self.mcp_files.is_empty()
    }

    pub fn step(&mut self, key: Key) -> Transition {
        match key {
            Key::CtrlC | Key::Char('q') => {
                self.quitted = true;
                return Transition::Quit;
            }
            Key::Enter => return Transition::Launch,
            Key::Tab => self.switch_focus(),
            Key::Up | Key::Char('k') => self.move_cursor(-1),
            Key::Down | Key::Char('j') => self.move_cursor(1),
            Key::Space => match self.focus {
                Focus::Mcp => self.toggle_choice(self.cursor),
                Focus::Flags => self.flags.toggle(Flag::ALL[self.flag_cursor]),
            },
            Key::Char(c) => {
                if let Some(digit) = c.to_digit(10) {
                    self.toggle_choice(digit as usize);
                } else if let Some(flag) = Flag::from_shortcut(c) {
                    self.flags.toggle(flag);
                }
            }
        }
        Transition::Stay
    }

    /// Freeze the state into a launch decision; `None` after a quit.
    pub fn into_decision(self) -> Option<Decision> {
        if self.quitted {
            return None;
        }
        Some(Decision {
            selection: self.selection,
            mcp_files: self.mcp_files,
            flags: self.flags,
        })
    }

    fn switch_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Mcp => {
                self.flag_cursor = 0;
                Focus::Flags
            }
            Focus::Flags => {
                self.cursor = 0;
                Focus::Mcp
            }
        };
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.focus {
            Focus::Mcp => (&mut self.cursor, self.mcp_files.len() + 1),
            Focus::Flags => (&mut self.flag_cursor, Flag::ALL.len()),
        };
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn toggle_choice(&mut self, index: usize) {
        if !self.selection_enabled() || index > self.mcp_files.len() {
            return;
        }
        self.selection.toggle(index);
    }
}
