use crate::{
    model::Flag,
    state::{Focus, PickerState},
};

/// Visual role of a piece of text. Colours are decided by the painter.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Style {
    Title,
    Muted,
    Header,
    ActiveHeader,
    Cursor,
    Checked,
    Unchecked,
    Item,
    ActiveItem,
    Origin,
    Help,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

impl Span {
    fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub type Line = Vec<Span>;

const CURSOR: &str = "❯";
const CHECKED: &str = "⬢";
const UNCHECKED: &str = "⬡";

/// Render the picker. Depends on nothing but `state`.
pub fn render(state: &PickerState) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let flags = state.flags();

    lines.push(vec![Span::new("⚡ Claude Code Launcher", Style::Title)]);
    if flags.happy {
        lines.push(vec![Span::new("🦦 Happy mode enabled", Style::Muted)]);
    }
    lines.push(Vec::new());

    let mcp_active = state.focus() == Focus::Mcp;
    lines.push(vec![header("🚀 Choose your MCP configuration:", mcp_active)]);
    for index in 0..state.choice_count() {
        let on_cursor = mcp_active && state.cursor() == index;
        let mut line = row_prefix(on_cursor, state.selection().contains(index));
        let item_style = if on_cursor { Style::ActiveItem } else { Style::Item };
        match index.checked_sub(1).and_then(|i| state.mcp_files().get(i)) {
            None => line.push(Span::new(
                format!("🚫 No mcp servers [{index}]"),
                item_style,
            )),
            Some(file) => {
                line.push(Span::new(format!("{} [{index}]", file.name()), item_style));
                line.push(Span::new(format!(" ({})", file.origin), Style::Origin));
            }
        }
        lines.push(line);
    }
    lines.push(Vec::new());

    let flags_active = state.focus() == Focus::Flags;
    lines.push(vec![header("⚙️ Configuration Flags:", flags_active)]);
    for (index, flag) in Flag::ALL.into_iter().enumerate() {
        let on_cursor = flags_active && state.flag_cursor() == index;
        let mut line = row_prefix(on_cursor, flags.is_set(flag));
        line.push(Span::new(
            format!("{} {} [{}]", flag_icon(flag), flag.label(), flag.shortcut()),
            if on_cursor { Style::ActiveItem } else { Style::Item },
        ));
        lines.push(line);
    }
    lines.push(Vec::new());

    let controls = if state.selection_enabled() {
        "tab switch sections • ↑/↓ navigate • space select • enter launch • q quit"
    } else {
        "tab switch sections • ↑/↓ navigate • enter launch • q quit"
    };
    lines.push(vec![Span::new(format!("💡 Controls: {controls}"), Style::Help)]);

    lines
}

fn header(text: &str, active: bool) -> Span {
    Span::new(text, if active { Style::ActiveHeader } else { Style::Header })
}

fn row_prefix(on_cursor: bool, checked: bool) -> Line {
    vec![
        Span::new(" ", Style::Item),
        if on_cursor {
            Span::new(CURSOR, Style::Cursor)
        } else {
            Span::new(" ", Style::Item)
        },
        Span::new(" ", Style::Item),
        if checked {
            Span::new(CHECKED, Style::Checked)
        } else {
            Span::new(UNCHECKED, Style::Unchecked)
        },
        Span::new(" ", Style::Item),
    ]
}

fn flag_icon(flag: Flag) -> &'static str {
    match flag {
        Flag::Happy => "🦦",
        Flag::Continue => "🔄",
        Flag::Resume => "📂",
        Flag::Yolo => "⚠️",
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{
        model::{LaunchFlags, McpFile, Origin},
        state::Key,
    };

    fn render_plain(state: &PickerState) -> String {
        let mut out = String::new();
        for line in render(state) {
            for span in line {
                out.push_str(&span.text);
            }
            out.push('\n');
        }
        out
    }

    fn state() -> PickerState {
        PickerState::new(
            vec![
                McpFile::new(PathBuf::from(".claude/mcp/github.json"), Origin::Local),
                McpFile::new(PathBuf::from("/h/.claude/mcp/db.json"), Origin::Global),
            ],
            LaunchFlags::default(),
        )
    }

    #[test]
    fn lists_every_choice_with_shortcut_and_origin() {
        let text = render_plain(&state());
        assert!(text.contains("\n ❯ ⬢ 🚫 No mcp servers [0]\n"));
        assert!(text.contains("\n   ⬡ github [1] (local)\n"));
        assert!(text.contains("\n   ⬡ db [2] (global)\n"));
        assert!(text.contains("⬡ 🦦 Use happy [h]"));
        assert!(text.contains("⬡ ⚠️ Skip permissions check [y]"));
        assert!(text.contains("space select"));
    }

    #[test]
    fn checkboxes_follow_state() {
        let mut s = state();
        s.step(Key::Char('2'));
        s.step(Key::Char('r'));
        let text = render_plain(&s);
        assert!(text.contains("⬡ 🚫 No mcp servers [0]"));
        assert!(text.contains("⬢ db [2]"));
        assert!(text.contains("⬢ 📂 Resume previous session [r]"));
        assert!(text.contains("⬡ 🔄 Continue previous session [c]"));
    }

    #[test]
    fn only_the_focused_section_is_highlighted() {
        let mut s = state();
        let lines = render(&s);
        let active: Vec<&str> = lines
            .iter()
            .flatten()
            .filter(|span| span.style == Style::ActiveHeader)
            .map(|span| span.text.as_str())
            .collect();
        assert_eq!(active, vec!["🚀 Choose your MCP configuration:"]);

        s.step(Key::Tab);
        let lines = render(&s);
        let cursors = lines
            .iter()
            .flatten()
            .filter(|span| span.style == Style::Cursor)
            .count();
        assert_eq!(cursors, 1);
        assert!(render_plain(&s).contains("❯ ⬡ 🦦 Use happy [h]"));
    }

    #[test]
    fn no_files_hides_select_hint() {
        let s = PickerState::new(Vec::new(), LaunchFlags::default());
        let text = render_plain(&s);
        assert!(!text.contains("space select"));
        assert!(text.contains("enter launch"));
    }

    #[test]
    fn happy_banner_tracks_flag() {
        let mut s = state();
        assert!(!render_plain(&s).contains("Happy mode enabled"));
        s.step(Key::Char('h'));
        assert!(render_plain(&s).contains("Happy mode enabled"));
    }
}
