use std::{collections::BTreeSet, fmt, path::PathBuf};

/// Where a discovered MCP config came from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Origin {
    Local,
    Global,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Local => write!(f, "local"),
            Origin::Global => write!(f, "global"),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct McpFile {
    pub path: PathBuf,
    pub origin: Origin,
}

impl McpFile {
    pub fn new(path: PathBuf, origin: Origin) -> Self {
        Self { path, origin }
    }

    /// Basename without the `.json` suffix.
    pub fn name(&self) -> String {
        let file_name = self
            .path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        match file_name.strip_suffix(".json") {
            Some(stem) => stem.to_string(),
            None => file_name,
        }
    }
}

/// Which MCP choices are ticked.
///
/// Index 0 of the choice list is the synthetic "No mcp servers" entry and
/// maps to [`Selection::Nothing`]. Real files are indices `1..=N` and live in
/// a non-empty ordered set, so "none" can never be mixed with a real pick and
/// the selection can never be empty.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum Selection {
    #[default]
    Nothing,
    Files(BTreeSet<usize>),
}

impl Selection {
    pub fn contains(&self, index: usize) -> bool {
        match self {
            Selection::Nothing => index == 0,
            Selection::Files(set) => set.contains(&index),
        }
    }

    /// Choice-list indices in ascending order; `[0]` for [`Selection::Nothing`].
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Selection::Nothing => vec![0],
            Selection::Files(set) => set.iter().copied().collect(),
        }
    }

    /// Toggle a choice-list index following the "none is exclusive" rule.
    pub fn toggle(&mut self, index: usize) {
        if index == 0 {
            *self = Selection::Nothing;
            return;
        }
        match self {
            Selection::Nothing => *self = Selection::Files(BTreeSet::from([index])),
            Selection::Files(set) => {
                if !set.remove(&index) {
                    set.insert(index);
                } else if set.is_empty() {
                    *self = Selection::Nothing;
                }
            }
        }
    }
}

/// Continue and resume are mutually exclusive session modes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum SessionMode {
    #[default]
    Fresh,
    Continue,
    Resume,
}

impl SessionMode {
    pub fn is_continue(self) -> bool {
        self == SessionMode::Continue
    }

    pub fn is_resume(self) -> bool {
        self == SessionMode::Resume
    }

    /// Resume wins: while resuming, flipping continue on is undone at once.
    pub fn toggle_continue(self) -> Self {
        match self {
            SessionMode::Fresh => SessionMode::Continue,
            SessionMode::Continue => SessionMode::Fresh,
            SessionMode::Resume => SessionMode::Resume,
        }
    }

    pub fn toggle_resume(self) -> Self {
        match self {
            SessionMode::Resume => SessionMode::Fresh,
            SessionMode::Fresh | SessionMode::Continue => SessionMode::Resume,
        }
    }

    pub fn from_flags(continue_session: bool, resume: bool) -> Self {
        if resume {
            SessionMode::Resume
        } else if continue_session {
            SessionMode::Continue
        } else {
            SessionMode::Fresh
        }
    }
}

/// The boolean launch modifiers.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LaunchFlags {
    pub happy: bool,
    pub session: SessionMode,
    pub yolo: bool,
}

/// One row of the flags section, in display order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flag {
    Happy,
    Continue,
    Resume,
    Yolo,
}

impl Flag {
    pub const ALL: [Flag; 4] = [Flag::Happy, Flag::Continue, Flag::Resume, Flag::Yolo];

    pub fn shortcut(self) -> char {
        match self {
            Flag::Happy => 'h',
            Flag::Continue => 'c',
            Flag::Resume => 'r',
            Flag::Yolo => 'y',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Flag> {
        Flag::ALL.into_iter().find(|f| f.shortcut() == c)
    }

    pub fn label(self) -> &'static str {
        match self {
            Flag::Happy => "Use happy",
            Flag::Continue => "Continue previous session",
            Flag::Resume => "Resume previous session",
            Flag::Yolo => "Skip permissions check",
        }
    }
}

impl LaunchFlags {
    pub fn is_set(&self, flag: Flag) -> bool {
        match flag {
            Flag::Happy => self.happy,
            Flag::Continue => self.session.is_continue(),
            Flag::Resume => self.session.is_resume(),
            Flag::Yolo => self.yolo,
        }
    }

    pub fn toggle(&mut self, flag: Flag) {
        match flag {
            Flag::Happy => self.happy = !self.happy,
            Flag::Continue => self.session = self.session.toggle_continue(),
            Flag::Resume => self.session = self.session.toggle_resume(),
            Flag::Yolo => self.yolo = !self.yolo,
        }
    }
}

/// Frozen result of a clean picker exit; the only input to the launcher.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Decision {
    pub selection: Selection,
    pub mcp_files: Vec<McpFile>,
    pub flags: LaunchFlags,
}

impl Decision {
    /// Launch without any MCP config.
    pub fn blank(flags: LaunchFlags) -> Self {
        Self {
            selection: Selection::Nothing,
            mcp_files: Vec::new(),
            flags,
        }
    }

    /// Selected files in ascending choice-list order.
    pub fn selected_files(&self) -> Vec<&McpFile> {
        match &self.selection {
            Selection::Nothing => Vec::new(),
            Selection::Files(set) => set
                .iter()
                .filter_map(|i| self.mcp_files.get(i - 1))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_strips_json_suffix_only() {
        let f = McpFile::new(PathBuf::from(".claude/mcp/github.json"), Origin::Local);
        assert_eq!(f.name(), "github");

        let f = McpFile::new(PathBuf::from("/home/u/.claude/mcp/a.b.json"), Origin::Global);
        assert_eq!(f.name(), "a.b");
    }

    #[test]
    fn selection_none_is_exclusive() {
        let mut s = Selection::Nothing;
        s.toggle(1);
        assert_eq!(s.indices(), vec![1]);
        assert!(!s.contains(0));

        s.toggle(3);
        assert_eq!(s.indices(), vec![1, 3]);

        s.toggle(0);
        assert_eq!(s, Selection::Nothing);
        assert_eq!(s.indices(), vec![0]);
    }

    #[test]
    fn emptying_selection_falls_back_to_nothing() {
        let mut s = Selection::Nothing;
        s.toggle(2);
        s.toggle(2);
        assert_eq!(s, Selection::Nothing);
    }

    #[test]
    fn resume_takes_priority_over_continue() {
        let mut flags = LaunchFlags::default();
        flags.toggle(Flag::Continue);
        assert!(flags.is_set(Flag::Continue));

        flags.toggle(Flag::Resume);
        assert!(flags.is_set(Flag::Resume));
        assert!(!flags.is_set(Flag::Continue));

        flags.toggle(Flag::Continue);
        assert!(flags.is_set(Flag::Resume));
        assert!(!flags.is_set(Flag::Continue));

        flags.toggle(Flag::Resume);
        assert_eq!(flags.session, SessionMode::Fresh);
    }

    #[test]
    fn session_from_cli_flags_prefers_resume() {
        assert_eq!(SessionMode::from_flags(true, true), SessionMode::Resume);
        assert_eq!(SessionMode::from_flags(true, false), SessionMode::Continue);
        assert_eq!(SessionMode::from_flags(false, false), SessionMode::Fresh);
    }

    #[test]
    fn selected_files_follow_index_order() {
        let files = vec![
            McpFile::new(PathBuf::from(".claude/mcp/a.json"), Origin::Local),
            McpFile::new(PathBuf::from(".claude/mcp/b.json"), Origin::Local),
        ];
        let mut selection = Selection::Nothing;
        selection.toggle(2);
        selection.toggle(1);
        let decision = Decision {
            selection,
            mcp_files: files,
            flags: LaunchFlags::default(),
        };
        let names: Vec<String> = decision.selected_files().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
