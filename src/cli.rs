use clap::Parser;

use crate::model::{LaunchFlags, SessionMode};

#[derive(Parser, Debug)]
#[command(
    name = "cc-launcher",
    version,
    about = "Pick MCP configs and launch Claude Code"
)]
pub struct Cli {
    /// Log discovery details to stderr
    #[arg(long)]
    pub debug: bool,

    /// Only look in ./.claude/mcp, skip ~/.claude/mcp
    #[arg(long)]
    pub local: bool,

    /// Skip permission prompts (--dangerously-skip-permissions)
    #[arg(long)]
    pub yolo: bool,

    /// Launch `happy` instead of `claude`, falling back to claude if missing
    #[arg(long)]
    pub happy: bool,

    /// Resume a previous session
    #[arg(short, long)]
    pub resume: bool,

    /// Continue the most recent session
    #[arg(long = "continue")]
    pub continue_session: bool,

    /// Always show the picker, seeded with the other flags
    #[arg(short, long)]
    pub config: bool,

    /// Launch straight away without any MCP config
    #[arg(short, long)]
    pub blank: bool,
}

/// How the launcher should proceed after parsing arguments.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Startup {
    /// Skip discovery and the picker; launch with no MCP config.
    Direct(LaunchFlags),
    /// Discover, then always show the picker.
    Picker(LaunchFlags),
    /// Discover; show the picker only if something was found.
    Discover(LaunchFlags),
}

impl Cli {
    pub fn launch_flags(&self) -> LaunchFlags {
        LaunchFlags {
            happy: self.happy,
            session: SessionMode::from_flags(self.continue_session, self.resume),
            yolo: self.yolo,
        }
    }

    /// `--debug` and `--local` only shape discovery and never skip the picker.
    fn has_launch_flag(&self) -> bool {
        self.yolo || self.happy || self.resume || self.continue_session || self.blank
    }

    pub fn startup(&self) -> Startup {
        let flags = self.launch_flags();
        if self.config {
            Startup::Picker(flags)
        } else if self.has_launch_flag() {
            Startup::Direct(flags)
        } else {
            Startup::Discover(flags)
        }
    }
}
