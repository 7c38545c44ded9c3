use std::{
    env,
    io::{self, IsTerminal},
};

const RED_BOLD: &str = "\x1b[1;38;2;231;76;60m";
const YELLOW: &str = "\x1b[38;2;241;196;15m";
const PURPLE_BOLD: &str = "\x1b[1;38;2;168;85;247m";
const MUTED_ITALIC: &str = "\x1b[3;38;2;108;123;127m";
const RESET: &str = "\x1b[0m";

/// Colours are on unless `NO_COLOR` is set. Shared with the picker.
pub fn colors_enabled() -> bool {
    env::var_os("NO_COLOR").is_none()
}

fn paint(text: &str, sgr: &str, tty: bool) -> String {
    if tty && colors_enabled() {
        format!("{sgr}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn error_line(message: &str) -> String {
    paint(&format!("❌ {message}"), RED_BOLD, io::stderr().is_terminal())
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{}", error_line(&format!("{err:#}")));
}

pub fn print_happy_missing() {
    let msg = "⚠️  happy not found on PATH, falling back to claude";
    eprintln!("{}", paint(msg, YELLOW, io::stderr().is_terminal()));
}

pub fn print_no_configs() {
    let tty = io::stdout().is_terminal();
    println!("{}", paint("⚡ Claude Code Launcher", PURPLE_BOLD, tty));
    println!();
    println!(
        "{}",
        paint(
            "📁 No MCP configuration files found in .claude/mcp/ or ~/.claude/mcp/",
            MUTED_ITALIC,
            tty
        )
    );
    println!();
    print_launching(" without MCP servers");
}

pub fn print_launching(suffix: &str) {
    let tty = io::stdout().is_terminal();
    println!();
    println!(
        "{}",
        paint(&format!("🚀 Launching Claude Code{suffix}..."), PURPLE_BOLD, tty)
    );
    println!();
}
