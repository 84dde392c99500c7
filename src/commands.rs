//! The fixed command set and the text each command prints.

use crate::projects::PROJECTS;

/// Every command the terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Links,
    Clear,
    Cd,
    Open,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Projects,
        Command::About,
        Command::Skills,
        Command::Links,
        Command::Clear,
        Command::Cd,
        Command::Open,
    ];

    /// Resolve a typed command name (or alias), ignoring case.
    pub fn lookup(name: &str) -> Option<Command> {
        match name.to_lowercase().as_str() {
            "help" => Some(Command::Help),
            "about" | "whoami" => Some(Command::About),
            "skills" => Some(Command::Skills),
            "projects" | "ls" => Some(Command::Projects),
            "links" | "social" => Some(Command::Links),
            "clear" => Some(Command::Clear),
            "cd" => Some(Command::Cd),
            "open" => Some(Command::Open),
            _ => None,
        }
    }

    /// Canonical name, as shown in `help`.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::About => "about",
            Command::Skills => "skills",
            Command::Projects => "projects",
            Command::Links => "links",
            Command::Clear => "clear",
            Command::Cd => "cd",
            Command::Open => "open",
        }
    }

    /// Alternate names accepted by `lookup`.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Command::About => &["whoami"],
            Command::Projects => &["ls"],
            Command::Links => &["social"],
            _ => &[],
        }
    }

    /// Static output for commands that ignore their arguments.
    ///
    /// `Clear`, `Cd` and `Open` act on shell state and return `None`.
    pub fn static_output(self) -> Option<Vec<String>> {
        match self {
            Command::Help => Some(render_help()),
            Command::About => Some(render_about()),
            Command::Skills => Some(render_skills()),
            Command::Projects => Some(render_projects()),
            Command::Links => Some(render_links()),
            Command::Clear | Command::Cd | Command::Open => None,
        }
    }
}

/// Every name `lookup` accepts, canonical names first.
pub fn known_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Command::ALL.iter().map(|c| c.name()).collect();
    for cmd in Command::ALL {
        names.extend_from_slice(cmd.aliases());
    }
    names
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

/// The greeting shown once on startup.
pub fn welcome_banner() -> String {
    [
        "┌────────────────────────────────────────────┐",
        "│  Terminal                                  │",
        "│  Type 'help' to get started                │",
        "└────────────────────────────────────────────┘",
    ]
    .join("\n")
}

pub fn render_help() -> Vec<String> {
    lines(&[
        "\nAvailable commands:",
        "  help        — show this help",
        "  projects    — list featured projects",
        "  about       — short bio",
        "  skills      — tech stack",
        "  links       — GitHub/Discord",
        "  clear       — clear the screen",
        "  cd <path>   — change directory (cosmetic)",
        "  open <url>  — open a link",
        "",
    ])
}

pub fn render_about() -> Vec<String> {
    lines(&[
        "\nabout.txt:",
        "  I’m a developer that focus on Backend, Game development with roblox studio & cybersecurity.",
        "  Sometimes i like to learn physics and math to spare time",
        "",
    ])
}

pub fn render_skills() -> Vec<String> {
    lines(&["\nskills.json:", "  [C, C++, Python, PHP, Linux, Lua]", ""])
}

pub fn render_links() -> Vec<String> {
    lines(&[
        "\nlinks:",
        "  GitHub   → https://github.com/swag-iwnl-m1",
        "  Discord  → add kido8518 ",
    ])
}

pub fn render_projects() -> Vec<String> {
    let mut out = Vec::with_capacity(PROJECTS.len() + 2);
    out.push(format!("\n./projects ({}):\n", PROJECTS.len()));
    for p in PROJECTS {
        out.push(format!(
            "  - {}\n      {}\n      tech: {}\n      open: {}",
            p.name, p.description, p.tech, p.url
        ));
    }
    out.push(String::new());
    out
}
