//! Command dispatch: one submitted line in, scrollback and prompt updated.
//!
//! All terminal state lives in [`Shell`]. The egui layer only forwards
//! input here and draws what it finds, so every behavior below is tested
//! without a window.

use crate::commands::{welcome_banner, Command};
use crate::config::Config;
use crate::input::InputBuffer;
use crate::opener::UrlOpener;
use crate::path::resolve;
use crate::projects;
use crate::scrollback::{EntryKind, Scrollback};

pub const OPEN_USAGE: &str = "Usage: open <url|project-key>";

pub struct Shell {
    user: String,
    host: String,
    cwd: String,
    pub scrollback: Scrollback,
    pub input: InputBuffer,
}

impl Shell {
    /// A fresh session showing the welcome banner.
    pub fn new(config: &Config) -> Self {
        let mut shell = Self::empty(config);
        shell.scrollback.push(EntryKind::Output, welcome_banner());
        shell
    }

    /// A session with nothing printed yet.
    pub fn empty(config: &Config) -> Self {
        Self {
            user: config.user.clone(),
            host: config.host.clone(),
            cwd: config.cwd.clone(),
            scrollback: Scrollback::new(),
            input: InputBuffer::new(),
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$", self.user, self.host, self.cwd)
    }

    /// Submit whatever is in the input buffer (Enter).
    pub fn submit_input(&mut self, opener: &mut dyn UrlOpener) {
        let line = self.input.take();
        self.submit(&line, opener);
    }

    /// Run one raw command line.
    pub fn submit(&mut self, raw: &str, opener: &mut dyn UrlOpener) {
        let line = raw.trim();
        if line.is_empty() {
            self.input.clear();
            return;
        }

        let echo = format!("{} {}", self.prompt(), line);
        self.scrollback.push(EntryKind::Echo, echo);
        self.input.push_history(line);

        let mut tokens = line.split_whitespace();
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();
        log::debug!("dispatch {name:?} args={args:?}");

        match Command::lookup(name) {
            Some(cmd) => self.run(cmd, &args, opener),
            None => {
                self.scrollback.push(
                    EntryKind::Error,
                    format!("Command not found: {name}. Type 'help'"),
                );
            }
        }

        self.input.clear();
    }

    fn run(&mut self, cmd: Command, args: &[&str], opener: &mut dyn UrlOpener) {
        match cmd {
            Command::Clear => self.clear(),
            Command::Cd => {
                let arg = args.first().copied().unwrap_or_default();
                self.cwd = resolve(&self.cwd, arg);
            }
            Command::Open => {
                let (kind, line) = open_target(&args.join(" "), opener);
                self.scrollback.push(kind, line);
            }
            Command::Help
            | Command::About
            | Command::Skills
            | Command::Projects
            | Command::Links => self.print(cmd),
        }
    }

    fn print(&mut self, cmd: Command) {
        if let Some(block) = cmd.static_output() {
            self.scrollback.push_block(EntryKind::Output, block);
        }
    }

    /// Print a command's output without echoing a prompt line.
    ///
    /// Backs the quick-action links; commands that need arguments or act on
    /// shell state do nothing here.
    pub fn quick(&mut self, cmd: Command) {
        log::debug!("quick action {}", cmd.name());
        self.print(cmd);
    }

    /// Wipe the screen, leaving no trace of the `clear` itself.
    pub fn clear(&mut self) {
        self.scrollback.clear();
    }
}

/// Resolve `open`'s argument and try to launch it. Returns the line to
/// print; a failing opener is reported, never raised.
pub fn open_target(arg: &str, opener: &mut dyn UrlOpener) -> (EntryKind, String) {
    let query = arg.trim();
    if query.is_empty() {
        return (EntryKind::Output, OPEN_USAGE.to_string());
    }

    let target = projects::find(query).map_or(query, |p| p.url);
    match opener.open_new_tab(target) {
        Ok(()) => {
            log::info!("opening {target}");
            (EntryKind::Output, format!("opening → {target}"))
        }
        Err(e) => {
            log::warn!("failed to open {target}: {e}");
            (EntryKind::Error, format!("failed to open: {target}"))
        }
    }
}
