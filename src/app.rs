use std::time::{Duration, Instant};

use eframe::egui;

use crate::commands::Command;
use crate::config::Config;
use crate::opener::EguiOpener;
use crate::scrollback::EntryKind;
use crate::shell::Shell;
use crate::typewriter::Presenter;

const BACKGROUND: egui::Color32 = egui::Color32::BLACK;
const PANEL: egui::Color32 = egui::Color32::from_rgb(11, 15, 5);
const BORDER: egui::Color32 = egui::Color32::from_rgb(53, 92, 10);
const TEXT: egui::Color32 = egui::Color32::from_rgb(197, 243, 107);
const PROMPT: egui::Color32 = egui::Color32::from_rgb(139, 213, 36);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(156, 217, 59);
const DIM: egui::Color32 = egui::Color32::from_rgb(122, 163, 29);
const ERROR: egui::Color32 = egui::Color32::from_rgb(255, 100, 100);

const FONT_SIZE: f32 = 15.0;
const CURSOR_BLINK: Duration = Duration::from_millis(500);

pub struct TerminalApp {
    config: Config,
    shell: Shell,
    presenter: Presenter,
    show_cursor: bool,
    last_cursor_blink: Instant,
    last_frame: Instant,
}

impl TerminalApp {
    pub fn new(config: Config) -> Self {
        let shell = Shell::new(&config);
        let mut presenter = Presenter::new(config.typewriter_interval());
        presenter.sync(&shell.scrollback);
        Self {
            config,
            shell,
            presenter,
            show_cursor: true,
            last_cursor_blink: Instant::now(),
            last_frame: Instant::now(),
        }
    }

    fn handle_key(&mut self, ctx: &egui::Context, key: egui::Key, modifiers: egui::Modifiers) {
        if modifiers.ctrl || modifiers.command {
            match key {
                // Ctrl+L - clear screen
                egui::Key::L => self.shell.clear(),
                // Ctrl+U - drop the line being typed
                egui::Key::U => self.shell.input.clear(),
                _ => {}
            }
            return;
        }
        match key {
            egui::Key::Enter => {
                let mut opener = EguiOpener::new(ctx, self.config.allow_open);
                self.shell.submit_input(&mut opener);
                // Show the cursor right away on the fresh prompt
                self.show_cursor = true;
                self.last_cursor_blink = Instant::now();
            }
            egui::Key::Backspace => self.shell.input.backspace(),
            egui::Key::Delete => self.shell.input.delete(),
            egui::Key::ArrowLeft => self.shell.input.move_left(),
            egui::Key::ArrowRight => self.shell.input.move_right(),
            egui::Key::Home => self.shell.input.move_home(),
            egui::Key::End => self.shell.input.move_end(),
            egui::Key::ArrowUp => self.shell.input.history_prev(),
            egui::Key::ArrowDown => self.shell.input.history_next(),
            egui::Key::Tab => {
                if !self.shell.input.complete() {
                    log::debug!("no completion for {:?}", self.shell.input.text());
                }
            }
            _ => {}
        }
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::none()
                    .fill(PANEL)
                    .stroke(egui::Stroke::new(1.0, BORDER))
                    .inner_margin(egui::Margin::symmetric(16.0, 10.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for color in [
                        egui::Color32::from_rgb(239, 68, 68),
                        egui::Color32::from_rgb(234, 179, 8),
                        egui::Color32::from_rgb(34, 197, 94),
                    ] {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                        ui.painter().circle_filled(rect.center(), 6.0, color);
                    }
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new(&self.config.title_bar)
                            .font(egui::FontId::monospace(FONT_SIZE))
                            .color(ACCENT),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        // Right-to-left, so listed in reverse.
                        for cmd in [Command::About, Command::Projects, Command::Help] {
                            let link = ui.link(
                                egui::RichText::new(cmd.name())
                                    .font(egui::FontId::monospace(12.0))
                                    .color(ACCENT),
                            );
                            if link.clicked() {
                                self.shell.quick(cmd);
                            }
                        }
                    });
                });
            });
    }

    fn footer(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer")
            .frame(
                egui::Frame::none()
                    .fill(PANEL)
                    .stroke(egui::Stroke::new(1.0, BORDER))
                    .inner_margin(egui::Margin::symmetric(16.0, 12.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.config.footer)
                            .font(egui::FontId::monospace(12.0))
                            .color(DIM),
                    );
                });
            });
    }

    fn prompt_line(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(self.shell.prompt())
                    .font(egui::FontId::monospace(FONT_SIZE))
                    .color(PROMPT),
            );

            let (before, after) = self.shell.input.split_at_cursor();
            let mut display_input = before.to_string();
            if self.show_cursor {
                display_input.push('█');
            }
            display_input.push_str(after);
            ui.label(
                egui::RichText::new(display_input)
                    .font(egui::FontId::monospace(FONT_SIZE))
                    .color(TEXT),
            );
            if self.shell.input.is_empty() {
                ui.label(
                    egui::RichText::new("type a command, e.g. projects")
                        .font(egui::FontId::monospace(FONT_SIZE))
                        .color(DIM),
                );
            }
        });
    }
}

impl eframe::App for TerminalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        // Handle cursor blinking
        if self.last_cursor_blink.elapsed() > CURSOR_BLINK {
            self.show_cursor = !self.show_cursor;
            self.last_cursor_blink = now;
        }
        ctx.request_repaint_after(CURSOR_BLINK);

        // Collected first: opening a link needs the context unlocked.
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    modifiers,
                    ..
                } => self.handle_key(ctx, key, modifiers),
                egui::Event::Text(text) => self.shell.input.insert_str(&text),
                egui::Event::Paste(text) => self.shell.input.insert_str(&text),
                _ => {}
            }
        }

        self.top_bar(ctx);
        self.footer(ctx);

        self.presenter.sync(&self.shell.scrollback);
        self.presenter.advance(dt);
        if self.presenter.is_animating() {
            ctx.request_repaint_after(self.presenter.interval());
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND).inner_margin(egui::Margin::same(24.0)))
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(&self.config.tip)
                        .font(egui::FontId::monospace(12.0))
                        .color(ACCENT),
                );
                // Status bar
                ui.small(
                    egui::RichText::new(format!(
                        "{} | {} lines | {} commands | Ctrl+L: clear",
                        self.shell.cwd(),
                        self.shell.scrollback.len(),
                        self.shell.input.history().len()
                    ))
                    .color(DIM),
                );
                ui.add_space(8.0);

                egui::Frame::none()
                    .fill(PANEL)
                    .stroke(egui::Stroke::new(1.0, BORDER))
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        egui::ScrollArea::vertical()
                            .stick_to_bottom(true)
                            .auto_shrink([false, false])
                            .show(ui, |ui| {
                                ui.with_layout(
                                    egui::Layout::top_down_justified(egui::Align::LEFT),
                                    |ui| {
                                        for entry in self.shell.scrollback.entries() {
                                            let color = match entry.kind {
                                                EntryKind::Echo => PROMPT,
                                                EntryKind::Output => TEXT,
                                                EntryKind::Error => ERROR,
                                            };
                                            ui.label(
                                                egui::RichText::new(self.presenter.visible(entry))
                                                    .font(egui::FontId::monospace(FONT_SIZE))
                                                    .color(color),
                                            );
                                        }
                                        self.prompt_line(ui);
                                    },
                                );
                            });
                    });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_starts_hidden() {
        let app = TerminalApp::new(Config::default());
        assert!(app.presenter.is_animating());
        let banner = &app.shell.scrollback.entries()[0];
        assert_eq!(app.presenter.visible(banner), "");
    }

    #[test]
    fn enter_submits_and_ctrl_l_clears() {
        let ctx = egui::Context::default();
        let mut app = TerminalApp::new(Config::default());
        app.shell.input.insert_str("skills");
        app.handle_key(&ctx, egui::Key::Enter, egui::Modifiers::NONE);
        assert!(app.shell.input.is_empty());
        assert_eq!(
            app.shell.scrollback.entries()[1].text,
            "guest@you:~/portfolio$ skills"
        );

        app.handle_key(&ctx, egui::Key::L, egui::Modifiers::CTRL);
        assert_eq!(app.shell.scrollback.len(), 0);
    }

    #[test]
    fn arrows_recall_history() {
        let ctx = egui::Context::default();
        let mut app = TerminalApp::new(Config::default());
        app.shell.input.insert_str("cd src");
        app.handle_key(&ctx, egui::Key::Enter, egui::Modifiers::NONE);
        app.handle_key(&ctx, egui::Key::ArrowUp, egui::Modifiers::NONE);
        assert_eq!(app.shell.input.text(), "cd src");
        app.handle_key(&ctx, egui::Key::ArrowDown, egui::Modifiers::NONE);
        assert!(app.shell.input.is_empty());
        assert_eq!(app.shell.cwd(), "~/portfolio/src");
    }
}
