use anyhow::Context as _;
use eframe::egui;

mod app;
mod commands;
mod config;
mod error;
mod input;
mod opener;
mod path;
mod projects;
mod scrollback;
mod shell;
mod typewriter;

use app::TerminalApp;
use config::Config;

fn main() -> anyhow::Result<()> {
    // A .env file is optional
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().context("failed to load configuration")?;
    log::info!(
        "starting {} as {}@{} in {}",
        env!("CARGO_PKG_NAME"),
        config.user,
        config.host,
        config.cwd
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title(config.window_title.clone())
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "termfolio",
        options,
        Box::new(|cc| {
            let mut visuals = egui::Visuals::dark();
            visuals.window_fill = egui::Color32::BLACK;
            visuals.panel_fill = egui::Color32::BLACK;
            visuals.extreme_bg_color = egui::Color32::BLACK;
            cc.egui_ctx.set_visuals(visuals);

            Ok(Box::new(TerminalApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    log::info!("shut down cleanly");
    Ok(())
}
