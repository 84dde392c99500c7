//! Handing links to the host for `open`.

use eframe::egui;

use crate::error::OpenError;

/// Something that can show a URL in a new browser tab.
pub trait UrlOpener {
    fn open_new_tab(&mut self, url: &str) -> Result<(), OpenError>;
}

/// Opens links through egui, which asks the platform for a new tab without
/// passing on an opener or referrer.
pub struct EguiOpener<'a> {
    ctx: &'a egui::Context,
    allowed: bool,
}

impl<'a> EguiOpener<'a> {
    pub fn new(ctx: &'a egui::Context, allowed: bool) -> Self {
        Self { ctx, allowed }
    }
}

impl UrlOpener for EguiOpener<'_> {
    fn open_new_tab(&mut self, url: &str) -> Result<(), OpenError> {
        if !self.allowed {
            return Err(OpenError::Blocked);
        }
        self.ctx.open_url(egui::OpenUrl::new_tab(url));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_egui_opener_blocks() {
        let ctx = egui::Context::default();
        let mut opener = EguiOpener::new(&ctx, false);
        assert_eq!(opener.open_new_tab("https://x"), Err(OpenError::Blocked));
    }

    #[test]
    fn enabled_egui_opener_queues_url() {
        let ctx = egui::Context::default();
        let mut opener = EguiOpener::new(&ctx, true);
        assert!(opener.open_new_tab("https://example.com").is_ok());
    }
}
