//! Character-by-character reveal for the welcome banner.
//!
//! A [`Reveal`] walks a string one char per tick and doubles as an
//! iterator over the successive prefixes. The [`Presenter`] owns one
//! reveal per banner entry still in the scrollback and drops it as soon as
//! the entry disappears, which is the only cancellation there is.

use std::collections::HashMap;
use std::time::Duration;

use crate::scrollback::{Entry, EntryId, Scrollback};

/// Default delay between two revealed characters.
pub const DEFAULT_TICK: Duration = Duration::from_millis(6);

/// Banner text gets the typewriter effect, everything else appears at once.
pub fn is_banner(text: &str) -> bool {
    text.starts_with('┌') || text.starts_with("Welcome")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    /// Number of chars shown so far, always less than the total.
    Revealing(usize),
    Complete,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    text: String,
    /// Byte offset of the visible prefix, always on a char boundary.
    shown: usize,
    shown_chars: usize,
    since_tick: Duration,
}

impl Reveal {
    /// Start hidden, with nothing shown.
    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
            shown_chars: 0,
            since_tick: Duration::ZERO,
        }
    }

    pub fn state(&self) -> RevealState {
        if self.shown == self.text.len() {
            RevealState::Complete
        } else if self.shown == 0 {
            RevealState::Hidden
        } else {
            RevealState::Revealing(self.shown_chars)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == RevealState::Complete
    }

    pub fn visible(&self) -> &str {
        &self.text[..self.shown]
    }

    /// Show one more char. Returns `false` once there was nothing left.
    pub fn tick(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(ch) => {
                self.shown += ch.len_utf8();
                self.shown_chars += 1;
                true
            }
            None => false,
        }
    }

    /// Feed wall time into this reveal's own timer, ticking once per
    /// `interval` elapsed. A zero interval finishes immediately.
    pub fn advance(&mut self, dt: Duration, interval: Duration) {
        if self.is_complete() {
            return;
        }
        if interval.is_zero() {
            self.shown = self.text.len();
            self.shown_chars = self.text.chars().count();
            return;
        }
        self.since_tick += dt;
        while self.since_tick >= interval {
            self.since_tick -= interval;
            if !self.tick() {
                break;
            }
        }
        if self.is_complete() {
            self.since_tick = Duration::ZERO;
        }
    }
}

impl Iterator for Reveal {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.tick() {
            Some(self.visible().to_string())
        } else {
            None
        }
    }
}

/// Reveal state for every banner entry currently on screen.
#[derive(Debug)]
pub struct Presenter {
    interval: Duration,
    reveals: HashMap<EntryId, Reveal>,
}

impl Presenter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            reveals: HashMap::new(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start reveals for new banner entries and cancel those whose entry
    /// is gone.
    pub fn sync(&mut self, scrollback: &Scrollback) {
        if scrollback.is_empty() {
            self.reveals.clear();
            return;
        }
        self.reveals.retain(|id, _| scrollback.contains(*id));
        for entry in scrollback.entries() {
            if is_banner(&entry.text) && !self.reveals.contains_key(&entry.id) {
                log::debug!("starting reveal for entry {:?}", entry.id);
                self.reveals.insert(entry.id, Reveal::hidden(entry.text.clone()));
            }
        }
    }

    /// Advance every running reveal by `dt` of wall time.
    pub fn advance(&mut self, dt: Duration) {
        for reveal in self.reveals.values_mut() {
            reveal.advance(dt, self.interval);
        }
    }

    pub fn is_animating(&self) -> bool {
        self.reveals.values().any(|r| !r.is_complete())
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.reveals.len()
    }

    /// The part of `entry` that should be drawn right now.
    pub fn visible<'a>(&'a self, entry: &'a Entry) -> &'a str {
        match self.reveals.get(&entry.id) {
            Some(reveal) => reveal.visible(),
            None => &entry.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrollback::EntryKind;

    #[test]
    fn banner_classification() {
        assert!(is_banner("┌──┐"));
        assert!(is_banner("Welcome to the terminal"));
        assert!(!is_banner("welcome"));
        assert!(!is_banner(" ┌"));
        assert!(!is_banner(""));
    }

    #[test]
    fn reveal_walks_states_and_stops() {
        let text = "┌─x";
        let mut r = Reveal::hidden(text);
        assert_eq!(r.state(), RevealState::Hidden);
        assert_eq!(r.visible(), "");
        assert!(r.tick());
        assert_eq!(r.state(), RevealState::Revealing(1));
        assert_eq!(r.visible(), "┌");
        assert!(r.tick());
        assert!(r.tick());
        assert_eq!(r.state(), RevealState::Complete);
        assert_eq!(r.visible(), text);
        assert!(!r.tick());
        assert_eq!(r.visible(), text);
    }

    #[test]
    fn reveal_iterates_prefixes() {
        let frames: Vec<String> = Reveal::hidden("abc").collect();
        assert_eq!(frames, ["a", "ab", "abc"]);
        assert_eq!(Reveal::hidden("").next(), None);
    }

    #[test]
    fn advance_ticks_per_interval() {
        let interval = Duration::from_millis(6);
        let mut r = Reveal::hidden("abcdef");
        r.advance(Duration::from_millis(5), interval);
        assert_eq!(r.visible(), "");
        r.advance(Duration::from_millis(1), interval);
        assert_eq!(r.visible(), "a");
        r.advance(Duration::from_millis(13), interval);
        assert_eq!(r.visible(), "abc");
        r.advance(Duration::from_secs(1), interval);
        assert_eq!(r.state(), RevealState::Complete);
    }

    #[test]
    fn zero_interval_completes_at_once() {
        let mut r = Reveal::hidden("abc");
        r.advance(Duration::ZERO, Duration::ZERO);
        assert!(r.is_complete());
    }

    #[test]
    fn presenter_reveals_only_banners() {
        let mut sb = Scrollback::new();
        let banner = sb.push(EntryKind::Output, "┌──┐");
        sb.push(EntryKind::Output, "plain");
        let mut p = Presenter::new(Duration::from_millis(6));
        p.sync(&sb);
        assert_eq!(p.tracked(), 1);
        assert!(p.is_animating());
        assert_eq!(p.visible(&sb.entries()[0]), "");
        assert_eq!(p.visible(&sb.entries()[1]), "plain");

        p.advance(Duration::from_millis(6 * 4));
        assert_eq!(p.visible(&sb.entries()[0]), "┌──┐");
        assert!(!p.is_animating());
        assert_eq!(sb.entries()[0].id, banner);
    }

    #[test]
    fn presenter_cancels_on_clear() {
        let mut sb = Scrollback::new();
        sb.push(EntryKind::Output, "Welcome");
        let mut p = Presenter::new(DEFAULT_TICK);
        p.sync(&sb);
        assert!(p.is_animating());
        sb.clear();
        p.sync(&sb);
        assert_eq!(p.tracked(), 0);
        assert!(!p.is_animating());
    }

    #[test]
    fn sync_does_not_restart_finished_reveal() {
        let mut sb = Scrollback::new();
        sb.push(EntryKind::Output, "┌");
        let mut p = Presenter::new(DEFAULT_TICK);
        p.sync(&sb);
        p.advance(DEFAULT_TICK);
        p.sync(&sb);
        assert_eq!(p.visible(&sb.entries()[0]), "┌");
    }
}
