//! Slide deck position and auto-play.
//!
//! `SlideDeck` is the index arithmetic. `Slider` adds the track it moves and
//! the single auto-play timer it owns.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::platform::{Scheduler, SlideTrack};

/// Index into a fixed, non-empty sequence of slides. Wraps both ways.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDeck {
    index: usize,
    len: usize,
}

impl SlideDeck {
    /// Returns `None` for an empty deck.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Horizontal offset of the track in percent, assuming full-width slides.
    pub fn offset_percent(&self) -> i64 {
        -(self.index as i64) * 100
    }

    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }
}

#[derive(Debug)]
struct Track<T> {
    deck: SlideDeck,
    track: T,
}

impl<T: SlideTrack> Track<T> {
    fn advance(&mut self) {
        self.deck.next();
        self.sync();
    }

    fn retreat(&mut self) {
        self.deck.previous();
        self.sync();
    }

    fn sync(&self) {
        tracing::trace!(index = self.deck.index(), "slider moved");
        self.track.set_transform(&self.deck.transform());
    }
}

/// Slider controller with hover-pausable auto-play.
///
/// At most one auto-play timer exists: `resume` drops the old handle before
/// scheduling a new one, and `pause` drops it outright.
pub struct Slider<S: Scheduler, T> {
    track: Rc<RefCell<Track<T>>>,
    scheduler: S,
    interval_ms: u32,
    autoplay: Option<S::Handle>,
}

impl<S: Scheduler, T: SlideTrack + 'static> Slider<S, T> {
    /// Build a slider over `len` slides and start auto-play. Returns `None`
    /// when there are no slides.
    pub fn new(track: T, len: usize, scheduler: S, interval_ms: u32) -> Option<Self> {
        let deck = SlideDeck::new(len)?;
        let mut slider = Self {
            track: Rc::new(RefCell::new(Track { deck, track })),
            scheduler,
            interval_ms,
            autoplay: None,
        };
        slider.resume();
        Some(slider)
    }

    pub fn index(&self) -> usize {
        self.track.borrow().deck.index()
    }

    pub fn len(&self) -> usize {
        self.track.borrow().deck.len()
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn next(&self) {
        self.track.borrow_mut().advance();
    }

    pub fn previous(&self) {
        self.track.borrow_mut().retreat();
    }

    /// Cancel auto-play.
    pub fn pause(&mut self) {
        self.autoplay = None;
    }

    /// Start a fresh auto-play timer. The interval restarts from zero.
    pub fn resume(&mut self) {
        self.autoplay = None;
        let track: Weak<RefCell<Track<T>>> = Rc::downgrade(&self.track);
        let handle = self.scheduler.interval(
            self.interval_ms,
            Box::new(move || {
                if let Some(track) = track.upgrade() {
                    track.borrow_mut().advance();
                }
            }),
        );
        self.autoplay = Some(handle);
    }
}

impl<S: Scheduler, T> std::fmt::Debug for Slider<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("index", &self.track.borrow().deck.index)
            .field("interval_ms", &self.interval_ms)
            .field("playing", &self.autoplay.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTrack, VirtualScheduler};

    #[test]
    fn test_empty_deck_rejected() {
        assert!(SlideDeck::new(0).is_none());
        let sched = VirtualScheduler::new();
        assert!(Slider::new(FakeTrack::default(), 0, sched.clone(), 5000).is_none());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn test_next_wraps_after_last() {
        let mut deck = SlideDeck::new(4).unwrap();
        deck.next();
        deck.next();
        assert_eq!(deck.next(), 3);
        assert_eq!(deck.next(), 0);
    }

    #[test]
    fn test_previous_wraps_before_first() {
        let mut deck = SlideDeck::new(4).unwrap();
        assert_eq!(deck.previous(), 3);
        assert_eq!(deck.previous(), 2);
    }

    #[test]
    fn test_index_stays_in_range() {
        for len in 1..6 {
            let mut deck = SlideDeck::new(len).unwrap();
            for step in 0..20 {
                if step % 3 == 0 {
                    deck.previous();
                } else {
                    deck.next();
                }
                assert!(deck.index() < len);
            }
        }
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        for len in 1..6 {
            let mut deck = SlideDeck::new(len).unwrap();
            for _ in 0..len {
                let before = deck.index();
                deck.next();
                deck.previous();
                assert_eq!(deck.index(), before);
                deck.next();
            }
        }
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut deck = SlideDeck::new(1).unwrap();
        assert_eq!(deck.next(), 0);
        assert_eq!(deck.previous(), 0);
    }

    #[test]
    fn test_transform() {
        let mut deck = SlideDeck::new(4).unwrap();
        insta::assert_snapshot!(deck.transform(), @"translateX(0%)");
        deck.next();
        deck.next();
        deck.next();
        insta::assert_snapshot!(deck.transform(), @"translateX(-300%)");
    }

    #[test]
    fn test_buttons_move_track() {
        let sched = VirtualScheduler::new();
        let track = FakeTrack::default();
        let slider = Slider::new(track.clone(), 4, sched, 5000).unwrap();
        // The track is not touched until the first move.
        assert_eq!(track.transform(), None);

        slider.next();
        assert_eq!(track.transform().as_deref(), Some("translateX(-100%)"));
        slider.previous();
        slider.previous();
        assert_eq!(slider.index(), 3);
        assert_eq!(track.transform().as_deref(), Some("translateX(-300%)"));
    }

    #[test]
    fn test_autoplay_fires_once_per_interval() {
        let sched = VirtualScheduler::new();
        let track = FakeTrack::default();
        let slider = Slider::new(track.clone(), 4, sched.clone(), 5000).unwrap();

        sched.advance(4999);
        assert_eq!(slider.index(), 0);
        sched.advance(1);
        assert_eq!(slider.index(), 1);
        sched.advance(5000);
        assert_eq!(slider.index(), 2);
        sched.advance(10_000);
        assert_eq!(slider.index(), 0);
        assert_eq!(track.transform().as_deref(), Some("translateX(0%)"));
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let sched = VirtualScheduler::new();
        let mut slider = Slider::new(FakeTrack::default(), 4, sched.clone(), 5000).unwrap();

        slider.pause();
        assert!(!slider.is_playing());
        assert_eq!(sched.pending(), 0);
        sched.advance(60_000);
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn test_resume_restarts_window() {
        let sched = VirtualScheduler::new();
        let mut slider = Slider::new(FakeTrack::default(), 4, sched.clone(), 5000).unwrap();

        sched.advance(4000);
        slider.pause();
        sched.advance(500);
        slider.resume();

        // The old 5s window does not carry over.
        sched.advance(4999);
        assert_eq!(slider.index(), 0);
        sched.advance(1);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn test_resume_never_stacks_timers() {
        let sched = VirtualScheduler::new();
        let mut slider = Slider::new(FakeTrack::default(), 4, sched.clone(), 5000).unwrap();

        slider.resume();
        slider.resume();
        assert_eq!(sched.pending(), 1);

        sched.advance(5000);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn test_dropping_slider_cancels_autoplay() {
        let sched = VirtualScheduler::new();
        let slider = Slider::new(FakeTrack::default(), 3, sched.clone(), 5000).unwrap();
        drop(slider);
        assert_eq!(sched.pending(), 0);
    }
}
