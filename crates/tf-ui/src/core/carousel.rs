//! Scroll engine behind the carousel organism.
//!
//! The engine tracks snap points, the selected snap and its listeners. It has
//! no notion of pixels beyond the drag threshold; the component turns the
//! selected snap into a CSS translation via [`ScrollEngine::offset_percent`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Slides laid out left to right.
    #[default]
    Horizontal,
    /// Slides stacked top to bottom.
    Vertical,
}

impl Orientation {
    /// Value for `aria-orientation` / `data-orientation`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Engine options. Missing JSON fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselOptions {
    /// Wrap from the last snap to the first and back.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Snap selected on mount.
    pub start_index: usize,
    /// Slides advanced per step; zero is treated as one.
    pub slides_to_scroll: usize,
    /// Minimum pointer travel before a drag counts as a swipe.
    pub drag_threshold_px: f64,
    /// Autoplay interval; `None` disables autoplay.
    pub autoplay_ms: Option<u32>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            looping: false,
            start_index: 0,
            slides_to_scroll: 1,
            drag_threshold_px: 10.0,
            autoplay_ms: None,
        }
    }
}

/// Events listeners can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CarouselEvent {
    /// The selected snap changed.
    Select,
    /// Slides or options changed and snaps were recomputed.
    ReInit,
}

/// Handle returned by [`ScrollEngine::on`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Direction of a requested scroll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Towards the first slide.
    Prev,
    /// Towards the last slide.
    Next,
}

/// Read-only view handed to listeners and the component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineSnapshot {
    /// Selected snap index.
    pub selected: usize,
    /// Snap selected before the last change.
    pub previous: usize,
    /// Number of snap points.
    pub snap_count: usize,
    /// Whether a previous snap is reachable.
    pub can_scroll_prev: bool,
    /// Whether a next snap is reachable.
    pub can_scroll_next: bool,
}

type Listener = Box<dyn FnMut(&EngineSnapshot)>;

/// Snap bookkeeping for a carousel.
pub struct ScrollEngine {
    options: CarouselOptions,
    slide_count: usize,
    slides_in_view: usize,
    selected: usize,
    previous: usize,
    listeners: Vec<(ListenerId, CarouselEvent, Listener)>,
    next_listener: u64,
}

impl fmt::Debug for ScrollEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollEngine")
            .field("options", &self.options)
            .field("slide_count", &self.slide_count)
            .field("slides_in_view", &self.slides_in_view)
            .field("selected", &self.selected)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ScrollEngine {
    /// Engine for `slide_count` slides with one slide in view.
    #[must_use]
    pub fn new(options: CarouselOptions, slide_count: usize) -> Self {
        let mut engine = Self {
            options,
            slide_count,
            slides_in_view: 1,
            selected: 0,
            previous: 0,
            listeners: Vec::new(),
            next_listener: 0,
        };
        engine.selected = engine.clamp_snap(engine.options.start_index);
        engine.previous = engine.selected;
        engine
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &CarouselOptions {
        &self.options
    }

    fn step(&self) -> usize {
        self.options.slides_to_scroll.max(1)
    }

    /// Number of snap points for the current layout.
    #[must_use]
    pub fn snap_count(&self) -> usize {
        let in_view = self.slides_in_view.max(1);
        if self.slide_count == 0 {
            0
        } else if self.slide_count <= in_view {
            1
        } else {
            (self.slide_count - in_view).div_ceil(self.step()) + 1
        }
    }

    fn clamp_snap(&self, index: usize) -> usize {
        index.min(self.snap_count().saturating_sub(1))
    }

    /// Selected snap index.
    #[must_use]
    pub const fn selected_snap(&self) -> usize {
        self.selected
    }

    /// Whether scrolling back is possible.
    #[must_use]
    pub fn can_scroll_prev(&self) -> bool {
        if self.options.looping {
            self.snap_count() > 1
        } else {
            self.selected > 0
        }
    }

    /// Whether scrolling forward is possible.
    #[must_use]
    pub fn can_scroll_next(&self) -> bool {
        let snaps = self.snap_count();
        if self.options.looping {
            snaps > 1
        } else {
            self.selected + 1 < snaps
        }
    }

    /// Current state as a copyable value.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            selected: self.selected,
            previous: self.previous,
            snap_count: self.snap_count(),
            can_scroll_prev: self.can_scroll_prev(),
            can_scroll_next: self.can_scroll_next(),
        }
    }

    /// Slide indices visible at the selected snap.
    #[must_use]
    pub fn slides_in_view(&self) -> std::ops::Range<usize> {
        let in_view = self.slides_in_view.max(1).min(self.slide_count);
        let start = (self.selected * self.step()).min(self.slide_count - in_view);
        start..start + in_view
    }

    /// Translation of the slide track, as a percentage of the viewport.
    #[must_use]
    pub fn offset_percent(&self) -> f64 {
        let in_view = self.slides_in_view.max(1);
        #[allow(clippy::cast_precision_loss)]
        let offset = self.slides_in_view().start as f64 * 100.0 / in_view as f64;
        -offset
    }

    /// Move one snap back. Returns whether the selection changed.
    pub fn scroll_prev(&mut self) -> bool {
        if !self.can_scroll_prev() {
            return false;
        }
        let target = if self.selected == 0 {
            self.snap_count() - 1
        } else {
            self.selected - 1
        };
        self.select(target)
    }

    /// Move one snap forward. Returns whether the selection changed.
    pub fn scroll_next(&mut self) -> bool {
        if !self.can_scroll_next() {
            return false;
        }
        let target = if self.selected + 1 >= self.snap_count() {
            0
        } else {
            self.selected + 1
        };
        self.select(target)
    }

    /// Jump to a snap, clamped to the valid range.
    pub fn scroll_to(&mut self, index: usize) -> bool {
        let target = self.clamp_snap(index);
        self.select(target)
    }

    /// Apply a keyboard or swipe intent.
    pub fn scroll(&mut self, intent: ScrollIntent) -> bool {
        match intent {
            ScrollIntent::Prev => self.scroll_prev(),
            ScrollIntent::Next => self.scroll_next(),
        }
    }

    /// Advance for autoplay, rewinding to the first snap at the end.
    pub fn autoplay_tick(&mut self) -> bool {
        if self.can_scroll_next() {
            self.scroll_next()
        } else {
            self.scroll_to(0)
        }
    }

    /// Recompute snaps after the slide set or layout changed.
    ///
    /// The first layout with slides selects `start_index`; later layouts keep
    /// the current snap where it still exists.
    pub fn reinit(&mut self, slide_count: usize, slides_in_view: usize) {
        let was_empty = self.snap_count() == 0;
        self.slide_count = slide_count;
        self.slides_in_view = slides_in_view.max(1);
        if was_empty {
            self.selected = self.clamp_snap(self.options.start_index);
            self.previous = self.selected;
        } else {
            self.selected = self.clamp_snap(self.selected);
            self.previous = self.clamp_snap(self.previous);
        }
        tracing::debug!(
            slide_count,
            slides_in_view = self.slides_in_view,
            snaps = self.snap_count(),
            "carousel reinitialised"
        );
        self.emit(CarouselEvent::ReInit);
    }

    fn select(&mut self, target: usize) -> bool {
        if target == self.selected {
            return false;
        }
        self.previous = self.selected;
        self.selected = target;
        tracing::debug!(from = self.previous, to = target, "carousel snap selected");
        self.emit(CarouselEvent::Select);
        true
    }

    /// Subscribe to an event.
    pub fn on(
        &mut self,
        event: CarouselEvent,
        listener: impl FnMut(&EngineSnapshot) + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, event, Box::new(listener)));
        id
    }

    /// Subscribe to `Select` and `ReInit` with one listener and replay the
    /// current state to it, so a subscriber that arrives after the first
    /// layout still starts in sync.
    pub fn watch(
        &mut self,
        listener: impl FnMut(&EngineSnapshot) + Clone + 'static,
    ) -> [ListenerId; 2] {
        let mut replay = listener.clone();
        replay(&self.snapshot());
        [
            self.on(CarouselEvent::Select, listener.clone()),
            self.on(CarouselEvent::ReInit, listener),
        ]
    }

    /// Drop a subscription. Returns whether it existed.
    pub fn off(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _, _)| *candidate != id);
        before != self.listeners.len()
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn emit(&mut self, event: CarouselEvent) {
        let snapshot = self.snapshot();
        for (_, kind, listener) in &mut self.listeners {
            if *kind == event {
                listener(&snapshot);
            }
        }
    }
}

/// Map a key press on the carousel region to a scroll.
///
/// Only the horizontal arrows are bound, for both orientations.
#[must_use]
pub fn key_intent(key: &str) -> Option<ScrollIntent> {
    match key {
        "ArrowLeft" => Some(ScrollIntent::Prev),
        "ArrowRight" => Some(ScrollIntent::Next),
        _ => None,
    }
}

/// Interpret pointer travel along the scroll axis as a swipe.
///
/// Dragging towards the start (negative travel) reveals the next slide.
#[must_use]
pub fn swipe_intent(start: f64, end: f64, threshold_px: f64) -> Option<ScrollIntent> {
    let travel = end - start;
    if !travel.is_finite() || travel.abs() < threshold_px.max(f64::EPSILON) {
        return None;
    }
    if travel < 0.0 {
        Some(ScrollIntent::Next)
    } else {
        Some(ScrollIntent::Prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn engine(slides: usize) -> ScrollEngine {
        ScrollEngine::new(CarouselOptions::default(), slides)
    }

    #[test]
    fn flags_at_the_edges() {
        let mut carousel = engine(5);
        assert!(!carousel.can_scroll_prev());
        assert!(carousel.can_scroll_next());
        carousel.scroll_to(4);
        assert!(carousel.can_scroll_prev());
        assert!(!carousel.can_scroll_next());
        assert!(!carousel.scroll_next());
    }

    #[test]
    fn looping_wraps_both_ways() {
        let options = CarouselOptions {
            looping: true,
            ..CarouselOptions::default()
        };
        let mut carousel = ScrollEngine::new(options, 3);
        assert!(carousel.can_scroll_prev());
        assert!(carousel.scroll_prev());
        assert_eq!(carousel.selected_snap(), 2);
        assert!(carousel.scroll_next());
        assert_eq!(carousel.selected_snap(), 0);
    }

    #[test]
    fn looping_single_snap_cannot_scroll() {
        let options = CarouselOptions {
            looping: true,
            ..CarouselOptions::default()
        };
        let carousel = ScrollEngine::new(options, 1);
        assert!(!carousel.can_scroll_prev());
        assert!(!carousel.can_scroll_next());
    }

    #[test]
    fn snaps_account_for_view_and_step() {
        let mut carousel = ScrollEngine::new(
            CarouselOptions {
                slides_to_scroll: 2,
                ..CarouselOptions::default()
            },
            7,
        );
        carousel.reinit(7, 3);
        assert_eq!(carousel.snap_count(), 3);
        carousel.scroll_to(2);
        assert_eq!(carousel.slides_in_view(), 4..7);
        carousel.reinit(2, 3);
        assert_eq!(carousel.snap_count(), 1);
        assert_eq!(carousel.selected_snap(), 0);
        carousel.reinit(0, 1);
        assert_eq!(carousel.snap_count(), 0);
        assert_eq!(carousel.slides_in_view(), 0..0);
    }

    #[test]
    fn start_index_is_clamped() {
        let carousel = ScrollEngine::new(
            CarouselOptions {
                start_index: 9,
                ..CarouselOptions::default()
            },
            4,
        );
        assert_eq!(carousel.selected_snap(), 3);
        assert!((carousel.offset_percent() + 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn listeners_receive_snapshots_until_removed() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut carousel = engine(3);
        let sink = Rc::clone(&seen);
        let id = carousel.on(CarouselEvent::Select, move |snapshot| {
            sink.borrow_mut().push(snapshot.selected);
        });
        let reinit_hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&reinit_hits);
        carousel.on(CarouselEvent::ReInit, move |_| *counter.borrow_mut() += 1);

        carousel.scroll_next();
        carousel.scroll_next();
        carousel.reinit(3, 1);
        assert!(carousel.off(id));
        assert!(!carousel.off(id));
        carousel.scroll_prev();

        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(*reinit_hits.borrow(), 1);
        assert_eq!(carousel.listener_count(), 1);
    }

    #[test]
    fn first_layout_selects_start_index() {
        let options = CarouselOptions {
            start_index: 2,
            ..CarouselOptions::default()
        };
        let mut carousel = ScrollEngine::new(options, 0);
        assert_eq!(carousel.selected_snap(), 0);
        carousel.reinit(5, 1);
        assert_eq!(carousel.selected_snap(), 2);
        assert_eq!(carousel.snapshot().previous, 2);
        carousel.scroll_next();
        carousel.reinit(6, 1);
        assert_eq!(carousel.selected_snap(), 3);
    }

    #[test]
    fn watch_replays_state_to_late_subscribers() {
        let mut carousel = engine(0);
        carousel.reinit(4, 1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let ids = carousel.watch(move |snapshot| sink.borrow_mut().push(*snapshot));
        assert_eq!(carousel.listener_count(), 2);
        assert_eq!(seen.borrow().len(), 1);
        assert!(seen.borrow()[0].can_scroll_next);
        carousel.scroll_next();
        assert_eq!(seen.borrow().len(), 2);
        for id in ids {
            assert!(carousel.off(id));
        }
        assert_eq!(carousel.listener_count(), 0);
    }

    #[test]
    fn autoplay_rewinds_at_the_end() {
        let mut carousel = engine(2);
        assert!(carousel.autoplay_tick());
        assert_eq!(carousel.selected_snap(), 1);
        assert!(carousel.autoplay_tick());
        assert_eq!(carousel.selected_snap(), 0);
    }

    #[test]
    fn keyboard_and_swipe_intents() {
        assert_eq!(key_intent("ArrowLeft"), Some(ScrollIntent::Prev));
        assert_eq!(key_intent("ArrowRight"), Some(ScrollIntent::Next));
        assert_eq!(key_intent("ArrowDown"), None);
        assert_eq!(swipe_intent(100.0, 40.0, 10.0), Some(ScrollIntent::Next));
        assert_eq!(swipe_intent(40.0, 100.0, 10.0), Some(ScrollIntent::Prev));
        assert_eq!(swipe_intent(40.0, 45.0, 10.0), None);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: CarouselOptions =
            serde_json::from_str(r#"{"loop":true,"autoplay_ms":3000}"#).expect("options");
        assert!(options.looping);
        assert_eq!(options.slides_to_scroll, 1);
        assert_eq!(options.autoplay_ms, Some(3000));
    }
}
