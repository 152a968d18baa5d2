//! Carousel engine behaviour as seen by the prev/next controls.

use std::cell::Cell;
use std::rc::Rc;

use tf_ui::core::carousel::{
    CarouselEvent, CarouselOptions, EngineSnapshot, ScrollEngine, ScrollIntent, key_intent,
    swipe_intent,
};

#[test]
fn controls_disable_at_the_ends() {
    let mut engine = ScrollEngine::new(CarouselOptions::default(), 5);
    let snapshot = engine.snapshot();
    assert!(!snapshot.can_scroll_prev);
    assert!(snapshot.can_scroll_next);

    while engine.scroll_next() {}
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.selected, 4);
    assert!(snapshot.can_scroll_prev);
    assert!(!snapshot.can_scroll_next);
}

#[test]
fn looping_enables_both_controls_with_many_snaps() {
    let options = CarouselOptions {
        looping: true,
        ..CarouselOptions::default()
    };
    let mut engine = ScrollEngine::new(options, 5);
    for _ in 0..5 {
        let snapshot = engine.snapshot();
        assert!(snapshot.can_scroll_prev && snapshot.can_scroll_next);
        engine.scroll_next();
    }
    assert_eq!(engine.selected_snap(), 0);
}

#[test]
fn select_listeners_drive_control_state() {
    let mut engine = ScrollEngine::new(CarouselOptions::default(), 3);
    let can_prev = Rc::new(Cell::new(engine.can_scroll_prev()));
    let can_next = Rc::new(Cell::new(engine.can_scroll_next()));
    for event in [CarouselEvent::Select, CarouselEvent::ReInit] {
        let prev = Rc::clone(&can_prev);
        let next = Rc::clone(&can_next);
        engine.on(event, move |snapshot| {
            prev.set(snapshot.can_scroll_prev);
            next.set(snapshot.can_scroll_next);
        });
    }

    if let Some(intent) = key_intent("ArrowRight") {
        engine.scroll(intent);
    }
    assert!(can_prev.get());
    assert!(can_next.get());

    engine.reinit(2, 1);
    assert!(can_prev.get());
    assert!(!can_next.get());

    engine.reinit(1, 1);
    assert!(!can_prev.get());
    assert!(!can_next.get());
}

#[test]
fn swipes_past_the_threshold_scroll() {
    let options = CarouselOptions {
        drag_threshold_px: 30.0,
        ..CarouselOptions::default()
    };
    let mut engine = ScrollEngine::new(options, 3);
    let threshold = engine.options().drag_threshold_px;
    assert_eq!(swipe_intent(200.0, 180.0, threshold), None);
    let intent = swipe_intent(200.0, 120.0, threshold);
    assert_eq!(intent, Some(ScrollIntent::Next));
    if let Some(intent) = intent {
        assert!(engine.scroll(intent));
    }
    assert_eq!(engine.selected_snap(), 1);
}

/// Mount order of the organism: the engine starts empty, the content effect
/// lays out the slides, and only then does the provider subscribe.
fn mounted(options: CarouselOptions, slides: usize) -> (ScrollEngine, Rc<Cell<EngineSnapshot>>) {
    let mut engine = ScrollEngine::new(options, 0);
    let shown = Rc::new(Cell::new(engine.snapshot()));
    engine.reinit(slides, 1);
    let sink = Rc::clone(&shown);
    engine.watch(move |snapshot| sink.set(*snapshot));
    (engine, shown)
}

#[test]
fn controls_reflect_slides_laid_out_before_subscription() {
    let (mut engine, shown) = mounted(CarouselOptions::default(), 5);
    assert_eq!(shown.get().snap_count, 5);
    assert!(!shown.get().can_scroll_prev);
    assert!(shown.get().can_scroll_next);

    engine.scroll_to(4);
    assert!(shown.get().can_scroll_prev);
    assert!(!shown.get().can_scroll_next);
}

#[test]
fn start_index_survives_the_empty_first_render() {
    let options = CarouselOptions {
        start_index: 2,
        ..CarouselOptions::default()
    };
    let (engine, shown) = mounted(options, 5);
    assert_eq!(engine.selected_snap(), 2);
    assert_eq!(shown.get().selected, 2);
    assert!(shown.get().can_scroll_prev);
    assert!(shown.get().can_scroll_next);
}

#[test]
fn start_index_past_the_end_lands_on_the_last_snap() {
    let options = CarouselOptions {
        start_index: 9,
        ..CarouselOptions::default()
    };
    let (_, shown) = mounted(options, 3);
    assert_eq!(shown.get().selected, 2);
    assert!(!shown.get().can_scroll_next);
}
