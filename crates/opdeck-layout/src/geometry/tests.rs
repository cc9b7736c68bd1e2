//! Tests for width clamping, persistence restore, and the drag gesture.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use opdeck_common::LayoutError;
use opdeck_config::schema::{PanelDescriptor, PanelPosition};

use super::*;

fn panels() -> Vec<PanelDescriptor> {
    vec![
        PanelDescriptor::sized("left", PanelPosition::Left, 280.0, 200.0, 600.0),
        PanelDescriptor::main("main"),
        PanelDescriptor::sized("right", PanelPosition::Right, 320.0, 240.0, 560.0),
    ]
}

#[derive(Clone, Default)]
struct RecordingSink(Rc<RefCell<Vec<(String, f64)>>>);

impl WidthSink for RecordingSink {
    fn width_committed(&mut self, panel_id: &str, width: f64) {
        self.0.borrow_mut().push((panel_id.to_string(), width));
    }
}

/// Counts live captures.
#[derive(Clone, Default)]
struct CountingHost(Rc<Cell<i32>>);

impl PointerHost for CountingHost {
    fn capture(&mut self, _panel_id: &str) -> PointerCapture {
        self.0.set(self.0.get() + 1);
        let live = Rc::clone(&self.0);
        PointerCapture::new(move || live.set(live.get() - 1))
    }
}

#[test]
fn defaults_are_clamped_at_construction() {
    let mut descriptors = panels();
    descriptors[0].default_width = 900.0;
    let store = PanelGeometryStore::new(&descriptors).unwrap();
    assert_eq!(store.width("left"), Some(600.0));
    assert_eq!(store.width("right"), Some(320.0));
    assert_eq!(store.width("main"), None);
}

#[test]
fn invalid_bounds_rejected() {
    let mut descriptors = panels();
    descriptors[2].min_width = 700.0;
    let err = PanelGeometryStore::new(&descriptors).err().unwrap();
    assert!(matches!(err, LayoutError::InvalidBounds { ref id, .. } if id == "right"));
}

#[test]
fn persisted_widths_are_clamped_and_filtered() {
    let persisted = BTreeMap::from([
        ("left".to_string(), 150.0),
        ("right".to_string(), 400.0),
        ("main".to_string(), 999.0),
        ("ghost".to_string(), 300.0),
    ]);
    let store = PanelGeometryStore::new(&panels())
        .unwrap()
        .with_persisted(&persisted);
    assert_eq!(store.width("left"), Some(200.0));
    assert_eq!(store.width("right"), Some(400.0));
    assert_eq!(store.width("main"), None);
    assert_eq!(store.widths().len(), 2);
}

#[test]
fn set_width_clamps_and_reports() {
    let sink = RecordingSink::default();
    let mut store = PanelGeometryStore::new(&panels())
        .unwrap()
        .with_sink(Box::new(sink.clone()));
    assert_eq!(store.set_width("left", 10_000.0).unwrap(), 600.0);
    assert_eq!(store.set_width("left", 600.0).unwrap(), 600.0);
    assert_eq!(sink.0.borrow().as_slice(), &[("left".to_string(), 600.0)]);
    assert!(matches!(
        store.set_width("main", 100.0),
        Err(LayoutError::NotResizable(_))
    ));
    assert!(matches!(
        store.set_width("ghost", 100.0),
        Err(LayoutError::UnknownPanel(_))
    ));
}

#[test]
fn left_drag_clamps_to_max() {
    let sink = RecordingSink::default();
    let mut store = PanelGeometryStore::new(&panels())
        .unwrap()
        .with_sink(Box::new(sink.clone()));
    store.begin_drag("left", 100.0).unwrap();
    assert_eq!(store.pointer_move(1000.0), Some(600.0));
    assert_eq!(store.pointer_up(), Some(("left".to_string(), 600.0)));
    assert_eq!(sink.0.borrow().last(), Some(&("left".to_string(), 600.0)));
}

#[test]
fn left_drag_rightward_grows() {
    let mut store = PanelGeometryStore::new(&panels()).unwrap();
    store.begin_drag("left", 280.0).unwrap();
    let mut last = store.width("left").unwrap();
    for x in [290.0, 320.0, 400.0] {
        let width = store.pointer_move(x).unwrap();
        assert!(width > last);
        last = width;
    }
    assert_eq!(store.pointer_move(100.0), Some(200.0));
}

#[test]
fn right_drag_leftward_grows() {
    let mut store = PanelGeometryStore::new(&panels()).unwrap();
    store.begin_drag("right", 1000.0).unwrap();
    assert_eq!(store.pointer_move(950.0), Some(370.0));
    assert_eq!(store.pointer_move(1100.0), Some(240.0));
    assert_eq!(store.pointer_move(0.0), Some(560.0));
}

#[test]
fn width_always_within_bounds() {
    let mut store = PanelGeometryStore::new(&panels()).unwrap();
    let mut x: f64 = 500.0;
    for step in 0..200 {
        if step % 25 == 0 {
            store.pointer_up();
            store.begin_drag(if step % 50 == 0 { "left" } else { "right" }, x).unwrap();
        }
        x += if step % 3 == 0 { -173.0 } else { 97.0 };
        store.pointer_move(x);
        for id in ["left", "right"] {
            let (min, max) = store.bounds(id).unwrap();
            let width = store.width(id).unwrap();
            assert!((min..=max).contains(&width), "{id} = {width}");
        }
    }
}

#[test]
fn non_finite_positions_never_reach_the_sink() {
    let sink = RecordingSink::default();
    let mut store = PanelGeometryStore::new(&panels())
        .unwrap()
        .with_sink(Box::new(sink.clone()));
    assert!(matches!(
        store.begin_drag("left", f64::NAN),
        Err(LayoutError::NonFinite(_))
    ));
    assert!(!store.is_dragging());

    store.begin_drag("left", 100.0).unwrap();
    assert_eq!(store.pointer_move(f64::NAN), None);
    assert_eq!(store.pointer_move(f64::INFINITY), None);
    assert!(store.is_dragging());
    assert_eq!(store.width("left"), Some(280.0));
    assert_eq!(store.pointer_move(150.0), Some(330.0));

    assert!(matches!(
        store.set_width("right", f64::NEG_INFINITY),
        Err(LayoutError::NonFinite(_))
    ));
    assert_eq!(store.width("right"), Some(320.0));
    assert_eq!(sink.0.borrow().as_slice(), &[("left".to_string(), 330.0)]);
}

#[test]
fn main_panel_cannot_be_dragged() {
    let mut store = PanelGeometryStore::new(&panels()).unwrap();
    assert!(matches!(
        store.begin_drag("main", 0.0),
        Err(LayoutError::NotResizable(_))
    ));
    assert!(!store.is_dragging());
    assert_eq!(store.pointer_move(50.0), None);
}

#[test]
fn capture_released_on_pointer_up() {
    let host = CountingHost::default();
    let mut store = PanelGeometryStore::new(&panels())
        .unwrap()
        .with_pointer_host(Box::new(host.clone()));
    store.begin_drag("left", 0.0).unwrap();
    assert_eq!(host.0.get(), 1);
    assert_eq!(store.dragging_panel(), Some("left"));
    store.pointer_up();
    assert_eq!(host.0.get(), 0);
    assert_eq!(store.pointer_up(), None);
}

#[test]
fn capture_released_when_store_dropped_mid_drag() {
    let host = CountingHost::default();
    let mut store = PanelGeometryStore::new(&panels())
        .unwrap()
        .with_pointer_host(Box::new(host.clone()));
    store.begin_drag("right", 0.0).unwrap();
    drop(store);
    assert_eq!(host.0.get(), 0);
}

#[test]
fn new_gesture_replaces_old_capture() {
    let host = CountingHost::default();
    let mut store = PanelGeometryStore::new(&panels())
        .unwrap()
        .with_pointer_host(Box::new(host.clone()));
    store.begin_drag("left", 0.0).unwrap();
    store.begin_drag("right", 0.0).unwrap();
    assert_eq!(host.0.get(), 1);
    assert_eq!(store.dragging_panel(), Some("right"));
}
