//! End-to-end scenarios: a configuration document through the presenter
//! to a recording render target.

use tilefx::{OverlayPresenter, TilePresenter, VisualConfig};
use tilefx_core::{FakeProbe, FakeTarget};
use tilefx_style::{DARK_OUTLINE, LIGHT_OUTLINE};

const DOCUMENT: &str = r#"{
    "tiles": {
        "2": {
            "text": "Stop Thinking",
            "animation": "Flash",
            "animationParams": { "durationOn": 100, "durationOff": 100, "textColor": "alternate" }
        },
        "16": {
            "text": "Fuzzy",
            "animation": "Vibrate",
            "animationParams": { "amplitude": 4, "speed": 40 }
        },
        "1024": {
            "text": "Drop",
            "animation": "RiseFall",
            "animationParams": { "duration": 800, "direction": "fall", "startDelay": 0 }
        }
    },
    "defaultText": "Deeper",
    "boardOverlay": [
        { "text": "Let Go More and More", "opacity": 0.2 },
        { "text": "SURRENDER", "opacity": 0.8 }
    ],
    "slideSpeed": 700,
    "slideEasing": "inertia"
}"#;

fn presenter() -> TilePresenter<FakeProbe> {
    let config = VisualConfig::from_json(DOCUMENT).unwrap();
    TilePresenter::new(config.tiles, FakeProbe::fixed(250.0))
}

#[test]
fn flash_tile_follows_the_alternate_timeline() {
    let mut presenter = presenter();
    let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
    presenter.decorate(shared, 2, 0);

    // Before the start delay the label is parked invisible.
    presenter.frame(300);
    assert!(!fake.borrow().visible);

    // Mid first visible phase: alternate index 0 is white on dark.
    presenter.frame(360);
    {
        let t = fake.borrow();
        assert!(t.visible);
        assert_eq!(t.color.as_deref(), Some("#ffffff"));
        assert_eq!(t.outline.as_deref(), Some(DARK_OUTLINE));
    }

    // Mid the off phase.
    presenter.frame(460);
    assert!(!fake.borrow().visible);

    // Mid the second visible phase: index 1 is black on light.
    presenter.frame(560);
    {
        let t = fake.borrow();
        assert!(t.visible);
        assert_eq!(t.color.as_deref(), Some("#000000"));
        assert_eq!(t.outline.as_deref(), Some(LIGHT_OUTLINE));
    }
}

#[test]
fn vibrate_tiles_share_one_registered_descriptor() {
    let mut presenter = presenter();
    let mut fakes = Vec::new();
    for _ in 0..4 {
        let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
        presenter.decorate(shared, 16, 0);
        fakes.push(fake);
    }

    assert_eq!(presenter.keyframes().len(), 1);
    assert!(presenter.keyframes().contains("tile-vibrate-a4-s40"));

    // Continuous mode: every tile buzzes after the start delay.
    presenter.frame(310);
    for fake in &fakes {
        let t = fake.borrow();
        let (key, playback) = t.playing.clone().expect("buzzing");
        assert_eq!(key, "tile-vibrate-a4-s40");
        assert_eq!(playback.duration_ms, 40);
    }
}

#[test]
fn labels_fit_once_layout_has_settled() {
    let mut presenter = presenter();
    let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
    presenter.decorate(shared, 2, 0);

    presenter.frame(16);
    assert_eq!(fake.borrow().font_size, None);
    presenter.frame(32);
    // Widest word probes at 250 against a 100px tile: 80px budget gives 32.
    assert_eq!(fake.borrow().font_size, Some(32.0));
}

#[test]
fn rise_fall_tile_moves_down_each_frame() {
    let mut presenter = presenter();
    let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
    fake.borrow_mut().content = tilefx::Size::new(60.0, 20.0);
    presenter.decorate(shared, 1024, 0);

    presenter.frame(0);
    let first = fake.borrow().top_offset.expect("positioned");
    presenter.frame(200);
    let second = fake.borrow().top_offset.expect("positioned");
    // fall: above the tile toward below it.
    assert_eq!(first, -20.0);
    assert!(second > first);
    assert!(fake.borrow().clipped);
}

#[test]
fn clearing_the_board_stops_everything() {
    let mut presenter = presenter();
    let (fake, shared) = FakeTarget::sized(100.0, 100.0).into_shared();
    presenter.decorate(shared, 16, 0);
    presenter.frame(310);
    assert!(fake.borrow().playing.is_some());

    presenter.clear();
    assert!(fake.borrow().playing.is_none());
    assert!(fake.borrow().halt_count > 0);
}

#[test]
fn resize_refits_labels_and_overlay_together() {
    let config = VisualConfig::from_json(DOCUMENT).unwrap();
    let mut presenter = TilePresenter::new(config.tiles, FakeProbe::fixed(250.0));

    let (tile, shared_tile) = FakeTarget::sized(100.0, 100.0).into_shared();
    presenter.decorate(shared_tile, 2, 0);
    presenter.frame(16);
    presenter.frame(32);
    assert_eq!(tile.borrow().font_size, Some(32.0));

    let (container, shared_container) = FakeTarget::sized(100.0, 100.0).into_shared();
    let (text, shared_text) = FakeTarget::sized(100.0, 100.0)
        .with_baseline_font_size(72.0)
        .with_scaled_content(200.0, 100.0, 72.0)
        .into_shared();
    let mut overlay = OverlayPresenter::new(config.overlay, shared_container, shared_text);
    overlay.select(Some(1));
    assert_eq!(text.borrow().text, "SURRENDER");
    assert_eq!(container.borrow().opacity, 0.8);
    assert_eq!(text.borrow().font_size, Some(32.0));

    // The board doubles in size; one coalesced pass refits both surfaces.
    tile.borrow_mut().layout = tilefx::Size::new(200.0, 200.0);
    container.borrow_mut().layout = tilefx::Size::new(200.0, 200.0);
    presenter.note_resize(1000);
    assert!(!presenter.frame(1100));
    let refit_ran = presenter.frame(1150);
    assert!(refit_ran);
    if refit_ran {
        overlay.refit();
    }
    assert_eq!(tile.borrow().font_size, Some(64.0));
    // 200px-wide content at 72px baseline fits the 180px bound at 64px.
    assert_eq!(text.borrow().font_size, Some(64.0));
}
