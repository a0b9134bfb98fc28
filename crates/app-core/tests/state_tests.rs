// Backdrop display mode: name selection and the camera-unavailable fallback.

use app_core::state::BackgroundMode;

#[test]
fn background_mode_names_round_trip() {
    for (name, mode) in [
        ("default", BackgroundMode::Default),
        ("camera", BackgroundMode::Camera),
        ("beautiful", BackgroundMode::Beautiful),
    ] {
        assert_eq!(BackgroundMode::from_name(name), Some(mode));
    }
    assert_eq!(BackgroundMode::from_name("plaid"), None);
}

#[test]
fn unavailable_backdrop_degrades_to_default() {
    // A denied camera permission must never be fatal; the scene falls back.
    assert_eq!(BackgroundMode::Camera.degraded(), BackgroundMode::Default);
    assert_eq!(BackgroundMode::Beautiful.degraded(), BackgroundMode::Default);
    assert_eq!(BackgroundMode::Default.degraded(), BackgroundMode::Default);
}
