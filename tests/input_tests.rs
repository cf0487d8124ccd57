// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn moves_without_press_do_not_drag() {
    let mut s = OrbitInput::default();
    s.moved(10.0, 10.0);
    s.moved(50.0, 30.0);
    assert!(s.take_delta().is_zero());
    assert_eq!((s.last_x, s.last_y), (50.0, 30.0));
}

#[test]
fn drag_accumulates_until_taken() {
    let mut s = OrbitInput::default();
    s.press(100.0, 100.0);
    s.moved(110.0, 95.0);
    s.moved(130.0, 90.0);
    let d = s.take_delta();
    assert_eq!(d.dx, 30.0);
    assert_eq!(d.dy, -10.0);
    assert!(s.take_delta().is_zero());

    s.release();
    s.moved(500.0, 500.0);
    assert!(s.take_delta().is_zero());
}

#[test]
fn press_resets_the_anchor() {
    let mut s = OrbitInput::default();
    s.moved(400.0, 400.0);
    s.press(10.0, 10.0);
    s.moved(12.0, 10.0);
    assert_eq!(s.take_delta().dx, 2.0);
}

#[test]
fn wheel_sums_and_ignores_non_finite() {
    let mut s = OrbitInput::default();
    s.scroll(100.0);
    s.scroll(-40.0);
    s.scroll(f32::NAN);
    s.scroll(f32::INFINITY);
    let d = s.take_delta();
    assert_eq!(d.wheel, 60.0);
    assert_eq!((d.dx, d.dy), (0.0, 0.0));
}
