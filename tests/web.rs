//! Browser-side smoke tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn session_ticks_in_the_browser() {
    let mut session = duck_dash::sim::GameSession::new(480.0, 270.0, 1);
    assert!(matches!(
        session.tick(),
        duck_dash::sim::TickOutcome::Running { .. }
    ));
}

#[wasm_bindgen_test]
fn high_score_roundtrips_through_local_storage() {
    duck_dash::storage::save(9);
    assert_eq!(duck_dash::storage::load(), 9);
}
