//! DOM wiring and the intro -> running -> game-over state machine.
//!
//! One `App` lives in a thread-local cell (the tick callback and the input
//! handlers all run on the same logical thread, strictly between frames, so
//! no locking is needed). The frame loop is a `requestAnimationFrame`
//! closure that only reschedules itself while the run is alive; any
//! transition out of `Running` cancels the pending handle so a stale
//! callback can never mutate a reset session.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::render::Renderer;
use crate::sim::{Action, GameSession, Phase, TickOutcome};
use crate::storage;

struct App {
    session: GameSession,
    renderer: Renderer,
    phase: Phase,
    high_score: u32,
    raf_handle: Option<i32>,
    view_width: f64,
    view_height: f64,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

thread_local! {
    static FRAME_CB: FrameCallback = Rc::new(RefCell::new(None));
}

/// Wire up the canvas, storage and input listeners, and show the intro
/// screen. The frame loop starts on the first start action.
pub fn start_runner() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let canvas: HtmlCanvasElement = doc
        .get_element_by_id("game")
        .ok_or_else(|| JsValue::from_str("no #game canvas"))?
        .dyn_into()?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into()?;
    ctx.set_image_smoothing_enabled(false);

    let view_width = canvas.width() as f64;
    let view_height = canvas.height() as f64;

    let seed = crate::performance_now().to_bits();
    let high_score = storage::load();
    let mut app = App {
        session: GameSession::new(view_width, view_height, seed),
        renderer: Renderer::new(ctx, view_width, view_height, seed),
        phase: Phase::Intro,
        high_score,
        raf_handle: None,
        view_width,
        view_height,
    };
    update_score_text(0, high_score);
    app.renderer.draw_intro(&app.session, app.high_score);
    APP.with(|cell| cell.replace(Some(app)));

    install_frame_loop();

    // Keyboard: space or arrow-up starts a run / jumps.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            let code = evt.code();
            if code == "Space" || code == "ArrowUp" {
                evt.prevent_default();
                primary_action();
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Pointer / touch press on the canvas.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            primary_action();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Optional explicit start control.
    if let Some(btn) = doc.get_element_by_id("start-btn") {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            primary_action();
        }) as Box<dyn FnMut(_)>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Shared start/jump input. Dispatch depends on the current phase only;
/// a start while already running is a no-op apart from the jump.
fn primary_action() {
    let begin_run = APP.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let Some(app) = borrow.as_mut() else {
            return false;
        };
        match app.phase.on_primary() {
            Action::Jump => {
                app.session.jump();
                false
            }
            Action::StartRun => {
                start_run(app);
                true
            }
        }
    });
    if begin_run {
        schedule_frame();
    }
}

/// Reset to a fresh run: stale frame handles are cancelled first so two
/// loops can never drive the same session.
fn start_run(app: &mut App) {
    cancel_pending_frame(app);
    let seed = crate::performance_now().to_bits();
    app.session = GameSession::new(app.view_width, app.view_height, seed);
    app.phase = Phase::Running;
    update_score_text(0, app.high_score);
    log::debug!("run started");
}

fn finish_run(app: &mut App) {
    app.phase = Phase::GameOver;
    cancel_pending_frame(app);
    if let Some(new_high) = storage::record_run(app.high_score, app.session.score) {
        app.high_score = new_high;
        storage::save(new_high);
    }
    update_score_text(app.session.score, app.high_score);
    app.renderer.draw_game_over(&app.session, app.high_score);
    log::debug!("run over at score {}", app.session.score);
}

fn install_frame_loop() {
    FRAME_CB.with(|cb_cell| {
        *cb_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let keep_going = APP.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let Some(app) = borrow.as_mut() else {
                    return false;
                };
                app.raf_handle = None;
                if app.phase != Phase::Running {
                    return false;
                }
                match app.session.tick() {
                    TickOutcome::Collision => {
                        finish_run(app);
                        false
                    }
                    TickOutcome::Running { cleared } => {
                        if cleared > 0 {
                            update_score_text(app.session.score, app.high_score);
                        }
                        app.renderer.draw_running(&app.session);
                        true
                    }
                }
            });
            if keep_going {
                schedule_frame();
            }
        }) as Box<dyn FnMut(f64)>));
    });
}

fn schedule_frame() {
    let handle = FRAME_CB.with(|cb_cell| {
        let cb = cb_cell.borrow();
        match (window(), cb.as_ref()) {
            (Some(win), Some(cb)) => win
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .ok(),
            _ => None,
        }
    });
    if let Some(handle) = handle {
        APP.with(|cell| {
            if let Some(app) = cell.borrow_mut().as_mut() {
                app.raf_handle = Some(handle);
            }
        });
    }
}

fn cancel_pending_frame(app: &mut App) {
    if let Some(handle) = app.raf_handle.take() {
        if let Some(win) = window() {
            let _ = win.cancel_animation_frame(handle);
        }
    }
}

/// Plain numeric score readout next to the canvas.
fn update_score_text(score: u32, high_score: u32) {
    if let Some(doc) = window().and_then(|w| w.document()) {
        if let Some(el) = doc.get_element_by_id("score") {
            el.set_text_content(Some(&score.to_string()));
        }
        if let Some(el) = doc.get_element_by_id("high-score") {
            el.set_text_content(Some(&high_score.to_string()));
        }
    }
}
