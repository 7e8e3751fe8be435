use crate::audio::AudioEngine;
use crate::events::play_cues;
use crate::{narrative, overlay, render};
use instant::Instant;
use nav_core::constants::TYPE_INTERVAL_MS;
use nav_core::{Session, StarField, TravelStatus, Typewriter};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Everything the per-frame tick owns or shares with the event wiring.
pub struct FrameContext {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,

    pub session: Rc<RefCell<Session>>,
    pub audio: Rc<RefCell<AudioEngine>>,
    pub field: StarField,
    pub typewriter: Typewriter,

    pub last_instant: Instant,
    pub type_accum_ms: f64,
    /// The log text currently feeding the typewriter; a mismatch against the
    /// session restarts the reveal.
    pub typed_source: String,
    pub planet_phase: f64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f64();

        // Track the backing-store size; particles are not renormalized.
        let cw = self.canvas.width() as f32;
        let ch = self.canvas.height() as f32;
        if cw != self.field.width() || ch != self.field.height() {
            self.field.resize(cw, ch);
        }

        // Warp countdown. Arrival starts the narrative fetch for exactly the
        // session that issued it.
        let arrival = self.session.borrow_mut().advance(dt);
        if let Some(arrival) = arrival {
            play_cues(&self.audio.borrow(), &arrival.cues);
            overlay::set_hidden(&self.document, "warp-overlay", true);
            overlay::show_arrival(&self.document, arrival.destination);
            overlay::show_log_loading(&self.document);
            overlay::update_status(&self.document, TravelStatus::Arrived);
            self.planet_phase = 0.0;

            let session = self.session.clone();
            let token = arrival.fetch_token;
            let dest = arrival.destination;
            spawn_local(async move {
                let text = narrative::fetch_arrival_log(dest).await;
                if !session.borrow_mut().apply_log(token, text) {
                    log::info!("[narrative] discarding log for a stale session");
                }
            });
        }

        let (status, selected) = {
            let s = self.session.borrow();
            (s.status(), s.selected())
        };
        let warping = status == TravelStatus::Warping;

        self.field.step(warping);
        render::draw_star_field(&self.ctx2d, &self.field, warping);

        if status == TravelStatus::Arrived {
            if let Some(dest) = selected {
                self.planet_phase += dt_sec;
                render::draw_planet(&self.ctx2d, dest, self.planet_phase, cw as f64, ch as f64);
            }
        }

        self.feed_typewriter(dt_sec * 1000.0);
    }

    /// Restart the reveal when the session's log changes identity, then pace
    /// it on the configured per-character interval.
    fn feed_typewriter(&mut self, dt_ms: f64) {
        {
            let s = self.session.borrow();
            if !s.log_pending() && s.travel_log() != self.typed_source {
                self.typed_source = s.travel_log().to_string();
                self.typewriter.set_text(&self.typed_source);
                self.type_accum_ms = 0.0;
            }
        }
        if self.typewriter.is_done() {
            return;
        }
        self.type_accum_ms += dt_ms;
        while self.type_accum_ms >= TYPE_INTERVAL_MS {
            self.type_accum_ms -= TYPE_INTERVAL_MS;
            let Some(tick) = self.typewriter.tick() else {
                break;
            };
            if tick.play_tick {
                self.audio.borrow().play_data_stream();
            }
            if tick.revealed.is_some() {
                overlay::set_log_text(&self.document, &self.typewriter.visible());
            }
            if tick.completed {
                log::debug!("[typewriter] reveal complete");
                break;
            }
        }
    }
}

/// Handle for the requestAnimationFrame loop. The loop owns its resize
/// subscription, so `cancel` tears both down at once; pending typewriter and
/// countdown work dies with it.
pub struct RenderLoop {
    active: Rc<Cell<bool>>,
    resize: Option<Closure<dyn FnMut()>>,
}

impl RenderLoop {
    pub fn cancel(&mut self) {
        self.active.set(false);
        if let Some(closure) = self.resize.take() {
            if let Some(w) = web::window() {
                _ = w.remove_event_listener_with_callback(
                    "resize",
                    closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> RenderLoop {
    // The backing store tracks CSS size * devicePixelRatio for as long as
    // the loop lives.
    let canvas = frame_ctx.borrow().canvas.clone();
    crate::dom::sync_canvas_backing_size(&canvas);
    let resize = Closure::wrap(Box::new(move || {
        crate::dom::sync_canvas_backing_size(&canvas);
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
    }

    let active = Rc::new(Cell::new(true));
    let active_tick = active.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !active_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    RenderLoop {
        active,
        resize: Some(resize),
    }
}
