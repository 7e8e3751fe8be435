#![cfg(target_arch = "wasm32")]
use crate::audio::AudioEngine;
use instant::Instant;
use nav_core::{Catalog, Session, StarField, TravelStatus, Typewriter};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod narrative;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nav-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("nav-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #nav-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let session = Rc::new(RefCell::new(Session::new()));
    let audio = Rc::new(RefCell::new(AudioEngine::new()));

    // Menu from the static catalog, idle header state.
    let catalog = Rc::new(Catalog::new());
    overlay::render_menu(&document, &catalog);
    overlay::update_status(&document, TravelStatus::Idle);
    overlay::set_engage_ready(&document, false);

    // Audio stays locked (all effects drop silently) until the first gesture.
    events::wire_audio_unlock(audio.clone(), &document);

    let wiring = events::UiWiring {
        document: document.clone(),
        session: session.clone(),
        audio: audio.clone(),
        catalog: catalog.clone(),
    };
    events::wire_menu(&wiring);
    events::wire_engage(&wiring);
    events::wire_return(&wiring);

    let field = StarField::new(
        canvas.width() as f32,
        canvas.height() as f32,
        js_sys::Date::now() as u64,
    );
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        canvas,
        ctx2d,
        session,
        audio,
        field,
        typewriter: Typewriter::new(),
        last_instant: Instant::now(),
        type_accum_ms: 0.0,
        typed_source: String::new(),
        planet_phase: 0.0,
    }));
    // The loop and its resize subscription run until page teardown, which
    // cancels them together.
    let render_loop = Rc::new(RefCell::new(Some(frame::start_loop(frame_ctx))));
    let teardown = Closure::wrap(Box::new(move || {
        if let Some(mut render_loop) = render_loop.borrow_mut().take() {
            render_loop.cancel();
            log::info!("[lifecycle] render loop cancelled");
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("pagehide", teardown.as_ref().unchecked_ref());
    teardown.forget();

    Ok(())
}
