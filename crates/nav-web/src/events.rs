use crate::audio::AudioEngine;
use crate::overlay;
use nav_core::{Catalog, Cue, Session, TravelStatus};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct UiWiring {
    pub document: web::Document,
    pub session: Rc<RefCell<Session>>,
    pub audio: Rc<RefCell<AudioEngine>>,
    pub catalog: Rc<Catalog>,
}

pub fn play_cues(audio: &AudioEngine, cues: &[Cue]) {
    for cue in cues {
        match cue {
            Cue::Click => audio.play_click(),
            Cue::WarpEngage => audio.play_warp_engage(),
            Cue::Arrival => audio.play_arrival(),
        }
    }
}

/// One-time audio unlock on the very first click or key-press anywhere,
/// regardless of experience state. Later interactions never re-trigger it.
pub fn wire_audio_unlock(audio: Rc<RefCell<AudioEngine>>, document: &web::Document) {
    static UNLOCKED: AtomicBool = AtomicBool::new(false);
    for event in ["click", "keydown"] {
        let audio = audio.clone();
        let doc = document.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if UNLOCKED.swap(true, Ordering::SeqCst) {
                return;
            }
            audio.borrow_mut().init();
            audio.borrow().resume();
            overlay::set_hidden(&doc, "unlock-overlay", true);
            log::info!("[gesture] audio unlocked");
        }) as Box<dyn FnMut()>);
        if let Some(win) = web::window() {
            _ = win.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

/// Destination card clicks and hover ticks. Cards dispatch by id through the
/// catalog, the same key the card elements are generated under.
pub fn wire_menu(w: &UiWiring) {
    for dest in w.catalog.iter() {
        let card_id = format!("dest-{}", dest.id);
        let id = dest.id;

        let wc = w.clone();
        crate::dom::add_click_listener(&w.document, &card_id, move || {
            let Some(dest) = wc.catalog.get(id) else {
                return;
            };
            let cues = wc.session.borrow_mut().select(dest);
            play_cues(&wc.audio.borrow(), &cues);
            overlay::highlight_selection(&wc.document, Some(dest.id));
            overlay::set_engage_ready(&wc.document, true);
            if !cues.is_empty() {
                log::info!("[ui] lock on {}", dest.id);
            }
        });

        let wh = w.clone();
        crate::dom::add_listener(&w.document, &card_id, "pointerenter", move || {
            wh.audio.borrow().play_hover();
        });
    }
}

/// Warp engage control.
pub fn wire_engage(w: &UiWiring) {
    let wc = w.clone();
    crate::dom::add_click_listener(&w.document, "engage-btn", move || {
        let Some(cues) = wc.session.borrow_mut().confirm_warp() else {
            return;
        };
        play_cues(&wc.audio.borrow(), &cues);
        overlay::set_hidden(&wc.document, "menu-panel", true);
        overlay::set_hidden(&wc.document, "warp-overlay", false);
        overlay::set_log_text(&wc.document, "");
        overlay::update_status(&wc.document, TravelStatus::Warping);
        log::info!("[ui] warp engaged");
    });

    let wh = w.clone();
    crate::dom::add_listener(&w.document, "engage-btn", "pointerenter", move || {
        if wh.session.borrow().selected().is_some() {
            wh.audio.borrow().play_hover();
        }
    });
}

/// Disconnect control on the arrival panel.
pub fn wire_return(w: &UiWiring) {
    let wc = w.clone();
    crate::dom::add_click_listener(&w.document, "return-btn", move || {
        let cues = wc.session.borrow_mut().disconnect();
        if cues.is_empty() {
            return;
        }
        play_cues(&wc.audio.borrow(), &cues);
        overlay::set_hidden(&wc.document, "arrival-panel", true);
        overlay::set_hidden(&wc.document, "menu-panel", false);
        overlay::highlight_selection(&wc.document, None);
        overlay::set_engage_ready(&wc.document, false);
        overlay::set_log_text(&wc.document, "");
        overlay::update_status(&wc.document, TravelStatus::Idle);
        log::info!("[ui] disconnected");
    });

    let wh = w.clone();
    crate::dom::add_listener(&w.document, "return-btn", "pointerenter", move || {
        wh.audio.borrow().play_hover();
    });
}
