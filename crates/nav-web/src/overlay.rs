use crate::dom;
use nav_core::{Catalog, Destination, TravelStatus, DESTINATIONS};
use web_sys as web;

const GASES: [&str; 4] = ["氮气", "二氧化碳", "甲烷", "氢气"];

#[inline]
pub fn set_hidden(document: &web::Document, element_id: &str, hidden: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if hidden {
            _ = cl.add_1("hidden");
            // fallback for environments without CSS class
            _ = el.set_attribute("style", "display:none");
        } else {
            _ = cl.remove_1("hidden");
            _ = el.set_attribute("style", "");
        }
    }
}

/// Header status line, mirroring the current travel status.
pub fn update_status(document: &web::Document, status: TravelStatus) {
    let (text, tag) = match status {
        TravelStatus::Idle => ("状态: 系统待机 (STANDBY)", "idle"),
        TravelStatus::Warping => ("状态: 跃迁引擎启动 (ENGAGED)", "warping"),
        TravelStatus::Arrived => ("状态: 抵达目的地 (ARRIVED)", "arrived"),
    };
    dom::set_text(document, "status-text", text);
    if let Some(el) = document.get_element_by_id("status-light") {
        _ = el.set_attribute("data-status", tag);
    }
}

/// Build the destination card grid from the catalog.
pub fn render_menu(document: &web::Document, catalog: &Catalog) {
    dom::set_text(
        document,
        "menu-subtitle",
        &format!("正在扫描附近扇区... 发现 {} 个宜居信号", catalog.len()),
    );
    if let Some(grid) = document.get_element_by_id("dest-grid") {
        let mut html = String::new();
        for d in catalog.iter() {
            html.push_str(&format!(
                concat!(
                    "<button class='dest-card' id='dest-{id}'>",
                    "<div class='dest-head'><h3>{name}</h3><p>{kind}</p></div>",
                    "<p class='dest-distance'>距离: {distance}</p>",
                    "<p class='dest-desc'>{description}</p>",
                    "<span class='dest-id'>ID: {id_upper}</span>",
                    "</button>"
                ),
                id = d.id,
                id_upper = d.id.to_uppercase(),
                name = d.name,
                kind = d.kind,
                distance = d.distance,
                description = d.description,
            ));
        }
        grid.set_inner_html(&html);
    }
}

/// Mark the locked card (if any) and clear the rest.
pub fn highlight_selection(document: &web::Document, selected_id: Option<&str>) {
    for d in DESTINATIONS {
        if let Some(el) = document.get_element_by_id(&format!("dest-{}", d.id)) {
            let cl = el.class_list();
            if selected_id == Some(d.id) {
                _ = cl.add_1("selected");
            } else {
                _ = cl.remove_1("selected");
            }
        }
    }
}

pub fn set_engage_ready(document: &web::Document, ready: bool) {
    if let Some(el) = document.get_element_by_id("engage-btn") {
        el.set_text_content(Some(if ready {
            "启动 光速跃迁"
        } else {
            "等待目标确认"
        }));
        if ready {
            _ = el.remove_attribute("disabled");
        } else {
            _ = el.set_attribute("disabled", "");
        }
    }
}

/// Populate and reveal the arrival panel for a destination, with the
/// original's randomized environmental readouts.
pub fn show_arrival(document: &web::Document, dest: &Destination) {
    dom::set_text(document, "arrival-name", dest.name);
    dom::set_text(document, "arrival-kind", dest.kind);
    dom::set_text(document, "arrival-distance", dest.distance);

    let gravity = js_sys::Math::random();
    let temp = (js_sys::Math::random() * 300.0 - 150.0).floor();
    let gas = GASES[(js_sys::Math::random() * GASES.len() as f64).floor() as usize % GASES.len()];
    let habitability = (js_sys::Math::random() * 100.0).floor();
    if let Some(el) = document.get_element_by_id("arrival-meta") {
        el.set_inner_html(&format!(
            concat!(
                "<div>重力: {gravity:.2}g</div>",
                "<div>温度: {temp:.0}°C</div>",
                "<div>大气: {gas}</div>",
                "<div>宜居度: {habitability:.0}%</div>"
            ),
            gravity = gravity,
            temp = temp,
            gas = gas,
            habitability = habitability,
        ));
    }
    if let Some(el) = document.get_element_by_id("arrival-panel") {
        let [r, g, b] = dest.glow.rgb();
        _ = el.set_attribute("style", &format!("border-color: rgb({r}, {g}, {b})"));
        _ = el.class_list().remove_1("hidden");
    }
}

pub fn set_log_text(document: &web::Document, text: &str) {
    dom::set_text(document, "log-text", text);
}

pub fn show_log_loading(document: &web::Document) {
    set_log_text(document, "正在解密量子信号...");
}
