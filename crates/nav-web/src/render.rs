use nav_core::{Destination, StarField, Visual};
use std::f64::consts::PI;
use web_sys as web;

fn css_rgba(rgb: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {:.3})", rgb[0], rgb[1], rgb[2], alpha)
}

fn mix(rgb: [u8; 3], toward: [u8; 3], t: f32) -> [u8; 3] {
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    [
        lerp(rgb[0], toward[0]),
        lerp(rgb[1], toward[1]),
        lerp(rgb[2], toward[2]),
    ]
}

/// Paint one frame of the star field. Drift mode clears opaquely and draws
/// dots; warp mode clears with low alpha (motion trails) and draws streaks
/// from each star's previous projected position to its current one.
pub fn draw_star_field(ctx: &web::CanvasRenderingContext2d, field: &StarField, warping: bool) {
    let w = field.width() as f64;
    let h = field.height() as f64;

    ctx.set_fill_style_str(if warping {
        "rgba(0, 0, 0, 0.1)"
    } else {
        "rgba(0, 0, 0, 1)"
    });
    ctx.fill_rect(0.0, 0.0, w, h);

    for star in field.stars() {
        let p = field.project(star, warping);
        ctx.begin_path();
        if warping {
            ctx.move_to(p.tail.x as f64, p.tail.y as f64);
            ctx.line_to(p.pos.x as f64, p.pos.y as f64);
            ctx.set_stroke_style_str(&format!("rgba(100, 200, 255, {:.3})", p.alpha));
            ctx.set_line_width(p.radius as f64);
            ctx.stroke();
        } else {
            ctx.set_fill_style_str("#ffffff");
            let _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, PI * 2.0);
            ctx.fill();
        }
    }
}

/// Paint the arrival visualization over the star field. `phase` is an
/// accumulated-seconds value driving the looping rotation layers.
pub fn draw_planet(
    ctx: &web::CanvasRenderingContext2d,
    dest: &Destination,
    phase: f64,
    width: f64,
    height: f64,
) {
    let cx = width * 0.3;
    let cy = height * 0.5;
    let r = (width.min(height) * 0.22).max(40.0);

    match dest.visual {
        Visual::Singularity => draw_singularity(ctx, cx, cy, r, phase),
        Visual::Sphere => draw_sphere(ctx, dest, cx, cy, r, phase),
    }
}

fn draw_singularity(ctx: &web::CanvasRenderingContext2d, cx: f64, cy: f64, r: f64, phase: f64) {
    ctx.save();
    let _ = ctx.translate(cx, cy);

    // Accretion disk, fast rotation.
    ctx.save();
    let _ = ctx.rotate(phase * 2.0);
    if let Ok(grad) = ctx.create_radial_gradient(0.0, 0.0, r * 0.4, 0.0, 0.0, r * 1.6) {
        let _ = grad.add_color_stop(0.0, "rgba(249, 115, 22, 0.6)");
        let _ = grad.add_color_stop(0.6, "rgba(234, 179, 8, 0.35)");
        let _ = grad.add_color_stop(1.0, "rgba(0, 0, 0, 0)");
        ctx.set_fill_style_canvas_gradient(&grad);
        ctx.begin_path();
        let _ = ctx.ellipse(0.0, 0.0, r * 1.6, r * 0.55, 0.0, 0.0, PI * 2.0);
        ctx.fill();
    }
    ctx.restore();

    // Inner ring, counter-rotating.
    ctx.save();
    let _ = ctx.rotate(-phase);
    ctx.set_stroke_style_str("rgba(251, 146, 60, 0.4)");
    ctx.set_line_width(r * 0.12);
    ctx.begin_path();
    let _ = ctx.ellipse(0.0, 0.0, r * 1.1, r * 0.45, 0.0, 0.0, PI * 2.0);
    ctx.stroke();
    ctx.restore();

    // Photon rim, then the horizon itself swallows the middle.
    if let Ok(glow) = ctx.create_radial_gradient(0.0, 0.0, r * 0.5, 0.0, 0.0, r * 0.8) {
        let _ = glow.add_color_stop(0.0, "rgba(255, 255, 255, 0.5)");
        let _ = glow.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
        ctx.set_fill_style_canvas_gradient(&glow);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, r * 0.8, 0.0, PI * 2.0);
        ctx.fill();
    }
    ctx.set_fill_style_str("#000000");
    ctx.begin_path();
    let _ = ctx.arc(0.0, 0.0, r * 0.55, 0.0, PI * 2.0);
    ctx.fill();
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.5)");
    ctx.set_line_width(2.0);
    ctx.begin_path();
    let _ = ctx.arc(0.0, 0.0, r * 0.55, 0.0, PI * 2.0);
    ctx.stroke();

    // Faint far ring.
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.1)");
    ctx.set_line_width(1.5);
    ctx.begin_path();
    let _ = ctx.arc(0.0, 0.0, r * 1.5, 0.0, PI * 2.0);
    ctx.stroke();

    ctx.restore();
}

fn draw_sphere(
    ctx: &web::CanvasRenderingContext2d,
    dest: &Destination,
    cx: f64,
    cy: f64,
    r: f64,
    phase: f64,
) {
    let rgb = dest.glow.rgb();
    ctx.save();
    let _ = ctx.translate(cx, cy);

    // Glow halo in the destination's accent tint.
    if let Ok(halo) = ctx.create_radial_gradient(0.0, 0.0, r, 0.0, 0.0, r * 1.35) {
        let _ = halo.add_color_stop(0.0, &css_rgba(rgb, 0.25));
        let _ = halo.add_color_stop(1.0, &css_rgba(rgb, 0.0));
        ctx.set_fill_style_canvas_gradient(&halo);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, r * 1.35, 0.0, PI * 2.0);
        ctx.fill();
    }

    // Body: lit upper-left, falling into shadow at the limb.
    let light = mix(rgb, [255, 255, 255], 0.55);
    let dark = mix(rgb, [0, 0, 0], 0.85);
    if let Ok(body) = ctx.create_radial_gradient(-r * 0.35, -r * 0.35, r * 0.1, 0.0, 0.0, r * 1.05)
    {
        let _ = body.add_color_stop(0.0, &css_rgba(light, 1.0));
        let _ = body.add_color_stop(0.55, &css_rgba(rgb, 1.0));
        let _ = body.add_color_stop(1.0, &css_rgba(dark, 1.0));
        ctx.set_fill_style_canvas_gradient(&body);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, r, 0.0, PI * 2.0);
        ctx.fill();
    }

    // Drifting highlight stripes clipped to the disc stand in for a
    // horizontally tiling surface texture.
    ctx.save();
    ctx.begin_path();
    let _ = ctx.arc(0.0, 0.0, r, 0.0, PI * 2.0);
    ctx.clip();
    ctx.set_fill_style_str("rgba(255, 255, 255, 0.05)");
    let stripe_w = r * 0.35;
    for i in 0..4 {
        let x = ((phase * 18.0 + i as f64 * r * 0.9).rem_euclid(2.0 * r + stripe_w)) - r - stripe_w;
        ctx.fill_rect(x, -r, stripe_w, 2.0 * r);
    }
    ctx.restore();

    // Rim light opposite the shadowed limb.
    ctx.set_stroke_style_str("rgba(255, 255, 255, 0.25)");
    ctx.set_line_width(1.5);
    ctx.begin_path();
    let _ = ctx.arc(0.0, 0.0, r, PI * 0.8, PI * 1.6);
    ctx.stroke();

    // Slow orbit guides.
    for (scale, alpha) in [(1.2, 0.1), (1.4, 0.05)] {
        ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {alpha})"));
        ctx.set_line_width(1.0);
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, r * scale, 0.0, PI * 2.0);
        ctx.stroke();
    }

    ctx.restore();
}
