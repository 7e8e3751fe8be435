use nav_core::constants::{
    AMBIENT_FREQS, AMBIENT_GAIN, AMBIENT_LFO_DEPTH, AMBIENT_LFO_RATE_BASE, AMBIENT_LFO_RATE_SPAN,
    ARRIVAL_SETTLE_SEC, MASTER_GAIN, WARP_BEND_SEC, WARP_PITCH_MULT,
};
use web_sys as web;

/// Process-wide audio mix: one lazily created context, a master gain, the
/// ambient drone layer, and fire-and-forget one-shot effects. Every
/// operation is a silent no-op until `init` has run after a user gesture.
pub struct AudioEngine {
    ctx: Option<web::AudioContext>,
    master: Option<web::GainNode>,
    ambient_oscs: Vec<web::OscillatorNode>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, ()> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(())
        }
    }
}

impl AudioEngine {
    pub fn new() -> Self {
        Self {
            ctx: None,
            master: None,
            ambient_oscs: Vec::new(),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.ctx.is_some()
    }

    /// Build the context, master bus and ambient layer. Idempotent: a second
    /// call never creates a second context or duplicates the drone.
    pub fn init(&mut self) {
        if self.ctx.is_some() {
            return;
        }
        let audio_ctx = match web::AudioContext::new() {
            Ok(ctx) => ctx,
            Err(e) => {
                log::error!("AudioContext error: {:?}", e);
                return;
            }
        };
        let master = match create_gain(&audio_ctx, MASTER_GAIN, "Master") {
            Ok(g) => g,
            Err(()) => return,
        };
        _ = master.connect_with_audio_node(&audio_ctx.destination());

        self.ambient_oscs = start_ambience(&audio_ctx, &master);
        log::info!("[audio] engine initialized");
        self.ctx = Some(audio_ctx);
        self.master = Some(master);
    }

    /// Resume a context the browser parked in the suspended state.
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
        }
    }

    fn graph(&self) -> Option<(&web::AudioContext, &web::GainNode)> {
        Some((self.ctx.as_ref()?, self.master.as_ref()?))
    }

    /// Short upward sweep for pointer-enter feedback.
    pub fn play_hover(&self) {
        let Some((ctx, master)) = self.graph() else {
            return;
        };
        let now = ctx.current_time();
        one_shot(ctx, master, web::OscillatorType::Sine, 0.1, |osc, gain| {
            _ = osc.frequency().set_value_at_time(800.0, now);
            _ = osc
                .frequency()
                .exponential_ramp_to_value_at_time(1200.0, now + 0.05);
            _ = gain.gain().set_value_at_time(0.05, now);
            _ = gain
                .gain()
                .exponential_ramp_to_value_at_time(0.001, now + 0.05);
        });
    }

    /// Downward thunk for confirmed interactions.
    pub fn play_click(&self) {
        let Some((ctx, master)) = self.graph() else {
            return;
        };
        let now = ctx.current_time();
        one_shot(ctx, master, web::OscillatorType::Triangle, 0.2, |osc, gain| {
            _ = osc.frequency().set_value_at_time(300.0, now);
            _ = osc
                .frequency()
                .exponential_ramp_to_value_at_time(50.0, now + 0.2);
            _ = gain.gain().set_value_at_time(0.2, now);
            _ = gain
                .gain()
                .exponential_ramp_to_value_at_time(0.001, now + 0.2);
        });
    }

    /// Engine spin-up: a long saw sweep through a rising lowpass, while the
    /// ambient drone is bent two octaves upward.
    pub fn play_warp_engage(&self) {
        let Some((ctx, master)) = self.graph() else {
            return;
        };
        let now = ctx.current_time();

        let osc = match web::OscillatorNode::new(ctx) {
            Ok(o) => o,
            Err(e) => {
                log::error!("OscillatorNode error: {:?}", e);
                return;
            }
        };
        osc.set_type(web::OscillatorType::Sawtooth);
        _ = osc.frequency().set_value_at_time(100.0, now);
        _ = osc
            .frequency()
            .exponential_ramp_to_value_at_time(800.0, now + 2.0);

        let filter = match web::BiquadFilterNode::new(ctx) {
            Ok(f) => f,
            Err(e) => {
                log::error!("BiquadFilterNode error: {:?}", e);
                return;
            }
        };
        filter.set_type(web::BiquadFilterType::Lowpass);
        _ = filter.frequency().set_value_at_time(200.0, now);
        _ = filter
            .frequency()
            .linear_ramp_to_value_at_time(2000.0, now + 2.0);

        let gain = match create_gain(ctx, 0.0, "Warp") {
            Ok(g) => g,
            Err(()) => return,
        };
        _ = gain.gain().set_value_at_time(0.0, now);
        _ = gain.gain().linear_ramp_to_value_at_time(0.3, now + 1.0);
        _ = gain.gain().linear_ramp_to_value_at_time(0.0, now + 4.0);

        _ = osc.connect_with_audio_node(&filter);
        _ = filter.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(master);
        _ = osc.start();
        _ = osc.stop_with_when(now + 4.5);

        // Transient pitch-up on the drone for the duration of the sweep.
        for amb in &self.ambient_oscs {
            let freq = amb.frequency();
            _ = freq.cancel_scheduled_values(now);
            _ = freq.linear_ramp_to_value_at_time(freq.value() * WARP_PITCH_MULT, now + WARP_BEND_SEC);
        }
    }

    /// Descending chime; the drone relaxes back to its base frequencies.
    pub fn play_arrival(&self) {
        let Some((ctx, master)) = self.graph() else {
            return;
        };
        let now = ctx.current_time();

        for (i, amb) in self.ambient_oscs.iter().enumerate() {
            let base = AMBIENT_FREQS.get(i).copied().unwrap_or(AMBIENT_FREQS[0]);
            let freq = amb.frequency();
            _ = freq.cancel_scheduled_values(now);
            _ = freq.set_value_at_time(freq.value(), now);
            _ = freq.exponential_ramp_to_value_at_time(base, now + ARRIVAL_SETTLE_SEC);
        }

        one_shot(ctx, master, web::OscillatorType::Sine, 2.0, |osc, gain| {
            _ = osc.frequency().set_value_at_time(880.0, now);
            _ = osc
                .frequency()
                .exponential_ramp_to_value_at_time(440.0, now + 1.5);
            _ = gain.gain().set_value_at_time(0.0, now);
            _ = gain.gain().linear_ramp_to_value_at_time(0.2, now + 0.1);
            _ = gain
                .gain()
                .exponential_ramp_to_value_at_time(0.001, now + 2.0);
        });
    }

    /// Very short, quiet square blip for per-character typing feedback.
    pub fn play_data_stream(&self) {
        let Some((ctx, master)) = self.graph() else {
            return;
        };
        let now = ctx.current_time();
        let freq = 2000.0 + js_sys::Math::random() as f32 * 500.0;
        one_shot(ctx, master, web::OscillatorType::Square, 0.05, |osc, gain| {
            _ = osc.frequency().set_value_at_time(freq, now);
            _ = gain.gain().set_value_at_time(0.02, now);
            _ = gain
                .gain()
                .exponential_ramp_to_value_at_time(0.001, now + 0.03);
        });
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Continuous drone: one sine per base frequency, each wobbled by a slow,
/// randomized-rate LFO into its frequency param so the beat never repeats.
fn start_ambience(ctx: &web::AudioContext, master: &web::GainNode) -> Vec<web::OscillatorNode> {
    let ambient_gain = match create_gain(ctx, AMBIENT_GAIN, "Ambience") {
        Ok(g) => g,
        Err(()) => return Vec::new(),
    };
    _ = ambient_gain.connect_with_audio_node(master);

    let mut oscs = Vec::with_capacity(AMBIENT_FREQS.len());
    for &freq in AMBIENT_FREQS.iter() {
        let osc = match web::OscillatorNode::new(ctx) {
            Ok(o) => o,
            Err(e) => {
                log::error!("ambient OscillatorNode error: {:?}", e);
                continue;
            }
        };
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(freq);
        _ = osc.start();

        if let Ok(lfo) = web::OscillatorNode::new(ctx) {
            lfo.set_type(web::OscillatorType::Sine);
            lfo.frequency().set_value(
                AMBIENT_LFO_RATE_BASE + js_sys::Math::random() as f32 * AMBIENT_LFO_RATE_SPAN,
            );
            if let Ok(depth) = create_gain(ctx, AMBIENT_LFO_DEPTH, "LFO depth") {
                _ = lfo.connect_with_audio_node(&depth);
                _ = depth.connect_with_audio_param(&osc.frequency());
                _ = lfo.start();
            }
        }

        _ = osc.connect_with_audio_node(&ambient_gain);
        oscs.push(osc);
    }
    oscs
}

/// Spawn a self-terminating oscillator/gain pair routed into the master bus.
/// The closure schedules the frequency and envelope automation.
fn one_shot(
    ctx: &web::AudioContext,
    master: &web::GainNode,
    waveform: web::OscillatorType,
    duration_sec: f64,
    schedule: impl FnOnce(&web::OscillatorNode, &web::GainNode),
) {
    let Ok(osc) = web::OscillatorNode::new(ctx) else {
        return;
    };
    osc.set_type(waveform);
    let Ok(gain) = web::GainNode::new(ctx) else {
        return;
    };
    schedule(&osc, &gain);
    _ = osc.connect_with_audio_node(&gain);
    _ = gain.connect_with_audio_node(master);
    _ = osc.start();
    _ = osc.stop_with_when(ctx.current_time() + duration_sec);
}
