use crate::constants::TYPE_TICK_EVERY;

/// What one pacing tick produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeTick {
    /// Character revealed by this tick, if any remained.
    pub revealed: Option<char>,
    /// Whether the data-stream blip should play for this character.
    pub play_tick: bool,
    /// Set once, on the tick that finishes the reveal.
    pub completed: bool,
}

/// Character-at-a-time text reveal. The caller supplies the pacing (one
/// `tick` per interval); changing the text restarts the reveal from empty,
/// so a pending reveal never leaks characters from an abandoned string.
pub struct Typewriter {
    text: Vec<char>,
    shown: usize,
    sound_counter: u32,
    done_fired: bool,
}

impl Typewriter {
    pub fn new() -> Self {
        Self {
            text: Vec::new(),
            shown: 0,
            sound_counter: 0,
            done_fired: true, // empty initial text has nothing to complete
        }
    }

    /// Replace the target text and restart from zero.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.chars().collect();
        self.shown = 0;
        self.sound_counter = 0;
        self.done_fired = false;
    }

    /// The revealed prefix.
    pub fn visible(&self) -> String {
        self.text[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.done_fired
    }

    /// Advance one character. Returns `None` once the reveal has completed
    /// and the completion has been reported.
    pub fn tick(&mut self) -> Option<TypeTick> {
        if self.done_fired {
            return None;
        }
        if self.shown >= self.text.len() {
            // Empty target: complete immediately, exactly once.
            self.done_fired = true;
            return Some(TypeTick {
                revealed: None,
                play_tick: false,
                completed: true,
            });
        }
        let ch = self.text[self.shown];
        self.shown += 1;
        self.sound_counter += 1;
        let play_tick = self.sound_counter % TYPE_TICK_EVERY == 0 && ch != ' ';
        let completed = self.shown == self.text.len();
        if completed {
            self.done_fired = true;
        }
        Some(TypeTick {
            revealed: Some(ch),
            play_tick,
            completed,
        })
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}
