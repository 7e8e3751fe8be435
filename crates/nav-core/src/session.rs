use crate::catalog::Destination;
use crate::constants::WARP_TRAVEL_MS;
use smallvec::SmallVec;
use std::time::Duration;

/// Overall experience state. Exactly one value is active at a time and only
/// the session mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TravelStatus {
    Idle,
    Warping,
    Arrived,
}

/// Sound cues emitted by state transitions. The front-end maps these onto
/// the audio engine; keeping them as data keeps the machine host-testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Click,
    WarpEngage,
    Arrival,
}

pub type Cues = SmallVec<[Cue; 2]>;

/// Emitted once when the warp countdown elapses. `fetch_token` identifies
/// the session the narrative fetch belongs to; a result carrying a stale
/// token is discarded by [`Session::apply_log`].
#[derive(Debug)]
pub struct ArrivalEvent {
    pub destination: &'static Destination,
    pub cues: Cues,
    pub fetch_token: u64,
}

/// Ephemeral per-visit state, reset on return to idle.
pub struct Session {
    status: TravelStatus,
    selected: Option<&'static Destination>,
    travel_log: String,
    log_pending: bool,
    warp_elapsed: Duration,
    epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self {
            status: TravelStatus::Idle,
            selected: None,
            travel_log: String::new(),
            log_pending: false,
            warp_elapsed: Duration::ZERO,
            epoch: 0,
        }
    }

    pub fn status(&self) -> TravelStatus {
        self.status
    }

    pub fn selected(&self) -> Option<&'static Destination> {
        self.selected
    }

    pub fn travel_log(&self) -> &str {
        &self.travel_log
    }

    pub fn log_pending(&self) -> bool {
        self.log_pending
    }

    /// Tentatively lock a destination. The click cue fires only when the
    /// selection actually changes identity.
    pub fn select(&mut self, dest: &'static Destination) -> Cues {
        let mut cues = Cues::new();
        if self.status != TravelStatus::Idle {
            return cues;
        }
        if self.selected.map(|d| d.id) != Some(dest.id) {
            cues.push(Cue::Click);
            log::debug!("[session] lock on {}", dest.id);
        }
        self.selected = Some(dest);
        cues
    }

    /// Engage the warp drive. A no-op without a lock-on or outside idle.
    pub fn confirm_warp(&mut self) -> Option<Cues> {
        if self.status != TravelStatus::Idle {
            return None;
        }
        self.selected?;
        self.status = TravelStatus::Warping;
        self.travel_log.clear();
        self.log_pending = false;
        self.warp_elapsed = Duration::ZERO;
        self.epoch += 1;
        log::debug!("[session] warp engaged");
        let mut cues = Cues::new();
        cues.push(Cue::Click);
        cues.push(Cue::WarpEngage);
        Some(cues)
    }

    /// Advance the warp countdown. Arrival fires exactly once, never before
    /// the configured travel time has fully elapsed.
    pub fn advance(&mut self, dt: Duration) -> Option<ArrivalEvent> {
        if self.status != TravelStatus::Warping {
            return None;
        }
        self.warp_elapsed += dt;
        if self.warp_elapsed < Duration::from_millis(WARP_TRAVEL_MS) {
            return None;
        }
        let destination = self.selected?;
        self.status = TravelStatus::Arrived;
        self.log_pending = true;
        log::debug!("[session] arrived at {}", destination.id);
        let mut cues = Cues::new();
        cues.push(Cue::Arrival);
        Some(ArrivalEvent {
            destination,
            cues,
            fetch_token: self.epoch,
        })
    }

    /// Apply a narrative fetch result. Returns false (and changes nothing)
    /// when the token belongs to a session the user has already left.
    pub fn apply_log(&mut self, fetch_token: u64, text: String) -> bool {
        if fetch_token != self.epoch || self.status != TravelStatus::Arrived {
            return false;
        }
        self.travel_log = text;
        self.log_pending = false;
        true
    }

    /// Disconnect from the arrival view and return to the menu.
    pub fn disconnect(&mut self) -> Cues {
        let mut cues = Cues::new();
        if self.status != TravelStatus::Arrived {
            return cues;
        }
        self.status = TravelStatus::Idle;
        self.selected = None;
        self.travel_log.clear();
        self.log_pending = false;
        self.epoch += 1;
        log::debug!("[session] disconnected");
        cues.push(Cue::Click);
        cues
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
