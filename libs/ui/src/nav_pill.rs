use std::time::Duration;

/// Time between the icon shifting and the label expanding.
pub const SHIFT_DELAY: Duration = Duration::from_millis(150);
/// Time between the label collapsing and the icon shifting back.
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PillState {
    #[default]
    Inactive,
    IconShifted,
    Expanded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    at: Duration,
    to: PillState,
}

/// One navigation item.
///
/// Activation shifts the icon first and expands the label once
/// [`SHIFT_DELAY`] has passed. Deactivation runs the same steps in
/// reverse. Toggling again while a step is pending replaces it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NavPill {
    state: PillState,
    active: bool,
    pending: Option<Pending>,
}

impl NavPill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PillState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.at)
    }

    pub fn activate(&mut self, now: Duration) {
        if self.active {
            return;
        }
        self.active = true;

        if self.state == PillState::Expanded {
            self.pending = None;
            return;
        }
        self.state = PillState::IconShifted;
        self.pending = Some(Pending {
            at: now + SHIFT_DELAY,
            to: PillState::Expanded,
        });
    }

    pub fn deactivate(&mut self, now: Duration) {
        if !self.active {
            return;
        }
        self.active = false;

        if self.state == PillState::Inactive {
            self.pending = None;
            return;
        }
        self.state = PillState::IconShifted;
        self.pending = Some(Pending {
            at: now + COLLAPSE_DELAY,
            to: PillState::Inactive,
        });
    }

    /// Applies a due transition. Returns whether the state changed.
    pub fn advance(&mut self, now: Duration) -> bool {
        match self.pending {
            Some(pending) if now >= pending.at => {
                self.state = pending.to;
                self.pending = None;
                true
            }
            _ => false,
        }
    }
}

/// The navigation bar: one pill per item, at most one active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar {
    pills: Vec<NavPill>,
    active: Option<usize>,
}

impl NavBar {
    pub fn new(items: usize) -> Self {
        Self {
            pills: vec![NavPill::new(); items],
            active: None,
        }
    }

    pub fn pills(&self) -> &[NavPill] {
        &self.pills
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Activates `index` and deactivates the previous item. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize, now: Duration) {
        if index >= self.pills.len() || self.active == Some(index) {
            return;
        }
        if let Some(previous) = self.active {
            self.pills[previous].deactivate(now);
        }
        self.pills[index].activate(now);
        self.active = Some(index);
    }

    pub fn advance(&mut self, now: Duration) -> bool {
        self.pills
            .iter_mut()
            .fold(false, |changed, pill| pill.advance(now) || changed)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.pills.iter().filter_map(NavPill::next_deadline).min()
    }
}
