use super::location::Location;

/// Upper bound on remembered locations; the oldest non-home entry goes first.
pub const MAX_ENTRIES: usize = 1000;

/// Back/forward stack of visited locations.
///
/// Always holds at least the `Home` entry it starts with; `cursor` points at
/// the current location.
#[derive(Debug, Clone)]
pub struct NavHistory {
    entries: Vec<Location>,
    cursor: usize,
}

impl Default for NavHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl NavHistory {
    pub fn new() -> Self {
        Self {
            entries: vec![Location::Home],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.cursor]
    }

    /// Visit `location`, discarding any forward entries.
    ///
    /// Returns false (and changes nothing) when it is already the current
    /// location, so re-submitting the same search does not stack duplicates.
    pub fn push(&mut self, location: Location) -> bool {
        if *self.current() == location {
            return false;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        if self.entries.len() > MAX_ENTRIES {
            self.entries.remove(1);
        }
        self.cursor = self.entries.len() - 1;

        log::debug!("History push -> {:?} ({} entries)", self.current(), self.entries.len());
        true
    }

    /// Step back, returning the location to restore.
    pub fn back(&mut self) -> Option<&Location> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward, returning the location to restore.
    pub fn forward(&mut self) -> Option<&Location> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
#[path = "nav_history_tests.rs"]
mod nav_history_tests;
