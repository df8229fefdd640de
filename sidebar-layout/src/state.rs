/// Authoritative sidebar visibility flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SidebarState {
    closed: bool,
}

impl SidebarState {
    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }

    /// Flip the flag and return the new value.
    pub(crate) fn toggle(&mut self) -> bool {
        self.closed = !self.closed;
        self.closed
    }

    /// Move the flag to `narrow` when it disagrees. Returns whether it
    /// changed.
    pub(crate) fn snap_to_band(&mut self, narrow: bool) -> bool {
        if self.closed == narrow {
            return false;
        }

        self.closed = narrow;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::SidebarState;

    #[test]
    fn given_default_state_when_toggled_twice_then_flag_is_restored() {
        let mut state = SidebarState::default();
        assert!(state.toggle());
        assert!(!state.toggle());
        assert!(!state.is_closed());
    }

    #[test]
    fn given_matching_band_when_snapped_then_nothing_changes() {
        let mut state = SidebarState::default();
        assert!(!state.snap_to_band(false));
        assert!(state.snap_to_band(true));
        assert!(state.is_closed());
        assert!(!state.snap_to_band(true));
    }
}
