//! Driver init-state machine
//!
//! Bring-up walks these states strictly in order; drawing operations are
//! only legal once [`InitState::Active`] is reached. Calling earlier is a
//! precondition violation, reported distinctly from transport errors.

/// Bring-up states, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitState {
    /// Nothing configured; the only legal operation is `initialize`
    #[default]
    Uninitialized,
    /// Control lines are outputs, SPI bus enabled
    BusConfigured,
    /// Hardware reset pulse issued and settle time elapsed
    ResetSettled,
    /// Controller register program complete
    RegistersProgrammed,
    /// Sleep-out and display-on issued; drawing is legal
    Active,
}

impl InitState {
    /// Whether drawing operations are legal in this state
    pub fn is_active(self) -> bool {
        self == InitState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_active_draws() {
        assert!(InitState::Active.is_active());
        for s in [
            InitState::Uninitialized,
            InitState::BusConfigured,
            InitState::ResetSettled,
            InitState::RegistersProgrammed,
        ] {
            assert!(!s.is_active());
        }
    }

    #[test]
    fn test_states_are_ordered() {
        assert!(InitState::Uninitialized < InitState::BusConfigured);
        assert!(InitState::BusConfigured < InitState::ResetSettled);
        assert!(InitState::ResetSettled < InitState::RegistersProgrammed);
        assert!(InitState::RegistersProgrammed < InitState::Active);
    }
}
