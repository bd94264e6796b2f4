/// Lifecycle of a form dialog.
///
/// `Closed -> Open -> Submitting -> Closed` on success,
/// `Submitting -> Open` on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    Submitting,
}

impl ModalState {
    pub fn open(&mut self) {
        if *self == Self::Closed {
            *self = Self::Open;
        }
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Returns false unless the dialog was open and idle.
    pub fn begin_submit(&mut self) -> bool {
        if *self != Self::Open {
            return false;
        }
        *self = Self::Submitting;
        true
    }

    pub fn finish(&mut self, succeeded: bool) {
        if *self != Self::Submitting {
            return;
        }
        *self = if succeeded { Self::Closed } else { Self::Open };
    }

    pub fn is_open(&self) -> bool {
        *self != Self::Closed
    }
}
