/// Coalesces scroll events into at most one evaluation per animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FrameGate {
    #[default]
    Idle,
    Scheduled,
}

impl FrameGate {
    /// Returns true when the caller must request a frame; false when one is
    /// already outstanding and this event folds into it.
    pub fn request(&mut self) -> bool {
        match self {
            FrameGate::Idle => {
                *self = FrameGate::Scheduled;
                true
            }
            FrameGate::Scheduled => false,
        }
    }

    /// Called from the frame callback before evaluating.
    pub fn begin_frame(&mut self) {
        *self = FrameGate::Idle;
    }

    /// Drops a pending request whose frame will never run.
    pub fn cancel(&mut self) {
        if self.is_scheduled() {
            *self = FrameGate::Idle;
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, FrameGate::Scheduled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_request_schedules() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_scheduled());
    }

    #[test]
    fn cancel_reopens_the_gate() {
        let mut gate = FrameGate::default();
        gate.request();
        gate.cancel();
        assert!(!gate.is_scheduled());
        assert!(gate.request());
    }

    #[test]
    fn frame_reopens_the_gate() {
        let mut gate = FrameGate::default();
        gate.request();
        gate.begin_frame();
        assert!(!gate.is_scheduled());
        assert!(gate.request());
    }
}
