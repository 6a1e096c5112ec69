/// Monotonic counter bumped each time a field fails validation on submit.
///
/// The host watches the value and plays a transient shake whenever it
/// changes; the counter itself carries no other meaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct InvalidPulse(u32);

impl InvalidPulse {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn bump(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn count(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_only_increases() {
        let mut pulse = InvalidPulse::new();
        assert_eq!(pulse.count(), 0);
        pulse.bump();
        pulse.bump();
        assert_eq!(pulse.count(), 2);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        let mut pulse = InvalidPulse(u32::MAX);
        pulse.bump();
        assert_eq!(pulse.count(), u32::MAX);
    }
}
