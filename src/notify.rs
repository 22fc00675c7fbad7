//! App-wide notification state, shared through the Dioxus context.

use dioxus::prelude::*;

/// The current toast message plus a generation counter. Each new message
/// bumps the generation, so a delayed auto-dismiss task can tell whether
/// the message it timed is still the one on screen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    message: Option<String>,
    generation: u64,
}

impl ToastState {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.generation += 1;
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Dismisses only when no newer message has replaced the one the
    /// caller observed at `generation`.
    pub fn dismiss_if_current(&mut self, generation: u64) {
        if self.generation == generation {
            self.message = None;
        }
    }
}

/// Provided from the app root so any component can surface a
/// non-blocking notification.
#[derive(Clone, Copy)]
pub struct Notifier {
    pub state: Signal<ToastState>,
}

impl Notifier {
    pub fn notify(&mut self, message: impl Into<String>) {
        self.state.with_mut(|s| s.show(message));
    }

    pub fn clear(&mut self) {
        self.state.with_mut(|s| s.dismiss());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_message_advances_the_generation() {
        let mut state = ToastState::default();
        let before = state.generation();
        state.show("copied");
        assert_eq!(state.generation(), before + 1);
        assert_eq!(state.message(), Some("copied"));
    }

    #[test]
    fn stale_timer_does_not_dismiss_a_newer_message() {
        let mut state = ToastState::default();
        state.show("first");
        let first_generation = state.generation();
        state.show("second");

        // the timer for "first" fires after "second" went up
        state.dismiss_if_current(first_generation);
        assert_eq!(state.message(), Some("second"));
    }

    #[test]
    fn current_timer_dismisses_its_own_message() {
        let mut state = ToastState::default();
        state.show("only");
        state.dismiss_if_current(state.generation());
        assert_eq!(state.message(), None);
    }

    #[test]
    fn manual_dismiss_keeps_the_generation() {
        let mut state = ToastState::default();
        state.show("closed by hand");
        let generation = state.generation();
        state.dismiss();
        assert_eq!(state.generation(), generation);
        assert_eq!(state.message(), None);
    }
}
