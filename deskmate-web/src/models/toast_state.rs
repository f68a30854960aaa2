use gloo_timers::callback::Timeout;
use shared::toast::Toast;
use yewdux::{Dispatch, Store};

/// How long a toast stays on screen.
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u32,
    pub toast: Toast,
}

/// Toasts currently shown, oldest first.
#[derive(Default, Clone, PartialEq, Eq, Store)]
pub struct ToastState {
    pub toasts: Vec<ToastEntry>,
    next_id: u32,
}

impl ToastState {
    /// Adds `toast` and returns its id.
    pub fn push(&mut self, toast: Toast) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(ToastEntry { id, toast });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|entry| entry.id != id);
    }
}

/// Shows `toast` and schedules its dismissal.
pub fn publish(dispatch: &Dispatch<ToastState>, toast: Toast) {
    web_sys::console::log_1(&format!("toast: {toast}").into());
    let mut id = 0;
    dispatch.reduce_mut(|state| id = state.push(toast));

    let dispatch = dispatch.clone();
    Timeout::new(TOAST_TIMEOUT_MS, move || {
        dispatch.reduce_mut(|state| state.dismiss(id));
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids_and_dismiss_removes() {
        let mut state = ToastState::default();
        let first = state.push(Toast::danger("one"));
        let second = state.push(Toast::success("two"));
        assert_ne!(first, second);

        state.dismiss(first);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].toast.text, "two");

        state.dismiss(first);
        assert_eq!(state.toasts.len(), 1);
    }
}
