//! Extension trait for mutating signal contents in place.

use dioxus::prelude::*;

/// Closure-style write access to a [`Signal`].
///
/// ```ignore
/// app_state.mutate(|state| state.set_view(ViewId::Settings));
/// ```
pub trait SignalExt<T: 'static> {
    /// Run `f` against the signal's value under a single write guard.
    fn mutate<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Set the value unless the owning component has already unmounted.
    fn set_if_alive(&mut self, value: T);
}

impl<T: 'static> SignalExt<T> for Signal<T> {
    fn mutate<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }

    fn set_if_alive(&mut self, value: T) {
        if let Ok(mut guard) = self.try_write() {
            *guard = value;
        }
    }
}
