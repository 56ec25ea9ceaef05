use dioxus::prelude::*;

/// Shared, mutable access to a piece of UI state.
///
/// Coordinator operations are written against this trait so the same async
/// flow drives a Dioxus [`Signal`] in the app and plain shared state in tests.
pub trait StateHandle<T> {
    fn view<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> StateHandle<T> for Signal<T> {
    fn view<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.read())
    }

    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.write())
    }
}

#[cfg(test)]
impl<T> StateHandle<T> for std::rc::Rc<std::cell::RefCell<T>> {
    fn view<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.borrow())
    }

    fn apply<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}
