use crate::{ToastOptions, ToastQueue};

/// Capability to raise a toast.
///
/// Code that confirms its actions with a toast takes a `Notifier` instead of
/// reaching for a global, so that each caller (and each test) decides which
/// queue receives the message.
pub trait Notifier {
    /// Requests a toast. Fire and forget.
    fn show_toast(&mut self, options: ToastOptions);
}

impl Notifier for ToastQueue {
    fn show_toast(&mut self, options: ToastOptions) {
        self.push(options);
    }
}

impl<N> Notifier for &mut N
where
    N: Notifier + ?Sized,
{
    fn show_toast(&mut self, options: ToastOptions) {
        (**self).show_toast(options);
    }
}

/// A missing provider behaves like [`NoopNotifier`].
impl<N> Notifier for Option<N>
where
    N: Notifier,
{
    fn show_toast(&mut self, options: ToastOptions) {
        match self {
            Some(notifier) => notifier.show_toast(options),
            None => NoopNotifier.show_toast(options),
        }
    }
}

/// Notifier that drops every request.
///
/// Used where no [`ToastQueue`] is available, e.g. before the application has
/// created one or in tests that do not care about confirmations.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn show_toast(&mut self, options: ToastOptions) {
        log::debug!("no toast provider, dropping toast: {:?}", options.title);
    }
}
