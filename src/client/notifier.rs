use std::io::Write;

use crate::broker::user::User;

/// How a subscriber is told about a delivered message.
///
/// Notification is one-way: no acknowledgment, no failure reported back to
/// the publisher.
pub trait Notify: Send {
    fn notify(&self, subscriber: &User, text: &str);
}

/// Prints `Notification to <name>: <text>` on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notify for ConsoleNotifier {
    fn notify(&self, subscriber: &User, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "Notification to {}: {}", subscriber.name, text) {
            tracing::warn!(subscriber = %subscriber.name, error = %e, "console notification failed");
        }
    }
}

impl<F> Notify for F
where
    F: Fn(&User, &str) + Send,
{
    fn notify(&self, subscriber: &User, text: &str) {
        self(subscriber, text)
    }
}
