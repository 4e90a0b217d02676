/// Seam for transient user-facing messages (validation warnings, save
/// failures). Messages are fire-and-forget; nothing de-duplicates or
/// queues them.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Shipped implementation: print to stderr so messages never mix with
/// the rendered list on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_notifier_is_callable() {
        StderrNotifier.notify("hello");
    }
}
