use pickfill_protocol::Notice;

/// Performs the full context transition to a destination address. From the
/// caller's point of view the call does not come back with a result.
pub trait Navigator {
    fn navigate(&mut self, address: &str);
}

/// Shows a short message to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<F> Navigator for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, address: &str) {
        self(address)
    }
}

impl<F> Notifier for F
where
    F: Fn(Notice),
{
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}
