use std::cell::RefCell;

use pickfill_protocol::Notice;

use crate::Navigator;
use crate::Notifier;

#[derive(Debug, Default)]
pub(crate) struct RecordingNavigator {
    pub(crate) visited: Vec<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, address: &str) {
        self.visited.push(address.to_string());
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
