use profile_core::form::Notification;
use tokio::task::JoinHandle;

/// Single-slot holder for the visible notification and its dismiss timer.
///
/// Every `show` bumps a ticket; a timer only clears the slot if its ticket is
/// still current, so a superseded timer that fires late does nothing.
#[derive(Debug, Default)]
pub(crate) struct NotificationSlot {
    current: Option<Notification>,
    ticket: u64,
    timer: Option<JoinHandle<()>>,
}

impl NotificationSlot {
    pub(crate) fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Replaces the visible notification and returns its ticket.
    pub(crate) fn show(&mut self, notification: Notification) -> u64 {
        self.cancel_timer();
        self.ticket += 1;
        self.current = Some(notification);
        self.ticket
    }

    pub(crate) fn attach_timer(&mut self, timer: JoinHandle<()>) {
        self.cancel_timer();
        self.timer = Some(timer);
    }

    /// Clears the slot if `ticket` still identifies the visible notification.
    pub(crate) fn expire(&mut self, ticket: u64) -> bool {
        if ticket != self.ticket || self.current.is_none() {
            return false;
        }
        self.current = None;
        self.timer = None;
        true
    }

    /// Clears the slot immediately and cancels the pending timer.
    pub(crate) fn dismiss(&mut self) -> bool {
        self.cancel_timer();
        self.current.take().is_some()
    }

    pub(crate) fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_ticket_does_not_expire() {
        let mut slot = NotificationSlot::default();
        let first = slot.show(Notification::error("first"));
        let second = slot.show(Notification::success("second"));

        assert!(!slot.expire(first));
        assert_eq!(slot.current().map(|n| n.message.as_str()), Some("second"));

        assert!(slot.expire(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_empties_slot() {
        let mut slot = NotificationSlot::default();
        assert!(!slot.dismiss());

        let ticket = slot.show(Notification::success("saved"));
        assert!(slot.dismiss());
        assert!(!slot.expire(ticket));
    }
}
