use super::prelude::*;

/// Opens or closes the subscription dialog and returns whether it is open now.
///
/// When opening, the "stop notifications" control is revealed
/// if the browser already holds a push subscription.
pub async fn toggle_subscribe_dialog<P, D>(push: &P, dialog: &D) -> bool
where
    P: PushService,
    D: SubscribeDialog,
{
    let open = !dialog.is_open();
    dialog.set_open(open);
    if open && push.is_supported() {
        let subscribed = match push.current_subscription().await {
            Ok(subscription) => subscription.is_some(),
            Err(err) => {
                log::warn!("Unable to look up push subscription: {err}");
                false
            }
        };
        dialog.show_stop_notifications(subscribed);
    }
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;
    use futures::executor::block_on;

    #[test]
    fn open_and_close() {
        let events = Events::default();
        let push = MockPush::new(&events);
        let dialog = MockDialog::closed();

        assert!(block_on(toggle_subscribe_dialog(&push, &dialog)));
        assert!(dialog.open.get());
        assert!(!dialog.stop_visible.get());

        assert!(!block_on(toggle_subscribe_dialog(&push, &dialog)));
        assert!(!dialog.open.get());
        assert_eq!(events.recorded(), vec!["lookup"]);
    }

    #[test]
    fn reveal_stop_control_if_subscribed() {
        let events = Events::default();
        let push = MockPush::subscribed(&events);
        let dialog = MockDialog::closed();

        assert!(block_on(toggle_subscribe_dialog(&push, &dialog)));
        assert!(dialog.open.get());
        assert!(dialog.stop_visible.get());
    }

    #[test]
    fn open_without_push_support() {
        let events = Events::default();
        let push = MockPush::unsupported(&events);
        let dialog = MockDialog::closed();

        assert!(block_on(toggle_subscribe_dialog(&push, &dialog)));
        assert!(!dialog.stop_visible.get());
        assert!(events.recorded().is_empty());
    }

    #[test]
    fn open_even_if_lookup_fails() {
        let events = Events::default();
        let push = MockPush::broken(&events);
        let dialog = MockDialog::closed();

        assert!(block_on(toggle_subscribe_dialog(&push, &dialog)));
        assert!(dialog.open.get());
        assert!(!dialog.stop_visible.get());
    }
}
