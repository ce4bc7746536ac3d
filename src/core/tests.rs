#[cfg(test)]
mod tests {
    use crate::core::contact::{
        ContactField, ContactForm, FieldError, SubmitConfirmations, SubmitFace,
        validate_contact_form,
    };
    use crate::core::controller::{PageController, PageLayout, ScrollSnapshot};
    use crate::core::counter::{COUNTER_DURATION_MS, COUNTER_TICK_MS};
    use crate::core::reveal::RevealState;

    fn layout() -> PageLayout {
        PageLayout {
            reveal_targets: 4,
            counters: 3,
            floating_cards: 2,
            initial_scroll_y: 0.0,
            progress_bar: true,
        }
    }

    fn snapshot(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            document_height: 4000.0,
            viewport_height: 1000.0,
        }
    }

    #[test]
    fn test_scrolling_down_the_page() {
        let mut controller = PageController::new(layout());

        let update = controller.on_scroll(&snapshot(50.0));
        assert!(!update.header.opaque);
        assert!(!update.header.hidden);
        assert_eq!(update.parallax.len(), 2);
        assert!(update.progress.is_some());

        let update = controller.on_scroll(&snapshot(150.0));
        assert!(update.header.opaque);
        assert!(!update.header.hidden);
        assert_eq!(update.progress.as_deref(), Some("5%"));

        let update = controller.on_scroll(&snapshot(600.0));
        assert!(update.header.opaque);
        assert!(update.header.hidden);
        assert!(update.parallax[0].starts_with("translateY(-30"));
        assert_eq!(update.progress.as_deref(), Some("20%"));

        let update = controller.on_scroll(&snapshot(580.0));
        assert!(!update.header.hidden);
    }

    #[test]
    fn test_fresh_controller_forgets_previous_offset() {
        let mut first = PageController::new(layout());
        first.on_scroll(&snapshot(900.0));

        let mut second = PageController::new(layout());
        let update = second.on_scroll(&snapshot(300.0));
        assert!(update.header.hidden);
    }

    #[test]
    fn test_cards_reveal_independently_and_stay_revealed() {
        let mut controller = PageController::new(layout());

        assert!(controller.on_card_intersection(2, true));
        assert!(!controller.on_card_intersection(2, false));
        assert!(!controller.on_card_intersection(2, true));

        assert_eq!(controller.revealer().state(2), Some(RevealState::Revealed));
        assert_eq!(controller.revealer().state(0), Some(RevealState::Pending));
        assert_eq!(controller.revealer().revealed_count(), 1);
    }

    #[test]
    fn test_counter_starts_once_and_runs_to_target() {
        let mut controller = PageController::new(layout());

        assert!(
            controller
                .on_counter_intersection(0, false, "150+")
                .is_none()
        );

        let mut run = controller
            .on_counter_intersection(0, true, "150+")
            .expect("first entry starts the run");
        assert!(
            controller
                .on_counter_intersection(0, true, "150+")
                .is_none()
        );

        let mut frames = Vec::new();
        loop {
            let frame = run.tick();
            let done = frame.done;
            frames.push(frame.text);
            if done {
                break;
            }
        }

        let expected_ticks = (COUNTER_DURATION_MS / COUNTER_TICK_MS) as usize;
        assert_eq!(frames.len(), expected_ticks);
        assert_eq!(frames.first().map(String::as_str), Some("1+"));
        assert_eq!(frames.last().map(String::as_str), Some("150+"));
        assert_eq!(controller.counters().started_count(), 1);
    }

    #[test]
    fn test_counter_without_digits() {
        let mut controller = PageController::new(layout());
        let mut run = controller
            .on_counter_intersection(1, true, "Award winning")
            .unwrap();
        let frame = run.tick();
        assert!(frame.done);
        assert_eq!(frame.text, "0Award winning");
    }

    #[test]
    fn test_contact_submission_flow() {
        let mut form = ContactForm::default();
        form.set_value(ContactField::Name, "Ada".to_string());
        form.set_value(ContactField::Email, "ada@b".to_string());

        let report = validate_contact_form(&form);
        assert!(!report.is_valid());
        assert_eq!(
            report.invalid_fields(),
            vec![
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message
            ]
        );
        assert_eq!(
            report.error(ContactField::Email),
            Some(FieldError::InvalidEmail)
        );

        form.set_value(ContactField::Email, "ada@b.co".to_string());
        form.set_value(ContactField::Subject, "Hi".to_string());
        form.set_value(ContactField::Message, "A new website".to_string());
        let report = validate_contact_form(&form);
        assert!(report.is_valid());

        assert_eq!(SubmitFace::after(2999), SubmitFace::Confirmed);
        assert_eq!(SubmitFace::after(3000), SubmitFace::Original);
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_second_submit_restarts_confirmation() {
        // Submissions at t=0 and t=2000; resets fire at t=3000 and t=5000
        let mut confirmations = SubmitConfirmations::default();
        let first = confirmations.confirm();
        let second = confirmations.confirm();

        assert!(!confirmations.is_current(first));
        assert_eq!(SubmitFace::after(3000 - 2000), SubmitFace::Confirmed);

        assert!(confirmations.is_current(second));
        assert_eq!(SubmitFace::after(5000 - 2000), SubmitFace::Original);
    }
}
