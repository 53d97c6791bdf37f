use std::sync::Arc;

use ecotrack_common::{ElementSpec, PASSWORD_FIELD_ID, PASSWORD_TOO_SHORT_MESSAGE};
use ecotrack_page::{CapturingNotifier, MemoryDocument, PasswordGuard};
use proptest::prelude::*;

fn check(password: &str) -> (bool, Vec<String>) {
    let doc = Arc::new(MemoryDocument::default());
    doc.append(ElementSpec::input(PASSWORD_FIELD_ID, password));
    let notifier = Arc::new(CapturingNotifier::new());
    let guard = PasswordGuard::new(doc, notifier.clone());
    let allowed = guard.validate_form();
    (allowed, notifier.messages())
}

proptest! {
    #[test]
    fn short_passwords_are_blocked_with_one_notice(password in "[ -~]{0,7}") {
        let (allowed, messages) = check(&password);
        prop_assert!(!allowed);
        prop_assert_eq!(messages, vec![PASSWORD_TOO_SHORT_MESSAGE.to_string()]);
    }

    #[test]
    fn long_passwords_pass_silently(password in "[ -~]{8,64}") {
        let (allowed, messages) = check(&password);
        prop_assert!(allowed);
        prop_assert!(messages.is_empty());
    }

    #[test]
    fn outcome_matches_utf16_length(password in "\\PC{0,12}") {
        let (allowed, messages) = check(&password);
        let long_enough = password.encode_utf16().count() >= 8;
        prop_assert_eq!(allowed, long_enough);
        prop_assert_eq!(messages.len(), usize::from(!long_enough));
    }
}

#[test]
fn boundary_at_eight() {
    assert!(!check("abcdefg").0);
    assert!(check("abcdefgh").0);
}
