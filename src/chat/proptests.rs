//! Property-based tests for the router and the message log

use super::router::route;
use super::state::{ChatMessage, ChatState, Classification, Role, Route};
use proptest::prelude::*;

fn arb_classification() -> impl Strategy<Value = Option<Classification>> {
    prop_oneof![
        Just(None),
        Just(Some(Classification::Emotional)),
        Just(Some(Classification::Logical)),
    ]
}

fn arb_message() -> impl Strategy<Value = ChatMessage> {
    (prop_oneof![Just(Role::User), Just(Role::Assistant)], ".*").prop_map(|(role, text)| {
        ChatMessage { role, text }
    })
}

proptest! {
    /// route is a pure function: identical input, identical output
    #[test]
    fn route_is_pure(classification in arb_classification()) {
        prop_assert_eq!(route(classification), route(classification));
    }

    /// Emotional goes to the therapist, everything else to logical
    #[test]
    fn route_total_mapping(classification in arb_classification()) {
        let expected = match classification {
            Some(Classification::Emotional) => Route::Therapist,
            _ => Route::Logical,
        };
        prop_assert_eq!(route(classification), expected);
    }

    /// Appending never disturbs what is already in the log
    #[test]
    fn push_preserves_existing_messages(
        initial in proptest::collection::vec(arb_message(), 0..16),
        appended in proptest::collection::vec(arb_message(), 0..8),
    ) {
        let mut state = ChatState::new();
        for msg in &initial {
            state.push(msg.clone());
        }
        let snapshot = state.messages().to_vec();

        for msg in &appended {
            state.push(msg.clone());
        }

        prop_assert_eq!(&state.messages()[..initial.len()], snapshot.as_slice());
        prop_assert_eq!(state.len(), initial.len() + appended.len());
    }
}
