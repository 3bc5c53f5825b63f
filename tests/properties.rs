//! Property tests for the declaration mapping.

use account_groups::{GroupParams, declare_group};
use account_groups::value_objects::{Gid, Members};
use proptest::prelude::*;

/// Titles an OS group database would accept.
fn valid_title() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,31}"
}

fn usernames() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9_]{0,15}", 0..8)
}

proptest! {
    /// Both intents carry the declared title, gid, and verbatim members.
    #[test]
    fn declaration_preserves_all_attributes(
        title in valid_title(),
        gid in any::<u32>(),
        members in usernames(),
    ) {
        let params = GroupParams::new(Gid::new(gid), Members::new(members.clone()));
        let (group, membership) = declare_group(title.as_str(), params).unwrap();

        prop_assert_eq!(group.name().as_str(), title.as_str());
        prop_assert_eq!(group.gid().value(), gid);
        prop_assert_eq!(membership.name().as_str(), title.as_str());
        prop_assert_eq!(membership.members().as_slice(), members.as_slice());
    }

    /// Declaring twice with identical inputs yields structurally equal outputs.
    #[test]
    fn declaration_is_deterministic(
        title in valid_title(),
        gid in any::<u32>(),
        members in usernames(),
    ) {
        let params = GroupParams::new(Gid::new(gid), Members::new(members));
        let first = declare_group(title.as_str(), params.clone()).unwrap();
        let second = declare_group(title.as_str(), params).unwrap();

        prop_assert_eq!(first, second);
    }

    /// Negative gids never survive the signed-input boundary.
    #[test]
    fn negative_gids_are_always_rejected(value in i64::MIN..0i64) {
        prop_assert!(Gid::from_signed(value).is_err());
    }
}
