//! Property-based tests for the user records
//!
//! Uses proptest to check the wire and lifecycle invariants across random inputs.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use typerace_users::wire;
use typerace_users::{
    CreateUserRequest, UpdateUserRequest, User, UserId, UserRequestHeader, UserRole,
};

// ===== Helpers =====

fn arbitrary_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (
        0i64..4_102_444_800, // 1970 .. 2100
        0u32..1_000_000_000, // nanoseconds
    )
        .prop_map(|(secs, nanos)| Utc.timestamp_opt(secs, nanos).unwrap())
}

fn arbitrary_create_request() -> impl Strategy<Value = CreateUserRequest> {
    ("[a-z0-9_]{1,20}", "[a-z0-9.]{1,12}@[a-z]{1,10}\\.[a-z]{2,3}")
        .prop_map(|(username, email)| CreateUserRequest { username, email })
}

fn arbitrary_user() -> impl Strategy<Value = User> {
    (
        any::<i64>(),
        arbitrary_create_request(),
        proptest::option::of("https://[a-z]{1,10}\\.example\\.com/[a-z0-9]{1,8}\\.png"),
        arbitrary_timestamp(),
        0i64..1_000_000,
    )
        .prop_map(|(id, request, image_url, created_at, age_secs)| {
            let mut user = User::new(UserId::new(id), request, created_at);
            user.image_url = image_url.unwrap_or_default();
            user.touch(created_at + chrono::Duration::seconds(age_secs));
            user
        })
}

fn arbitrary_role() -> impl Strategy<Value = Option<UserRole>> {
    proptest::option::of(prop_oneof![Just(UserRole::Admin), Just(UserRole::Member)])
}

fn arbitrary_header() -> impl Strategy<Value = UserRequestHeader> {
    (arbitrary_user(), any::<i64>(), arbitrary_role()).prop_map(|(user, expires_at, role)| {
        let mut header = UserRequestHeader::for_user(&user, expires_at);
        header.role = role;
        header
    })
}

fn arbitrary_update() -> impl Strategy<Value = UpdateUserRequest> {
    (
        proptest::option::of("[a-z0-9_]{1,20}"),
        proptest::option::of("[a-z]{1,8}@example\\.com"),
        proptest::option::of("https://cdn\\.example\\.com/[a-z]{1,8}\\.png"),
    )
        .prop_map(|(username, email, image_url)| UpdateUserRequest {
            username,
            email,
            image_url,
        })
}

// ===== Property Tests =====

proptest! {
    /// Property: decode(encode(x)) == x for every record
    #[test]
    fn create_request_round_trips(request in arbitrary_create_request()) {
        let json = wire::to_json(&request).unwrap();
        prop_assert_eq!(wire::from_json::<CreateUserRequest>(&json).unwrap(), request);
    }

    #[test]
    fn user_round_trips(user in arbitrary_user()) {
        let json = wire::to_json(&user).unwrap();
        prop_assert_eq!(wire::from_json::<User>(&json).unwrap(), user);
    }

    #[test]
    fn header_round_trips(header in arbitrary_header()) {
        let json = wire::to_json(&header).unwrap();
        prop_assert_eq!(wire::from_json::<UserRequestHeader>(&json).unwrap(), header);
    }

    /// Property: T - 1 is valid, T and T + 1 are expired
    #[test]
    fn expiry_boundary(header in arbitrary_header()) {
        let t = header.expires_at;
        if let Some(before) = t.checked_sub(1) {
            prop_assert!(header.is_valid_at(before));
        }
        prop_assert!(header.is_expired_at(t));
        if let Some(after) = t.checked_add(1) {
            prop_assert!(header.is_expired_at(after));
        }
    }

    /// Property: updates never alter created_at and never move updated_at back
    #[test]
    fn updates_preserve_lifecycle_timestamps(
        user in arbitrary_user(),
        updates in prop::collection::vec((arbitrary_update(), arbitrary_timestamp()), 1..10)
    ) {
        let mut user = user;
        let created_at = user.created_at;

        for (update, now) in updates {
            let before = user.updated_at;
            user.apply_update(update, now);

            prop_assert_eq!(user.created_at, created_at);
            prop_assert!(user.updated_at >= before);
        }
    }
}
