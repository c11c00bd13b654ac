//! Identifier resolution.
//!
//! Turns [`UserIdentifier`]s into `user_id` / `screen_name` parameters. A
//! prefix selects a different identity slot, e.g. `target` gives
//! `target_user_id` / `target_screen_name` for relationship lookups.

use crate::types::{Options, UserIdentifier};

const USER_ID: &str = "user_id";
const SCREEN_NAME: &str = "screen_name";

fn compound_key(key: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}_{key}"),
        None => key.to_string(),
    }
}

/// Copy `options` and set the identity parameter for `user`.
pub fn merge_user(options: &Options, user: &UserIdentifier, prefix: Option<&str>) -> Options {
    let mut out = options.clone();
    merge_user_mut(&mut out, user, prefix);
    out
}

/// Set the identity parameter for `user` in place.
///
/// Identifiers with no recognized shape (and URLs with no path) leave
/// `options` untouched.
pub fn merge_user_mut<'a>(
    options: &'a mut Options,
    user: &UserIdentifier,
    prefix: Option<&str>,
) -> &'a mut Options {
    match user {
        UserIdentifier::Id(id) => {
            options.insert(compound_key(USER_ID, prefix), *id);
        }
        UserIdentifier::Entity(entity) => {
            options.insert(compound_key(USER_ID, prefix), entity.id);
        }
        UserIdentifier::ScreenName(name) => {
            options.insert(compound_key(SCREEN_NAME, prefix), name.as_str());
        }
        UserIdentifier::Url(url) => {
            if let Some(name) = UserIdentifier::url_screen_name(url) {
                options.insert(compound_key(SCREEN_NAME, prefix), name);
            }
        }
        UserIdentifier::Unrecognized(_) => {}
    }
    options
}

/// Split identifiers into numeric ids and handles, preserving input order.
pub fn collect_user_ids(users: &[UserIdentifier]) -> (Vec<u64>, Vec<String>) {
    let mut ids = Vec::new();
    let mut names = Vec::new();
    for user in users {
        match user {
            UserIdentifier::Id(id) => ids.push(*id),
            UserIdentifier::Entity(entity) => ids.push(entity.id),
            UserIdentifier::ScreenName(name) => names.push(name.clone()),
            UserIdentifier::Url(url) => {
                if let Some(name) = UserIdentifier::url_screen_name(url) {
                    names.push(name.to_string());
                }
            }
            UserIdentifier::Unrecognized(_) => {}
        }
    }
    (ids, names)
}

/// Copy `options` and set comma-joined `user_id` / `screen_name` lists.
pub fn merge_users(options: &Options, users: &[UserIdentifier]) -> Options {
    let mut out = options.clone();
    merge_users_mut(&mut out, users);
    out
}

/// In-place variant of [`merge_users`]. Empty partitions add no key.
pub fn merge_users_mut<'a>(options: &'a mut Options, users: &[UserIdentifier]) -> &'a mut Options {
    let (ids, names) = collect_user_ids(users);
    if !ids.is_empty() {
        let joined = ids.iter().map(u64::to_string).collect::<Vec<_>>().join(",");
        options.insert(USER_ID, joined);
    }
    if !names.is_empty() {
        options.insert(SCREEN_NAME, names.join(","));
    }
    options
}
