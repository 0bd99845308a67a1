// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use tabsplit::application::Session;
use tabsplit::domain::{Cents, Friend, FriendId, PLACEHOLDER_IMAGE};

/// The classic three-friend roster: one the user owes, one who owes the
/// user, one settled.
pub fn demo_session() -> Session {
    Session::new(vec![
        Friend::new("Clark", avatar("clark")).with_balance(-700),
        Friend::new("Sarah", avatar("sarah")).with_balance(2000),
        Friend::new("Anthony", avatar("anthony")),
    ])
}

pub fn avatar(slug: &str) -> String {
    format!("{}?u={}", PLACEHOLDER_IMAGE, slug)
}

pub fn id_of(session: &Session, name: &str) -> FriendId {
    session
        .friends()
        .iter()
        .find(|friend| friend.name == name)
        .map(|friend| friend.id)
        .unwrap_or_else(|| panic!("no friend named {name}"))
}

pub fn balance_of(session: &Session, name: &str) -> Cents {
    session
        .friends()
        .iter()
        .find(|friend| friend.name == name)
        .map(|friend| friend.balance)
        .unwrap_or_else(|| panic!("no friend named {name}"))
}
