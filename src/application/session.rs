use crate::domain::{Cents, Friend, FriendId};

use super::AppError;

/// Owns the roster, the selection, and the add-friend form visibility.
/// This is the sole mutator of financial state and the primary interface
/// for any front end.
pub struct Session {
    friends: Vec<Friend>,
    selected: Option<FriendId>,
    adding_friend: bool,
}

impl Session {
    /// Create a session over an explicit seed roster.
    pub fn new(seed: Vec<Friend>) -> Self {
        Self {
            friends: seed,
            selected: None,
            adding_friend: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn find_friend(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|friend| friend.id == id)
    }

    pub fn selected_id(&self) -> Option<FriendId> {
        self.selected
    }

    pub fn selected_friend(&self) -> Option<&Friend> {
        self.selected.and_then(|id| self.find_friend(id))
    }

    pub fn is_adding_friend(&self) -> bool {
        self.adding_friend
    }

    /// Append a friend with a fresh id and a settled balance, and close the
    /// add-friend form. Both fields must be non-empty after trimming;
    /// otherwise nothing changes.
    pub fn add_friend(&mut self, name: &str, image: &str) -> Result<Friend, AppError> {
        let name = name.trim();
        let image = image.trim();
        if name.is_empty() || image.is_empty() {
            return Err(AppError::EmptyFields);
        }

        let friend = Friend::new(name, image);
        self.friends.push(friend.clone());
        self.adding_friend = false;
        Ok(friend)
    }

    /// Add `delta` to the friend's balance and return the new balance.
    pub fn apply_balance_delta(&mut self, id: FriendId, delta: Cents) -> Result<Cents, AppError> {
        let friend = self
            .friends
            .iter_mut()
            .find(|friend| friend.id == id)
            .ok_or(AppError::FriendNotFound(id))?;

        friend.balance += delta;
        Ok(friend.balance)
    }

    /// Select the friend, or deselect when already selected. Selecting
    /// closes the add-friend form either way.
    pub fn toggle_selection(&mut self, id: FriendId) -> Result<Option<FriendId>, AppError> {
        if self.find_friend(id).is_none() {
            return Err(AppError::FriendNotFound(id));
        }

        self.selected = if self.selected == Some(id) {
            None
        } else {
            Some(id)
        };
        self.adding_friend = false;
        Ok(self.selected)
    }

    /// Show or hide the add-friend form; opening it clears the selection.
    /// Returns the new visibility.
    pub fn toggle_add_friend_form(&mut self) -> bool {
        self.adding_friend = !self.adding_friend;
        if self.adding_friend {
            self.selected = None;
        }
        self.adding_friend
    }

    /// Apply a completed split's delta to the selected friend.
    pub fn settle_split(&mut self, delta: Cents) -> Result<Cents, AppError> {
        let id = self.selected.ok_or(AppError::NoSelection)?;
        self.apply_balance_delta(id, delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Session {
        Session::new(vec![
            Friend::new("Clark", "https://i.pravatar.cc/48?u=clark").with_balance(-700),
            Friend::new("Sarah", "https://i.pravatar.cc/48?u=sarah").with_balance(2000),
        ])
    }

    #[test]
    fn test_add_friend_closes_form() {
        let mut session = Session::empty();
        session.toggle_add_friend_form();
        assert!(session.is_adding_friend());

        session.add_friend("Anthony", "https://i.pravatar.cc/48").unwrap();
        assert!(!session.is_adding_friend());
        assert_eq!(session.friends().len(), 1);
    }

    #[test]
    fn test_add_friend_trims_input() {
        let mut session = Session::empty();
        let friend = session
            .add_friend("  Anthony  ", " https://i.pravatar.cc/48 ")
            .unwrap();
        assert_eq!(friend.name, "Anthony");
        assert_eq!(friend.image, "https://i.pravatar.cc/48");
    }

    #[test]
    fn test_selection_toggle() {
        let mut session = seeded();
        let clark = session.friends()[0].id;

        assert_eq!(session.toggle_selection(clark).unwrap(), Some(clark));
        assert_eq!(session.toggle_selection(clark).unwrap(), None);
    }

    #[test]
    fn test_opening_add_form_clears_selection() {
        let mut session = seeded();
        let clark = session.friends()[0].id;
        session.toggle_selection(clark).unwrap();

        session.toggle_add_friend_form();
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn test_selecting_closes_add_form() {
        let mut session = seeded();
        session.toggle_add_friend_form();

        let clark = session.friends()[0].id;
        session.toggle_selection(clark).unwrap();
        assert!(!session.is_adding_friend());
    }

    #[test]
    fn test_settle_split_requires_selection() {
        let mut session = seeded();
        assert!(matches!(
            session.settle_split(1000),
            Err(AppError::NoSelection)
        ));
    }
}
