use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{format_dollars, Cents};

pub type FriendId = Uuid;

/// Avatar used when the add-friend form is submitted with the default image.
pub const PLACEHOLDER_IMAGE: &str = "https://i.pravatar.cc/48";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    /// Avatar URI shown next to the name
    pub image: String,
    /// Net cents between the user and this friend.
    /// Positive: the friend owes the user. Negative: the user owes the friend.
    pub balance: Cents,
    pub created_at: DateTime<Utc>,
}

impl Friend {
    /// Create a friend with a fresh id and a settled balance.
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            image: image.into(),
            balance: 0,
            created_at: Utc::now(),
        }
    }

    pub fn with_balance(mut self, balance: Cents) -> Self {
        self.balance = balance;
        self
    }

    pub fn standing(&self) -> Standing {
        match self.balance {
            b if b < 0 => Standing::UserOwes(-b),
            b if b > 0 => Standing::FriendOwes(b),
            _ => Standing::Even,
        }
    }

    /// The relationship line shown in the friend list.
    pub fn relationship_message(&self) -> String {
        match self.standing() {
            Standing::UserOwes(amount) => {
                format!("You owe {} {}", self.name, format_dollars(amount))
            }
            Standing::FriendOwes(amount) => {
                format!("{} owes you {}", self.name, format_dollars(amount))
            }
            Standing::Even => format!("You and {} are even", self.name),
        }
    }
}

/// Who owes whom, with the owed amount as a positive number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    UserOwes(Cents),
    FriendOwes(Cents),
    Even,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_friend_is_settled() {
        let friend = Friend::new("Clark", PLACEHOLDER_IMAGE);
        assert_eq!(friend.balance, 0);
        assert_eq!(friend.standing(), Standing::Even);
    }

    #[test]
    fn test_standing_signs() {
        let friend = Friend::new("Clark", PLACEHOLDER_IMAGE);
        assert_eq!(
            friend.clone().with_balance(-700).standing(),
            Standing::UserOwes(700)
        );
        assert_eq!(
            friend.clone().with_balance(2000).standing(),
            Standing::FriendOwes(2000)
        );
        assert_eq!(friend.with_balance(0).standing(), Standing::Even);
    }

    #[test]
    fn test_relationship_messages() {
        let friend = Friend::new("Clark", PLACEHOLDER_IMAGE);
        assert_eq!(
            friend.clone().with_balance(-700).relationship_message(),
            "You owe Clark $7.00"
        );
        assert_eq!(
            friend.clone().with_balance(2000).relationship_message(),
            "Clark owes you $20.00"
        );
        assert_eq!(
            friend.relationship_message(),
            "You and Clark are even"
        );
    }
}
