use std::fmt;

use serde::{Deserialize, Serialize};

use super::Cents;

/// Which party fronted the full bill amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Payer::User => "user",
            Payer::Friend => "friend",
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Payer {
    type Err = ParsePayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" | "you" | "me" => Ok(Payer::User),
            "friend" => Ok(Payer::Friend),
            _ => Err(ParsePayerError),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePayerError;

impl fmt::Display for ParsePayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "payer must be 'user' or 'friend'")
    }
}

impl std::error::Error for ParsePayerError {}

/// One validated bill split: the total, the user's share of it, and who
/// fronted the money.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillSplit {
    bill_total: Cents,
    user_expense: Cents,
    payer: Payer,
}

impl BillSplit {
    /// Requires a non-negative total and 0 <= user_expense <= bill_total.
    pub fn new(bill_total: Cents, user_expense: Cents, payer: Payer) -> Result<Self, SplitError> {
        if bill_total < 0 {
            return Err(SplitError::NegativeBill { bill_total });
        }
        if user_expense < 0 || user_expense > bill_total {
            return Err(SplitError::UserExpenseOutOfRange {
                user_expense,
                bill_total,
            });
        }
        Ok(Self {
            bill_total,
            user_expense,
            payer,
        })
    }

    pub fn bill_total(&self) -> Cents {
        self.bill_total
    }

    pub fn user_expense(&self) -> Cents {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// The friend's share of the bill.
    pub fn friend_expense(&self) -> Cents {
        self.bill_total - self.user_expense
    }

    /// The delta applied to the friend's balance.
    ///
    /// Whoever fronted the bill is owed the other party's share: the user
    /// paying raises the friend's balance by the friend's share, the friend
    /// paying lowers it by the user's share. Positive balance means the
    /// friend owes the user.
    pub fn balance_delta(&self) -> Cents {
        match self.payer {
            Payer::User => self.friend_expense(),
            Payer::Friend => -self.user_expense,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitError {
    NegativeBill {
        bill_total: Cents,
    },
    UserExpenseOutOfRange {
        user_expense: Cents,
        bill_total: Cents,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::NegativeBill { bill_total } => {
                write!(f, "bill total cannot be negative (got {} cents)", bill_total)
            }
            SplitError::UserExpenseOutOfRange {
                user_expense,
                bill_total,
            } => {
                write!(
                    f,
                    "user expense {} cents must be between 0 and the bill total {} cents",
                    user_expense, bill_total
                )
            }
        }
    }
}

impl std::error::Error for SplitError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friend_expense_is_remainder() {
        let split = BillSplit::new(10000, 4000, Payer::User).unwrap();
        assert_eq!(split.friend_expense(), 6000);
    }

    #[test]
    fn test_delta_when_user_pays() {
        // The user fronted $100, so the friend owes their own $60 share
        let split = BillSplit::new(10000, 4000, Payer::User).unwrap();
        assert_eq!(split.balance_delta(), 6000);
    }

    #[test]
    fn test_delta_when_friend_pays() {
        // The friend fronted $100, so the user owes their own $40 share
        let split = BillSplit::new(10000, 4000, Payer::Friend).unwrap();
        assert_eq!(split.balance_delta(), -4000);
    }

    #[test]
    fn test_user_covering_everything() {
        let split = BillSplit::new(10000, 10000, Payer::User).unwrap();
        assert_eq!(split.friend_expense(), 0);
        assert_eq!(split.balance_delta(), 0);
    }

    #[test]
    fn test_rejects_negative_bill() {
        assert!(matches!(
            BillSplit::new(-100, 0, Payer::User),
            Err(SplitError::NegativeBill { .. })
        ));
    }

    #[test]
    fn test_rejects_user_expense_over_bill() {
        assert!(matches!(
            BillSplit::new(10000, 15000, Payer::User),
            Err(SplitError::UserExpenseOutOfRange { .. })
        ));
    }

    #[test]
    fn test_payer_parse() {
        assert_eq!("user".parse::<Payer>(), Ok(Payer::User));
        assert_eq!("Friend".parse::<Payer>(), Ok(Payer::Friend));
        assert!("waiter".parse::<Payer>().is_err());
    }
}
