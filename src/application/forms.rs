use crate::domain::{BillSplit, Cents, Friend, Payer, PLACEHOLDER_IMAGE};

use super::{AppError, Session};

/// Draft state for the add-friend form. Keeps the inline validation
/// message from the last rejected submission.
#[derive(Debug, Clone)]
pub struct AddFriendForm {
    pub name: String,
    pub image: String,
    error: Option<String>,
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: PLACEHOLDER_IMAGE.to_string(),
            error: None,
        }
    }
}

impl AddFriendForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_image(&mut self, image: &str) {
        self.image = image.to_string();
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submit the draft to the session. On success the draft resets to its
    /// defaults; on a validation failure the draft is kept and the inline
    /// message is retained for display.
    pub fn submit(&mut self, session: &mut Session) -> Result<Friend, AppError> {
        match session.add_friend(&self.name, &self.image) {
            Ok(friend) => {
                *self = Self::default();
                Ok(friend)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                Err(err)
            }
        }
    }
}

/// Draft state for the split-bill form. Field edits are validated at entry
/// time: a rejected edit leaves the previous value in place.
#[derive(Debug, Clone, Default)]
pub struct SplitBillForm {
    bill: Option<Cents>,
    user_expense: Option<Cents>,
    payer: Payer,
}

impl SplitBillForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(&self) -> Option<Cents> {
        self.bill
    }

    pub fn user_expense(&self) -> Option<Cents> {
        self.user_expense
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Returns false when the edit is rejected (negative amount).
    pub fn set_bill(&mut self, amount: Cents) -> bool {
        if amount < 0 {
            return false;
        }
        self.bill = Some(amount);
        true
    }

    /// Returns false when the edit is rejected (negative, or above the
    /// current bill). With no bill entered yet the upper bound is zero.
    pub fn set_user_expense(&mut self, amount: Cents) -> bool {
        if amount < 0 || amount > self.bill.unwrap_or(0) {
            return false;
        }
        self.user_expense = Some(amount);
        true
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// Derived share for the friend; unknown until a bill is entered.
    pub fn friend_expense(&self) -> Option<Cents> {
        self.bill.map(|bill| bill - self.user_expense.unwrap_or(0))
    }

    /// Produce the delta for the selected friend's balance and reset the
    /// form. Returns None, changing nothing, while a required field is
    /// unset or the draft no longer describes a valid split.
    pub fn submit(&mut self) -> Option<Cents> {
        let bill = self.bill?;
        let user_expense = self.user_expense?;
        let split = BillSplit::new(bill, user_expense, self.payer).ok()?;

        let delta = split.balance_delta();
        *self = Self::default();
        Some(delta)
    }
}
