use thiserror::Error;

use crate::domain::FriendId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Friend not found: {0}")]
    FriendNotFound(FriendId),

    #[error("input fields cannot be empty")]
    EmptyFields,

    #[error("No friend is selected")]
    NoSelection,
}
