use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchMapping {
    pub id: i64,
    pub branch: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, Validate, Deserialize)]
pub struct CreateBranchMapping {
    #[validate(length(min = 1, message = "branch is required"))]
    pub branch: String,

    #[validate(length(min = 1, message = "state is required"))]
    pub state: String,
}
