use serde::{Deserialize, Serialize};

/// One output row per account. Numeric columns are empty until a credit limit is set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct AccountReport {
    pub account: u16,
    pub state: String,
    pub limit: Option<u64>,
    pub balance: Option<u64>,
    pub owed: Option<u64>,
    pub unpaid: usize,
}
