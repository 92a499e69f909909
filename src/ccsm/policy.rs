/// Limits applied to a card once it is ready to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardPolicy {
    /// Withdrawals are refused while this many transactions are still unpaid
    pub max_unpaid_transactions: usize,
}

impl CardPolicy {
    pub const DEFAULT_MAX_UNPAID_TRANSACTIONS: usize = 45;

    pub fn new(max_unpaid_transactions: usize) -> Self {
        return Self {
            max_unpaid_transactions,
        };
    }
}

impl Default for CardPolicy {
    fn default() -> Self {
        return Self::new(Self::DEFAULT_MAX_UNPAID_TRANSACTIONS);
    }
}
