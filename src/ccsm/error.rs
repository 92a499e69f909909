use thiserror::Error;

/// The single rejection kind for card operations. Each variant carries the fixed,
/// human-readable reason reported to the caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidOperation {
    #[error("May not set credit limit.")]
    SetCreditLimit,

    #[error("May not withdraw.")]
    Withdraw,

    #[error("May not accept payment.")]
    AcceptPayment,

    #[error("Must pay back some money before borrowing more.")]
    TooManyUnpaidTransactions,

    #[error("Not enough money left on card.")]
    InsufficientBalance,

    #[error("Cannot pay more money back than already owed.")]
    Overpayment,
}

impl InvalidOperation {
    pub fn reason(&self) -> &'static str {
        return match self {
            Self::SetCreditLimit => "May not set credit limit.",
            Self::Withdraw => "May not withdraw.",
            Self::AcceptPayment => "May not accept payment.",
            Self::TooManyUnpaidTransactions => "Must pay back some money before borrowing more.",
            Self::InsufficientBalance => "Not enough money left on card.",
            Self::Overpayment => "Cannot pay more money back than already owed.",
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_reason() {
        let all = [
            InvalidOperation::SetCreditLimit,
            InvalidOperation::Withdraw,
            InvalidOperation::AcceptPayment,
            InvalidOperation::TooManyUnpaidTransactions,
            InvalidOperation::InsufficientBalance,
            InvalidOperation::Overpayment,
        ];

        for err in all {
            assert_eq!(err.to_string(), err.reason());
        }
    }
}
