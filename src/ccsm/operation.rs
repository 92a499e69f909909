use crate::ids::AccountId;
use crate::Money;

/// Operation represents a requested change to a credit card account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub account_id: AccountId,
    pub kind: OperationKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    SetCreditLimit { limit: Money },
    Withdraw { amount: Money },
    AcceptPayment { amount: Money },
}
