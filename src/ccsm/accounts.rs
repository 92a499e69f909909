use crate::ids::AccountId;
use crate::{AccountReport, CardPolicy, CreditCardAccount};
use crate::{Operation, OperationKind, OperationResult};

use std::collections::BTreeMap;

/// Convenience structure for mapping account IDs to credit card accounts
#[derive(Debug, Default)]
pub struct Accounts {
    policy: CardPolicy,
    map: BTreeMap<AccountId, CreditCardAccount>,
}

impl Accounts {
    pub fn new(policy: CardPolicy) -> Self {
        return Self {
            policy,
            map: BTreeMap::new(),
        };
    }

    pub fn find(&self, account_id: &AccountId) -> Option<&CreditCardAccount> {
        return self.map.get(account_id);
    }

    pub fn find_mut_or_create(&mut self, account_id: AccountId) -> &mut CreditCardAccount {
        let policy = self.policy;

        return self
            .map
            .entry(account_id)
            .or_insert_with(|| CreditCardAccount::with_policy(account_id, policy));
    }

    /// Applies an operation to its account, creating the account on first reference
    pub fn apply(&mut self, operation: &Operation) -> OperationResult {
        let account = self.find_mut_or_create(operation.account_id);

        return match operation.kind {
            OperationKind::SetCreditLimit { limit } => account.set_credit_limit(limit),
            OperationKind::Withdraw { amount } => account.withdraw(amount),
            OperationKind::AcceptPayment { amount } => account.accept_payment(amount),
        };
    }

    pub fn build_report(&self) -> Vec<AccountReport> {
        return self.map.values().map(|account| account.report()).collect();
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
