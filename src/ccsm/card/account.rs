use super::CardState;

use crate::ids::AccountId;
use crate::{AccountReport, CardPolicy, Money, OperationResult};

use std::collections::VecDeque;

/// The stable public handle for a credit card. Every operation is delegated to the current
/// [`CardState`]; a rejected operation leaves the account exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditCardAccount {
    id: AccountId,
    state: CardState,
    policy: CardPolicy,
}

impl CreditCardAccount {
    pub fn new(id: AccountId) -> Self {
        return Self::with_policy(id, CardPolicy::default());
    }

    pub fn with_policy(id: AccountId, policy: CardPolicy) -> Self {
        return Self {
            id,
            state: CardState::default(),
            policy,
        };
    }

    pub fn set_credit_limit(&mut self, limit: Money) -> OperationResult {
        log::debug!("Setting credit limit {limit} on account {}", self.id);

        let next = self.state.set_credit_limit(limit)?;

        log::debug!(
            "Account {} transitioned from {} to {}",
            self.id,
            self.state.name(),
            next.name()
        );

        self.state = next;

        return Ok(());
    }

    pub fn withdraw(&mut self, amount: Money) -> OperationResult {
        log::debug!("Withdrawing {amount} from account {}", self.id);
        return self.state.withdraw(amount, &self.policy);
    }

    pub fn accept_payment(&mut self, amount: Money) -> OperationResult {
        log::debug!("Accepting payment of {amount} on account {}", self.id);
        return self.state.accept_payment(amount);
    }

    pub fn id(&self) -> AccountId {
        return self.id;
    }

    pub fn state(&self) -> &CardState {
        return &self.state;
    }

    pub fn policy(&self) -> &CardPolicy {
        return &self.policy;
    }

    pub fn is_ready(&self) -> bool {
        return matches!(self.state, CardState::Ready(_));
    }

    pub fn limit(&self) -> Option<Money> {
        return match &self.state {
            CardState::Ready(card) => Some(card.limit()),
            _ => None,
        };
    }

    pub fn balance_remaining(&self) -> Option<Money> {
        return match &self.state {
            CardState::Ready(card) => Some(card.balance_remaining()),
            _ => None,
        };
    }

    pub fn owed(&self) -> Option<Money> {
        return match &self.state {
            CardState::Ready(card) => Some(card.owed()),
            _ => None,
        };
    }

    pub fn unpaid_transactions(&self) -> Option<&VecDeque<Money>> {
        return match &self.state {
            CardState::Ready(card) => Some(card.unpaid_transactions()),
            _ => None,
        };
    }

    pub fn report(&self) -> AccountReport {
        AccountReport {
            account: self.id.0,
            state: self.state.name().to_string(),
            limit: self.limit().map(|money| money.0),
            balance: self.balance_remaining().map(|money| money.0),
            owed: self.owed().map(|money| money.0),
            unpaid: self.unpaid_transactions().map(|txs| txs.len()).unwrap_or(0),
        }
    }
}
