use crate::{CardPolicy, InvalidOperation, Money, OperationResult};

use std::collections::VecDeque;

/// CardState is a finite state-machine with the following structure:
///
/// NewCard
/// -> set_credit_limit: ReadyCard
///
/// ReadyCard
/// -> withdraw: ReadyCard
/// -> accept_payment: ReadyCard
///
/// Any other operation is rejected and leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardState {
    New(NewCard),
    Ready(ReadyCard),
}

impl CardState {
    pub fn name(&self) -> &'static str {
        return match self {
            Self::New(_) => "new",
            Self::Ready(_) => "ready",
        };
    }

    /// Returns the state the card moves into. The caller owns the assignment.
    pub fn set_credit_limit(&self, limit: Money) -> OperationResult<CardState> {
        return match self {
            Self::New(card) => Ok(Self::Ready(card.set_credit_limit(limit))),
            _ => Err(InvalidOperation::SetCreditLimit),
        };
    }

    pub fn withdraw(&mut self, amount: Money, policy: &CardPolicy) -> OperationResult {
        return match self {
            Self::Ready(card) => card.withdraw(amount, policy),
            _ => Err(InvalidOperation::Withdraw),
        };
    }

    pub fn accept_payment(&mut self, amount: Money) -> OperationResult {
        return match self {
            Self::Ready(card) => card.accept_payment(amount),
            _ => Err(InvalidOperation::AcceptPayment),
        };
    }
}

impl Default for CardState {
    fn default() -> Self {
        return Self::New(NewCard);
    }
}

/// A card without a credit limit yet
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NewCard;

impl NewCard {
    pub fn set_credit_limit(&self, limit: Money) -> ReadyCard {
        return ReadyCard::new(limit);
    }
}

/// A card with an active credit limit.
///
/// `unpaid_transactions` is oldest-first. A payment always retires the oldest entry but credits
/// the paid amount, so the queue total and `limit - balance_remaining` can drift apart once a
/// payment differs from the transaction it retires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyCard {
    limit: Money,
    balance_remaining: Money,
    unpaid_transactions: VecDeque<Money>,
}

impl ReadyCard {
    pub fn new(limit: Money) -> Self {
        return Self {
            limit,
            balance_remaining: limit,
            unpaid_transactions: VecDeque::new(),
        };
    }

    pub fn limit(&self) -> Money {
        return self.limit;
    }

    pub fn balance_remaining(&self) -> Money {
        return self.balance_remaining;
    }

    pub fn unpaid_transactions(&self) -> &VecDeque<Money> {
        return &self.unpaid_transactions;
    }

    pub fn owed(&self) -> Money {
        return self.limit - self.balance_remaining;
    }

    pub fn withdraw(&mut self, amount: Money, policy: &CardPolicy) -> OperationResult {
        if self.unpaid_transactions.len() >= policy.max_unpaid_transactions {
            Err(InvalidOperation::TooManyUnpaidTransactions)?
        }

        if self.balance_remaining == Money::ZERO || amount > self.balance_remaining {
            Err(InvalidOperation::InsufficientBalance)?
        }

        self.balance_remaining = self.balance_remaining - amount;
        self.unpaid_transactions.push_back(amount);

        return Ok(());
    }

    pub fn accept_payment(&mut self, amount: Money) -> OperationResult {
        if amount > self.owed() {
            Err(InvalidOperation::Overpayment)?
        }

        let retired = self.unpaid_transactions.pop_front();
        log::debug!("Payment of {amount} retired unpaid transaction {retired:?}");

        self.balance_remaining = self.balance_remaining + amount;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_LIMIT: Money = Money(200);

    fn build_ready_card(limit: Money, withdrawals: &[u64]) -> ReadyCard {
        let mut card = NewCard.set_credit_limit(limit);

        for amount in withdrawals {
            card.withdraw(Money(*amount), &CardPolicy::default()).unwrap();
        }

        card
    }

    #[test]
    fn set_credit_limit() {
        let state = CardState::default();

        let state = state.set_credit_limit(SOME_LIMIT).unwrap();

        assert_eq!(state, CardState::Ready(ReadyCard::new(SOME_LIMIT)));

        if let CardState::Ready(card) = &state {
            assert_eq!(card.limit(), SOME_LIMIT);
            assert_eq!(card.balance_remaining(), SOME_LIMIT);
            assert!(card.unpaid_transactions().is_empty());
        }
    }

    #[test]
    fn set_credit_limit_twice() {
        let state = CardState::default().set_credit_limit(SOME_LIMIT).unwrap();

        assert_eq!(
            state.set_credit_limit(Money(999)),
            Err(InvalidOperation::SetCreditLimit)
        );
    }

    #[test]
    fn new_card_rejects_withdraw_and_payment() {
        let mut state = CardState::default();

        assert_eq!(
            state.withdraw(Money(60), &CardPolicy::default()),
            Err(InvalidOperation::Withdraw)
        );
        assert_eq!(
            state.accept_payment(Money(60)),
            Err(InvalidOperation::AcceptPayment)
        );
        assert_eq!(state, CardState::New(NewCard));
    }

    #[test]
    fn withdraw() {
        let card = build_ready_card(SOME_LIMIT, &[20, 30]);

        assert_eq!(card.balance_remaining(), Money(150));
        assert_eq!(
            card.unpaid_transactions(),
            &VecDeque::from(vec![Money(20), Money(30)])
        );
        assert_eq!(card.owed(), Money(50));
    }

    #[test]
    fn withdraw_entire_balance() {
        let mut card = build_ready_card(SOME_LIMIT, &[200]);

        assert_eq!(card.balance_remaining(), Money::ZERO);
        assert_eq!(
            card.withdraw(Money::ZERO, &CardPolicy::default()),
            Err(InvalidOperation::InsufficientBalance)
        );
    }

    #[test]
    fn withdraw_more_than_balance() {
        let mut card = build_ready_card(SOME_LIMIT, &[150]);
        let before = card.clone();

        assert_eq!(
            card.withdraw(Money(51), &CardPolicy::default()),
            Err(InvalidOperation::InsufficientBalance)
        );
        assert_eq!(card, before);
    }

    #[test]
    fn withdraw_on_zero_limit() {
        let mut card = NewCard.set_credit_limit(Money::ZERO);

        assert_eq!(
            card.withdraw(Money::ZERO, &CardPolicy::default()),
            Err(InvalidOperation::InsufficientBalance)
        );
    }

    #[test]
    fn withdraw_past_unpaid_transaction_limit() {
        let policy = CardPolicy::default();
        let mut card = NewCard.set_credit_limit(Money(1000));

        for _ in 0..45 {
            assert_eq!(card.withdraw(Money(1), &policy), Ok(()));
        }

        let before = card.clone();

        assert_eq!(
            card.withdraw(Money(1), &policy),
            Err(InvalidOperation::TooManyUnpaidTransactions)
        );
        assert_eq!(card, before);
        assert_eq!(card.unpaid_transactions().len(), 45);
    }

    #[test]
    fn unpaid_transaction_limit_is_checked_before_balance() {
        let policy = CardPolicy::new(1);
        let mut card = NewCard.set_credit_limit(Money(10));

        card.withdraw(Money(10), &policy).unwrap();

        assert_eq!(
            card.withdraw(Money(1), &policy),
            Err(InvalidOperation::TooManyUnpaidTransactions)
        );
    }

    #[test]
    fn payment_frees_unpaid_transaction_slot() {
        let policy = CardPolicy::new(2);
        let mut card = NewCard.set_credit_limit(Money(100));

        card.withdraw(Money(10), &policy).unwrap();
        card.withdraw(Money(10), &policy).unwrap();
        card.accept_payment(Money(10)).unwrap();

        assert_eq!(card.withdraw(Money(10), &policy), Ok(()));
    }

    #[test]
    fn accept_payment() {
        let mut card = build_ready_card(SOME_LIMIT, &[20, 30]);

        card.accept_payment(Money(20)).unwrap();

        assert_eq!(card.balance_remaining(), Money(170));
        assert_eq!(card.unpaid_transactions(), &VecDeque::from(vec![Money(30)]));
    }

    #[test]
    fn accept_payment_credits_paid_amount() {
        let mut card = build_ready_card(SOME_LIMIT, &[20, 30]);

        card.accept_payment(Money(45)).unwrap();

        assert_eq!(card.balance_remaining(), Money(195));
        assert_eq!(card.unpaid_transactions(), &VecDeque::from(vec![Money(30)]));
    }

    #[test]
    fn accept_payment_more_than_owed() {
        let mut card = build_ready_card(SOME_LIMIT, &[20, 30]);
        let before = card.clone();

        assert_eq!(
            card.accept_payment(Money(60)),
            Err(InvalidOperation::Overpayment)
        );
        assert_eq!(card, before);
    }

    #[test]
    fn accept_zero_payment_with_nothing_owed() {
        let mut card = build_ready_card(SOME_LIMIT, &[]);

        assert_eq!(card.accept_payment(Money::ZERO), Ok(()));
        assert_eq!(card.balance_remaining(), SOME_LIMIT);
    }
}
