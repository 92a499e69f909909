use crate::ids::AccountId;
use crate::Money;
use crate::Result;

use crate::{Operation, OperationKind};

use serde::Deserialize;

use thiserror::Error;

/// Represents an input row that a string would deserialize into
#[derive(Deserialize, Debug, Clone)]
pub struct InputEvent {
    #[serde(rename = "type")]
    pub typ: InputEventType,

    pub account: u16,
    pub amount: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputEventType {
    Limit,
    Withdraw,
    Payment,
}

#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("Error parsing input event: amount value missing: {0:?}")]
    MissingAmount(InputEvent),

    #[error("Error parsing input event: invalid amount in {0:?}: {1}")]
    InvalidAmount(InputEvent, String),
}

impl InputEvent {
    pub fn parse_operation(self) -> Result<Operation> {
        let amount = self
            .amount
            .clone()
            .filter(|amount| !amount.trim().is_empty())
            .ok_or_else(|| InputParseError::MissingAmount(self.clone()))?;

        let amount = Money::parse(amount)
            .map_err(|e| InputParseError::InvalidAmount(self.clone(), e.to_string()))?;

        let kind = match self.typ {
            InputEventType::Limit => OperationKind::SetCreditLimit { limit: amount },
            InputEventType::Withdraw => OperationKind::Withdraw { amount },
            InputEventType::Payment => OperationKind::AcceptPayment { amount },
        };

        Ok(Operation {
            account_id: AccountId(self.account),
            kind,
        })
    }
}
