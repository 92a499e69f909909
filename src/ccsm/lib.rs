mod account_report;
mod accounts;
pub mod card;
mod error;
pub mod ids;
pub mod input;
mod money;
mod operation;
mod policy;
mod result;

pub use account_report::AccountReport;
pub use accounts::Accounts;
pub use card::{CardState, CreditCardAccount};
pub use error::InvalidOperation;
pub use money::{Money, MoneyError};
pub use operation::{Operation, OperationKind};
pub use policy::CardPolicy;
pub use result::{OperationResult, Result};
