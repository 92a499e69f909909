mod account;
mod state;

pub use account::CreditCardAccount;
pub use state::{CardState, NewCard, ReadyCard};
