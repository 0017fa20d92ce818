//! Domain logic for the net value calculation lives here.

pub mod calculator;
pub mod currency;
pub mod form;

pub use calculator::NetValue;
pub use currency::CurrencyFormat;
pub use form::{CalculatorForm, FormField, RESULT_ELEMENT_ID};
