pub mod amount_input;
pub mod breakdown_card;
pub mod net_value_display;
