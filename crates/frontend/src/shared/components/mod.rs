pub mod enquiry_table;
pub mod filter_panel;
pub mod flag_toggle;
pub mod pagination_controls;
pub mod stat_card;
pub mod suggest_input;
pub mod table_checkbox;
