pub mod common;
pub mod u201_grc_return;
pub mod u202_generate_indent;
pub mod u203_complaint_mail;
pub mod u204_generate_rfr;
pub mod u205_reallocation;
