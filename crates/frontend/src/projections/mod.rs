pub mod p101_stock_enquiry;
pub mod p102_indent_enquiry;
pub mod p103_spare_list;
