pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod dispatch;
pub mod enquiry_list;
pub mod export;
pub mod http;
pub mod icons;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod reload;
pub mod storage;
pub mod toast;
