pub mod a101_complaint;
