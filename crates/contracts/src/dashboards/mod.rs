pub mod d100_service_summary;
