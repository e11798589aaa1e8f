//! Common traits shared by every use case

pub mod usecase_metadata;

pub use usecase_metadata::UseCaseMetadata;
