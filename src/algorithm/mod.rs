/// Batch driver producing numbered pattern records
pub mod batch;
/// Breadth-first connectivity of white cells
pub mod connectivity;
/// Rejection-sampling pattern search
pub mod generator;
/// Structural validity checks
pub mod validation;
