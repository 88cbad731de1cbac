pub mod classifier;
pub mod decoder;
pub mod error;
pub mod prediction_result;
pub mod raw_output;

#[cfg(test)]
mod tests;
