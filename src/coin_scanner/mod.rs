pub mod error;
pub mod main;
pub mod run;
pub mod throttle;

#[cfg(test)]
mod tests;
