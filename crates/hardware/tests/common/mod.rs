//! Shared test infrastructure.



#[cfg(test)]
mod infrastructure_tests;
