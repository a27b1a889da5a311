//! Input normalization ahead of parsing

mod canonical;

pub use canonical::normalize;

#[cfg(test)]
mod tests;
