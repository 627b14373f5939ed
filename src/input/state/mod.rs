mod actions;
mod core;
mod touch;
#[cfg(test)]
mod tests;

pub use core::{InputState, SwipeHandler};
