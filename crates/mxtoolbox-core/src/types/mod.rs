mod alive;
mod hosts;

pub use alive::*;
pub use hosts::*;
