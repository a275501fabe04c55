#![no_std]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod console;
mod registers;
mod uart;

pub use console::{BS, CR, Console, LF, Serial};
pub use uart::{Config, Divisors, Uart1};
