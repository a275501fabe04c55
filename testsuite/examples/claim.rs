//! The peripheral handle is handed out exactly once.

#![no_std]
#![no_main]

use testsuite::{entry, exit_failure, exit_success};
use tiva_uart::{Config, Console, Uart1};

#[entry]
fn main() -> ! {
    let Some(mut uart) = Uart1::take() else {
        exit_failure()
    };
    uart.init(Config::default());

    if Uart1::take().is_some() {
        exit_failure();
    }
    uart.write_str("claimed once");
    uart.write_newline();

    exit_success();
}
