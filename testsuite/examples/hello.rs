//! Bring up UART1 and write a banner.

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

    uart.write_str("Hello over UART1");
    uart.write_newline();
    uart.write_str("no trailing newline after this:");
    uart.write_newline();
    uart.write_str("done");

    exit_success();
}
