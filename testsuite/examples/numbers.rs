//! Format numbers through the real transmit path.

#![no_std]
#![no_main]

use testsuite::{entry, exit_failure, exit_success};
use tiva_uart::{Config, Console, Divisors, Uart1};

#[entry]
fn main() -> ! {
    let Some(mut uart) = Uart1::take() else {
        exit_failure()
    };

    // The stock 50 MHz / 9600 configuration must come out as the
    // 325 + 33/64 divisor pair.
    let config = Config::default();
    let expected = Divisors {
        integer: 325,
        fractional: 33,
    };
    if config.divisors() != expected {
        exit_failure();
    }
    uart.init(config);

    uart.write_str("decimal:");
    uart.write_newline();
    for n in [0, 7, 100, 4095, u32::MAX] {
        uart.write_decimal(n);
        uart.write_newline();
    }

    uart.write_str("hex:");
    uart.write_newline();
    for n in [0, 15, 16, 255, 0xDEAD_BEEF] {
        uart.write_hex(n);
        uart.write_newline();
    }

    exit_success();
}
