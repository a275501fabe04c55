//! Interactive line editor and number parsing demo.
//!
//! @test-mode: interactive
//!
//! Run with `cargo xtask qemu echo`. Type a line (backspace
//! edits it), then a decimal number; the board echoes the line back
//! and prints the number in hex. Quit QEMU with Ctrl-A X.

#![no_std]
#![no_main]

use testsuite::{entry, exit_failure};
use tiva_uart::{Config, Console, Serial, Uart1};

#[entry]
fn main() -> ! {
    let Some(mut uart) = Uart1::take() else {
        exit_failure()
    };
    uart.init(Config::default());

    let mut line = [0u8; 32];
    loop {
        uart.write_str("> ");
        let len = uart.read_line(&mut line);
        uart.write_newline();

        uart.write_str("line (");
        uart.write_decimal(len as u32);
        uart.write_str(" bytes): ");
        for &byte in &line[..len] {
            uart.write_byte(byte);
        }
        uart.write_newline();

        uart.write_str("dec: ");
        let n = uart.read_decimal();
        uart.write_newline();
        uart.write_str("  = 0x");
        uart.write_hex(n);
        uart.write_newline();
    }
}
