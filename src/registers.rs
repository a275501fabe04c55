//! TM4C123 register map for the UART1 signal path.
//!
//! Covers only what the driver touches: run-mode clock gating in the
//! system control block, the PB0/PB1 pin mux in GPIO port B, and the
//! UART1 block itself. Addresses per the TM4C123GH6PM data sheet.

use core::ptr::{with_exposed_provenance, with_exposed_provenance_mut};

const SYSCTL_BASE: usize = 0x400F_E000;
const GPIOB_BASE: usize = 0x4000_5000; // APB aperture
const UART1_BASE: usize = 0x4000_D000;

pub const SYSCTL_RCGCGPIO: usize = SYSCTL_BASE + 0x608; // GPIO Run Mode Clock Gating
pub const SYSCTL_RCGCUART: usize = SYSCTL_BASE + 0x618; // UART Run Mode Clock Gating

pub const GPIOB_AFSEL: usize = GPIOB_BASE + 0x420; // Alternate Function Select
pub const GPIOB_DEN: usize = GPIOB_BASE + 0x51C; // Digital Enable
pub const GPIOB_PCTL: usize = GPIOB_BASE + 0x52C; // Port Control (pin mux)

pub const UART_DR: usize = UART1_BASE + 0x000; // Data
pub const UART_FR: usize = UART1_BASE + 0x018; // Flag
pub const UART_IBRD: usize = UART1_BASE + 0x024; // Integer Baud-Rate Divisor
pub const UART_FBRD: usize = UART1_BASE + 0x028; // Fractional Baud-Rate Divisor
pub const UART_LCRH: usize = UART1_BASE + 0x02C; // Line Control
pub const UART_CTL: usize = UART1_BASE + 0x030; // Control

pub const RCGC_PORTB: u32 = 0x02; // bit 1 gates GPIO port B
pub const RCGC_UART1: u32 = 0x02; // bit 1 gates UART module 1

pub const PINS_PB0_PB1: u32 = 0x03; // PB0 = U1RX, PB1 = U1TX
pub const PCTL_PB0_PB1_MASK: u32 = 0xFF; // both 4-bit port control fields
pub const PCTL_PB0_PB1_UART: u32 = 0x11; // mux encoding 1 in each field

pub const CTL_UARTEN: u32 = 0x01; // UART enable
pub const CTL_HSE: u32 = 0x20; // high-speed enable (clock / 8 instead of / 16)

pub const LCRH_WLEN_8: u32 = 0x60; // 8-bit word length
pub const LCRH_FEN: u32 = 0x10; // FIFO enable
pub const LCRH_STP2: u32 = 0x08; // two stop bits
pub const LCRH_PEN: u32 = 0x02; // parity enable

pub const FR_TXFF: u32 = 0x20; // transmit FIFO full
pub const FR_RXFE: u32 = 0x10; // receive FIFO empty

/// Read a 32-bit register.
pub fn read(addr: usize) -> u32 {
    unsafe { with_exposed_provenance::<u32>(addr).read_volatile() }
}

/// Write a 32-bit register.
pub fn write(addr: usize, value: u32) {
    unsafe { with_exposed_provenance_mut::<u32>(addr).write_volatile(value) }
}

/// Read-modify-write: set the given bits.
pub fn set_bits(addr: usize, bits: u32) {
    write(addr, read(addr) | bits);
}

/// Read-modify-write: clear the given bits.
pub fn clear_bits(addr: usize, bits: u32) {
    write(addr, read(addr) & !bits);
}
