//! UART1 peripheral handle: bring-up and blocking byte I/O.

use core::hint::spin_loop;
use core::marker::PhantomData;
use core::sync::atomic::{AtomicBool, Ordering};

use crate::console::Serial;
use crate::registers as regs;

/// Clocking parameters for [`Uart1::init`].
///
/// The frame format is fixed at 8 data bits, one stop bit, no parity,
/// FIFOs enabled; only the clock and baud rate vary between boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct Config {
    /// System clock frequency in hertz.
    pub clock_hz: u32,
    /// Baud rate in bits per second.
    pub baud: u32,
}

impl Default for Config {
    /// 50 MHz system clock, 9600 baud.
    fn default() -> Self {
        Config {
            clock_hz: 50_000_000,
            baud: 9600,
        }
    }
}

impl Config {
    /// Baud-rate divisor for this configuration: `clock / (16 * baud)`
    /// as a 16.6 fixed-point value, rounded to the nearest 1/64.
    ///
    /// # Panics
    ///
    /// Panics if `baud` is zero.
    pub fn divisors(self) -> Divisors {
        // Computed in 1/128 units so the final halving rounds instead
        // of truncating.
        let brd = (self.clock_hz as u64 * 8 / self.baud as u64 + 1) / 2;
        Divisors {
            integer: (brd >> 6) as u16,
            fractional: (brd & 0x3F) as u8,
        }
    }
}

/// Integer and fractional baud-rate divisor pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct Divisors {
    /// Whole part of the divisor.
    pub integer: u16,
    /// Fractional part in units of 1/64.
    pub fractional: u8,
}

/// Owned handle to the UART1 peripheral.
///
/// The chip has exactly one UART1, so there is exactly one handle:
/// [`Uart1::take`] hands it out once per reset. The handle is neither
/// `Send` nor `Sync`; all I/O is blocking and single-context.
pub struct Uart1 {
    _not_sync: PhantomData<*const ()>,
}

impl Uart1 {
    /// Claim the UART1 peripheral.
    ///
    /// Returns `None` if the handle has already been taken.
    pub fn take() -> Option<Self> {
        static TAKEN: AtomicBool = AtomicBool::new(false);

        critical_section::with(|_| {
            if TAKEN.load(Ordering::Relaxed) {
                None
            } else {
                TAKEN.store(true, Ordering::Relaxed);
                // SAFETY: The flag guarantees no other handle exists.
                Some(unsafe { Uart1::steal() })
            }
        })
    }

    /// Conjure a handle without claiming it.
    ///
    /// # Safety
    ///
    /// Bypasses the [`take`](Uart1::take) bookkeeping. The caller must
    /// guarantee no other context holds a UART1 handle.
    pub unsafe fn steal() -> Self {
        Uart1 {
            _not_sync: PhantomData,
        }
    }

    /// Bring up UART1 on PB0 (receive) and PB1 (transmit).
    ///
    /// Ordering matters here: clocks are gated on before their register
    /// blocks are touched, and the UART stays disabled while the baud
    /// and format fields change.
    ///
    /// Calling this again on a running UART is allowed; any traffic in
    /// flight is dropped.
    pub fn init(&mut self, config: Config) {
        let divisors = config.divisors();

        // Clock gating for UART module 1 and GPIO port B.
        regs::set_bits(regs::SYSCTL_RCGCUART, regs::RCGC_UART1);
        regs::set_bits(regs::SYSCTL_RCGCGPIO, regs::RCGC_PORTB);

        // PB0/PB1 to their UART alternate function, digital buffers on.
        regs::set_bits(regs::GPIOB_AFSEL, regs::PINS_PB0_PB1);
        let pctl = regs::read(regs::GPIOB_PCTL) & !regs::PCTL_PB0_PB1_MASK;
        regs::write(regs::GPIOB_PCTL, pctl | regs::PCTL_PB0_PB1_UART);
        regs::set_bits(regs::GPIOB_DEN, regs::PINS_PB0_PB1);

        // Disabled while the baud and format fields change.
        regs::clear_bits(regs::UART_CTL, regs::CTL_UARTEN);

        // System clock / 16, then the 16.6 fixed-point divisor.
        regs::clear_bits(regs::UART_CTL, regs::CTL_HSE);
        regs::write(regs::UART_IBRD, divisors.integer as u32);
        regs::write(regs::UART_FBRD, divisors.fractional as u32);

        // 8 data bits, FIFOs on, one stop bit, no parity.
        let lcrh = (regs::read(regs::UART_LCRH) | regs::LCRH_WLEN_8 | regs::LCRH_FEN)
            & !(regs::LCRH_STP2 | regs::LCRH_PEN);
        regs::write(regs::UART_LCRH, lcrh);

        regs::set_bits(regs::UART_CTL, regs::CTL_UARTEN);
    }
}

impl Serial for Uart1 {
    /// Blocks until the receive FIFO is non-empty.
    fn read_byte(&mut self) -> u8 {
        while regs::read(regs::UART_FR) & regs::FR_RXFE != 0 {
            spin_loop();
        }
        regs::read(regs::UART_DR) as u8
    }

    /// Blocks while the transmit FIFO is full.
    fn write_byte(&mut self, byte: u8) {
        while regs::read(regs::UART_FR) & regs::FR_TXFF != 0 {
            spin_loop();
        }
        regs::write(regs::UART_DR, byte as u32);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn divisors_50mhz_9600() {
        let config = Config::default();
        assert_eq!(config.clock_hz, 50_000_000);
        assert_eq!(config.baud, 9600);
        assert_eq!(
            config.divisors(),
            Divisors {
                integer: 325,
                fractional: 33,
            }
        );
    }

    #[test]
    fn divisors_16mhz_115200() {
        let config = Config {
            clock_hz: 16_000_000,
            baud: 115_200,
        };
        assert_eq!(
            config.divisors(),
            Divisors {
                integer: 8,
                fractional: 44,
            }
        );
    }

    #[test]
    fn divisors_round_to_nearest() {
        // 16 MHz / (16 * 9600) = 104.1666..: the fraction lands on
        // 10.66 units of 1/64 and must round up to 11.
        let config = Config {
            clock_hz: 16_000_000,
            baud: 9600,
        };
        assert_eq!(
            config.divisors(),
            Divisors {
                integer: 104,
                fractional: 11,
            }
        );
    }

    #[test]
    fn divisors_exact_ratio_has_no_fraction() {
        let config = Config {
            clock_hz: 1_843_200,
            baud: 115_200,
        };
        assert_eq!(
            config.divisors(),
            Divisors {
                integer: 1,
                fractional: 0,
            }
        );
    }
}
