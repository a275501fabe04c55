//! Line and number codec on top of blocking byte I/O.
//!
//! Everything here is built purely from [`Serial::read_byte`] and
//! [`Serial::write_byte`], so it works against any byte channel and is
//! testable on the host without hardware.

/// Carriage return. Terminates every input operation; never stored.
pub const CR: u8 = 0x0D;
/// Line feed. Output-only, always preceded by [`CR`].
pub const LF: u8 = 0x0A;
/// Backspace, for input line editing.
pub const BS: u8 = 0x08;

/// A blocking byte channel.
pub trait Serial {
    /// Receive one byte, blocking until one is available.
    fn read_byte(&mut self) -> u8;

    /// Transmit one byte, blocking until the channel accepts it.
    fn write_byte(&mut self, byte: u8);
}

/// Terminal-style line editing and number formatting for any [`Serial`].
///
/// Input runs until [`CR`], which is consumed but neither stored nor
/// echoed. Accepted bytes echo back as they arrive; [`BS`] rolls back
/// one accepted byte (echoing a single [`BS`]) and is otherwise
/// ignored.
pub trait Console: Serial {
    /// Read one line into `buf`, handling backspace editing.
    ///
    /// At most `buf.len() - 1` bytes are stored; a terminating zero is
    /// written after them whenever `buf` is non-empty. Once the buffer
    /// is full, further bytes are consumed but neither stored nor
    /// echoed, so input never stalls. Returns the number of bytes
    /// stored, excluding the terminator.
    fn read_line(&mut self, buf: &mut [u8]) -> usize {
        // One slot is reserved for the terminating zero.
        let capacity = buf.len().saturating_sub(1);
        let mut len = 0;
        loop {
            match self.read_byte() {
                CR => break,
                BS => {
                    if len > 0 {
                        len -= 1;
                        self.write_byte(BS);
                    }
                }
                byte => {
                    if len < capacity {
                        buf[len] = byte;
                        len += 1;
                        self.write_byte(byte);
                    }
                }
            }
        }
        if !buf.is_empty() {
            buf[len] = 0;
        }
        len
    }

    /// Write a string slice, with no trailing newline.
    fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.write_byte(byte);
        }
    }

    /// Write the line terminator: [`CR`] then [`LF`].
    fn write_newline(&mut self) {
        self.write_byte(CR);
        self.write_byte(LF);
    }

    /// Read an unsigned decimal number, digit by digit, until [`CR`].
    ///
    /// Digits echo and accumulate into `value * 10 + digit`; backspace
    /// rolls the accumulator back one digit. Anything else is consumed
    /// silently. The accumulator wraps on overflow. Returns 0 if no
    /// digit was entered.
    fn read_decimal(&mut self) -> u32 {
        let mut value: u32 = 0;
        let mut digits = 0;
        loop {
            let byte = self.read_byte();
            if byte == CR {
                break;
            }
            if let Some(digit) = (byte as char).to_digit(10) {
                value = value.wrapping_mul(10).wrapping_add(digit);
                digits += 1;
                self.write_byte(byte);
            } else if byte == BS && digits > 0 {
                value /= 10;
                digits -= 1;
                self.write_byte(BS);
            }
        }
        value
    }

    /// Write `n` in decimal with no leading zeros.
    fn write_decimal(&mut self, n: u32) {
        if n >= 10 {
            self.write_decimal(n / 10);
        }
        self.write_byte(b'0' + (n % 10) as u8);
    }

    /// Read an unsigned hexadecimal number until [`CR`].
    ///
    /// Same editing rules as [`read_decimal`](Console::read_decimal),
    /// with `0-9`, `A-F` and `a-f` accepted as digits and backspace
    /// dividing the accumulator by 16.
    fn read_hex(&mut self) -> u32 {
        let mut value: u32 = 0;
        let mut digits = 0;
        loop {
            let byte = self.read_byte();
            if byte == CR {
                break;
            }
            if let Some(digit) = (byte as char).to_digit(16) {
                value = value.wrapping_mul(16).wrapping_add(digit);
                digits += 1;
                self.write_byte(byte);
            } else if byte == BS && digits > 0 {
                value /= 16;
                digits -= 1;
                self.write_byte(BS);
            }
        }
        value
    }

    /// Write `n` in hexadecimal, uppercase, with no leading zeros.
    fn write_hex(&mut self, n: u32) {
        if n >= 16 {
            self.write_hex(n / 16);
            self.write_hex(n % 16);
        } else if n < 10 {
            self.write_byte(b'0' + n as u8);
        } else {
            self.write_byte(b'A' + (n - 10) as u8);
        }
    }
}

// Blanket implementation for every byte channel.
impl<T: Serial> Console for T {}
