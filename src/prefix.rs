//! Numeric prefix arguments.
//!
//! Emacs-style repeat counts accumulated across `M-digit` and `M--`
//! keystrokes. The state machine lives alongside the line buffer and is
//! consulted by every editing action through [`PrefixArgument::effective`].

/// Most digits an argument may accumulate before it silently resets.
pub const MAX_ARG_DIGITS: u8 = 6;

/// Largest magnitude an argument may reach before it silently resets.
pub const MAX_ARG_MAGNITUDE: i32 = 999_999;

/// Accumulating numeric argument state.
///
/// `value` uses `1` as the "nothing accumulated yet" sentinel, so the
/// first digit replaces it and later digits fold in decimally. Overflow
/// of either cap resets the value without leaving building mode, which
/// keeps a runaway digit burst pinned at the default argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixArgument {
    // === Accumulator ===
    pub value: i32,
    pub negative: bool,

    // === Accumulation state ===
    pub building: bool,
    pub digits: u8,
}

impl Default for PrefixArgument {
    fn default() -> Self {
        Self {
            value: 1,
            negative: false,
            building: false,
            digits: 0,
        }
    }
}

impl PrefixArgument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decimal digit into the accumulator.
    pub fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        self.building = true;
        self.digits = self.digits.saturating_add(1);
        if self.digits > MAX_ARG_DIGITS {
            self.value = 1;
            self.negative = false;
            return;
        }

        let signed = if self.negative {
            -(i32::from(digit))
        } else {
            i32::from(digit)
        };
        let folded = if self.value == 1 {
            signed
        } else {
            self.value * 10 + signed
        };
        if folded.abs() > MAX_ARG_MAGNITUDE {
            self.value = 1;
            self.negative = false;
        } else {
            self.value = folded;
        }
    }

    /// Toggle the pending sign, flipping any digits already accumulated.
    pub fn negate(&mut self) {
        self.building = true;
        self.negative = !self.negative;
        if self.value != 1 {
            self.value = -self.value;
        }
    }

    /// Argument value an action should observe right now.
    ///
    /// A bare `M--` (sign with no digits) reads as `-1`.
    pub fn effective(&self) -> i32 {
        if self.negative && self.value == 1 {
            -1
        } else {
            self.value
        }
    }

    pub fn is_building(&self) -> bool {
        self.building
    }

    /// Return to the default argument of 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_argument_is_one() {
        let arg = PrefixArgument::new();
        assert_eq!(arg.effective(), 1);
        assert!(!arg.is_building());
    }

    #[test]
    fn digits_fold_decimally() {
        let mut arg = PrefixArgument::new();
        arg.push_digit(2);
        assert_eq!(arg.effective(), 2);
        arg.push_digit(5);
        assert_eq!(arg.effective(), 25);
        arg.push_digit(2);
        assert_eq!(arg.effective(), 252);
        assert!(arg.is_building());
    }

    #[test]
    fn sign_before_digits_accumulates_negative() {
        let mut arg = PrefixArgument::new();
        arg.negate();
        arg.push_digit(5);
        arg.push_digit(2);
        assert_eq!(arg.effective(), -52);
    }

    #[test]
    fn bare_minus_reads_as_negative_one() {
        let mut arg = PrefixArgument::new();
        arg.negate();
        assert!(arg.is_building());
        assert_eq!(arg.effective(), -1);
    }

    #[test]
    fn negating_twice_restores_the_sign() {
        let mut arg = PrefixArgument::new();
        arg.negate();
        arg.negate();
        assert_eq!(arg.effective(), 1);

        arg.push_digit(7);
        arg.negate();
        assert_eq!(arg.effective(), -7);
        arg.negate();
        assert_eq!(arg.effective(), 7);
    }

    #[test]
    fn eight_nines_reset_to_the_default() {
        let mut arg = PrefixArgument::new();
        for _ in 0..8 {
            arg.push_digit(9);
        }
        assert_eq!(arg.effective(), 1);
        assert!(arg.is_building());
    }

    #[test]
    fn six_digits_still_fit() {
        let mut arg = PrefixArgument::new();
        for _ in 0..6 {
            arg.push_digit(9);
        }
        assert_eq!(arg.effective(), 999_999);
    }

    #[test]
    fn overflow_stays_reset_for_every_later_digit() {
        let mut arg = PrefixArgument::new();
        for _ in 0..7 {
            arg.push_digit(9);
        }
        assert_eq!(arg.effective(), 1);
        arg.push_digit(3);
        assert_eq!(arg.effective(), 1);
    }

    #[test]
    fn reset_returns_to_defaults() {
        let mut arg = PrefixArgument::new();
        arg.negate();
        arg.push_digit(4);
        arg.reset();
        assert_eq!(arg, PrefixArgument::default());
    }
}
