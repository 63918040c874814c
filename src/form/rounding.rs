use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Policy for resolving the remainder when a value is cut to a fixed scale.
///
/// # Examples
///
/// ```
/// use handler_glue::form::RoundingMode;
/// use rust_decimal::Decimal;
///
/// let value: Decimal = "1.23456".parse().unwrap();
/// assert_eq!(RoundingMode::Ceiling.round(value, 2).to_string(), "1.24");
/// assert_eq!(RoundingMode::Floor.round(value, 2).to_string(), "1.23");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Away from zero.
    Up,
    /// Toward zero.
    Down,
    /// Nearest neighbour, ties away from zero.
    HalfUp,
    /// Nearest neighbour, ties toward zero.
    HalfDown,
    /// Nearest neighbour, ties to the even neighbour.
    HalfEven,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [RoundingMode; 7] = [
        RoundingMode::Ceiling,
        RoundingMode::Floor,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
    ];

    /// Rounds `value` to `scale` fraction digits.
    pub fn round(self, value: Decimal, scale: u32) -> Decimal {
        value.round_dp_with_strategy(scale, self.strategy())
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::HalfEven => "HALF_EVEN",
        };
        f.write_str(name)
    }
}

/// Whether a field was configured with a rounding mode.
///
/// `Unset` is the deprecated state: display falls back to
/// [`RoundingMode::HalfUp`] while submitted values are stored unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingConfig {
    /// No mode configured.
    #[default]
    Unset,
    /// Mode chosen by the caller.
    Explicit(RoundingMode),
}

impl RoundingConfig {
    /// Mode applied when a model value is formatted for display.
    pub fn display_mode(self) -> RoundingMode {
        match self {
            RoundingConfig::Unset => RoundingMode::HalfUp,
            RoundingConfig::Explicit(mode) => mode,
        }
    }

    /// Mode applied to submitted values, if any.
    pub fn submit_mode(self) -> Option<RoundingMode> {
        match self {
            RoundingConfig::Unset => None,
            RoundingConfig::Explicit(mode) => Some(mode),
        }
    }

    /// Returns `true` for the deprecated [`RoundingConfig::Unset`] state.
    pub fn is_unset(self) -> bool {
        matches!(self, RoundingConfig::Unset)
    }
}

impl From<Option<RoundingMode>> for RoundingConfig {
    fn from(mode: Option<RoundingMode>) -> Self {
        mode.map_or(RoundingConfig::Unset, RoundingConfig::Explicit)
    }
}

impl From<RoundingMode> for RoundingConfig {
    fn from(mode: RoundingMode) -> Self {
        RoundingConfig::Explicit(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn directed_modes_on_positive_value() {
        let v = dec!(1.23456);
        assert_eq!(RoundingMode::Ceiling.round(v, 2), dec!(1.24));
        assert_eq!(RoundingMode::Floor.round(v, 2), dec!(1.23));
        assert_eq!(RoundingMode::Up.round(v, 2), dec!(1.24));
        assert_eq!(RoundingMode::Down.round(v, 2), dec!(1.23));
    }

    #[test]
    fn directed_modes_on_negative_value() {
        let v = dec!(-1.23456);
        assert_eq!(RoundingMode::Ceiling.round(v, 2), dec!(-1.23));
        assert_eq!(RoundingMode::Floor.round(v, 2), dec!(-1.24));
        assert_eq!(RoundingMode::Up.round(v, 2), dec!(-1.24));
        assert_eq!(RoundingMode::Down.round(v, 2), dec!(-1.23));
    }

    #[test]
    fn half_modes_on_ties() {
        assert_eq!(RoundingMode::HalfUp.round(dec!(2.5), 0), dec!(3));
        assert_eq!(RoundingMode::HalfDown.round(dec!(2.5), 0), dec!(2));
        assert_eq!(RoundingMode::HalfEven.round(dec!(2.5), 0), dec!(2));
        assert_eq!(RoundingMode::HalfEven.round(dec!(3.5), 0), dec!(4));
        assert_eq!(RoundingMode::HalfUp.round(dec!(-2.5), 0), dec!(-3));
        assert_eq!(RoundingMode::HalfDown.round(dec!(-2.5), 0), dec!(-2));
    }

    #[test]
    fn half_modes_off_ties() {
        for mode in [RoundingMode::HalfUp, RoundingMode::HalfDown, RoundingMode::HalfEven] {
            assert_eq!(mode.round(dec!(2.51), 0), dec!(3));
            assert_eq!(mode.round(dec!(2.49), 0), dec!(2));
        }
    }

    #[test]
    fn unset_displays_half_up_but_does_not_round_submits() {
        let cfg = RoundingConfig::from(None);
        assert!(cfg.is_unset());
        assert_eq!(cfg.display_mode(), RoundingMode::HalfUp);
        assert_eq!(cfg.submit_mode(), None);
    }

    #[test]
    fn explicit_mode_used_both_ways() {
        let cfg = RoundingConfig::from(RoundingMode::Floor);
        assert_eq!(cfg.display_mode(), RoundingMode::Floor);
        assert_eq!(cfg.submit_mode(), Some(RoundingMode::Floor));
    }

    #[test]
    fn deserializes_snake_case_names() {
        let mode: RoundingMode = serde_json::from_str("\"half_even\"").unwrap();
        assert_eq!(mode, RoundingMode::HalfEven);
        assert_eq!(mode.to_string(), "HALF_EVEN");
    }
}
