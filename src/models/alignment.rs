// src/models/alignment.rs
//
// Grid fitting: turns a desired spacing into a whole number of cells and
// the cell size that goes with it.

use log::warn;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Keep the spacing, leave any remainder empty.
    #[serde(alias = "equal")]
    Exact,
    /// One more cell than fits, shrunk to fill the axis.
    #[serde(alias = "greater")]
    RoundUp,
    /// As many cells as fit, stretched to fill the axis.
    #[default]
    #[serde(alias = "less")]
    RoundDown,
}

impl Alignment {
    pub fn next(self) -> Self {
        match self {
            Alignment::Exact => Alignment::RoundUp,
            Alignment::RoundUp => Alignment::RoundDown,
            Alignment::RoundDown => Alignment::Exact,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisFit {
    pub count: usize,
    pub space: f32,
}

/// Fits cells of roughly `spacing` along an axis of `length`.
///
/// `RoundUp` and `RoundDown` return a `space` such that
/// `count * space == length` whenever `count > 0`. `Exact` keeps
/// `space == spacing` and may leave a gap at the end of the axis.
pub fn fit_axis(length: f32, spacing: f32, alignment: Alignment) -> AxisFit {
    if spacing <= 0.0 || !spacing.is_finite() || !length.is_finite() {
        warn!(
            "cannot fit axis of length {} with spacing {}",
            length, spacing
        );
        return AxisFit {
            count: 0,
            space: spacing,
        };
    }

    let number = length.max(0.0) / spacing;
    let whole = number.floor();
    let is_integral = whole == number;

    let count = match alignment {
        Alignment::Exact => {
            return AxisFit {
                count: whole as usize,
                space: spacing,
            }
        }
        Alignment::RoundUp if !is_integral => whole as usize + 1,
        _ => whole as usize,
    };

    if is_integral || count == 0 {
        return AxisFit {
            count,
            space: spacing,
        };
    }

    AxisFit {
        count,
        space: length / count as f32,
    }
}

/// Fits both axes independently: `(width fit, height fit)`.
pub fn fit_grid(width: f32, height: f32, spacing: f32, alignment: Alignment) -> (AxisFit, AxisFit) {
    (
        fit_axis(width, spacing, alignment),
        fit_axis(height, spacing, alignment),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn assert_fills(fit: AxisFit, length: f32) {
        let covered = fit.count as f32 * fit.space;
        assert!(
            (covered - length).abs() <= length * 1e-5,
            "{} cells of {} cover {} not {}",
            fit.count,
            fit.space,
            covered,
            length
        );
    }

    #[test]
    fn test_round_down_stretches() {
        let fit = fit_axis(100.0, 64.0, Alignment::RoundDown);
        assert_eq!(fit.count, 1);
        assert_eq!(fit.space, 100.0);
    }

    #[test]
    fn test_exact_keeps_spacing() {
        let fit = fit_axis(128.0, 64.0, Alignment::Exact);
        assert_eq!(fit.count, 2);
        assert_eq!(fit.space, 64.0);

        let fit = fit_axis(100.0, 64.0, Alignment::Exact);
        assert_eq!(fit.count, 1);
        assert_eq!(fit.space, 64.0);
    }

    #[test]
    fn test_round_up_shrinks() {
        let fit = fit_axis(100.0, 64.0, Alignment::RoundUp);
        assert_eq!(fit.count, 2);
        assert_eq!(fit.space, 50.0);
    }

    #[test]
    fn test_integral_lengths_keep_spacing() {
        for alignment in [Alignment::Exact, Alignment::RoundUp, Alignment::RoundDown] {
            let fit = fit_axis(192.0, 64.0, alignment);
            assert_eq!(fit, AxisFit { count: 3, space: 64.0 });
        }
    }

    #[test]
    fn test_zero_length_is_empty() {
        for alignment in [Alignment::Exact, Alignment::RoundUp, Alignment::RoundDown] {
            assert_eq!(fit_axis(0.0, 64.0, alignment).count, 0);
        }
    }

    #[test]
    fn test_round_down_shorter_than_spacing() {
        let fit = fit_axis(40.0, 64.0, Alignment::RoundDown);
        assert_eq!(fit.count, 0);
        assert_eq!(fit.space, 64.0);

        let fit = fit_axis(40.0, 64.0, Alignment::RoundUp);
        assert_eq!(fit, AxisFit { count: 1, space: 40.0 });
    }

    #[test]
    fn test_invalid_spacing_yields_nothing() {
        assert_eq!(fit_axis(100.0, 0.0, Alignment::RoundUp).count, 0);
        assert_eq!(fit_axis(100.0, -8.0, Alignment::RoundDown).count, 0);
        assert_eq!(fit_axis(100.0, f32::NAN, Alignment::Exact).count, 0);
    }

    #[test]
    fn test_fit_grid_is_per_axis() {
        let (width, height) = fit_grid(100.0, 128.0, 64.0, Alignment::RoundUp);
        assert_eq!(width, AxisFit { count: 2, space: 50.0 });
        assert_eq!(height, AxisFit { count: 2, space: 64.0 });
    }

    #[test]
    fn test_alignment_cycles() {
        let start = Alignment::default();
        assert_eq!(start, Alignment::RoundDown);
        assert_eq!(start.next().next().next(), start);
    }

    proptest! {
        #[test]
        fn exact_counts_whole_cells(length in 0.0f32..5000.0, spacing in 1.0f32..500.0) {
            let fit = fit_axis(length, spacing, Alignment::Exact);
            prop_assert_eq!(fit.count, (length / spacing).floor() as usize);
            prop_assert_eq!(fit.space, spacing);
        }

        #[test]
        fn round_down_fills_axis(length in 1.0f32..5000.0, spacing in 1.0f32..500.0) {
            prop_assume!(length >= spacing);
            let fit = fit_axis(length, spacing, Alignment::RoundDown);
            prop_assert_eq!(fit.count, (length / spacing).floor() as usize);
            assert_fills(fit, length);
        }

        #[test]
        fn round_up_fills_axis(length in 1.0f32..5000.0, spacing in 1.0f32..500.0) {
            let fit = fit_axis(length, spacing, Alignment::RoundUp);
            prop_assert_eq!(fit.count, (length / spacing).ceil() as usize);
            assert_fills(fit, length);
        }
    }
}
