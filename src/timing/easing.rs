use std::{
    f64::consts::{FRAC_PI_2, PI},
    fmt,
    str::FromStr,
};

use crate::error::PathError;

/// Named easing functions mapping a relative time to a progress.
///
/// Progress may leave `[0, 1]` for the bouncing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Easing {
    BounceBackIn,
    BounceBackOut,
    BounceBackInOut,
    BounceBackEaseOut,
    BounceInBackOut,
    BounceInEaseIn,
    BounceInEaseOut,
    BounceInEaseInOut,
    EaseInSin,
    EaseInQuad,
    EaseInCubic,
    EaseInQuart,
    EaseInQuint,
    EaseInArc,
    EaseOutSin,
    #[default]
    EaseOutCubic,
    EaseOutQuad,
    EaseOutQuart,
    EaseOutQuint,
    EaseOutArc,
    EaseInOutSin,
    EaseInOutCubic,
    EaseInOutQuad,
    EaseInOutQuart,
    EaseInOutQuint,
    Linear,
}

impl Easing {
    pub const ALL: [Easing; 26] = [
        Easing::BounceBackIn,
        Easing::BounceBackOut,
        Easing::BounceBackInOut,
        Easing::BounceBackEaseOut,
        Easing::BounceInBackOut,
        Easing::BounceInEaseIn,
        Easing::BounceInEaseOut,
        Easing::BounceInEaseInOut,
        Easing::EaseInSin,
        Easing::EaseInQuad,
        Easing::EaseInCubic,
        Easing::EaseInQuart,
        Easing::EaseInQuint,
        Easing::EaseInArc,
        Easing::EaseOutSin,
        Easing::EaseOutCubic,
        Easing::EaseOutQuad,
        Easing::EaseOutQuart,
        Easing::EaseOutQuint,
        Easing::EaseOutArc,
        Easing::EaseInOutSin,
        Easing::EaseInOutCubic,
        Easing::EaseInOutQuad,
        Easing::EaseInOutQuart,
        Easing::EaseInOutQuint,
        Easing::Linear,
    ];

    /// camelCase name of the easing
    pub fn name(&self) -> &'static str {
        match self {
            Easing::BounceBackIn => "bounceBackIn",
            Easing::BounceBackOut => "bounceBackOut",
            Easing::BounceBackInOut => "bounceBackInOut",
            Easing::BounceBackEaseOut => "bounceBackEaseOut",
            Easing::BounceInBackOut => "bounceInBackOut",
            Easing::BounceInEaseIn => "bounceInEaseIn",
            Easing::BounceInEaseOut => "bounceInEaseOut",
            Easing::BounceInEaseInOut => "bounceInEaseInOut",
            Easing::EaseInSin => "easeInSin",
            Easing::EaseInQuad => "easeInQuad",
            Easing::EaseInCubic => "easeInCubic",
            Easing::EaseInQuart => "easeInQuart",
            Easing::EaseInQuint => "easeInQuint",
            Easing::EaseInArc => "easeInArc",
            Easing::EaseOutSin => "easeOutSin",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseOutQuad => "easeOutQuad",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseOutQuint => "easeOutQuint",
            Easing::EaseOutArc => "easeOutArc",
            Easing::EaseInOutSin => "easeInOutSin",
            Easing::EaseInOutCubic => "easeInOutCubic",
            Easing::EaseInOutQuad => "easeInOutQuad",
            Easing::EaseInOutQuart => "easeInOutQuart",
            Easing::EaseInOutQuint => "easeInOutQuint",
            Easing::Linear => "linear",
        }
    }

    /// Progress at relative time `t`
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Easing::BounceBackIn => back(t, -0.7, 0.),
            Easing::BounceBackOut => back(t, 0., 0.7),
            Easing::BounceBackInOut => back(t, -0.7, 0.7),
            Easing::BounceBackEaseOut => {
                if t <= 0. {
                    0.
                } else {
                    (0.04 - 0.04 / t) * (25. * t).sin() + 1.
                }
            }
            Easing::BounceInBackOut => back(t, -0.7, 0.7).abs(),
            Easing::BounceInEaseIn => 1. - bounce(1. - t),
            Easing::BounceInEaseOut => bounce(t),
            Easing::BounceInEaseInOut => {
                if t < 0.5 {
                    (1. - bounce(1. - 2. * t)) / 2.
                } else {
                    (1. + bounce(2. * t - 1.)) / 2.
                }
            }
            Easing::EaseInSin => 1. + (PI * (t / 2. - 0.5)).sin(),
            Easing::EaseInQuad => t.powi(2),
            Easing::EaseInCubic => t.powi(3),
            Easing::EaseInQuart => t.powi(4),
            Easing::EaseInQuint => t.powi(5),
            Easing::EaseInArc => 1. - t.clamp(-1., 1.).acos().sin(),
            Easing::EaseOutSin => (FRAC_PI_2 * t).sin(),
            Easing::EaseOutCubic => (t - 1.).powi(3) + 1.,
            Easing::EaseOutQuad => t * (2. - t),
            Easing::EaseOutQuart => 1. - (t - 1.).powi(4),
            Easing::EaseOutQuint => 1. + (t - 1.).powi(5),
            Easing::EaseOutArc => (1. - t).clamp(-1., 1.).acos().sin(),
            Easing::EaseInOutSin => (1. + (PI * (t - 0.5)).sin()) / 2.,
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4. * t.powi(3)
                } else {
                    (t - 1.) * (2. * t - 2.).powi(2) + 1.
                }
            }
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2. * t.powi(2)
                } else {
                    -1. + (4. - 2. * t) * t
                }
            }
            Easing::EaseInOutQuart => {
                if t < 0.5 {
                    8. * t.powi(4)
                } else {
                    1. - 8. * (t - 1.).powi(4)
                }
            }
            Easing::EaseInOutQuint => {
                if t < 0.5 {
                    16. * t.powi(5)
                } else {
                    1. + 16. * (t - 1.).powi(5)
                }
            }
            Easing::Linear => t,
        }
    }
}

/// Piecewise parabolic bounce settling on 1
fn bounce(t: f64) -> f64 {
    const N: f64 = 7.5625;
    const D: f64 = 2.75;
    if t < 1. / D {
        N * t * t
    } else if t < 2. / D {
        let t = t - 1.5 / D;
        N * t * t + 0.75
    } else if t < 2.5 / D {
        let t = t - 2.25 / D;
        N * t * t + 0.9375
    } else {
        let t = t - 2.625 / D;
        N * t * t + 0.984375
    }
}

/// Sine shaped overshoot before `start` and after `end`, expressed in half periods
fn back(t: f64, start: f64, end: f64) -> f64 {
    if start == 0. {
        (PI * t * end).sin() / (PI * end).sin()
    } else if end == 0. {
        1. - (PI * (1. - t) * start).sin() / (PI * start).sin()
    } else {
        ((PI * (t * (end - start) + start)).sin() - (PI * start).sin())
            / ((PI * end).sin() - (PI * start).sin())
    }
}

impl FromStr for Easing {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::ALL
            .iter()
            .find(|easing| easing.name() == s)
            .copied()
            .ok_or_else(|| PathError::UnknownTiming(s.to_string()))
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
