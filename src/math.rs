//! Math utility functions used to normalize raw components.

use num_traits::Float;

use crate::Component;

/// The number of degrees in a full turn of the hue wheel.
const FULL_TURN: Component = 360.0;

/// Restrict `value` to the closed range `[lower, upper]`. A zero result is
/// always positive zero.
pub fn clamp<T: Float>(value: T, lower: T, upper: T) -> T {
    num_traits::clamp(value, lower, upper) + T::zero()
}

/// Wrap a hue given in degrees into `[0, 360)`. Negative hues wrap from the
/// top of the range. A hue that is not finite can not be placed on the wheel
/// and becomes 0.
pub fn wrap_hue(degrees: Component) -> Component {
    if !degrees.is_finite() {
        return 0.0;
    }

    let wrapped = (degrees % FULL_TURN + FULL_TURN) % FULL_TURN;

    // Adding a tiny negative remainder to 360 can round back up to 360.
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}
