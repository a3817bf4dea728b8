// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 8 --template benchmark

/// Balanced dispatch over `[0, 8)`.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_8<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 8 {
        return None;
    }
    Some(if index < 4 {
        if index < 2 {
            if index < 1 {
                visitor.visit::<0>()
            } else {
                visitor.visit::<1>()
            }
        } else {
            if index < 3 {
                visitor.visit::<2>()
            } else {
                visitor.visit::<3>()
            }
        }
    } else {
        if index < 6 {
            if index < 5 {
                visitor.visit::<4>()
            } else {
                visitor.visit::<5>()
            }
        } else {
            if index < 7 {
                visitor.visit::<6>()
            } else {
                visitor.visit::<7>()
            }
        }
    })
}

/// Flat `match` over `[0, 8)`, the hand-rolled baseline for `integral_switch_8`.
#[inline]
pub fn hand_rolled_8<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    match index {
        0 => Some(visitor.visit::<0>()),
        1 => Some(visitor.visit::<1>()),
        2 => Some(visitor.visit::<2>()),
        3 => Some(visitor.visit::<3>()),
        4 => Some(visitor.visit::<4>()),
        5 => Some(visitor.visit::<5>()),
        6 => Some(visitor.visit::<6>()),
        7 => Some(visitor.visit::<7>()),
        _ => None,
    }
}
