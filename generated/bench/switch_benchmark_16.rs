// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 16 --template benchmark

/// Balanced dispatch over `[0, 16)`.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_16<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 16 {
        return None;
    }
    Some(if index < 8 {
        if index < 4 {
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
        }
    } else {
        if index < 12 {
            if index < 10 {
                if index < 9 {
                    visitor.visit::<8>()
                } else {
                    visitor.visit::<9>()
                }
            } else {
                if index < 11 {
                    visitor.visit::<10>()
                } else {
                    visitor.visit::<11>()
                }
            }
        } else {
            if index < 14 {
                if index < 13 {
                    visitor.visit::<12>()
                } else {
                    visitor.visit::<13>()
                }
            } else {
                if index < 15 {
                    visitor.visit::<14>()
                } else {
                    visitor.visit::<15>()
                }
            }
        }
    })
}

/// Flat `match` over `[0, 16)`, the hand-rolled baseline for `integral_switch_16`.
#[inline]
pub fn hand_rolled_16<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    match index {
        0 => Some(visitor.visit::<0>()),
        1 => Some(visitor.visit::<1>()),
        2 => Some(visitor.visit::<2>()),
        3 => Some(visitor.visit::<3>()),
        4 => Some(visitor.visit::<4>()),
        5 => Some(visitor.visit::<5>()),
        6 => Some(visitor.visit::<6>()),
        7 => Some(visitor.visit::<7>()),
        8 => Some(visitor.visit::<8>()),
        9 => Some(visitor.visit::<9>()),
        10 => Some(visitor.visit::<10>()),
        11 => Some(visitor.visit::<11>()),
        12 => Some(visitor.visit::<12>()),
        13 => Some(visitor.visit::<13>()),
        14 => Some(visitor.visit::<14>()),
        15 => Some(visitor.visit::<15>()),
        _ => None,
    }
}
