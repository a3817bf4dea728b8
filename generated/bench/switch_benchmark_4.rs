// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 4 --template benchmark

/// Balanced dispatch over `[0, 4)`.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_4<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 4 {
        return None;
    }
    Some(if index < 2 {
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
    })
}

/// Flat `match` over `[0, 4)`, the hand-rolled baseline for `integral_switch_4`.
#[inline]
pub fn hand_rolled_4<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    match index {
        0 => Some(visitor.visit::<0>()),
        1 => Some(visitor.visit::<1>()),
        2 => Some(visitor.visit::<2>()),
        3 => Some(visitor.visit::<3>()),
        _ => None,
    }
}
