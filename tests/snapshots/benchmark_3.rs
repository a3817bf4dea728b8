// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 3 --template benchmark

/// Balanced dispatch over `[0, 3)`.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_3<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 3 {
        return None;
    }
    Some(if index < 1 {
        visitor.visit::<0>()
    } else {
        if index < 2 {
            visitor.visit::<1>()
        } else {
            visitor.visit::<2>()
        }
    })
}

/// Flat `match` over `[0, 3)`, the hand-rolled baseline for `integral_switch_3`.
#[inline]
pub fn hand_rolled_3<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    match index {
        0 => Some(visitor.visit::<0>()),
        1 => Some(visitor.visit::<1>()),
        2 => Some(visitor.visit::<2>()),
        _ => None,
    }
}
