// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 5 --template plain

/// Dispatches `index` in `[0, 5)` to `visitor` with the value as a const generic.
///
/// Returns `None` when `index` is out of range.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_5<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 5 {
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
            if index < 4 {
                visitor.visit::<3>()
            } else {
                visitor.visit::<4>()
            }
        }
    })
}
