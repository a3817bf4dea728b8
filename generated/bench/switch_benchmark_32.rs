// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 32 --template benchmark

/// Balanced dispatch over `[0, 32)`.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_32<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 32 {
        return None;
    }
    Some(if index < 16 {
        if index < 8 {
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
        }
    } else {
        if index < 24 {
            if index < 20 {
                if index < 18 {
                    if index < 17 {
                        visitor.visit::<16>()
                    } else {
                        visitor.visit::<17>()
                    }
                } else {
                    if index < 19 {
                        visitor.visit::<18>()
                    } else {
                        visitor.visit::<19>()
                    }
                }
            } else {
                if index < 22 {
                    if index < 21 {
                        visitor.visit::<20>()
                    } else {
                        visitor.visit::<21>()
                    }
                } else {
                    if index < 23 {
                        visitor.visit::<22>()
                    } else {
                        visitor.visit::<23>()
                    }
                }
            }
        } else {
            if index < 28 {
                if index < 26 {
                    if index < 25 {
                        visitor.visit::<24>()
                    } else {
                        visitor.visit::<25>()
                    }
                } else {
                    if index < 27 {
                        visitor.visit::<26>()
                    } else {
                        visitor.visit::<27>()
                    }
                }
            } else {
                if index < 30 {
                    if index < 29 {
                        visitor.visit::<28>()
                    } else {
                        visitor.visit::<29>()
                    }
                } else {
                    if index < 31 {
                        visitor.visit::<30>()
                    } else {
                        visitor.visit::<31>()
                    }
                }
            }
        }
    })
}

/// Flat `match` over `[0, 32)`, the hand-rolled baseline for `integral_switch_32`.
#[inline]
pub fn hand_rolled_32<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
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
        16 => Some(visitor.visit::<16>()),
        17 => Some(visitor.visit::<17>()),
        18 => Some(visitor.visit::<18>()),
        19 => Some(visitor.visit::<19>()),
        20 => Some(visitor.visit::<20>()),
        21 => Some(visitor.visit::<21>()),
        22 => Some(visitor.visit::<22>()),
        23 => Some(visitor.visit::<23>()),
        24 => Some(visitor.visit::<24>()),
        25 => Some(visitor.visit::<25>()),
        26 => Some(visitor.visit::<26>()),
        27 => Some(visitor.visit::<27>()),
        28 => Some(visitor.visit::<28>()),
        29 => Some(visitor.visit::<29>()),
        30 => Some(visitor.visit::<30>()),
        31 => Some(visitor.visit::<31>()),
        _ => None,
    }
}
