// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 64 --template benchmark

/// Balanced dispatch over `[0, 64)`.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_64<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 64 {
        return None;
    }
    Some(if index < 32 {
        if index < 16 {
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
        }
    } else {
        if index < 48 {
            if index < 40 {
                if index < 36 {
                    if index < 34 {
                        if index < 33 {
                            visitor.visit::<32>()
                        } else {
                            visitor.visit::<33>()
                        }
                    } else {
                        if index < 35 {
                            visitor.visit::<34>()
                        } else {
                            visitor.visit::<35>()
                        }
                    }
                } else {
                    if index < 38 {
                        if index < 37 {
                            visitor.visit::<36>()
                        } else {
                            visitor.visit::<37>()
                        }
                    } else {
                        if index < 39 {
                            visitor.visit::<38>()
                        } else {
                            visitor.visit::<39>()
                        }
                    }
                }
            } else {
                if index < 44 {
                    if index < 42 {
                        if index < 41 {
                            visitor.visit::<40>()
                        } else {
                            visitor.visit::<41>()
                        }
                    } else {
                        if index < 43 {
                            visitor.visit::<42>()
                        } else {
                            visitor.visit::<43>()
                        }
                    }
                } else {
                    if index < 46 {
                        if index < 45 {
                            visitor.visit::<44>()
                        } else {
                            visitor.visit::<45>()
                        }
                    } else {
                        if index < 47 {
                            visitor.visit::<46>()
                        } else {
                            visitor.visit::<47>()
                        }
                    }
                }
            }
        } else {
            if index < 56 {
                if index < 52 {
                    if index < 50 {
                        if index < 49 {
                            visitor.visit::<48>()
                        } else {
                            visitor.visit::<49>()
                        }
                    } else {
                        if index < 51 {
                            visitor.visit::<50>()
                        } else {
                            visitor.visit::<51>()
                        }
                    }
                } else {
                    if index < 54 {
                        if index < 53 {
                            visitor.visit::<52>()
                        } else {
                            visitor.visit::<53>()
                        }
                    } else {
                        if index < 55 {
                            visitor.visit::<54>()
                        } else {
                            visitor.visit::<55>()
                        }
                    }
                }
            } else {
                if index < 60 {
                    if index < 58 {
                        if index < 57 {
                            visitor.visit::<56>()
                        } else {
                            visitor.visit::<57>()
                        }
                    } else {
                        if index < 59 {
                            visitor.visit::<58>()
                        } else {
                            visitor.visit::<59>()
                        }
                    }
                } else {
                    if index < 62 {
                        if index < 61 {
                            visitor.visit::<60>()
                        } else {
                            visitor.visit::<61>()
                        }
                    } else {
                        if index < 63 {
                            visitor.visit::<62>()
                        } else {
                            visitor.visit::<63>()
                        }
                    }
                }
            }
        }
    })
}

/// Flat `match` over `[0, 64)`, the hand-rolled baseline for `integral_switch_64`.
#[inline]
pub fn hand_rolled_64<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
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
        32 => Some(visitor.visit::<32>()),
        33 => Some(visitor.visit::<33>()),
        34 => Some(visitor.visit::<34>()),
        35 => Some(visitor.visit::<35>()),
        36 => Some(visitor.visit::<36>()),
        37 => Some(visitor.visit::<37>()),
        38 => Some(visitor.visit::<38>()),
        39 => Some(visitor.visit::<39>()),
        40 => Some(visitor.visit::<40>()),
        41 => Some(visitor.visit::<41>()),
        42 => Some(visitor.visit::<42>()),
        43 => Some(visitor.visit::<43>()),
        44 => Some(visitor.visit::<44>()),
        45 => Some(visitor.visit::<45>()),
        46 => Some(visitor.visit::<46>()),
        47 => Some(visitor.visit::<47>()),
        48 => Some(visitor.visit::<48>()),
        49 => Some(visitor.visit::<49>()),
        50 => Some(visitor.visit::<50>()),
        51 => Some(visitor.visit::<51>()),
        52 => Some(visitor.visit::<52>()),
        53 => Some(visitor.visit::<53>()),
        54 => Some(visitor.visit::<54>()),
        55 => Some(visitor.visit::<55>()),
        56 => Some(visitor.visit::<56>()),
        57 => Some(visitor.visit::<57>()),
        58 => Some(visitor.visit::<58>()),
        59 => Some(visitor.visit::<59>()),
        60 => Some(visitor.visit::<60>()),
        61 => Some(visitor.visit::<61>()),
        62 => Some(visitor.visit::<62>()),
        63 => Some(visitor.visit::<63>()),
        _ => None,
    }
}
