// @generated by integral-switch. Do not edit by hand.
// Regenerate with: integral-switch generate 128 --template benchmark

/// Balanced dispatch over `[0, 128)`.
#[allow(clippy::collapsible_else_if)]
#[inline]
pub fn integral_switch_128<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
    if index >= 128 {
        return None;
    }
    Some(if index < 64 {
        if index < 32 {
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
        }
    } else {
        if index < 96 {
            if index < 80 {
                if index < 72 {
                    if index < 68 {
                        if index < 66 {
                            if index < 65 {
                                visitor.visit::<64>()
                            } else {
                                visitor.visit::<65>()
                            }
                        } else {
                            if index < 67 {
                                visitor.visit::<66>()
                            } else {
                                visitor.visit::<67>()
                            }
                        }
                    } else {
                        if index < 70 {
                            if index < 69 {
                                visitor.visit::<68>()
                            } else {
                                visitor.visit::<69>()
                            }
                        } else {
                            if index < 71 {
                                visitor.visit::<70>()
                            } else {
                                visitor.visit::<71>()
                            }
                        }
                    }
                } else {
                    if index < 76 {
                        if index < 74 {
                            if index < 73 {
                                visitor.visit::<72>()
                            } else {
                                visitor.visit::<73>()
                            }
                        } else {
                            if index < 75 {
                                visitor.visit::<74>()
                            } else {
                                visitor.visit::<75>()
                            }
                        }
                    } else {
                        if index < 78 {
                            if index < 77 {
                                visitor.visit::<76>()
                            } else {
                                visitor.visit::<77>()
                            }
                        } else {
                            if index < 79 {
                                visitor.visit::<78>()
                            } else {
                                visitor.visit::<79>()
                            }
                        }
                    }
                }
            } else {
                if index < 88 {
                    if index < 84 {
                        if index < 82 {
                            if index < 81 {
                                visitor.visit::<80>()
                            } else {
                                visitor.visit::<81>()
                            }
                        } else {
                            if index < 83 {
                                visitor.visit::<82>()
                            } else {
                                visitor.visit::<83>()
                            }
                        }
                    } else {
                        if index < 86 {
                            if index < 85 {
                                visitor.visit::<84>()
                            } else {
                                visitor.visit::<85>()
                            }
                        } else {
                            if index < 87 {
                                visitor.visit::<86>()
                            } else {
                                visitor.visit::<87>()
                            }
                        }
                    }
                } else {
                    if index < 92 {
                        if index < 90 {
                            if index < 89 {
                                visitor.visit::<88>()
                            } else {
                                visitor.visit::<89>()
                            }
                        } else {
                            if index < 91 {
                                visitor.visit::<90>()
                            } else {
                                visitor.visit::<91>()
                            }
                        }
                    } else {
                        if index < 94 {
                            if index < 93 {
                                visitor.visit::<92>()
                            } else {
                                visitor.visit::<93>()
                            }
                        } else {
                            if index < 95 {
                                visitor.visit::<94>()
                            } else {
                                visitor.visit::<95>()
                            }
                        }
                    }
                }
            }
        } else {
            if index < 112 {
                if index < 104 {
                    if index < 100 {
                        if index < 98 {
                            if index < 97 {
                                visitor.visit::<96>()
                            } else {
                                visitor.visit::<97>()
                            }
                        } else {
                            if index < 99 {
                                visitor.visit::<98>()
                            } else {
                                visitor.visit::<99>()
                            }
                        }
                    } else {
                        if index < 102 {
                            if index < 101 {
                                visitor.visit::<100>()
                            } else {
                                visitor.visit::<101>()
                            }
                        } else {
                            if index < 103 {
                                visitor.visit::<102>()
                            } else {
                                visitor.visit::<103>()
                            }
                        }
                    }
                } else {
                    if index < 108 {
                        if index < 106 {
                            if index < 105 {
                                visitor.visit::<104>()
                            } else {
                                visitor.visit::<105>()
                            }
                        } else {
                            if index < 107 {
                                visitor.visit::<106>()
                            } else {
                                visitor.visit::<107>()
                            }
                        }
                    } else {
                        if index < 110 {
                            if index < 109 {
                                visitor.visit::<108>()
                            } else {
                                visitor.visit::<109>()
                            }
                        } else {
                            if index < 111 {
                                visitor.visit::<110>()
                            } else {
                                visitor.visit::<111>()
                            }
                        }
                    }
                }
            } else {
                if index < 120 {
                    if index < 116 {
                        if index < 114 {
                            if index < 113 {
                                visitor.visit::<112>()
                            } else {
                                visitor.visit::<113>()
                            }
                        } else {
                            if index < 115 {
                                visitor.visit::<114>()
                            } else {
                                visitor.visit::<115>()
                            }
                        }
                    } else {
                        if index < 118 {
                            if index < 117 {
                                visitor.visit::<116>()
                            } else {
                                visitor.visit::<117>()
                            }
                        } else {
                            if index < 119 {
                                visitor.visit::<118>()
                            } else {
                                visitor.visit::<119>()
                            }
                        }
                    }
                } else {
                    if index < 124 {
                        if index < 122 {
                            if index < 121 {
                                visitor.visit::<120>()
                            } else {
                                visitor.visit::<121>()
                            }
                        } else {
                            if index < 123 {
                                visitor.visit::<122>()
                            } else {
                                visitor.visit::<123>()
                            }
                        }
                    } else {
                        if index < 126 {
                            if index < 125 {
                                visitor.visit::<124>()
                            } else {
                                visitor.visit::<125>()
                            }
                        } else {
                            if index < 127 {
                                visitor.visit::<126>()
                            } else {
                                visitor.visit::<127>()
                            }
                        }
                    }
                }
            }
        }
    })
}

/// Flat `match` over `[0, 128)`, the hand-rolled baseline for `integral_switch_128`.
#[inline]
pub fn hand_rolled_128<V: IntegralVisitor>(visitor: V, index: usize) -> Option<V::Output> {
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
        64 => Some(visitor.visit::<64>()),
        65 => Some(visitor.visit::<65>()),
        66 => Some(visitor.visit::<66>()),
        67 => Some(visitor.visit::<67>()),
        68 => Some(visitor.visit::<68>()),
        69 => Some(visitor.visit::<69>()),
        70 => Some(visitor.visit::<70>()),
        71 => Some(visitor.visit::<71>()),
        72 => Some(visitor.visit::<72>()),
        73 => Some(visitor.visit::<73>()),
        74 => Some(visitor.visit::<74>()),
        75 => Some(visitor.visit::<75>()),
        76 => Some(visitor.visit::<76>()),
        77 => Some(visitor.visit::<77>()),
        78 => Some(visitor.visit::<78>()),
        79 => Some(visitor.visit::<79>()),
        80 => Some(visitor.visit::<80>()),
        81 => Some(visitor.visit::<81>()),
        82 => Some(visitor.visit::<82>()),
        83 => Some(visitor.visit::<83>()),
        84 => Some(visitor.visit::<84>()),
        85 => Some(visitor.visit::<85>()),
        86 => Some(visitor.visit::<86>()),
        87 => Some(visitor.visit::<87>()),
        88 => Some(visitor.visit::<88>()),
        89 => Some(visitor.visit::<89>()),
        90 => Some(visitor.visit::<90>()),
        91 => Some(visitor.visit::<91>()),
        92 => Some(visitor.visit::<92>()),
        93 => Some(visitor.visit::<93>()),
        94 => Some(visitor.visit::<94>()),
        95 => Some(visitor.visit::<95>()),
        96 => Some(visitor.visit::<96>()),
        97 => Some(visitor.visit::<97>()),
        98 => Some(visitor.visit::<98>()),
        99 => Some(visitor.visit::<99>()),
        100 => Some(visitor.visit::<100>()),
        101 => Some(visitor.visit::<101>()),
        102 => Some(visitor.visit::<102>()),
        103 => Some(visitor.visit::<103>()),
        104 => Some(visitor.visit::<104>()),
        105 => Some(visitor.visit::<105>()),
        106 => Some(visitor.visit::<106>()),
        107 => Some(visitor.visit::<107>()),
        108 => Some(visitor.visit::<108>()),
        109 => Some(visitor.visit::<109>()),
        110 => Some(visitor.visit::<110>()),
        111 => Some(visitor.visit::<111>()),
        112 => Some(visitor.visit::<112>()),
        113 => Some(visitor.visit::<113>()),
        114 => Some(visitor.visit::<114>()),
        115 => Some(visitor.visit::<115>()),
        116 => Some(visitor.visit::<116>()),
        117 => Some(visitor.visit::<117>()),
        118 => Some(visitor.visit::<118>()),
        119 => Some(visitor.visit::<119>()),
        120 => Some(visitor.visit::<120>()),
        121 => Some(visitor.visit::<121>()),
        122 => Some(visitor.visit::<122>()),
        123 => Some(visitor.visit::<123>()),
        124 => Some(visitor.visit::<124>()),
        125 => Some(visitor.visit::<125>()),
        126 => Some(visitor.visit::<126>()),
        127 => Some(visitor.visit::<127>()),
        _ => None,
    }
}
