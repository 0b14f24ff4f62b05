#[macro_export]
macro_rules! BIT {
    ( $x:expr ) => {
        1 << $x
    };
}

#[macro_export]
macro_rules! BIT_MASK_LEN {
    ( $x:expr ) => {
        $crate::BIT!($x) - 1
    };
}

// bits range: BITS_RNG(4, 5)  0b000111110000,  start from 4, length = 5
#[macro_export]
macro_rules! BIT_RNG {
    ( $s:expr, $e:expr ) => {
        $crate::BIT_MASK_LEN!($e-$s+1) << $s
    };
}

#[macro_export]
macro_rules! BM_SET {
    ( $x:expr, $mask:expr ) => {
        $x |= $mask
    };
}

#[macro_export]
macro_rules! BM_CLR {
    ( $x:expr, $mask:expr ) => {
        $x &= !($mask)
    };
}

#[macro_export]
macro_rules! BM_IS_SET {
    ( $x:expr, $mask:expr ) => {
        ($x & $mask) != 0
    };
}

// Set or clear `mask` in `x` depending on `on`.
#[macro_export]
macro_rules! BM_ASSIGN {
    ( $x:expr, $mask:expr, $on:expr ) => {
        if $on {
            $crate::BM_SET!($x, $mask)
        } else {
            $crate::BM_CLR!($x, $mask)
        }
    };
}
