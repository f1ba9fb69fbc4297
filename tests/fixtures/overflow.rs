#[allow(non_snake_case)]
#[inline(always)]
pub const fn SQUARE(x: i32) -> i32 {
    <i32>::wrapping_mul(x, x)
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn FOURTH(x: i32) -> i32 {
    SQUARE(SQUARE(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn EIGHTH(x: i32) -> i32 {
    SQUARE(FOURTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn SIXTEENTH(x: i32) -> i32 {
    SQUARE(EIGHTH(x))
}

pub const RESULT: i32 = SIXTEENTH(7);
