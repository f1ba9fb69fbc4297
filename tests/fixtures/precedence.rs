pub const BASE: i32 = 10;

#[allow(non_snake_case)]
#[inline(always)]
pub const fn OFFSET(x: i32) -> i32 {
    <i32>::wrapping_sub(x, 3)
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn SCALE(x: i32, k: i32) -> i32 {
    <i32>::wrapping_add(<i32>::wrapping_mul(x, k), 1)
}

pub const RESULT: i32 = SCALE(OFFSET(BASE), <i32>::wrapping_add(2, 2));
