#[allow(non_snake_case)]
#[inline(always)]
pub const fn MULTIPLY(x: i32, y: i32) -> i32 {
    <i32>::wrapping_mul(x, y)
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn SQUARE(x: i32) -> i32 {
    MULTIPLY(x, x)
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn CUBE(x: i32) -> i32 {
    MULTIPLY(x, SQUARE(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn QUARTER(x: i32) -> i32 {
    MULTIPLY(x, CUBE(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn EIGHTH(x: i32) -> i32 {
    MULTIPLY(x, QUARTER(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn SIXTEENTH(x: i32) -> i32 {
    MULTIPLY(x, EIGHTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn THIRTY_SECOND(x: i32) -> i32 {
    MULTIPLY(x, SIXTEENTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn SIXTY_FOURTH(x: i32) -> i32 {
    MULTIPLY(x, THIRTY_SECOND(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn ONE_TWENTY_EIGHTH(x: i32) -> i32 {
    MULTIPLY(x, SIXTY_FOURTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn TWO_FIFTY_SIXTH(x: i32) -> i32 {
    MULTIPLY(x, ONE_TWENTY_EIGHTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn FIVE_TWELFTH(x: i32) -> i32 {
    MULTIPLY(x, TWO_FIFTY_SIXTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn TEN_TWENTY_FOURTH(x: i32) -> i32 {
    MULTIPLY(x, FIVE_TWELFTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn TWENTY_FORTY_EIGHTH(x: i32) -> i32 {
    MULTIPLY(x, TEN_TWENTY_FOURTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn FORTY_NINETY_SIXTH(x: i32) -> i32 {
    MULTIPLY(x, TWENTY_FORTY_EIGHTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn EIGHTY_ONE_HUNDRED_NINETY_SECOND(x: i32) -> i32 {
    MULTIPLY(x, FORTY_NINETY_SIXTH(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn ONE_HUNDRED_SIXTY_THIRD(x: i32) -> i32 {
    MULTIPLY(x, EIGHTY_ONE_HUNDRED_NINETY_SECOND(x))
}

#[allow(non_snake_case)]
#[inline(always)]
pub const fn THREE_HUNDRED_TWENTY_SEVENTH(x: i32) -> i32 {
    MULTIPLY(x, ONE_HUNDRED_SIXTY_THIRD(x))
}

pub const RESULT: i32 = THREE_HUNDRED_TWENTY_SEVENTH(2);
