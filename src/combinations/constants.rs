// Digit domain for the combination search
pub const DIGIT_MIN: i32 = 1;
pub const DIGIT_MAX: i32 = 9;
