//! The lesson's unary functions, each written twice: once as a named `fn`
//! and once as a closure returned from a constructor.
//!
//! Named items can be passed anywhere a closure can (`list.map(double)`),
//! so both forms plug into [`crate::evaluator::NumberList`].

// =============================================================================
// Named functions
// =============================================================================

pub fn triple(x: i64) -> i64 {
    x * 3
}

pub fn is_even(x: i64) -> bool {
    x % 2 == 0
}

pub fn square(x: i64) -> i64 {
    x * x
}

pub fn over_10(x: i64) -> bool {
    x > 10
}

pub fn double(x: i64) -> i64 {
    x * 2
}

pub fn is_negative(x: i64) -> bool {
    x < 0
}

// =============================================================================
// Closure forms
// =============================================================================

pub fn triple_lambda() -> impl Fn(i64) -> i64 {
    |x| x * 3
}

pub fn is_even_lambda() -> impl Fn(i64) -> bool {
    |x| x % 2 == 0
}

pub fn square_lambda() -> impl Fn(i64) -> i64 {
    |x| x * x
}

pub fn over_10_lambda() -> impl Fn(i64) -> bool {
    |x| x > 10
}

pub fn double_lambda() -> impl Fn(i64) -> i64 {
    |x| x * 2
}

pub fn is_negative_lambda() -> impl Fn(i64) -> bool {
    |x| x < 0
}
