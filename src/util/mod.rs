pub mod coef;
pub mod composer;
pub mod ustr;

pub fn is_odd(x: usize) -> bool {
    x % 2 == 1
}
