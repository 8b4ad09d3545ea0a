/// Types that can be added together by [`LazyIter::sum`](super::LazyIter::sum).
///
/// Implemented for every primitive numeric type, using their `+` operator (so integer overflow
/// behaves the same as `+` does), and for [`String`], which concatenates.
pub trait Summable {
    fn plus(self, other: Self) -> Self;
}

macro_rules! impl_summable {
    ($($t:ty),* $(,)?) => {
        $(
            impl Summable for $t {
                fn plus(self, other: Self) -> Self {
                    self + other
                }
            }
        )*
    };
}

impl_summable!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Summable for String {
    fn plus(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
