use std::fmt::{Display, Debug};
use std::ops::{Mul, MulAssign};
use num_traits::{Float, One};
use auto_impl_ops::auto_ops;

// `Var<X>` : represents monomials X^d with a signed integer degree.

#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Var<const X: char>(
    pub(crate) i32
);

impl<const X: char> Var<X> {
    pub fn var_symbol() -> char {
        X
    }

    pub fn deg(&self) -> i32 {
        self.0
    }

    pub fn eval<R>(&self, x: &R) -> R
    where R: Float {
        x.powi(self.0)
    }
}

impl<const X: char> From<i32> for Var<X> {
    fn from(d: i32) -> Self {
        Self(d)
    }
}

impl<const X: char> One for Var<X> {
    fn one() -> Self {
        Self(0) // x^0 = 1.
    }
}

#[auto_ops]
impl<const X: char> MulAssign<&Var<X>> for Var<X> {
    fn mul_assign(&mut self, rhs: &Var<X>) {
        self.0 += rhs.0 // x^i * x^j = x^{i+j}
    }
}

impl<const X: char> Display for Var<X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = fmt_mono(&X.to_string(), self.0);
        f.write_str(&s)
    }
}

impl<const X: char> Debug for Var<X> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

pub(crate) fn fmt_mono(x: &str, d: i32) -> String {
    if d == 0 {
        "1".to_string()
    } else {
        format!("{x}^{d}")
    }
}
