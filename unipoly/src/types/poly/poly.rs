use std::fmt::{Display, Debug};
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use ahash::AHashMap;
use itertools::Itertools;
use num_traits::{Zero, One, Float};
use auto_impl_ops::auto_ops;

use crate::util::format;
use super::var::Var;

// A polynomial is a linear combination of monomials X^d over R,
// stored as a map from degree to a nonzero coefficient.

pub type Poly<R> = PolyBase<'x', R>;

#[derive(Clone, PartialEq, Default)]
pub struct PolyBase<const X: char, R> {
    data: AHashMap<Var<X>, R>
}

impl<const X: char, R> PolyBase<X, R>
where R: Float {
    pub fn new() -> Self {
        let hasher = ahash::RandomState::with_seeds(0, 0, 0, 0);
        let data = AHashMap::with_hasher(hasher);
        Self { data }
    }

    pub fn from_const(r: R) -> Self {
        Self::from((r, 0))
    }

    pub fn variable() -> Self {
        Self::from((R::one(), 1))
    }

    pub fn mono(d: i32) -> Var<X> {
        Var::from(d)
    }

    pub fn nterms(&self) -> usize {
        self.data.len()
    }

    pub fn coeff(&self, d: i32) -> R {
        self.data.get(&Var::from(d)).copied().unwrap_or_else(R::zero)
    }

    // Accumulates `coeff` into the term of degree `exp`, keeping the
    // invariant that no stored coefficient is zero.
    pub fn append_term(&mut self, coeff: R, exp: i32) {
        if coeff.is_zero() {
            return
        }

        let x = Var::from(exp);
        if let Some(c) = self.data.get_mut(&x) {
            *c = *c + coeff;
            if c.is_zero() {
                self.data.remove(&x);
            }
        } else {
            self.data.insert(x, coeff);
        }
    }

    // Terms in descending degree order.
    pub fn iter(&self) -> impl Iterator<Item = (Var<X>, R)> + '_ {
        self.data.iter()
            .sorted_by(|(x, _), (y, _)| Ord::cmp(y, x))
            .map(|(x, r)| (*x, *r))
    }

    pub fn lead_term(&self) -> Option<(Var<X>, R)> {
        self.iter().next()
    }

    pub fn lead_coeff(&self) -> Option<R> {
        self.lead_term().map(|(_, r)| r)
    }

    pub fn lead_deg(&self) -> Option<i32> {
        self.lead_term().map(|(x, _)| x.deg())
    }

    pub fn map_coeffs<F>(&self, f: F) -> Self
    where F: Fn(R) -> R {
        self.data.iter().map(|(x, r)| (f(*r), x.deg())).collect()
    }

    pub fn eval(&self, x: &R) -> R {
        self.data.iter().fold(R::zero(), |res, (v, r)| res + *r * v.eval(x))
    }

    pub fn derivative(&self) -> Self {
        self.data.iter()
            .filter(|(x, _)| x.deg() != 0)
            .map(|(x, r)| {
                let d = x.deg();
                (*r * R::from(d).unwrap(), d - 1)
            })
            .collect()
    }

    pub(crate) fn clean(&mut self) {
        self.data.retain(|_, r| !r.is_zero());
    }
}

impl<const X: char, R> From<(R, i32)> for PolyBase<X, R>
where R: Float {
    fn from(pair: (R, i32)) -> Self {
        Self::from_iter([pair])
    }
}

impl<const X: char, R> FromIterator<(R, i32)> for PolyBase<X, R>
where R: Float {
    fn from_iter<T: IntoIterator<Item = (R, i32)>>(iter: T) -> Self {
        let mut res = Self::new();
        for (r, d) in iter.into_iter() {
            res.append_term(r, d);
        }
        res
    }
}

impl<const X: char, R> Display for PolyBase<X, R>
where R: Float + Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = format::lc(self.iter());
        f.write_str(&s)
    }
}

impl<const X: char, R> Debug for PolyBase<X, R>
where R: Float + Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<const X: char, R> Zero for PolyBase<X, R>
where R: Float {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl<const X: char, R> One for PolyBase<X, R>
where R: Float {
    fn one() -> Self {
        Self::from((R::one(), 0))
    }
}

impl<const X: char, R> Neg for &PolyBase<X, R>
where R: Float {
    type Output = PolyBase<X, R>;

    fn neg(self) -> Self::Output {
        self.map_coeffs(|r| -r)
    }
}

impl<const X: char, R> Neg for PolyBase<X, R>
where R: Float {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

#[auto_ops]
impl<const X: char, R> AddAssign<&PolyBase<X, R>> for PolyBase<X, R>
where R: Float {
    fn add_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.data.iter() {
            self.append_term(*r, x.deg());
        }
    }
}

#[auto_ops]
impl<const X: char, R> SubAssign<&PolyBase<X, R>> for PolyBase<X, R>
where R: Float {
    fn sub_assign(&mut self, rhs: &Self) {
        for (x, r) in rhs.data.iter() {
            self.append_term(-*r, x.deg());
        }
    }
}

#[auto_ops]
impl<const X: char, R> MulAssign<&R> for PolyBase<X, R>
where R: Float {
    fn mul_assign(&mut self, rhs: &R) {
        let data = std::mem::take(&mut self.data);
        self.data = data.into_iter().map(|(x, r)| (x, r * *rhs)).collect();
        self.clean()
    }
}

#[auto_ops]
impl<const X: char, R> Mul for &PolyBase<X, R>
where R: Float {
    type Output = PolyBase<X, R>;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut res = Self::Output::zero();
        res.data.reserve(self.nterms() * rhs.nterms());

        for (x, r) in self.data.iter() {
            for (y, s) in rhs.data.iter() {
                let xy = *x * *y;
                let rs = *r * *s;
                res.append_term(rs, xy.deg());
            }
        }

        res
    }
}
