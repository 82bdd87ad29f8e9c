// internal utilities for dealing with Complex annoyances

use std::cmp::Ordering;

use num::{Complex, One, Zero};

use crate::RealScalar;

/// Sort complex numbers lexicographically, real part first, then imaginary.
pub(crate) fn complex_sort_mut<T: RealScalar>(v: &mut [Complex<T>]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

/// Formatting for Complex, because the default implementation always prints
/// the imaginary part.
pub(crate) fn complex_fmt<T: std::fmt::Display + Zero + One + PartialEq>(c: &Complex<T>) -> String {
    let r = &c.re;
    let i = &c.im;
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}+i)")
    } else {
        format!("({r}+i{i})")
    }
}
