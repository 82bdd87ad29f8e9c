use std::cmp::Ordering;

use num::{Complex, Zero};

use crate::RealScalar;

use super::RootOrigin;

/// Turn the (possibly short, possibly over-full) accepted root list into
/// exactly `degree` entries, with repeated roots expanded to their
/// multiplicity.
///
/// Consecutive sorted entries within `merge_distance` of a cluster's first
/// member count as one multiplicity group; the group contributes
/// `multiplicity` copies of that first member. A short list is padded by
/// repeating the first entry (or zero if nothing was found), a long list is
/// truncated. Padding is a best-effort degradation, not a correctness
/// guarantee; padded entries are tagged [`RootOrigin::Padded`].
pub(crate) fn resolve<T: RealScalar>(
    accepted: Vec<(Complex<T>, RootOrigin)>,
    degree: usize,
    merge_distance: T,
    zero_threshold: T,
) -> Vec<(Complex<T>, RootOrigin)> {
    let mut cleaned: Vec<(Complex<T>, RootOrigin)> = accepted
        .into_iter()
        .map(|(r, origin)| (snap_to_zero(r, zero_threshold), origin))
        .collect();

    // sorting makes duplicates contiguous for the clustering scan below
    cleaned.sort_by(|(a, _), (b, _)| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });

    let mut out: Vec<(Complex<T>, RootOrigin)> = Vec::with_capacity(degree);
    let mut i = 0;
    while i < cleaned.len() {
        let (representative, origin) = cleaned[i];
        let mut multiplicity = 1;
        let mut j = i + 1;
        while j < cleaned.len() && (cleaned[j].0 - representative).norm() < merge_distance {
            multiplicity += 1;
            j += 1;
        }
        for _ in 0..multiplicity {
            out.push((representative, origin));
        }
        i = j;
    }

    while out.len() < degree {
        let filler = out.first().map_or_else(Complex::zero, |&(r, _)| r);
        out.push((filler, RootOrigin::Padded));
    }
    out.truncate(degree);

    debug_assert_eq!(out.len(), degree);
    out
}

/// Zero out the real and imaginary components independently when they are
/// below the snapping threshold. Cosmetic cleanup, so `1e-14 + 2i` is
/// reported as `2i`.
fn snap_to_zero<T: RealScalar>(root: Complex<T>, zero_threshold: T) -> Complex<T> {
    let re = if root.re.abs() > zero_threshold {
        root.re
    } else {
        T::zero()
    };
    let im = if root.im.abs() > zero_threshold {
        root.im
    } else {
        T::zero()
    };
    Complex::new(re, im)
}
