//! Iterator utilities.
use std::cmp::{Ordering, PartialOrd};
use std::error::Error;
use std::fmt;

/// Maximum of a collection of items where the maximum might not exist.
pub trait PartialMax {
    type Item;

    /// A maximum element of an iterator when one exists.
    ///
    /// If several elements are equally maximum then the first one is returned.
    ///
    /// # Errors
    /// Returns a [`PartialMaxError`] if there are no elements or the elements are not comparable.
    fn partial_max(self) -> Result<Self::Item, PartialMaxError>;
}

impl<T, I> PartialMax for I
where
    T: PartialOrd,
    I: Iterator<Item = T>,
{
    type Item = T;

    fn partial_max(mut self) -> Result<Self::Item, PartialMaxError> {
        match self.try_fold(None, |acc: Option<T>, x| match acc {
            None => Ok(Some(x)),
            Some(a) => match a.partial_cmp(&x) {
                None => Err(()),
                Some(Ordering::Less) => Ok(Some(x)),
                Some(_) => Ok(Some(a)),
            },
        }) {
            Ok(Some(x)) => Ok(x),
            Ok(None) => Err(PartialMaxError::Empty),
            Err(_) => Err(PartialMaxError::Incomparable),
        }
    }
}

/// The index of the first maximal element in a collection, according to a comparison function.
///
/// # Example
/// Get the argmax of an iterator of floats and panic if any are NaN:
///
/// ```
/// use banditlab::utils::iter::ArgMax;
///
/// let v = vec![1.0, 2.5, 2.5];
/// let argmax = v.into_iter().argmax_by(|a, b| a.partial_cmp(b).unwrap());
/// assert_eq!(argmax, Some(1));
/// ```
pub trait ArgMax {
    type Item;

    /// The index of the first element attaining the maximum value.
    ///
    /// Ties are broken in favour of the earliest index.
    /// If the iterator is empty, `None` is returned.
    fn argmax_by<F>(self, compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering;
}

impl<I: Iterator> ArgMax for I {
    type Item = <Self as Iterator>::Item;

    fn argmax_by<F>(self, mut compare: F) -> Option<usize>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let mut best: Option<(usize, Self::Item)> = None;
        for (i, x) in self.enumerate() {
            best = match best {
                Some((j, b)) if compare(&x, &b) != Ordering::Greater => Some((j, b)),
                _ => Some((i, x)),
            };
        }
        best.map(|(i, _)| i)
    }
}

/// Reason that the maximum does not exist.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PartialMaxError {
    /// The collection is empty, there is no maximum.
    Empty,
    /// Some pair of elements cannot be compared.
    Incomparable,
}

impl fmt::Display for PartialMaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PartialMaxError::Empty => "Empty",
                PartialMaxError::Incomparable => "Incomparable",
            }
        )
    }
}

impl Error for PartialMaxError {}
