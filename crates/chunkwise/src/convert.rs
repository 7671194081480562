//! Conversion of array-like inputs into a fixed element type, with scalar
//! broadcasting to a requested length.

use crate::error::ChunkwiseError;

/// Anything that can feed elements into a chunked array.
pub trait ArrayLike {
    type Elem;

    /// Number of elements, or `None` when the value is a scalar.
    fn length(&self) -> Option<usize>;

    /// Elements in order; a scalar yields exactly one.
    fn elements(&self) -> Vec<Self::Elem>;
}

/// A single value that broadcasts to any length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar<T>(pub T);

impl<T: Clone> ArrayLike for Scalar<T> {
    type Elem = T;

    fn length(&self) -> Option<usize> {
        None
    }

    fn elements(&self) -> Vec<T> {
        vec![self.0.clone()]
    }
}

impl<T: Clone> ArrayLike for [T] {
    type Elem = T;

    fn length(&self) -> Option<usize> {
        Some(self.len())
    }

    fn elements(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone, const N: usize> ArrayLike for [T; N] {
    type Elem = T;

    fn length(&self) -> Option<usize> {
        Some(N)
    }

    fn elements(&self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T: Clone> ArrayLike for Vec<T> {
    type Elem = T;

    fn length(&self) -> Option<usize> {
        Some(self.len())
    }

    fn elements(&self) -> Vec<T> {
        self.clone()
    }
}

/// Convert `input` into a `Vec<T>`, broadcasting to `arrlen` when given.
///
/// Scalars and single-element inputs broadcast to any length. Any other
/// length mismatch, or an element that does not fit `T`, is an invalid
/// argument.
pub fn to_array<T, A>(input: &A, arrlen: Option<usize>) -> Result<Vec<T>, ChunkwiseError>
where
    A: ArrayLike + ?Sized,
    T: TryFrom<A::Elem> + Clone,
{
    let elements = input
        .elements()
        .into_iter()
        .map(|elem| {
            T::try_from(elem).map_err(|_| {
                ChunkwiseError::invalid_argument(
                    "array conversion",
                    format!("cannot convert to {}", std::any::type_name::<T>()),
                )
            })
        })
        .collect::<Result<Vec<T>, _>>()?;

    let Some(target) = arrlen else {
        return Ok(elements);
    };

    match input.length() {
        Some(len) if len == target => Ok(elements),
        None | Some(1) => match elements.into_iter().next() {
            Some(value) => Ok(vec![value; target]),
            None => Ok(Vec::new()),
        },
        Some(len) => Err(ChunkwiseError::invalid_argument(
            "array broadcast",
            format!("cannot broadcast {len} elements to length {target}"),
        )),
    }
}
