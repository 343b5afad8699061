use std::ops::{Add, AddAssign, Sub, SubAssign};

use num_traits::{NumCast, ToPrimitive};

use crate::error::{GeomError, GeomResult};
use crate::scalar::{max, min, Scalar};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vec2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vec2 { x, y }
    }

    #[inline]
    pub fn zero() -> Self {
        Vec2::new(T::zero(), T::zero())
    }
}

impl<T: Scalar + ToPrimitive> Vec2<T> {
    /// Convert into another coordinate domain, e.g. `Coordf` -> `Coord`.
    /// Float to integer truncates toward zero.
    pub fn cast<U: Scalar + NumCast>(self) -> GeomResult<Vec2<U>> {
        let x = <U as NumCast>::from(self.x).ok_or(GeomError::OutOfRange)?;
        let y = <U as NumCast>::from(self.y).ok_or(GeomError::OutOfRange)?;
        Ok(Vec2 { x, y })
    }
}

impl<T: Scalar> Add for Vec2<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Vec2::new(self.x.wrapping_add(rhs.x), self.y.wrapping_add(rhs.y))
    }
}

impl<T: Scalar> Sub for Vec2<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Vec2::new(self.x.wrapping_sub(rhs.x), self.y.wrapping_sub(rhs.y))
    }
}

// In-place forms just store the pure result so the two never diverge.
impl<T: Scalar> AddAssign for Vec2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vec2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Vec2 { x, y }
    }
}

impl<T> From<Vec2<T>> for (T, T) {
    fn from(v: Vec2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: Copy> TryFrom<&[T]> for Vec2<T> {
    type Error = GeomError;

    fn try_from(values: &[T]) -> GeomResult<Self> {
        match *values {
            [x, y] => Ok(Vec2 { x, y }),
            _ => Err(GeomError::WrongLength { expected: 2, found: values.len() }),
        }
    }
}

/// Axis aligned rectangle described by two opposing corners.
///
/// The rectangle is "normal" when `min.x <= max.x && min.y <= max.y`.
/// Every query except normalisation assumes normal form; a rectangle built
/// from arbitrary corners may violate it until [`Rect::normalise`] is called.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub min: Vec2<T>,
    pub max: Vec2<T>,
}

impl<T: Scalar> Rect<T> {
    #[inline]
    pub fn new(min: Vec2<T>, max: Vec2<T>) -> Self {
        Rect { min, max }
    }

    /// Position plus width/height. Not normalised: negative extents stay as given.
    pub fn from_xywh(x: T, y: T, w: T, h: T) -> Self {
        Rect::new(Vec2::new(x, y), Vec2::new(x, y) + Vec2::new(w, h))
    }

    /// Two arbitrary corners; the result is always normal.
    pub fn from_xyxy(x1: T, y1: T, x2: T, y2: T) -> Self {
        Rect::new(Vec2::new(x1, y1), Vec2::new(x2, y2)).normalised()
    }

    pub fn from_pos_size(pos: Vec2<T>, size: Vec2<T>) -> Self {
        Rect::new(pos, pos + size)
    }

    /// Rectangle anchored at the origin.
    pub fn from_size(size: Vec2<T>) -> Self {
        Rect::new(Vec2::zero(), size)
    }

    /// Swaps min/max on each axis that is inverted. Axes are independent.
    pub fn normalised(self) -> Self {
        let mut r = self;
        if r.min.x > r.max.x {
            std::mem::swap(&mut r.min.x, &mut r.max.x);
        }
        if r.min.y > r.max.y {
            std::mem::swap(&mut r.min.y, &mut r.max.y);
        }
        r
    }

    #[inline]
    pub fn normalise(&mut self) {
        *self = self.normalised();
    }

    // Measurements read the corners as-is and go negative on non-normal input.
    #[inline]
    pub fn width(&self) -> T {
        self.max.x.wrapping_sub(self.min.x)
    }

    #[inline]
    pub fn height(&self) -> T {
        self.max.y.wrapping_sub(self.min.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2<T> {
        Vec2::new(self.width(), self.height())
    }

    /// True when either axis has collapsed to zero extent.
    pub fn is_empty(&self) -> bool {
        self.min.x == self.max.x || self.min.y == self.max.y
    }

    pub fn is_normal(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Grows by `c` on every side (shrinks for negative components).
    pub fn expanded(self, c: Vec2<T>) -> Self {
        Rect::new(self.min - c, self.max + c)
    }

    #[inline]
    pub fn expand(&mut self, c: Vec2<T>) {
        *self = self.expanded(c);
    }

    pub fn translated(self, c: Vec2<T>) -> Self {
        Rect::new(self.min + c, self.max + c)
    }

    #[inline]
    pub fn translate(&mut self, c: Vec2<T>) {
        *self = self.translated(c);
    }

    /// Half-open test on both axes: `min <= p < max`.
    pub fn contains_point(&self, p: Vec2<T>) -> bool {
        self.min.x <= p.x && self.min.y <= p.y && p.x < self.max.x && p.y < self.max.y
    }

    /// [`Rect::contains_point`] applied to each point, in order.
    pub fn contains_points<I>(&self, points: I) -> Vec<bool>
    where
        I: IntoIterator<Item = Vec2<T>>,
    {
        points.into_iter().map(|p| self.contains_point(p)).collect()
    }

    /// Overlap of two rectangles plus whether that overlap is normal.
    ///
    /// When the flag is false the rectangle is the inverted best-effort result,
    /// not a sentinel. Edge-touching inputs produce a zero-extent but normal
    /// rectangle, so the flag is true for them.
    pub fn intersection(&self, other: &Self) -> (Self, bool) {
        let r = Rect::new(
            Vec2::new(max(self.min.x, other.min.x), max(self.min.y, other.min.y)),
            Vec2::new(min(self.max.x, other.max.x), min(self.max.y, other.max.y)),
        );
        (r, r.is_normal())
    }

    pub fn intersect(&self, other: &Self) -> Option<Self> {
        match self.intersection(other) {
            (r, true) => Some(r),
            (_, false) => None,
        }
    }

    /// Smallest rectangle enclosing both inputs.
    pub fn union(&self, other: &Self) -> Self {
        Rect::new(
            Vec2::new(min(self.min.x, other.min.x), min(self.min.y, other.min.y)),
            Vec2::new(max(self.max.x, other.max.x), max(self.max.y, other.max.y)),
        )
    }

    /// Both corners of `inner` must pass [`Rect::contains_point`].
    ///
    /// The max corner is tested with the same exclusive bound, so an inner
    /// rectangle sharing the outer max edge is rejected and no rectangle
    /// contains itself.
    pub fn contains(&self, inner: &Self) -> bool {
        self.contains_point(inner.min) && self.contains_point(inner.max)
    }
}

impl<T: Scalar + ToPrimitive> Rect<T> {
    /// Convert into another coordinate domain. Corners are converted as-is,
    /// without normalising.
    pub fn cast<U: Scalar + NumCast>(self) -> GeomResult<Rect<U>> {
        Ok(Rect { min: self.min.cast()?, max: self.max.cast()? })
    }
}

impl<T: Copy> TryFrom<&[T]> for Rect<T> {
    type Error = GeomError;

    // [min.x, min.y, max.x, max.y]
    fn try_from(values: &[T]) -> GeomResult<Self> {
        match *values {
            [x1, y1, x2, y2] => Ok(Rect {
                min: Vec2 { x: x1, y: y1 },
                max: Vec2 { x: x2, y: y2 },
            }),
            _ => Err(GeomError::WrongLength { expected: 4, found: values.len() }),
        }
    }
}

// Free-function forms. Each takes its arguments by value and leaves the
// caller's copies untouched.

#[inline]
pub fn add<T: Scalar>(lhs: Vec2<T>, rhs: Vec2<T>) -> Vec2<T> {
    lhs + rhs
}

#[inline]
pub fn sub<T: Scalar>(lhs: Vec2<T>, rhs: Vec2<T>) -> Vec2<T> {
    lhs - rhs
}

pub fn xywh<T: Scalar>(x: T, y: T, w: T, h: T) -> Rect<T> {
    Rect::from_xywh(x, y, w, h)
}

pub fn xyxy<T: Scalar>(x1: T, y1: T, x2: T, y2: T) -> Rect<T> {
    Rect::from_xyxy(x1, y1, x2, y2)
}

pub fn from_pos_size<T: Scalar>(pos: Vec2<T>, size: Vec2<T>) -> Rect<T> {
    Rect::from_pos_size(pos, size)
}

pub fn from_size<T: Scalar>(size: Vec2<T>) -> Rect<T> {
    Rect::from_size(size)
}

pub fn normalise<T: Scalar>(r: Rect<T>) -> Rect<T> {
    r.normalised()
}

pub fn expand<T: Scalar>(r: Rect<T>, c: Vec2<T>) -> Rect<T> {
    r.expanded(c)
}

pub fn translate<T: Scalar>(r: Rect<T>, c: Vec2<T>) -> Rect<T> {
    r.translated(c)
}

pub fn point_in_rectangle<T: Scalar>(r: Rect<T>, p: Vec2<T>) -> bool {
    r.contains_point(p)
}

pub fn intersection<T: Scalar>(r1: Rect<T>, r2: Rect<T>) -> (Rect<T>, bool) {
    r1.intersection(&r2)
}

pub fn union<T: Scalar>(r1: Rect<T>, r2: Rect<T>) -> Rect<T> {
    r1.union(&r2)
}

pub fn contains<T: Scalar>(outer: Rect<T>, inner: Rect<T>) -> bool {
    outer.contains(&inner)
}
