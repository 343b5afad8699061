//! Axis-aligned 2D vectors and rectangles.
//!
//! One generic implementation serves both coordinate families: `Coord` /
//! `Rectangle` over `i64` and `Coordf` / `Rectanglef` over `f64`.

mod error;
mod geom;
mod scalar;

#[cfg(feature = "python")]
mod py;

pub use error::{GeomError, GeomResult};
pub use geom::{
    add, contains, expand, from_pos_size, from_size, intersection, normalise, point_in_rectangle,
    sub, translate, union, xywh, xyxy, Rect, Vec2,
};
pub use scalar::{max, min, Scalar};

pub type Coord = Vec2<i64>;
pub type Coordf = Vec2<f64>;
pub type Rectangle = Rect<i64>;
pub type Rectanglef = Rect<f64>;
