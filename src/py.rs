// src/py.rs
//
// PyO3 boundary for the two rectangle families.
//
// - All geometry lives in geom.rs; the classes here only wrap `Rect<T>` and
//   convert tuples <-> `Vec2<T>`.
// - Vectors cross the boundary as plain `(x, y)` tuples, no Python vector class.
// - `GeomError` becomes `ValueError`. Nothing else here can fail.

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::GeomError;
use crate::geom::{Rect, Vec2};

impl From<GeomError> for PyErr {
    fn from(err: GeomError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

// One macro instead of two hand-copied classes: pyclass cannot be generic.
macro_rules! py_rect {
    ($ty:ident, $name:tt, $scalar:ty, $other:ident, $other_scalar:ty) => {
        #[pyclass(name = $name, module = "rect2d", eq)]
        #[derive(Clone, Copy, PartialEq)]
        pub struct $ty {
            inner: Rect<$scalar>,
        }

        impl From<Rect<$scalar>> for $ty {
            fn from(inner: Rect<$scalar>) -> Self {
                $ty { inner }
            }
        }

        #[pymethods]
        impl $ty {
            /// Rectangle(x, y, w, h). Not normalised.
            #[new]
            fn new(x: $scalar, y: $scalar, w: $scalar, h: $scalar) -> Self {
                Rect::from_xywh(x, y, w, h).into()
            }

            #[staticmethod]
            fn from_xyxy(x1: $scalar, y1: $scalar, x2: $scalar, y2: $scalar) -> Self {
                Rect::from_xyxy(x1, y1, x2, y2).into()
            }

            #[staticmethod]
            fn from_pos_size(pos: ($scalar, $scalar), size: ($scalar, $scalar)) -> Self {
                Rect::from_pos_size(pos.into(), size.into()).into()
            }

            #[staticmethod]
            fn from_size(size: ($scalar, $scalar)) -> Self {
                Rect::from_size(size.into()).into()
            }

            /// [min_x, min_y, max_x, max_y], taken as-is.
            #[staticmethod]
            fn from_sequence(values: Vec<$scalar>) -> PyResult<Self> {
                let inner = Rect::try_from(values.as_slice())?;
                Ok(inner.into())
            }

            #[getter]
            fn min(&self) -> ($scalar, $scalar) {
                self.inner.min.into()
            }

            #[getter]
            fn max(&self) -> ($scalar, $scalar) {
                self.inner.max.into()
            }

            fn width(&self) -> $scalar {
                self.inner.width()
            }

            fn height(&self) -> $scalar {
                self.inner.height()
            }

            fn size(&self) -> ($scalar, $scalar) {
                self.inner.size().into()
            }

            fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            fn is_normal(&self) -> bool {
                self.inner.is_normal()
            }

            fn normalise(&mut self) {
                self.inner.normalise();
            }

            fn normalised(&self) -> Self {
                self.inner.normalised().into()
            }

            fn expand(&mut self, c: ($scalar, $scalar)) {
                self.inner.expand(c.into());
            }

            fn expanded(&self, c: ($scalar, $scalar)) -> Self {
                self.inner.expanded(c.into()).into()
            }

            fn translate(&mut self, c: ($scalar, $scalar)) {
                self.inner.translate(c.into());
            }

            fn translated(&self, c: ($scalar, $scalar)) -> Self {
                self.inner.translated(c.into()).into()
            }

            fn contains_point(&self, p: ($scalar, $scalar)) -> bool {
                self.inner.contains_point(p.into())
            }

            /// Batch point test over an (N, 2) array; returns a bool mask of length N.
            fn contains_points<'py>(
                &self,
                py: Python<'py>,
                points: PyReadonlyArray2<'py, $scalar>,
            ) -> PyResult<Bound<'py, PyArray1<bool>>> {
                let view = points.as_array();
                let (_, cols) = view.dim();
                if cols != 2 {
                    return Err(GeomError::WrongLength { expected: 2, found: cols }.into());
                }
                let mask = self
                    .inner
                    .contains_points(view.outer_iter().map(|row| Vec2::new(row[0], row[1])));
                Ok(mask.into_pyarray(py))
            }

            /// Returns (rect, ok). When ok is False the rect is the inverted overlap.
            fn intersection(&self, other: PyRef<'_, Self>) -> (Self, bool) {
                let (r, ok) = self.inner.intersection(&other.inner);
                (r.into(), ok)
            }

            fn union(&self, other: PyRef<'_, Self>) -> Self {
                self.inner.union(&other.inner).into()
            }

            fn contains(&self, inner: PyRef<'_, Self>) -> bool {
                self.inner.contains(&inner.inner)
            }

            /// Convert to the other coordinate family.
            fn cast(&self) -> PyResult<$other> {
                let inner: Rect<$other_scalar> = self.inner.cast()?;
                Ok(inner.into())
            }

            fn __repr__(&self) -> String {
                format!(
                    "{}(min=({}, {}), max=({}, {}))",
                    $name,
                    self.inner.min.x,
                    self.inner.min.y,
                    self.inner.max.x,
                    self.inner.max.y
                )
            }
        }
    };
}

py_rect!(PyRectangle, "Rectangle", i64, PyRectanglef, f64);
py_rect!(PyRectanglef, "Rectanglef", f64, PyRectangle, i64);

#[pymodule]
fn rect2d(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRectangle>()?;
    m.add_class::<PyRectanglef>()?;
    Ok(())
}
