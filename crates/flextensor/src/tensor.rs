//! The labeled-axis tensor type.

use crate::args::AxisArg;
use crate::assembler::assemble;
use crate::error::{AxisError, Result};
use crate::executor::Executor;
use crate::label::{AxisLabel, Label};
use crate::merge::{check_compatible, merge_labels, pivot_labels};
use crate::parser::parse;
use crate::registry::{AxisRegistry, Resolved};
use flextensor_core::{BufferConfig, DenseND};
use num_traits::Num;
use std::fmt;

/// A dense tensor whose dimensions carry names.
///
/// Every indexing or arithmetic call returns a new tensor; the receiver is
/// never modified.
///
/// # Examples
///
/// ```
/// use flextensor::{ix, FlexTensor};
///
/// let t = FlexTensor::<f64>::from_vec(
///     (0..24).map(|x| x as f64).collect(),
///     &[2, 3, 4],
///     ["batch", "height", "width"],
/// )
/// .unwrap();
///
/// // Move width to the front, keep the rest in order
/// let moved = t.index(ix!["width", ..]).unwrap();
/// assert_eq!(moved.shape(), &[4, 2, 3]);
/// assert_eq!(moved.axis_names(), vec!["width", "batch", "height"]);
///
/// // Pick one row and merge the remaining axes
/// let merged = t.index(ix![("height", 1), ["batch", "width"]]).unwrap();
/// assert_eq!(merged.shape(), &[8]);
/// assert_eq!(merged.axis_names(), vec!["batch"]);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(bound(serialize = "T: serde::Serialize")))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "TensorParts<T>",
        bound(deserialize = "T: serde::Deserialize<'de> + Clone + Num")
    )
)]
pub struct FlexTensor<T> {
    data: DenseND<T>,
    axes: AxisRegistry,
}

/// Unchecked deserialized fields of a [`FlexTensor`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct TensorParts<T> {
    data: DenseND<T>,
    axes: AxisRegistry,
}

#[cfg(feature = "serde")]
impl<T: Clone + Num> TryFrom<TensorParts<T>> for FlexTensor<T> {
    type Error = AxisError;

    fn try_from(parts: TensorParts<T>) -> Result<Self> {
        let rank = parts.data.rank();
        if parts.axes.len() != rank {
            return Err(AxisError::LabelCount {
                labels: parts.axes.len(),
                rank,
            });
        }
        Ok(Self {
            data: parts.data,
            axes: parts.axes,
        })
    }
}

impl<T> FlexTensor<T>
where
    T: Clone + Num,
{
    /// Wrap a buffer (or another tensor's buffer) with axis names.
    ///
    /// Missing trailing names become placeholders; surplus names append
    /// size-1 dimensions at the end.
    ///
    /// # Errors
    ///
    /// [`AxisError::DuplicateLabel`] if a name is given twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor::{DenseND, FlexTensor};
    ///
    /// let t = FlexTensor::new(DenseND::<f64>::zeros(&[4]), ["x", "y"]).unwrap();
    /// assert_eq!(t.shape(), &[4, 1]);
    ///
    /// let relabeled = FlexTensor::new(t.clone(), ["rows"]).unwrap();
    /// assert_eq!(relabeled.axis_names(), vec!["rows", ""]);
    /// ```
    pub fn new<D, I, N>(data: D, names: I) -> Result<Self>
    where
        D: Into<DenseND<T>>,
        I: IntoIterator<Item = N>,
        N: Into<AxisLabel>,
    {
        let mut data = data.into();
        let (axes, surplus) = AxisRegistry::padded(names, data.rank())?;
        if surplus > 0 {
            log::trace!(
                "appending {} unit dimensions to shape {:?}",
                surplus,
                data.shape()
            );
        }
        for _ in 0..surplus {
            data = data.insert_axis(data.rank())?;
        }
        Ok(Self { data, axes })
    }

    /// Build from row-major values, a shape and axis names.
    pub fn from_vec<I, N>(values: Vec<T>, shape: &[usize], names: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<AxisLabel>,
    {
        Self::new(DenseND::from_vec(values, shape)?, names)
    }

    /// Wrap a buffer with all-placeholder axes.
    pub fn anonymous(data: impl Into<DenseND<T>>) -> Self {
        let data = data.into();
        let axes = AxisRegistry::anonymous(data.rank());
        Self { data, axes }
    }

    pub(crate) fn from_parts(data: DenseND<T>, axes: AxisRegistry) -> Self {
        Self { data, axes }
    }

    /// Same buffer, new names (padding rule as in [`FlexTensor::new`]).
    pub fn with_axes<I, N>(&self, names: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<AxisLabel>,
    {
        Self::new(self.data.clone(), names)
    }

    pub fn data(&self) -> &DenseND<T> {
        &self.data
    }

    pub fn into_data(self) -> DenseND<T> {
        self.data
    }

    pub fn registry(&self) -> &AxisRegistry {
        &self.axes
    }

    /// Axis labels in order.
    pub fn axes(&self) -> &[AxisLabel] {
        self.axes.labels()
    }

    /// Axis names in order, `""` for placeholders.
    pub fn axis_names(&self) -> Vec<String> {
        self.axes.names()
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn rank(&self) -> usize {
        self.data.rank()
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Resolve labels to positions; one label gives [`Resolved::One`].
    pub fn ax<I, L>(&self, labels: I) -> Result<Resolved>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        let labels: Vec<Label> = labels.into_iter().map(Into::into).collect();
        self.axes.resolve_many(&labels)
    }

    /// Sizes of the given axes, in the order given.
    ///
    /// ```
    /// use flextensor::{DenseND, FlexTensor};
    ///
    /// let t = FlexTensor::new(DenseND::<f64>::zeros(&[2, 3, 4]), ["a", "b", "c"]).unwrap();
    /// assert_eq!(t.shape_of(["c", "a"]).unwrap(), vec![4, 2]);
    /// assert_eq!(t.size_of(["b", "c"]).unwrap(), 12);
    /// ```
    pub fn shape_of<I, L>(&self, labels: I) -> Result<Vec<usize>>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        labels
            .into_iter()
            .map(|label| -> Result<usize> {
                let position = self.axes.resolve(&label.into())?;
                Ok(self.shape()[position])
            })
            .collect()
    }

    /// Product of the given axes' sizes.
    pub fn size_of<I, L>(&self, labels: I) -> Result<usize>
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        Ok(self.shape_of(labels)?.iter().product())
    }

    /// Slice, reorder, insert, drop and merge axes in one call.
    ///
    /// See [`AxisArg`] for the argument forms. Axes that no argument
    /// mentions are placed at the ellipsis if there is one, otherwise after
    /// all explicitly placed axes, in their original order.
    ///
    /// # Errors
    ///
    /// Label resolution and plan errors from [`crate::parser::parse`], and
    /// buffer errors such as an out-of-range index.
    ///
    /// # Examples
    ///
    /// ```
    /// use flextensor::{ix, FlexTensor};
    ///
    /// let x = FlexTensor::<f64>::from_vec((0..10).map(|v| v as f64).collect(), &[10], ["x"]).unwrap();
    /// let row = x.index(ix!["", "x"]).unwrap();
    /// assert_eq!(row.shape(), &[1, 10]);
    /// assert_eq!(row.axis_names(), vec!["", "x"]);
    /// ```
    pub fn index<I, A>(&self, args: I) -> Result<Self>
    where
        I: IntoIterator<Item = A>,
        A: Into<AxisArg>,
    {
        let args: Vec<AxisArg> = args.into_iter().map(Into::into).collect();
        let plan = parse(&args, &self.axes)?;
        let executed = Executor::new(&self.data, &self.axes).run(&plan)?;
        assemble(executed)
    }

    /// Labels an elementwise operation with `other` would produce.
    pub fn merge_axes(&self, other: &Self) -> Result<AxisRegistry> {
        check_compatible(self.shape(), other.shape(), &BufferConfig::default())?;
        merge_labels(&self.axes, &other.axes)
    }

    /// Labels a pivot product with `other` would produce.
    pub fn pivot_axes(&self, other: &Self) -> Result<AxisRegistry> {
        pivot_labels(&self.axes, &other.axes)
    }

    /// Apply `f` pairwise under `config`, merging labels.
    pub fn zip_with<F>(&self, other: &Self, config: &BufferConfig, f: F) -> Result<Self>
    where
        F: Fn(T, T) -> T,
    {
        check_compatible(self.shape(), other.shape(), config)?;
        let axes = merge_labels(&self.axes, &other.axes)?;
        let data = self.data.zip_with(&other.data, config, f)?;
        Ok(Self { data, axes })
    }

    pub fn add_with(&self, other: &Self, config: &BufferConfig) -> Result<Self> {
        self.zip_with(other, config, |a, b| a + b)
    }

    pub fn sub_with(&self, other: &Self, config: &BufferConfig) -> Result<Self> {
        self.zip_with(other, config, |a, b| a - b)
    }

    /// Elementwise product under `config`. `&a * &b` uses the default config.
    ///
    /// ```
    /// use flextensor::{ix, BufferConfig, FlexTensor};
    ///
    /// let values: Vec<f64> = (0..10).map(|v| v as f64).collect();
    /// let y = FlexTensor::from_vec(values.clone(), &[10], ["y"]).unwrap();
    /// let x = FlexTensor::from_vec(values, &[10], ["x"]).unwrap();
    ///
    /// let column = y.index(ix!["y", ""]).unwrap();
    /// let row = x.index(ix!["", "x"]).unwrap();
    /// let table = column.mul_with(&row, &BufferConfig::default()).unwrap();
    /// assert_eq!(table.axis_names(), vec!["y", "x"]);
    /// assert_eq!(table.data()[&[7, 8]], 56.0);
    /// assert!(column.mul_with(&row, &BufferConfig::strict()).is_err());
    /// ```
    pub fn mul_with(&self, other: &Self, config: &BufferConfig) -> Result<Self> {
        self.zip_with(other, config, |a, b| a * b)
    }

    pub fn div_with(&self, other: &Self, config: &BufferConfig) -> Result<Self> {
        self.zip_with(other, config, |a, b| a / b)
    }

    /// Matrix product of two rank-2 tensors, labeled `[self[0], other[1]]`.
    ///
    /// # Errors
    ///
    /// - [`AxisError::UnsupportedRank`] unless both operands are rank 2
    /// - [`AxisError::AxisMismatch`] if the inner sizes differ
    pub fn pivot(&self, other: &Self) -> Result<Self> {
        let axes = self.pivot_axes(other)?;
        if self.shape()[1] != other.shape()[0] {
            return Err(AxisError::AxisMismatch {
                left: self.shape().to_vec(),
                right: other.shape().to_vec(),
            });
        }
        let data = self.data.matmul(&other.data)?;
        Ok(Self { data, axes })
    }
}

impl<T: fmt::Display> FlexTensor<T> {
    /// Render with the precision from `config`.
    ///
    /// `Display` goes through here too, so `{:.2}` sets the precision.
    pub fn render(&self, config: &BufferConfig) -> String {
        format!(
            "FlexTensor(\n{},\naxes: {:?})",
            self.data.render(config),
            self.axes.names()
        )
    }
}

impl<T: fmt::Display> fmt::Display for FlexTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = match f.precision() {
            Some(precision) => BufferConfig::default().with_precision(precision),
            None => BufferConfig::default(),
        };
        f.write_str(&self.render(&config))
    }
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for FlexTensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlexTensor")
            .field("shape", &self.shape())
            .field("axes", &self.axes.names())
            .field("data", &self.data)
            .finish()
    }
}

impl<T> From<FlexTensor<T>> for DenseND<T> {
    fn from(tensor: FlexTensor<T>) -> Self {
        tensor.data
    }
}

impl<T: Clone> From<&FlexTensor<T>> for DenseND<T> {
    fn from(tensor: &FlexTensor<T>) -> Self {
        tensor.data.clone()
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $with:ident) => {
        impl<'a, T> std::ops::$trait<&'a FlexTensor<T>> for &'a FlexTensor<T>
        where
            T: Clone + Num,
        {
            type Output = Result<FlexTensor<T>>;

            fn $method(self, rhs: &'a FlexTensor<T>) -> Self::Output {
                self.$with(rhs, &BufferConfig::default())
            }
        }
    };
}

impl_binary_op!(Add, add, add_with);
impl_binary_op!(Sub, sub, sub_with);
impl_binary_op!(Mul, mul, mul_with);
impl_binary_op!(Div, div, div_with);
