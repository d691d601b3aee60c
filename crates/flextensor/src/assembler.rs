//! Result assembly: wrap an executed plan into a new tensor.

use crate::error::Result;
use crate::executor::Executed;
use crate::registry::AxisRegistry;
use crate::tensor::FlexTensor;
use num_traits::Num;

/// Build the output tensor from the final buffer and its labels.
///
/// The labels come from distinct source axes plus fresh placeholders, so the
/// registry check only fails if the plan itself was inconsistent.
pub(crate) fn assemble<T>(executed: Executed<T>) -> Result<FlexTensor<T>>
where
    T: Clone + Num,
{
    let Executed { buffer, labels } = executed;
    let axes = AxisRegistry::new(labels)?;
    log::trace!("assembled tensor {:?} with axes {:?}", buffer.shape(), axes.names());
    Ok(FlexTensor::from_parts(buffer, axes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::AxisLabel;
    use flextensor_core::DenseND;

    #[test]
    fn test_assemble_keeps_labels() {
        let executed = Executed {
            buffer: DenseND::<f64>::zeros(&[2, 1]),
            labels: vec![AxisLabel::from("rows"), AxisLabel::Placeholder],
        };
        let tensor = assemble(executed).unwrap();
        assert_eq!(tensor.shape(), &[2, 1]);
        assert_eq!(tensor.axis_names(), vec!["rows", ""]);
    }
}
