//! Plan executor
//!
//! Applies an [`IndexPlan`] to a private copy of the buffer. Axis identities
//! live in an arena of records; `live` lists the identity held by each
//! current buffer dimension, so removals and insertions never renumber
//! identities. Reordering is committed with a single permutation at the end.

use crate::error::{AxisError, Result};
use crate::label::AxisLabel;
use crate::parser::{AxisId, IndexPlan, Specifier};
use crate::registry::AxisRegistry;
use flextensor_core::{AxisSlice, DenseND};
use num_traits::Num;
use std::fmt;

#[derive(Debug, Clone)]
struct AxisRecord {
    label: AxisLabel,
}

/// Buffer and labels after a plan has run, in final axis order
pub struct Executed<T> {
    pub buffer: DenseND<T>,
    pub labels: Vec<AxisLabel>,
}

impl<T: fmt::Debug + Clone + Num> fmt::Debug for Executed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executed")
            .field("buffer", &self.buffer)
            .field("labels", &self.labels)
            .finish()
    }
}

pub(crate) struct Executor<T> {
    buffer: DenseND<T>,
    records: Vec<AxisRecord>,
    live: Vec<AxisId>,
}

impl<T> Executor<T>
where
    T: Clone + Num,
{
    pub(crate) fn new(buffer: &DenseND<T>, registry: &AxisRegistry) -> Self {
        let records = registry
            .labels()
            .iter()
            .map(|label| AxisRecord {
                label: label.clone(),
            })
            .collect();
        Self {
            buffer: buffer.clone(),
            records,
            live: (0..registry.len()).collect(),
        }
    }

    fn position(&self, id: AxisId) -> Result<usize> {
        self.live
            .iter()
            .position(|&live| live == id)
            .ok_or_else(|| AxisError::Buffer(anyhow::anyhow!("Axis {} is no longer present", id)))
    }

    /// Run every step, then commit the final order.
    pub(crate) fn run(mut self, plan: &IndexPlan) -> Result<Executed<T>> {
        log::debug!(
            "executing index plan: {:?}, unreferenced {:?}, ellipsis {:?}",
            plan.steps,
            plan.unreferenced,
            plan.ellipsis
        );

        let mut outputs = Vec::with_capacity(plan.steps.len());
        for step in &plan.steps {
            if let Some(id) = self.apply(step)? {
                outputs.push(id);
            }
        }
        self.finish(outputs, plan)
    }

    fn apply(&mut self, step: &Specifier) -> Result<Option<AxisId>> {
        log::trace!("step {:?} on shape {:?}", step, self.buffer.shape());
        match step {
            Specifier::Select(id) => Ok(Some(*id)),
            Specifier::Slice(id, slice) => self.slice(*id, slice),
            Specifier::NewAxis => Ok(Some(self.new_axis()?)),
            Specifier::Flatten(ids) => self.flatten(ids),
        }
    }

    fn slice(&mut self, id: AxisId, slice: &AxisSlice) -> Result<Option<AxisId>> {
        let position = self.position(id)?;
        self.buffer = self.buffer.slice_axis(position, slice)?;
        if slice.collapses() {
            self.live.remove(position);
            Ok(None)
        } else {
            Ok(Some(id))
        }
    }

    fn new_axis(&mut self) -> Result<AxisId> {
        self.buffer = self.buffer.insert_axis(self.buffer.rank())?;
        let id = self.records.len();
        self.records.push(AxisRecord {
            label: AxisLabel::Placeholder,
        });
        self.live.push(id);
        Ok(id)
    }

    /// Fold the group pairwise from the right. Each fold makes the outer
    /// member the slow half of the merged axis, and the merged axis takes
    /// the outer member's identity.
    fn flatten(&mut self, ids: &[AxisId]) -> Result<Option<AxisId>> {
        for pair in ids.windows(2).rev() {
            let (outer, inner) = (pair[0], pair[1]);
            let outer_pos = self.position(outer)?;
            let inner_pos = self.position(inner)?;
            let outer_len = self.buffer.shape()[outer_pos];

            self.buffer = if outer_len == 0 {
                let mut shape = self.buffer.shape().to_vec();
                shape[inner_pos] = 0;
                shape.remove(outer_pos);
                self.buffer.reshape(&shape)?
            } else {
                let blocks = self.buffer.split(outer_len, outer_pos)?;
                DenseND::concatenate(&blocks, inner_pos)?.remove_axis(outer_pos)?
            };

            self.live.remove(outer_pos);
            let merged = self.position(inner)?;
            self.live[merged] = outer;
        }
        Ok(ids.first().copied())
    }

    fn finish(self, outputs: Vec<AxisId>, plan: &IndexPlan) -> Result<Executed<T>> {
        let split = plan.ellipsis.unwrap_or(outputs.len()).min(outputs.len());
        let order: Vec<AxisId> = outputs[..split]
            .iter()
            .chain(plan.unreferenced.iter())
            .chain(outputs[split..].iter())
            .copied()
            .collect();

        if order.len() != self.live.len() {
            return Err(AxisError::Buffer(anyhow::anyhow!(
                "Planned {} output axes for a buffer of rank {}",
                order.len(),
                self.live.len()
            )));
        }

        let permutation = order
            .iter()
            .map(|&id| self.position(id))
            .collect::<Result<Vec<_>>>()?;
        log::debug!("final permutation {:?}", permutation);

        let buffer = self.buffer.permute(&permutation)?;
        let labels = order
            .iter()
            .map(|&id| self.records[id].label.clone())
            .collect();
        Ok(Executed { buffer, labels })
    }
}
