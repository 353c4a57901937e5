use crate::{criteria::Criteria, evaluate, Error, Evaluation, Matrix, Normalized, Result};

/// Application state for one decision: the criteria configuration and the alternatives saved so
/// far. Alternatives are only ever appended. Evaluation reads a snapshot of them and leaves the
/// state untouched.
#[derive(Clone, Debug)]
pub struct Decision {
    criteria: Criteria,
    alternatives: Matrix,
}

impl Decision {
    pub fn new(criteria: Criteria) -> Self {
        let alternatives = Matrix::with_columns(criteria.len());
        Self {
            criteria,
            alternatives,
        }
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn alternatives(&self) -> &Matrix {
        &self.alternatives
    }

    pub fn len(&self) -> usize {
        self.alternatives.rows()
    }

    pub fn is_empty(&self) -> bool {
        self.alternatives.rows() == 0
    }

    /// Save one alternative. Each value must lie in [0, 1] and there must be exactly one value per
    /// criterion. Returns the number of alternatives saved, including this one.
    pub fn append_alternative(&mut self, values: &[f64]) -> Result<usize> {
        if values.len() != self.criteria.len() {
            tracing::warn!(
                expected = self.criteria.len(),
                actual = values.len(),
                "rejected alternative"
            );
            return Err(Error::shape(
                "criterion values per alternative",
                self.criteria.len(),
                values.len(),
            ));
        }
        let row = values
            .iter()
            .enumerate()
            .map(|(criterion, &value)| {
                Normalized::new(value).ok_or(Error::OutOfRange { criterion, value })
            })
            .collect::<Result<Vec<Normalized>>>()
            .map_err(|err| {
                tracing::warn!(%err, "rejected alternative");
                err
            })?;
        let row: Vec<f64> = row.iter().map(Normalized::as_f64).collect();
        self.alternatives.push_row(&row)?;
        tracing::debug!(alternatives = self.len(), "saved alternative");
        Ok(self.len())
    }

    /// Evaluate every alternative saved so far.
    pub fn process(&self) -> Result<Evaluation> {
        if self.is_empty() {
            return Err(Error::NoAlternatives);
        }
        evaluate(&self.alternatives, &self.criteria).map_err(|err| {
            tracing::warn!(%err, "evaluation failed");
            err
        })
    }
}
