use crate::{criteria::Label, Error, Matrix, Result};

/// Rescale each criterion row of `values` (rows = criteria, columns = alternatives) according to
/// its label.
///
/// - benefit: `v[j] / ‖v‖`, so larger raw values stay larger.
/// - cost: `‖v‖ / v[j]`, the reciprocal of the benefit form, so larger raw values become smaller.
///
/// The output keeps the criteria-major orientation of the input. A zero in a cost row, or a
/// benefit row that is entirely zero, has no defined normalization and fails the whole
/// computation.
pub fn normalize(values: &Matrix, labels: &[Label]) -> Result<Matrix> {
    if values.rows() != labels.len() {
        return Err(Error::shape("criterion labels", values.rows(), labels.len()));
    }
    let mut normalized = Matrix::with_columns(values.columns());
    for (criterion, (row, label)) in values.iter_rows().zip(labels).enumerate() {
        let row = match label {
            Label::Benefit => normalize_benefit(criterion, row)?,
            Label::Cost => normalize_cost(criterion, row)?,
        };
        normalized.push_row(&row)?;
    }
    tracing::debug!(
        criteria = normalized.rows(),
        alternatives = normalized.columns(),
        "normalized criteria"
    );
    Ok(normalized)
}

/// Euclidean norm, accumulated with `hypot` so that squaring neither underflows nor overflows.
fn magnitude(row: &[f64]) -> f64 {
    row.iter().fold(0.0, |norm, v| norm.hypot(*v))
}

fn normalize_benefit(criterion: usize, row: &[f64]) -> Result<Vec<f64>> {
    if !row.is_empty() && row.iter().all(|v| *v == 0.0) {
        return Err(Error::UndefinedNormalization {
            criterion,
            alternative: 0,
            reason: "every value of a benefit criterion is zero",
        });
    }
    let norm = magnitude(row);
    Ok(row.iter().map(|v| v / norm).collect())
}

fn normalize_cost(criterion: usize, row: &[f64]) -> Result<Vec<f64>> {
    if let Some(alternative) = row.iter().position(|v| *v == 0.0) {
        return Err(Error::UndefinedNormalization {
            criterion,
            alternative,
            reason: "a cost criterion value is zero",
        });
    }
    let norm = magnitude(row);
    row.iter()
        .enumerate()
        .map(|(alternative, v)| {
            let inverted = norm / v;
            if !inverted.is_finite() {
                return Err(Error::UndefinedNormalization {
                    criterion,
                    alternative,
                    reason: "a cost criterion value is too small to invert",
                });
            }
            Ok(inverted)
        })
        .collect()
}
