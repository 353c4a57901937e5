use crate::{Error, Matrix, Result, Score, Weight};

/// Reduce a normalized matrix (rows = criteria, columns = alternatives) to one score per
/// alternative, in input order.
///
/// Each alternative's criterion values are multiplied by their weights and the score is the
/// Euclidean norm of that weighted row: `sqrt(Σ (w[i] · n[i])²)`.
///
/// This is not the closeness coefficient of textbook TOPSIS, which measures each alternative's
/// distance to the best and worst values observed across all alternatives. No ideal points are
/// computed here; an alternative's score depends only on its own normalized row.
pub fn score(normalized: &Matrix, weights: &[Weight]) -> Result<Vec<Score>> {
    if normalized.rows() != weights.len() {
        return Err(Error::shape("criterion weights", normalized.rows(), weights.len()));
    }
    let by_alternative = normalized.transpose();
    let scores = by_alternative
        .iter_rows()
        .enumerate()
        .map(|(alternative, row)| {
            // hypot keeps tiny and huge weighted values from under- or overflowing when squared
            row.iter()
                .zip(weights)
                .enumerate()
                .try_fold(Score::ZERO, |score, (criterion, (v, w))| {
                    Score::new(score.as_f64().hypot(v * w.as_f64())).ok_or(
                        Error::UndefinedNormalization {
                            criterion,
                            alternative,
                            reason: "a weighted value is too large to score",
                        },
                    )
                })
        })
        .collect::<Result<Vec<Score>>>()?;
    tracing::debug!(alternatives = scores.len(), "scored alternatives");
    Ok(scores)
}

#[cfg(test)]
mod test {
    use super::score;
    use crate::{num::assert_within, Error, Matrix, Weight};

    fn weights(values: &[f64]) -> Vec<Weight> {
        values.iter().map(|w| Weight::new(*w).unwrap()).collect()
    }

    #[test]
    fn weighted_euclidean_norm() {
        // criteria-major: two criteria, two alternatives
        let normalized = Matrix::from_rows([[0.6, 0.8], [2.0, 1.0]]).unwrap();
        let scores = score(&normalized, &weights(&[0.5, 0.25])).unwrap();
        assert_eq!(scores.len(), 2);
        assert_within(scores[0].as_f64(), (0.3_f64.powi(2) + 0.5_f64.powi(2)).sqrt(), 1e-12);
        assert_within(scores[1].as_f64(), (0.4_f64.powi(2) + 0.25_f64.powi(2)).sqrt(), 1e-12);
    }

    #[test]
    fn tiny_weighted_values_keep_their_magnitude() {
        let normalized = Matrix::from_rows([[1e-200], [1e-200]]).unwrap();
        let scores = score(&normalized, &weights(&[1.0, 1.0])).unwrap();
        assert!(scores[0].as_f64() > 0.0);
        assert_within(scores[0].as_f64() / 1e-200, 2.0_f64.sqrt(), 1e-12);
    }

    #[test]
    fn overflowing_score_names_the_criterion() {
        let normalized = Matrix::from_rows([[0.5, f64::MAX], [0.5, f64::MAX]]).unwrap();
        let err = score(&normalized, &weights(&[1.0, 1.0])).unwrap_err();
        assert_eq!(
            err,
            Error::UndefinedNormalization {
                criterion: 1,
                alternative: 1,
                reason: "a weighted value is too large to score",
            }
        );
    }

    #[test]
    fn zero_weights_give_zero_score() {
        let normalized = Matrix::from_rows([[0.6, 0.8], [2.0, 1.0]]).unwrap();
        let scores = score(&normalized, &weights(&[0.0, 0.0])).unwrap();
        assert!(scores.iter().all(|s| s.as_f64() == 0.0));
    }

    #[test]
    fn weight_count_mismatch() {
        let normalized = Matrix::from_rows([[1.0], [1.0], [1.0]]).unwrap();
        assert_eq!(
            score(&normalized, &weights(&[0.5, 0.5])),
            Err(Error::ShapeMismatch {
                what: "criterion weights",
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn no_alternatives() {
        let normalized = Matrix::with_columns(2).transpose();
        assert_eq!(score(&normalized, &weights(&[0.5, 0.5])), Ok(vec![]));
    }
}
