use serde::Serialize;

use crate::{criteria::Criteria, normalize, rank, score, Error, Matrix, Result, Score};

/// The four tables produced by one run of the pipeline, tagged with the criterion names and
/// alternative labels they were computed from.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Evaluation {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    /// rows = alternatives, columns = criteria
    pub raw: Matrix,
    /// rows = alternatives, columns = criteria
    pub normalized: Matrix,
    pub scores: Vec<Score>,
    pub ranks: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RankedAlternative<'e> {
    pub alternative: &'e str,
    pub score: Score,
    pub rank: usize,
}

impl Evaluation {
    /// Alternatives ordered from best to worst.
    pub fn ranking(&self) -> Vec<RankedAlternative<'_>> {
        let mut ranking: Vec<RankedAlternative> = self
            .alternatives
            .iter()
            .zip(&self.scores)
            .zip(&self.ranks)
            .map(|((alternative, &score), &rank)| RankedAlternative {
                alternative,
                score,
                rank,
            })
            .collect();
        ranking.sort_by_key(|r| r.rank);
        ranking
    }
}

pub fn alternative_label(index: usize) -> String {
    format!("A{}", index + 1)
}

/// Run normalization, scoring and ranking over `alternatives` (rows = alternatives, columns =
/// criteria).
pub fn evaluate(alternatives: &Matrix, criteria: &Criteria) -> Result<Evaluation> {
    if alternatives.columns() != criteria.len() {
        return Err(Error::shape(
            "criterion values per alternative",
            criteria.len(),
            alternatives.columns(),
        ));
    }
    let by_criterion = alternatives.transpose();
    let normalized = normalize(&by_criterion, &criteria.labels())?;
    let scores = score(&normalized, &criteria.weights())?;
    let ranks = rank(&scores);
    tracing::debug!(
        alternatives = alternatives.rows(),
        criteria = criteria.len(),
        "evaluated alternatives"
    );
    Ok(Evaluation {
        criteria: criteria.names(),
        alternatives: (0..alternatives.rows()).map(alternative_label).collect(),
        raw: alternatives.clone(),
        normalized: normalized.transpose(),
        scores,
        ranks,
    })
}

#[cfg(test)]
mod test {
    use super::evaluate;
    use crate::{criteria::Criteria, num::assert_within, Error, Matrix};

    #[test]
    fn recruitment_example() {
        let alternatives = Matrix::from_rows([
            [0.5, 1.0, 0.7, 0.7, 0.8],
            [0.8, 0.7, 1.0, 0.5, 1.0],
            [1.0, 0.3, 0.4, 0.7, 1.0],
            [0.2, 1.0, 0.5, 0.9, 0.7],
            [1.0, 0.7, 0.4, 0.7, 1.0],
        ])
        .unwrap();
        let evaluation = evaluate(&alternatives, &Criteria::recruitment()).unwrap();

        assert_eq!(evaluation.alternatives, vec!["A1", "A2", "A3", "A4", "A5"]);
        assert_eq!(evaluation.raw, alternatives);
        assert_eq!(
            (evaluation.normalized.rows(), evaluation.normalized.columns()),
            (5, 5)
        );

        // experience column: 0.5 / ‖[0.5, 0.8, 1.0, 0.2, 1.0]‖
        let experience_norm = (0.25_f64 + 0.64 + 1.0 + 0.04 + 1.0).sqrt();
        assert_within(evaluation.normalized.row(0)[0], 0.5 / experience_norm, 1e-12);
        // marital status column is a cost criterion
        let marital_norm = (0.49_f64 + 0.25 + 0.49 + 0.81 + 0.49).sqrt();
        assert_within(evaluation.normalized.row(1)[3], marital_norm / 0.5, 1e-12);

        let mut ranks = evaluation.ranks.clone();
        ranks.sort();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);

        let ranking = evaluation.ranking();
        assert_eq!(ranking[0].rank, 1);
        assert!(ranking.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn wrong_row_width() {
        let alternatives = Matrix::from_rows([[0.5, 0.5, 0.5, 0.5]]).unwrap();
        let err = evaluate(&alternatives, &Criteria::recruitment()).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: 5, actual: 4, .. }));
    }
}
