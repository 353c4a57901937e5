use crate::{Error, Result, Weight};

/// The direction in which a criterion's raw values are preferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Higher raw values are better.
    Benefit,
    /// Lower raw values are better.
    Cost,
}

impl std::str::FromStr for Label {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(Self::Benefit),
            "cost" => Ok(Self::Cost),
            _ => Err(Error::InvalidLabel(s.to_string())),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Benefit => f.write_str("benefit"),
            Self::Cost => f.write_str("cost"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Criterion {
    pub name: String,
    pub label: Label,
    pub weight: Weight,
}

/// The fixed, ordered set of criteria every alternative is scored against.
#[derive(Clone, Debug, PartialEq)]
pub struct Criteria(Vec<Criterion>);

impl Criteria {
    pub fn new<Name: Into<String>>(
        names: impl IntoIterator<Item = Name>,
        labels: &[Label],
        weights: &[f64],
    ) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if labels.len() != names.len() {
            return Err(Error::shape("criterion labels", names.len(), labels.len()));
        }
        if weights.len() != names.len() {
            return Err(Error::shape("criterion weights", names.len(), weights.len()));
        }
        let criteria = names
            .into_iter()
            .zip(labels)
            .zip(weights)
            .enumerate()
            .map(|(criterion, ((name, &label), &value))| -> Result<Criterion> {
                let weight = Weight::new(value).ok_or(Error::InvalidWeight { criterion, value })?;
                Ok(Criterion {
                    name,
                    label,
                    weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(criteria))
    }

    /// Candidate screening for a machine operator position: work experience, education and age
    /// are favored when higher, while marital status and distance of the home address from the
    /// office are favored when lower.
    pub fn recruitment() -> Self {
        use Label::*;
        let criterion = |name: &str, label, weight| Criterion {
            name: name.to_string(),
            label,
            weight: Weight::new(weight).unwrap_or(Weight::ZERO),
        };
        Self(vec![
            criterion("experience", Benefit, 0.3),
            criterion("education", Benefit, 0.2),
            criterion("age", Benefit, 0.2),
            criterion("marital status", Cost, 0.15),
            criterion("address", Cost, 0.15),
        ])
    }

    /// Replace labels and/or weights, keeping the criterion names.
    pub fn with_overrides(&self, labels: Option<&[Label]>, weights: Option<&[f64]>) -> Result<Self> {
        let labels = labels.map(<[Label]>::to_vec).unwrap_or_else(|| self.labels());
        let weights = weights
            .map(<[f64]>::to_vec)
            .unwrap_or_else(|| self.weights().iter().map(Weight::as_f64).collect());
        Self::new(self.names(), &labels, &weights)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.0.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|c| c.name.clone()).collect()
    }

    pub fn labels(&self) -> Vec<Label> {
        self.0.iter().map(|c| c.label).collect()
    }

    pub fn weights(&self) -> Vec<Weight> {
        self.0.iter().map(|c| c.weight).collect()
    }
}
