//! Derived series: column ratios and company-keyed literal values

use crate::error::{DashboardError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Numeric values labelled by company, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    name: String,
    labels: Vec<String>,
    values: Vec<Option<f64>>,
}

impl Series {
    pub fn new(name: impl Into<String>, labels: Vec<String>, values: Vec<Option<f64>>) -> Result<Self> {
        if labels.len() != values.len() {
            return Err(DashboardError::Shape {
                labels: labels.len(),
                values: values.len(),
            });
        }
        Ok(Self {
            name: name.into(),
            labels,
            values,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Option<f64>>) {
        (self.labels, self.values)
    }

    /// Elementwise ratio of two series over the same companies.
    ///
    /// A missing value on either side yields a missing ratio. A zero
    /// denominator against a present numerator is an error rather than an
    /// infinite bar.
    pub fn ratio(numerator: &Series, denominator: &Series) -> Result<Series> {
        if numerator.labels != denominator.labels {
            return Err(DashboardError::Shape {
                labels: numerator.len(),
                values: denominator.len(),
            });
        }

        let mut values = Vec::with_capacity(numerator.len());
        for (i, (num, den)) in numerator.values.iter().zip(&denominator.values).enumerate() {
            let value = match (num, den) {
                (Some(_), Some(d)) if *d == 0.0 => {
                    return Err(DashboardError::DivisionByZero {
                        company: numerator.labels[i].clone(),
                        numerator: numerator.name.clone(),
                        denominator: denominator.name.clone(),
                    });
                }
                (Some(n), Some(d)) => Some(n / d),
                _ => None,
            };
            values.push(value);
        }

        Ok(Series {
            name: format!("{} / {}", numerator.name, denominator.name),
            labels: numerator.labels.clone(),
            values,
        })
    }
}

/// Literal values supplied per company rather than derived from the table
///
/// Alignment with the table happens by company lookup, so reordering the
/// table cannot shift values onto the wrong company.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyedSeries {
    name: String,
    values: BTreeMap<String, f64>,
}

impl KeyedSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn from_pairs<I, K>(name: impl Into<String>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            name: name.into(),
            values: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn insert(&mut self, company: impl Into<String>, value: f64) {
        self.values.insert(company.into(), value);
    }

    pub fn get(&self, company: &str) -> Option<f64> {
        self.values.get(company).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lay the values out in `index` order. Every company must be present.
    pub fn align(&self, index: &[String]) -> Result<Series> {
        self.warn_unused(index);
        let values = index
            .iter()
            .map(|company| {
                self.get(company).map(Some).ok_or_else(|| DashboardError::MissingCompany {
                    series: self.name.clone(),
                    company: company.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Series::new(self.name.clone(), index.to_vec(), values)
    }

    /// Lay the values out in `index` order, using `default` for absent companies
    pub fn align_or(&self, index: &[String], default: f64) -> Vec<f64> {
        self.warn_unused(index);
        index
            .iter()
            .map(|company| self.get(company).unwrap_or(default))
            .collect()
    }

    fn warn_unused(&self, index: &[String]) {
        for company in self.values.keys() {
            if !index.contains(company) {
                log::warn!("{}: company '{}' is not in the metrics table", self.name, company);
            }
        }
    }
}
