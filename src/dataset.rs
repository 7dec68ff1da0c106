use crate::Vector;
use crate::error::DatasetError;
use log::debug;
use ndarray::Zip;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::{Normal, Uniform};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One observation of the independent variable `x` and its target `y`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Samples stored column-wise.
#[derive(Clone, Debug)]
pub struct Dataset {
    x: Vector,
    y: Vector,
}

impl Dataset {
    pub fn new(x: Vector, y: Vector) -> Result<Self, DatasetError> {
        if x.len() != y.len() {
            return Err(DatasetError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(Self { x, y })
    }

    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            x: samples.iter().map(|s| s.x).collect(),
            y: samples.iter().map(|s| s.y).collect(),
        }
    }

    /// Reads samples from CSV with an `x,y` header row.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let samples = rdr
            .deserialize::<Sample>()
            .collect::<Result<Vec<_>, _>>()?;

        debug!("loaded {} samples from csv", samples.len());
        Ok(Self::from_samples(&samples))
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_csv_reader(file)
    }

    /// Draws `n_samples` points with `x` uniform over `x_range` and
    /// `y = intercept + slope * x` plus Gaussian noise of `noise_std`.
    pub fn synthetic_line(
        intercept: f64,
        slope: f64,
        n_samples: usize,
        x_range: (f64, f64),
        noise_std: f64,
        seed: u64,
    ) -> Result<Self, DatasetError> {
        let (low, high) = x_range;
        if !(low.is_finite() && high.is_finite() && low <= high) {
            return Err(DatasetError::InvalidParameter(format!(
                "x_range must be a finite interval, got ({}, {})",
                low, high
            )));
        }

        let noise = Normal::new(0.0, noise_std).map_err(|_| {
            DatasetError::InvalidParameter(format!(
                "noise_std must be finite and non-negative, got {}",
                noise_std
            ))
        })?;

        let mut rng = StdRng::seed_from_u64(seed);
        let x = Vector::random_using(n_samples, Uniform::new_inclusive(low, high), &mut rng);

        let mut y = x.mapv(|xi| intercept + slope * xi);
        if noise_std > 0.0 {
            let eps = Vector::random_using(n_samples, noise, &mut rng);
            y += &eps;
        }

        Ok(Self { x, y })
    }

    pub fn n_samples(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn x(&self) -> &Vector {
        &self.x
    }

    pub fn y(&self) -> &Vector {
        &self.y
    }

    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.x
            .iter()
            .zip(self.y.iter())
            .map(|(&x, &y)| Sample { x, y })
    }

    /// Residuals `h(x_i) - y_i` for the line `theta0 + theta1 * x`.
    pub(crate) fn residuals(&self, theta0: f64, theta1: f64) -> Vector {
        let mut diff = Vector::zeros(self.n_samples());
        Zip::from(&mut diff)
            .and(&self.x)
            .and(&self.y)
            .for_each(|d, &x, &y| *d = theta0 + theta1 * x - y);
        diff
    }
}
