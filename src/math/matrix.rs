use rand::Rng;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Fills a (rows, cols) matrix with independent draws from `[0, upper)`.
    ///
    /// Draws are taken row by row, so a seeded `rng` always yields the same
    /// matrix.
    pub fn random_uniform<R: Rng>(rows: usize, cols: usize, upper: f64, rng: &mut R) -> Matrix {
        let mut res = Matrix::zeros(rows, cols);

        for i in 0..rows {
            for j in 0..cols {
                res.data[i][j] = rng.gen::<f64>() * upper;
            }
        }

        res
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter().flat_map(|row| row.iter())
    }

    pub fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
}
