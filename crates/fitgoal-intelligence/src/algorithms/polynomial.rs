// ABOUTME: Closed-form ordinary least squares polynomial regression
// ABOUTME: Solves the normal equations with partial pivoting and reports r-squared
#![allow(clippy::cast_precision_loss)] // Safe: sample indices and degrees are small

use fitgoal_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Relative pivot size under which the normal equations are treated as singular
const SINGULAR_EPSILON: f64 = 1e-12;

/// Polynomial `c0 + c1·x + c2·x² + ...` fitted by least squares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolynomialFit {
    /// Coefficients, constant term first
    coefficients: Vec<f64>,
    /// Coefficient of determination over the training points
    r_squared: f64,
}

impl PolynomialFit {
    /// Fit a polynomial of at most `degree` to the points
    ///
    /// With `n` points a degree above `n - 1` cannot be determined, and some
    /// point layouts make lower degrees singular too; the fit falls back to the
    /// highest degree whose normal equations are solvable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `x` and `y` differ in length, and
    /// `InsufficientData` with fewer than two points
    pub fn fit(x: &[f64], y: &[f64], degree: usize) -> AppResult<Self> {
        if x.len() != y.len() {
            return Err(AppError::invalid_input(format!(
                "Regression inputs differ in length: {} x values, {} y values",
                x.len(),
                y.len()
            )));
        }
        if x.len() < 2 {
            return Err(AppError::insufficient_data(2, x.len()));
        }

        let max_degree = degree.min(x.len() - 1);
        let coefficients = (0..=max_degree)
            .rev()
            .find_map(|d| solve_normal_equations(x, y, d))
            .ok_or_else(|| AppError::internal("Normal equations are singular at every degree"))?;

        let mut fit = Self {
            coefficients,
            r_squared: 0.0,
        };
        fit.r_squared = fit.coefficient_of_determination(x, y);
        Ok(fit)
    }

    /// Evaluate the polynomial at `x` (Horner's method)
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &coefficient| acc.mul_add(x, coefficient))
    }

    /// Degree actually fitted
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Coefficients, constant term first
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Coefficient of determination over the training set
    #[must_use]
    pub const fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Human-readable equation, highest power first, e.g. `y = 0.0100x² - 1.2000x + 80.0000`
    #[must_use]
    pub fn equation(&self) -> String {
        let mut equation = String::from("y =");
        for (power, &coefficient) in self.coefficients.iter().enumerate().rev() {
            let is_leading = power == self.degree();
            let sign = if coefficient < 0.0 { "-" } else { "+" };
            let magnitude = coefficient.abs();
            let term = match power {
                0 => format!("{magnitude:.4}"),
                1 => format!("{magnitude:.4}x"),
                2 => format!("{magnitude:.4}x²"),
                3 => format!("{magnitude:.4}x³"),
                _ => format!("{magnitude:.4}x^{power}"),
            };
            if is_leading {
                let lead_sign = if coefficient < 0.0 { "-" } else { "" };
                equation.push_str(&format!(" {lead_sign}{term}"));
            } else {
                equation.push_str(&format!(" {sign} {term}"));
            }
        }
        equation
    }

    fn coefficient_of_determination(&self, x: &[f64], y: &[f64]) -> f64 {
        let mean_y = y.iter().sum::<f64>() / y.len() as f64;
        let ss_tot: f64 = y.iter().map(|v| (v - mean_y).powi(2)).sum();
        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| (yi - self.evaluate(xi)).powi(2))
            .sum();

        // Constant targets: a fit that reproduces them explains everything
        if ss_tot <= f64::EPSILON {
            return if ss_res <= f64::EPSILON { 1.0 } else { 0.0 };
        }
        1.0 - ss_res / ss_tot
    }
}

/// Solve `(XᵀX)c = Xᵀy` for a polynomial of the given degree
fn solve_normal_equations(x: &[f64], y: &[f64], degree: usize) -> Option<Vec<f64>> {
    let size = degree + 1;

    // Power sums Σxᵏ for k in 0..=2·degree
    let mut power_sums = vec![0.0; 2 * degree + 1];
    let mut moment = vec![0.0; size];
    for (&xi, &yi) in x.iter().zip(y) {
        let mut power = 1.0;
        for k in 0..power_sums.len() {
            power_sums[k] += power;
            if k < size {
                moment[k] += power * yi;
            }
            power *= xi;
        }
    }

    // Augmented matrix [A | b]
    let mut matrix: Vec<Vec<f64>> = (0..size)
        .map(|row| {
            let mut values: Vec<f64> = (0..size).map(|col| power_sums[row + col]).collect();
            values.push(moment[row]);
            values
        })
        .collect();

    let scale = power_sums.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));

    for col in 0..size {
        let pivot_row = (col..size).max_by(|&a, &b| {
            matrix[a][col]
                .abs()
                .partial_cmp(&matrix[b][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if matrix[pivot_row][col].abs() <= SINGULAR_EPSILON * scale.max(1.0) {
            return None;
        }
        matrix.swap(col, pivot_row);

        for row in (col + 1)..size {
            let factor = matrix[row][col] / matrix[col][col];
            for k in col..=size {
                matrix[row][k] -= factor * matrix[col][k];
            }
        }
    }

    let mut solution = vec![0.0; size];
    for row in (0..size).rev() {
        let tail: f64 = ((row + 1)..size)
            .map(|k| matrix[row][k] * solution[k])
            .sum();
        solution[row] = (matrix[row][size] - tail) / matrix[row][row];
    }

    solution.iter().all(|c| c.is_finite()).then_some(solution)
}
