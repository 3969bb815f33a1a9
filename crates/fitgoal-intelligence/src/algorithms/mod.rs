// ABOUTME: Algorithm abstraction layer for BMR equations, regression and clustering
// ABOUTME: Provides enum-based formula selection and the numeric kernels the analytics share

//! Algorithm Selection Module
//!
//! - **BMR**: [`BmrFormula`] selects the resting energy equation via enum dispatch,
//!   so one configured choice flows to every caller.
//! - **Regression**: [`PolynomialFit`] is a closed-form ordinary least squares fit
//!   on `[1, x, x², ...]`.
//! - **Clustering**: [`kmeans`] runs k-means++ seeding followed by a bounded
//!   number of Lloyd iterations, drawing randomness from an injected [`rand::Rng`].

pub mod bmr;
pub mod kmeans;
pub mod polynomial;

pub use bmr::BmrFormula;
pub use kmeans::{kmeans, KMeansResult};
pub use polynomial::PolynomialFit;
