//! Tensor-product grids.
//!
//! This module provides:
//! - Uniform collocation point sets on boxes, optionally time-dependent
//! - Cartesian products of 1D axes (`meshgrid`)
//! - 2D tensor-product quadrature built from two 1D rules

mod collocation;
mod tensor;

pub use collocation::{CollocationPoints, Indexing, collocation_points, linspace, meshgrid};
pub use tensor::{TensorRule2D, tensor_product};
