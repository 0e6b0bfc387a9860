//! Uniform tensor-product collocation grids.
//!
//! Point sets are stored as matrices with one row per point and one column
//! per coordinate. For time-dependent problems the time coordinate is the
//! first column.

use crate::error::{Result, SpectralError};
use faer::Mat;

/// Ordering of the Cartesian product produced by [`meshgrid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Indexing {
    /// Cartesian ordering: the first axis varies fastest in 2D. With more
    /// axes, the first two are swapped relative to `Ij`.
    #[default]
    Xy,
    /// Matrix ordering: the last axis varies fastest.
    Ij,
}

/// `n` evenly spaced values from `a` to `b` inclusive.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| a + step * i as f64).collect();
            values[n - 1] = b;
            values
        }
    }
}

/// Stack the Cartesian product of `axes` into a (Π n_i) × d matrix.
pub fn meshgrid(axes: &[&[f64]], indexing: Indexing) -> Result<Mat<f64>> {
    let d = axes.len();
    if d == 0 {
        return Err(SpectralError::dimension_mismatch("at least one axis", "0 axes"));
    }

    // Axes from slowest to fastest
    let mut order: Vec<usize> = (0..d).collect();
    if indexing == Indexing::Xy && d >= 2 {
        order.swap(0, 1);
    }

    let total: usize = axes.iter().map(|a| a.len()).product();
    let mut points = Mat::zeros(total, d);
    for p in 0..total {
        let mut rem = p;
        for &axis in order.iter().rev() {
            let len = axes[axis].len();
            points[(p, axis)] = axes[axis][rem % len];
            rem /= len;
        }
    }
    Ok(points)
}

/// Collocation point sets for a PDE on a box.
#[derive(Clone, Debug)]
pub struct CollocationPoints {
    /// Points strictly inside the domain (after t_0 for temporal problems)
    pub interior: Mat<f64>,
    /// Points on the initial slice t = t_0, for temporal problems
    pub initial: Option<Mat<f64>>,
    /// Points on the spatial boundary faces
    pub boundary: Mat<f64>,
}

fn stack_rows(blocks: &[Mat<f64>], ncols: usize) -> Mat<f64> {
    let total: usize = blocks.iter().map(|b| b.nrows()).sum();
    let mut out = Mat::zeros(total, ncols);
    let mut row = 0;
    for block in blocks {
        for i in 0..block.nrows() {
            for j in 0..ncols {
                out[(row, j)] = block[(i, j)];
            }
            row += 1;
        }
    }
    out
}

/// Build uniform collocation points on the box `domain`.
///
/// `domain[i] = (lo, hi)` and `grids[i]` is the number of uniform points
/// along dimension i (at least 2). When `temporal` is set, dimension 0 is
/// time: the interior keeps every time level after t_0, `initial` holds the
/// t_0 slice and boundary faces are built for the spatial dimensions only.
///
/// Boundary face i takes interior points along dimensions before i, the two
/// endpoints along i, and all points along later dimensions. With
/// `corner == false` the later dimensions are interior-only as well, so
/// edge and corner points are left out.
pub fn collocation_points(
    domain: &[(f64, f64)],
    grids: &[usize],
    temporal: bool,
    corner: bool,
) -> Result<CollocationPoints> {
    if domain.len() != grids.len() {
        return Err(SpectralError::dimension_mismatch(
            format!("{} grid sizes", domain.len()),
            format!("{} grid sizes", grids.len()),
        ));
    }
    let dim = grids.len();
    if dim == 0 || (temporal && dim < 2) {
        return Err(SpectralError::dimension_mismatch(
            if temporal {
                "at least 2 dimensions"
            } else {
                "at least 1 dimension"
            },
            format!("{} dimensions", dim),
        ));
    }
    for &n in grids {
        SpectralError::size_at_least("grid points", n, 2)?;
    }

    let full: Vec<Vec<f64>> = domain
        .iter()
        .zip(grids)
        .map(|(&(lo, hi), &n)| linspace(lo, hi, n))
        .collect();
    let inner = |i: usize| &full[i][1..full[i].len() - 1];
    let ends = |i: usize| vec![full[i][0], full[i][full[i].len() - 1]];

    let first_space = usize::from(temporal);

    let mut interior_axes: Vec<&[f64]> = Vec::with_capacity(dim);
    if temporal {
        interior_axes.push(&full[0][1..]);
    }
    interior_axes.extend((first_space..dim).map(inner));
    let interior = meshgrid(&interior_axes, Indexing::Xy)?;

    let initial = if temporal {
        let t0 = [full[0][0]];
        let mut axes: Vec<&[f64]> = vec![t0.as_slice()];
        axes.extend(full[1..].iter().map(|g| g.as_slice()));
        Some(meshgrid(&axes, Indexing::Xy)?)
    } else {
        None
    };

    let endpoints: Vec<Vec<f64>> = (0..dim).map(ends).collect();
    let mut faces = Vec::with_capacity(dim - first_space);
    for i in first_space..dim {
        let mut axes: Vec<&[f64]> = Vec::with_capacity(dim);
        if temporal {
            axes.push(full[0].as_slice());
        }
        for j in first_space..dim {
            let axis: &[f64] = if j < i {
                inner(j)
            } else if j == i {
                endpoints[i].as_slice()
            } else if corner {
                full[j].as_slice()
            } else {
                inner(j)
            };
            axes.push(axis);
        }
        faces.push(meshgrid(&axes, Indexing::Xy)?);
    }
    let boundary = stack_rows(&faces, dim);

    Ok(CollocationPoints {
        interior,
        initial,
        boundary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(m: &Mat<f64>) -> Vec<Vec<f64>> {
        (0..m.nrows())
            .map(|i| (0..m.ncols()).map(|j| m[(i, j)]).collect())
            .collect()
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(1.0, 2.0, 3), vec![1.0, 1.5, 2.0]);
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
        let v = linspace(0.0, 0.3, 4);
        assert_eq!(v[3], 0.3);
    }

    #[test]
    fn test_meshgrid_xy() {
        let x = [1.0, 1.5, 2.0];
        let y = [4.0, 4.5, 5.0];
        let m = meshgrid(&[&x[..], &y[..]], Indexing::Xy).unwrap();
        assert_eq!(
            rows(&m)[..4],
            [
                vec![1.0, 4.0],
                vec![1.5, 4.0],
                vec![2.0, 4.0],
                vec![1.0, 4.5]
            ]
        );
        assert_eq!(m.nrows(), 9);
    }

    #[test]
    fn test_meshgrid_ij() {
        let x = [1.0, 1.5, 2.0];
        let y = [4.0, 4.5, 5.0];
        let m = meshgrid(&[&x[..], &y[..]], Indexing::Ij).unwrap();
        assert_eq!(
            rows(&m)[..4],
            [
                vec![1.0, 4.0],
                vec![1.0, 4.5],
                vec![1.0, 5.0],
                vec![1.5, 4.0]
            ]
        );
    }

    #[test]
    fn test_meshgrid_rejects_no_axes() {
        assert!(meshgrid(&[], Indexing::Xy).is_err());
    }

    #[test]
    fn test_collocation_interior_ordering() {
        let domain = [(0.0, 2.0), (0.0, 3.0), (1.0, 4.0)];
        let points = collocation_points(&domain, &[3, 4, 5], false, true).unwrap();
        assert_eq!(
            rows(&points.interior),
            vec![
                vec![1.0, 1.0, 1.75],
                vec![1.0, 1.0, 2.5],
                vec![1.0, 1.0, 3.25],
                vec![1.0, 2.0, 1.75],
                vec![1.0, 2.0, 2.5],
                vec![1.0, 2.0, 3.25],
            ]
        );
        assert!(points.initial.is_none());
    }

    #[test]
    fn test_collocation_boundary_counts() {
        // 2D box with 4 × 5 points: perimeter has 2*4 + 2*5 - 4 = 14 points
        let domain = [(0.0, 1.0), (0.0, 1.0)];
        let points = collocation_points(&domain, &[4, 5], false, true).unwrap();
        assert_eq!(points.interior.nrows(), 2 * 3);
        assert_eq!(points.boundary.nrows(), 14);

        // Without corners: 2*(5-2) + 2*(4-2) = 10
        let points = collocation_points(&domain, &[4, 5], false, false).unwrap();
        assert_eq!(points.boundary.nrows(), 10);

        for p in rows(&points.boundary) {
            let on_edge = p.iter().any(|&c| c == 0.0 || c == 1.0);
            assert!(on_edge, "{:?} is not on the boundary", p);
        }
    }

    #[test]
    fn test_collocation_temporal() {
        // t in [0, 2] with 3 levels, x in [0, 1] with 5 points
        let domain = [(0.0, 2.0), (0.0, 1.0)];
        let points = collocation_points(&domain, &[3, 5], true, true).unwrap();

        // Interior: t ∈ {1, 2}, x ∈ interior (3 points)
        assert_eq!(points.interior.nrows(), 6);
        let initial = points.initial.as_ref().unwrap();
        assert_eq!(initial.nrows(), 5);
        for i in 0..initial.nrows() {
            assert_eq!(initial[(i, 0)], 0.0);
        }
        // Boundary: all 3 time levels × 2 endpoints
        assert_eq!(points.boundary.nrows(), 6);
        for p in rows(&points.boundary) {
            assert!(p[1] == 0.0 || p[1] == 1.0);
        }
    }

    #[test]
    fn test_collocation_validation() {
        assert!(collocation_points(&[(0.0, 1.0)], &[3, 3], false, true).is_err());
        assert!(collocation_points(&[(0.0, 1.0)], &[1], false, true).is_err());
        assert!(collocation_points(&[(0.0, 1.0)], &[3], true, true).is_err());
    }
}
