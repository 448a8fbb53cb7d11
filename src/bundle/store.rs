//! Arena-backed cutting-plane buffer with its Gram matrix
use crate::dense::dot;
use crate::qp::Gram;
use ndarray::Array2;

/// Owns the buffer of cutting planes `(a_i, b_i)` and the cached Gram
/// matrix `H[i,j] = (a_i · a_j) / λ` of their subgradients.
///
/// All storage is allocated once for `buf_size` planes; planes are
/// appended at the end and relocated only by [`CuttingPlaneStore::compact`].
pub struct CuttingPlaneStore {
    dim: usize,
    buf_size: usize,
    lambda: f64,
    ncp: usize,
    arena: Vec<f64>,
    b: Vec<f64>,
    h: Array2<f64>,
    scratch: Array2<f64>,
}

impl CuttingPlaneStore {
    /// Allocates an empty store for at most `buf_size` planes of dimension `dim`.
    pub fn new(dim: usize, buf_size: usize, lambda: f64) -> CuttingPlaneStore {
        assert!(dim > 0);
        assert!(buf_size > 0);
        assert!(lambda > 0.0);
        CuttingPlaneStore {
            dim,
            buf_size,
            lambda,
            ncp: 0,
            arena: vec![0.0; buf_size * dim],
            b: Vec::with_capacity(buf_size),
            h: Array2::zeros((buf_size, buf_size)),
            scratch: Array2::zeros((buf_size, buf_size)),
        }
    }

    /// Returns the number of live planes.
    pub fn len(&self) -> usize {
        self.ncp
    }

    /// Checks whether the store holds no planes.
    pub fn is_empty(&self) -> bool {
        self.ncp == 0
    }

    /// Checks whether the buffer capacity is reached.
    pub fn is_full(&self) -> bool {
        self.ncp >= self.buf_size
    }

    /// Returns the subgradient of the `j`-th live plane.
    pub fn plane(&self, j: usize) -> &[f64] {
        &self.arena[j * self.dim..(j + 1) * self.dim]
    }

    /// Returns the offsets of the live planes (the linear term of the subproblem).
    pub fn offsets(&self) -> &[f64] {
        &self.b
    }

    /// Appends the plane `(a, b)` and extends the Gram matrix by one
    /// row and column.
    pub fn append(&mut self, a: &[f64], b: f64) {
        assert!(self.ncp < self.buf_size, "cutting-plane buffer exceeded");
        assert_eq!(a.len(), self.dim);
        let j = self.ncp;
        self.arena[j * self.dim..(j + 1) * self.dim].copy_from_slice(a);
        self.b.push(b);
        for i in 0..j {
            let ai = &self.arena[i * self.dim..(i + 1) * self.dim];
            let hij = dot(ai, a) / self.lambda;
            self.h[[i, j]] = hij;
            self.h[[j, i]] = hij;
        }
        self.h[[j, j]] = dot(a, a) / self.lambda;
        self.ncp += 1;
    }

    /// Drops all planes not listed in `keep` (strictly increasing indices)
    /// and rebuilds the live Gram block by a full recopy through the
    /// scratch matrix, so survivor indices stay consistent everywhere.
    pub fn compact(&mut self, keep: &[usize]) {
        let m = keep.len();
        for (ni, &oi) in keep.iter().enumerate() {
            for (nj, &oj) in keep.iter().enumerate() {
                self.scratch[[ni, nj]] = self.h[[oi, oj]];
            }
        }
        for ni in 0..m {
            for nj in 0..m {
                self.h[[ni, nj]] = self.scratch[[ni, nj]];
            }
        }
        for (ni, &oi) in keep.iter().enumerate() {
            if ni != oi {
                self.arena
                    .copy_within(oi * self.dim..(oi + 1) * self.dim, ni * self.dim);
                self.b[ni] = self.b[oi];
            }
        }
        self.b.truncate(m);
        self.ncp = m;
    }
}

impl Gram for CuttingPlaneStore {
    fn size(&self) -> usize {
        self.ncp
    }

    fn diag(&self, i: usize) -> f64 {
        self.h[[i, i]]
    }

    fn column(&self, j: usize, out: &mut [f64]) {
        for (i, hij) in out.iter_mut().enumerate() {
            *hij = self.h[[i, j]];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gram_entry(store: &CuttingPlaneStore, i: usize, j: usize, lambda: f64) -> f64 {
        dot(store.plane(i), store.plane(j)) / lambda
    }

    #[test]
    fn append_keeps_gram_exact() {
        let lambda = 0.5;
        let mut store = CuttingPlaneStore::new(3, 4, lambda);
        store.append(&[1.0, 0.0, 2.0], -1.0);
        store.append(&[0.0, -1.0, 1.0], -2.0);
        store.append(&[3.0, 1.0, 0.0], 0.5);
        assert_eq!(store.len(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(store.h[[i, j]], gram_entry(&store, i, j, lambda));
                assert_eq!(store.h[[i, j]], store.h[[j, i]]);
            }
        }
        assert_eq!(store.offsets(), &[-1.0, -2.0, 0.5]);
    }

    #[test]
    fn compact_preserves_survivors_in_order() {
        let lambda = 2.0;
        let mut store = CuttingPlaneStore::new(2, 5, lambda);
        for k in 0..5 {
            let a = [k as f64, 1.0 - k as f64];
            store.append(&a, -(k as f64));
        }
        store.compact(&[0, 2, 4]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.plane(1), &[2.0, -1.0]);
        assert_eq!(store.offsets(), &[0.0, -2.0, -4.0]);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(store.h[[i, j]], gram_entry(&store, i, j, lambda));
            }
        }
    }

    #[test]
    fn append_after_compact_reuses_slots() {
        let mut store = CuttingPlaneStore::new(2, 3, 1.0);
        store.append(&[1.0, 0.0], 0.0);
        store.append(&[0.0, 1.0], 0.0);
        store.append(&[1.0, 1.0], 0.0);
        assert!(store.is_full());
        store.compact(&[2]);
        assert!(!store.is_full());
        store.append(&[2.0, 0.0], -1.0);
        assert_eq!(store.len(), 2);
        assert_eq!(store.h[[0, 1]], 2.0);
        assert_eq!(store.h[[1, 0]], 2.0);
        assert_eq!(store.h[[1, 1]], 4.0);
    }

    #[test]
    fn zero_subgradient_gives_zero_gram_row() {
        let mut store = CuttingPlaneStore::new(2, 2, 1.0);
        store.append(&[0.0, 0.0], 0.0);
        store.append(&[1.0, -1.0], -1.0);
        assert_eq!(store.h[[0, 0]], 0.0);
        assert_eq!(store.h[[0, 1]], 0.0);
        assert_eq!(store.h[[1, 1]], 2.0);
    }
}
