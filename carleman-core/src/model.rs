//! Polynomial vector fields in canonical Kronecker form.

use crate::error::{ModelError, ModelResult};
use carleman_math::{Coefficient, MultiIndex};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A polynomial ODE right-hand side `f(x) = Σ_j F_j x^[j]`.
///
/// Terms are stored per component as exponent-key → coefficient maps;
/// the transfer matrices are assembled from this storage on demand.
/// `max_degree` is the declared degree `k` of the canonical form: it
/// caps what [`add_term`](Self::add_term) accepts and fixes how many
/// transfer matrices assembly produces, whether or not the highest
/// degrees are populated.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialOde<T> {
    dim: usize,
    max_degree: u32,
    components: Vec<FxHashMap<MultiIndex, T>>,
}

impl<T: Coefficient> PolynomialOde<T> {
    /// Empty model (`f ≡ 0`) with `dim` states and room for terms up
    /// to `max_degree`.
    pub fn new(dim: usize, max_degree: u32) -> ModelResult<Self> {
        if dim == 0 {
            return Err(ModelError::ZeroDimension);
        }
        if max_degree == 0 {
            return Err(ModelError::ZeroDegree);
        }
        Ok(Self {
            dim,
            max_degree,
            components: vec![FxHashMap::default(); dim],
        })
    }

    /// State dimension `n`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Declared maximum degree `k`.
    pub fn max_degree(&self) -> u32 {
        self.max_degree
    }

    /// Insert the term `coeff · x^key` into component `component`.
    ///
    /// A zero coefficient is dropped without touching the stored terms,
    /// so it never clobbers an earlier insert. A nonzero coefficient at
    /// an occupied key overwrites it.
    pub fn add_term(&mut self, component: usize, key: MultiIndex, coeff: T) -> ModelResult<()> {
        if component >= self.dim {
            return Err(ModelError::ComponentOutOfRange {
                component,
                dim: self.dim,
            });
        }
        if key.len() != self.dim {
            return Err(ModelError::KeyLength {
                found: key.len(),
                dim: self.dim,
            });
        }
        if coeff.is_zero() {
            return Ok(());
        }
        let degree: u32 = key.iter().sum();
        if degree == 0 {
            return Err(ModelError::ConstantTerm { component });
        }
        if degree > self.max_degree {
            return Err(ModelError::DegreeTooHigh {
                degree,
                max_degree: self.max_degree,
            });
        }
        self.components[component].insert(key, coeff);
        Ok(())
    }

    /// Coefficient of `x^key` in component `component`; zero when the
    /// term is absent.
    pub fn coefficient(&self, component: usize, key: &[u32]) -> T {
        let lookup: MultiIndex = SmallVec::from_slice(key);
        self.components
            .get(component)
            .and_then(|terms| terms.get(&lookup))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Number of stored terms across all components.
    pub fn term_count(&self) -> usize {
        self.components.iter().map(|terms| terms.len()).sum()
    }

    /// Iterate stored terms as `(component, key, coeff)`.
    pub fn terms(&self) -> impl Iterator<Item = (usize, &MultiIndex, T)> + '_ {
        self.components
            .iter()
            .enumerate()
            .flat_map(|(i, terms)| terms.iter().map(move |(key, &coeff)| (i, key, coeff)))
    }

    /// Evaluate `f(x)` straight from the stored terms.
    pub fn eval(&self, x: &[T]) -> ModelResult<Vec<T>> {
        if x.len() != self.dim {
            return Err(ModelError::StateLength {
                found: x.len(),
                dim: self.dim,
            });
        }
        let mut out = vec![T::zero(); self.dim];
        for (component, key, coeff) in self.terms() {
            out[component] += coeff * monomial_eval(x, key);
        }
        Ok(out)
    }
}

/// `Π_v x_v^{key[v]}` by repeated multiplication; exponents in these
/// models are tiny.
fn monomial_eval<T: Coefficient>(x: &[T], key: &[u32]) -> T {
    let mut value = T::one();
    for (v, &e) in key.iter().enumerate() {
        for _ in 0..e {
            value *= x[v];
        }
    }
    value
}
