//! Stock polynomial systems.
//!
//! Small canonical models used across tests, examples, and benches.
//! Coefficients are generic, so the same constructors serve `f64` and
//! complex experiments alike.

use crate::error::ModelResult;
use crate::model::PolynomialOde;
use carleman_math::Coefficient;
use smallvec::smallvec;

/// Van der Pol oscillator `x1' = x2`, `x2' = μ(1 − x1²)x2 − x1`.
///
/// Cubic in two states: the nonlinear damping expands to
/// `μx2 − μx1²x2`.
pub fn vanderpol<T: Coefficient>(mu: T) -> ModelResult<PolynomialOde<T>> {
    let mut model = PolynomialOde::new(2, 3)?;
    model.add_term(0, smallvec![0, 1], T::one())?;
    model.add_term(1, smallvec![1, 0], -T::one())?;
    model.add_term(1, smallvec![0, 1], mu)?;
    model.add_term(1, smallvec![2, 1], -mu)?;
    Ok(model)
}

/// Lotka–Volterra predator–prey dynamics
/// `x1' = αx1 − βx1x2`, `x2' = −γx2 + δx1x2`.
pub fn lotka_volterra<T: Coefficient>(
    alpha: T,
    beta: T,
    gamma: T,
    delta: T,
) -> ModelResult<PolynomialOde<T>> {
    let mut model = PolynomialOde::new(2, 2)?;
    model.add_term(0, smallvec![1, 0], alpha)?;
    model.add_term(0, smallvec![1, 1], -beta)?;
    model.add_term(1, smallvec![0, 1], -gamma)?;
    model.add_term(1, smallvec![1, 1], delta)?;
    Ok(model)
}

/// Scalar logistic-style model `x' = ax + bx²`.
pub fn scalar_quadratic<T: Coefficient>(a: T, b: T) -> ModelResult<PolynomialOde<T>> {
    let mut model = PolynomialOde::new(1, 2)?;
    model.add_term(0, smallvec![1], a)?;
    model.add_term(0, smallvec![2], b)?;
    Ok(model)
}

/// Scalar monomial forcing `x' = ax + bx^m` for `m ≥ 2`; for `m = 1`
/// the terms merge into a single linear coefficient `a + b`.
pub fn scalar_monomial<T: Coefficient>(a: T, b: T, m: u32) -> ModelResult<PolynomialOde<T>> {
    if m == 1 {
        let mut model = PolynomialOde::new(1, 1)?;
        model.add_term(0, smallvec![1], a + b)?;
        return Ok(model);
    }
    let mut model = PolynomialOde::new(1, m.max(1))?;
    model.add_term(0, smallvec![1], a)?;
    model.add_term(0, smallvec![m], b)?;
    Ok(model)
}
