//! # Quadratic Reduction Example
//!
//! This example reduces higher-degree systems to exact quadratic form.
//! It covers:
//! - Reducing a cubic system on the lifted state
//! - Verifying the reduction against the original right-hand side
//! - The degenerate cases (already-quadratic and linear models)
//!
//! ## See Also
//! - [`quadratic_reduction`](carleman_core::quadratic_reduction)
//! - [`lift_point`](carleman_core::lift_point)

use carleman_core::embedding::lift_point;
use carleman_core::library::{lotka_volterra, vanderpol};
use carleman_core::reduction::quadratic_reduction;
use carleman_core::transfer::transfer_matrices;
use carleman_core::ModelError;

fn main() -> Result<(), ModelError> {
    println!("=== Carleman Core: Quadratic Reduction ===\n");

    // ===== Cubic system =====
    let model = vanderpol(1.0_f64)?;
    let transfer = transfer_matrices(&model)?;
    let quad = quadratic_reduction(&transfer)?;
    println!("--- Van der Pol (degree 3) ---");
    println!(
        "  lifted state stacks x^[1] .. x^[{}], dimension {}",
        quad.lift_order(),
        quad.dim()
    );
    println!(
        "  Ã1 : {} stored entries, Ã2 : {} stored entries\n",
        quad.f1().nnz(),
        quad.f2().nnz()
    );

    // The reduced system reproduces f(x) in its first components.
    let x = [0.4, -0.9];
    let y = lift_point(&x, quad.lift_order())?;
    let dy = quad.rhs(&y)?;
    let rhs = model.eval(&x)?;
    println!("--- Check at x = {x:?} ---");
    println!("  f(x) from the model     : {rhs:?}");
    println!("  first block of reduction: {:?}\n", &dy[..model.dim()]);

    // ===== Already quadratic =====
    let lv = lotka_volterra(1.1_f64, 0.4, 0.4, 0.1)?;
    let lv_transfer = transfer_matrices(&lv)?;
    let lv_quad = quadratic_reduction(&lv_transfer)?;
    println!("--- Lotka–Volterra (degree 2) ---");
    println!(
        "  lift order {} : the reduction is the system itself",
        lv_quad.lift_order()
    );
    println!(
        "  Ã1 == F1 : {}, Ã2 == F2 : {}\n",
        lv_quad.f1() == lv_transfer.matrix(1).unwrap(),
        lv_quad.f2() == lv_transfer.matrix(2).unwrap()
    );

    println!("=== Example completed successfully ===");
    Ok(())
}
