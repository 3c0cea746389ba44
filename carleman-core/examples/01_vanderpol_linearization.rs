//! # Van der Pol Linearization Example
//!
//! This example walks a Van der Pol oscillator through the Carleman
//! pipeline. It covers:
//! - Assembling the transfer matrices `F_1 .. F_k`
//! - Evaluating the right-hand side through the blocks
//! - Building a truncated Carleman matrix
//! - The convergence characteristics of the system
//!
//! ## See Also
//! - [`transfer_matrices`](carleman_core::transfer_matrices)
//! - [`truncated_matrix`](carleman_core::truncated_matrix)
//! - [`characteristics`](carleman_core::characteristics)

use carleman_core::embedding::{lift_point, lifted_dim, truncated_matrix};
use carleman_core::library::vanderpol;
use carleman_core::transfer::{eval_transfer, transfer_matrices};
use carleman_core::{characteristics, ModelError};

fn main() -> Result<(), ModelError> {
    println!("=== Carleman Core: Van der Pol Linearization ===\n");

    // ===== The model =====
    let mu = 1.0_f64;
    let model = vanderpol(mu)?;
    println!("--- Model: x1' = x2, x2' = μ(1 − x1²)x2 − x1, μ = {mu} ---");
    println!(
        "  dimension {}, canonical degree {}\n",
        model.dim(),
        model.max_degree()
    );

    // ===== Transfer matrices =====
    let transfer = transfer_matrices(&model)?;
    println!("--- Transfer matrices ---");
    for (idx, fj) in transfer.matrices().iter().enumerate() {
        let (rows, cols) = fj.shape();
        println!(
            "  F{} : {} x {} with {} stored entries",
            idx + 1,
            rows,
            cols,
            fj.nnz()
        );
        for (r, c, v) in fj.iter() {
            println!("    ({r}, {c}) = {v}");
        }
    }
    println!();

    // ===== Evaluation through the blocks =====
    let x = [0.5, -0.25];
    let direct = model.eval(&x)?;
    let via_blocks = eval_transfer(&transfer, &x)?;
    println!("--- Evaluation at x = {x:?} ---");
    println!("  model           : {direct:?}");
    println!("  through blocks  : {via_blocks:?}\n");

    // ===== Truncated Carleman matrix =====
    let order = 3;
    let carleman = truncated_matrix(&transfer, order)?;
    let dim = lifted_dim(model.dim(), order)?;
    println!("--- Truncated Carleman matrix, order {order} ---");
    println!(
        "  shape {} x {} with {} stored entries",
        dim,
        dim,
        carleman.nnz()
    );
    let lifted = lift_point(&x, order)?;
    let deriv = carleman.mul_vec(&lifted)?;
    println!("  first block of A·lift(x) : {:?}", &deriv[..model.dim()]);
    println!("  (matches f(x) above exactly)\n");

    // ===== Characteristics =====
    let report = characteristics(&transfer)?;
    println!("--- Convergence characteristics ---");
    for (idx, norm) in report.transfer_norms.iter().enumerate() {
        println!("  ‖F{}‖∞ = {}", idx + 1, norm);
    }
    println!("  μ∞(F1) = {}", report.log_norm_first);
    match report.quadratic_ratio {
        Some(ratio) => println!("  β₀ = {ratio}"),
        None => println!("  β₀ undefined (linear part carries no weight)"),
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
