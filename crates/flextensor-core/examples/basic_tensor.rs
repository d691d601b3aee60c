//! Basic buffer creation and manipulation.
//!
//! Demonstrates the positional operations the labeled layer builds on:
//! - Creating buffers
//! - Slicing, permuting and inserting axes
//! - Broadcasting arithmetic and rendering
//!
//! Run with:
//! ```bash
//! cargo run --example basic_tensor
//! ```

use flextensor_core::{AxisSlice, BufferConfig, DenseND};

fn main() -> anyhow::Result<()> {
    println!("=== flextensor-core: Basic Buffer Examples ===\n");

    example_creation()?;
    example_shape_ops()?;
    example_arithmetic()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_creation() -> anyhow::Result<()> {
    println!("--- Example 1: Creation ---");

    let zeros = DenseND::<f64>::zeros(&[2, 3]);
    println!("zeros {:?}:\n{}", zeros.shape(), zeros);

    let counted = DenseND::<f64>::arange(6).reshape(&[2, 3])?;
    println!("arange reshaped to {:?}:\n{}", counted.shape(), counted);

    let explicit = DenseND::from_vec(vec![1.5, 2.5, 3.5, 4.5], &[2, 2])?;
    println!("from_vec: element [1, 0] = {}\n", explicit[&[1, 0]]);
    Ok(())
}

fn example_shape_ops() -> anyhow::Result<()> {
    println!("--- Example 2: Shape Operations ---");

    let tensor = DenseND::<f64>::arange(24).reshape(&[2, 3, 4])?;

    let last_row = tensor.slice_axis(1, &AxisSlice::Index(-1))?;
    println!("slice axis 1 at -1 -> {:?}", last_row.shape());

    let reversed = tensor.slice_axis(2, &AxisSlice::range(None, None, -1))?;
    println!("reverse axis 2: first element = {}", reversed[&[0, 0, 0]]);

    let permuted = tensor.permute(&[2, 0, 1])?;
    println!("permute [2, 0, 1] -> {:?}", permuted.shape());

    let expanded = tensor.insert_axis(3)?;
    println!("insert axis at end -> {:?}\n", expanded.shape());
    Ok(())
}

fn example_arithmetic() -> anyhow::Result<()> {
    println!("--- Example 3: Arithmetic ---");

    let y = DenseND::<f64>::arange(4).insert_axis(1)?;
    let x = DenseND::<f64>::arange(4).insert_axis(0)?;
    let table = y.mul(&x)?;
    println!("outer product by broadcasting:\n{}", table);

    let halves = table.div(&DenseND::from_elem(&[1], 3.0))?;
    let config = BufferConfig::default().with_precision(2);
    println!("divided by three:\n{}", halves.render(&config));

    match y.add_with(&x, &BufferConfig::strict()) {
        Ok(_) => println!("strict add unexpectedly succeeded"),
        Err(e) => println!("strict add rejected: {}", e),
    }
    Ok(())
}
