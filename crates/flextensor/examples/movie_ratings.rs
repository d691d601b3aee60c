//! Movie recommendation scores with labeled axes.
//!
//! Customers rate three qualities, movies are scored on the same
//! qualities, and the pivot product gives a customer-by-movie table.
//! A multiplication table built with broadcasting follows.
//!
//! Run with:
//! ```bash
//! RUST_LOG=flextensor=debug cargo run --example movie_ratings
//! ```

use flextensor::{ix, BufferConfig, FlexTensor};

fn main() -> flextensor::Result<()> {
    env_logger::init();

    println!("=== flextensor: Movie Ratings ===\n");

    let ratings = FlexTensor::from_vec(
        vec![
            5.0, 1.0, 0.0, //
            4.0, 0.0, 2.0, //
            0.0, 5.0, 4.0, //
            1.0, 4.0, 5.0,
        ],
        &[4, 3],
        ["customers", "values"],
    )?;
    let movies = FlexTensor::from_vec(
        vec![
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.5, //
            0.0, 0.5, 1.0,
        ],
        &[3, 3],
        ["movies", "values"],
    )?;
    println!("ratings:\n{}\n", ratings);
    println!("movies:\n{}\n", movies);

    let scores = ratings
        .index(ix!["customers", "values"])?
        .pivot(&movies.index(ix!["values", "movies"])?)?;
    println!("scores:\n{}\n", scores);

    let best = scores.index(ix![("customers", 2)])?;
    println!("customer 2 across movies:\n{}\n", best);

    println!("=== Multiplication Table ===\n");

    let values: Vec<f64> = (1..=10).map(f64::from).collect();
    let y = FlexTensor::from_vec(values.clone(), &[10], ["y"])?;
    let x = FlexTensor::from_vec(values, &[10], ["x"])?;
    let table = (&y.index(ix!["y", ""])? * &x.index(ix!["", "x"])?)?;
    println!("{}\n", table);

    let halves = (&table / &FlexTensor::from_vec(vec![2.0], &[1], [""])?)?;
    let config = BufferConfig::default().with_precision(1);
    println!("halved:\n{}", halves.render(&config));

    Ok(())
}
