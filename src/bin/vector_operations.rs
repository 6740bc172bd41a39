use mlmath::{add_vectors, are_orthogonal, dot_product, matrix_multiply, Result};
use ndarray::array;
use std::process::ExitCode;

fn run() -> Result<()> {
    let v1 = array![1.0, 2.0, 3.0];
    let v2 = array![4.0, 5.0, 6.0];

    println!("v1 = {v1}, v2 = {v2}");
    println!("Dot product: {}", dot_product(&v1.view(), &v2.view())?);
    println!("Sum: {}", add_vectors(&v1.view(), &v2.view())?);
    println!("Orthogonal: {}", are_orthogonal(&v1.view(), &v2.view())?);

    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[5.0, 6.0], [7.0, 8.0]];

    println!("\nMatrix Multiplication Result:");
    for row in matrix_multiply(&a, &b)?.rows() {
        println!("{row}");
    }
    Ok(())
}

fn main() -> ExitCode {
    mlmath::logging::init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
