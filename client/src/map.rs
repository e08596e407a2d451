use std::process::ExitCode;

use tracing::info;

use refmat::{cos, exp, log, sin, sqrt, square, tan, Array2D};

use crate::args::{Function, MapConfig};
use crate::io::{load, save};

pub fn run_map(config: MapConfig) -> ExitCode {
    let input = match load(&config.input) {
        Some(array) => array,
        None => return ExitCode::FAILURE,
    };

    let output = apply(config.function, &input);
    info!(
        function = ?config.function,
        rows = output.rows(),
        cols = output.cols(),
        "Applied function."
    );

    if save(&config.output, &output) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn apply(function: Function, input: &Array2D<f64>) -> Array2D<f64> {
    match function {
        Function::Sin => sin(input),
        Function::Cos => cos(input),
        Function::Tan => tan(input),
        Function::Exp => exp(input),
        Function::Log => log(input),
        Function::Sqrt => sqrt(input),
        Function::Square => square(input),
        Function::Neg => -input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functions_leave_input_alone() {
        let input = Array2D::from_shape_vec(1, 2, vec![1.0, 4.0]).unwrap();

        assert_eq!(apply(Function::Sqrt, &input).to_vec(), [1.0, 2.0]);
        assert_eq!(apply(Function::Square, &input).to_vec(), [1.0, 16.0]);
        assert_eq!(apply(Function::Neg, &input).to_vec(), [-1.0, -4.0]);
        assert_eq!(apply(Function::Log, &input).get(0, 0), 0.0);
        assert_eq!(input.to_vec(), [1.0, 4.0]);
    }
}
