use std::process::ExitCode;

use tracing::{error, info};

use refmat::{equal_size, Array2D};

use crate::args::{CombineConfig, Operation};
use crate::io::{load, save};

pub fn run_combine(config: CombineConfig) -> ExitCode {
    let (lhs, rhs) = match (load(&config.lhs), load(&config.rhs)) {
        (Some(lhs), Some(rhs)) => (lhs, rhs),
        _ => return ExitCode::FAILURE,
    };

    if !equal_size(&lhs, &rhs) {
        error!(
            lhs = ?(lhs.rows(), lhs.cols()),
            rhs = ?(rhs.rows(), rhs.cols()),
            "Array shapes differ."
        );
        return ExitCode::FAILURE;
    }

    let output = combine(config.operation, &lhs, &rhs);
    info!(
        operation = ?config.operation,
        rows = output.rows(),
        cols = output.cols(),
        "Combined arrays."
    );

    if save(&config.output, &output) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn combine(operation: Operation, lhs: &Array2D<f64>, rhs: &Array2D<f64>) -> Array2D<f64> {
    match operation {
        Operation::Add => lhs + rhs,
        Operation::Sub => lhs - rhs,
        Operation::Mul => lhs * rhs,
        Operation::Div => lhs / rhs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations() {
        let a = Array2D::from_shape_vec(1, 2, vec![6.0, 8.0]).unwrap();
        let b = Array2D::from_shape_vec(1, 2, vec![2.0, 4.0]).unwrap();

        assert_eq!(combine(Operation::Add, &a, &b).to_vec(), [8.0, 12.0]);
        assert_eq!(combine(Operation::Sub, &a, &b).to_vec(), [4.0, 4.0]);
        assert_eq!(combine(Operation::Mul, &a, &b).to_vec(), [12.0, 32.0]);
        assert_eq!(combine(Operation::Div, &a, &b).to_vec(), [3.0, 2.0]);
        assert_eq!(a.to_vec(), [6.0, 8.0]);
    }
}
