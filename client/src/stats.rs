use std::process::ExitCode;

use tracing::warn;

use crate::args::StatsConfig;
use crate::io::load;

pub fn run_stats(config: StatsConfig) -> ExitCode {
    let array = match load(&config.input) {
        Some(array) => array,
        None => return ExitCode::FAILURE,
    };

    println!("shape:   {} x {}", array.rows(), array.cols());

    if array.is_empty() {
        warn!("Array is empty.");
        return ExitCode::SUCCESS;
    }

    println!("minimum: {}", array.minimum());
    println!("maximum: {}", array.maximum());
    println!("sum:     {}", array.sum());
    println!("mean:    {}", array.mean());
    println!("norm1:   {}", array.norm1());
    println!("norm2:   {}", array.norm2());
    println!("norminf: {}", array.norminf());

    ExitCode::SUCCESS
}
