//! Demonstration run: bootstrap the median of a fixed sample.
//!
//! Prints every replicate median followed by the standard error. Takes no
//! flags and reads no environment variables.

use std::process::ExitCode;

use bootstrap_median::bootstrap_sample;
use bootstrap_median::output::format_medians;

const DATA: [f64; 9] = [1.2, 2.4, 3.6, 4.8, 5.0, 6.1, 7.3, 8.4, 9.9];
const N_BOOT: usize = 1000;

fn main() -> ExitCode {
    match bootstrap_sample(&DATA, N_BOOT) {
        Ok(result) => {
            println!("Bootstrap Medians: {}", format_medians(&result.statistics));
            println!("Standard Error of Median: {:.4}", result.std_error);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
