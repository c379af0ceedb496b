//! Uniform random integers (`random`).

use std::io::Write;

use rand::Rng;

use crate::error::{ToolError, ToolResult};

/// Draw `count` integers uniformly from `lower..=upper`.
///
/// A `count` of zero draws one number.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    lower: i64,
    upper: i64,
    count: usize,
) -> ToolResult<Vec<i64>> {
    if lower > upper {
        return Err(ToolError::invalid_args(format!(
            "The lower bound {lower} is greater than the upper bound {upper}"
        )));
    }
    Ok((0..count.max(1)).map(|_| rng.gen_range(lower..=upper)).collect())
}

/// Print the numbers one per line, using the thread-local generator.
pub fn run(lower: i64, upper: i64, count: usize, out: &mut dyn Write) -> ToolResult<()> {
    let mut rng = rand::thread_rng();
    for n in generate(&mut rng, lower, upper, count)? {
        writeln!(out, "{n}")?;
    }
    Ok(())
}
