//! Demonstration binary: generate a bounded random sequence and report
//! its descriptive statistics. Takes no arguments and always exits 0.

use seqstat::random::entropy_rng;
use seqstat::report::render;
use seqstat::sequence::{generate, Bounds, DEFAULT_LEN, MAX_VALUE, MIN_VALUE};
use seqstat::stats::Summary;

fn main() {
    let bounds = Bounds::new(MIN_VALUE, MAX_VALUE).expect("reference bounds satisfy min <= max");
    let mut rng = entropy_rng();

    let values = generate(DEFAULT_LEN, &bounds, &mut rng);
    let summary = Summary::from_slice(&values).expect("reference length is non-zero");

    print!("{}", render(&values, &summary));
}
