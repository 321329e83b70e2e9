use roomwise_core::advisor::Advisor;

use crate::commands::{rng_for, CommandResult};

const COMMAND: &str = "interpret";

pub fn run(prompt: &str, seed: Option<u64>) -> CommandResult {
    let mut rng = rng_for(seed);
    let interpretation = Advisor::default().interpret(prompt, &mut rng);
    CommandResult::report(COMMAND, &interpretation)
}
