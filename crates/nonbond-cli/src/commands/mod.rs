pub mod energy;
pub mod forces;

use crate::cli::EvalArgs;
use crate::error::Result;
use nonbond::core::interactions::Interaction;
use nonbond::core::io::{self, PairRecord};
use nonbond::core::params::InteractionParams;
use tracing::info;

pub fn load_inputs(args: &EvalArgs) -> Result<(Interaction, Vec<PairRecord>)> {
    let interaction = InteractionParams::load(&args.params)?.into_interaction();
    let pairs = io::load_pairs(&args.pairs)?;
    info!(
        "Loaded {} pair(s) from '{}'.",
        pairs.len(),
        args.pairs.display()
    );
    Ok((interaction, pairs))
}
