use crate::cli::EvalArgs;
use crate::error::Result;
use nonbond::core::interactions::PairwiseInteraction;
use nonbond::core::models::Boundary;
use nalgebra::Point3;

pub fn run(args: &EvalArgs) -> Result<()> {
    let (interaction, pairs) = super::load_inputs(args)?;
    let boundary = Boundary::Open;

    for (index, pair) in pairs.iter().enumerate() {
        let dr = pair.displacement();
        let force = interaction.force(
            dr,
            &Point3::origin(),
            &Point3::from(dr),
            &pair.props_i(),
            &pair.props_j(),
            &boundary,
            pair.special,
        );
        println!(
            "pair {index}: [{:.6}, {:.6}, {:.6}] {} (|F| = {:.6})",
            force.vector.x,
            force.vector.y,
            force.vector.z,
            force.unit,
            force.norm()
        );
    }
    Ok(())
}
