use crate::cli::EvalArgs;
use crate::error::Result;
use nonbond::core::interactions::PairwiseInteraction;
use nonbond::core::models::Boundary;
use nonbond::core::units::Energy;
use nalgebra::Point3;

pub fn run(args: &EvalArgs) -> Result<()> {
    let (interaction, pairs) = super::load_inputs(args)?;
    let boundary = Boundary::Open;

    let mut total = Energy::zero(interaction.energy_unit());
    for (index, pair) in pairs.iter().enumerate() {
        let dr = pair.displacement();
        let energy = interaction.potential_energy(
            dr,
            &Point3::origin(),
            &Point3::from(dr),
            &pair.props_i(),
            &pair.props_j(),
            &boundary,
            pair.special,
        );
        total += energy;
        println!("pair {index}: {:.6} {}", energy.value, energy.unit);
    }
    println!("total: {:.6} {}", total.value, total.unit);
    Ok(())
}
