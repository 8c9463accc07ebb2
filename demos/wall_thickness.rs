use bellowsx::{default_sweep, to_kilopascals, ActuatorConfig, DisplacementModel};
use uom::si::{f64::Length, length::millimeter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Sweep the default actuator for a range of wall thicknesses. Stiffness grows
    // with the cube of the wall, so small changes move the curve a lot.
    let sweep = default_sweep();
    let pressures = to_kilopascals(&sweep);

    for wall_mm in [1.2, 1.4, 1.6, 1.8, 2.0] {
        let mut config = ActuatorConfig::default();
        config.geometry.wall_thickness = Length::new::<millimeter>(wall_mm);
        let model = DisplacementModel::new(config)?;
        let strokes = model.displacements_mm(&sweep);

        let last = strokes.len() - 1;
        println!(
            "s = {wall_mm:.1} mm: K_ax = {:8.1} N/m, d({:.0} kPa) = {:6.3} mm",
            model.stiffness(),
            pressures[last],
            strokes[last]
        );
    }

    // All done
    Ok(())
}
