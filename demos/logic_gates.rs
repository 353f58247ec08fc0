//! Console port of the live OR/AND demo: a [2, 3, 2] network trained one
//! boolean pair per step, cycling through all four input combinations.

use lattice_nn::{Network, Trainer};

fn main() -> lattice_nn::Result<()> {
    let mut network = Network::new(2);
    network.append_layers(3, 1);
    network.append_layers(2, 1);
    network.randomize(1.0, 0.5, 42);

    let trainer = Trainer::default();

    let mut step = 0u32;
    for round in 0..500 {
        let mut round_loss = 0.0;

        for _ in 0..4 {
            let a = step % 2 == 0;
            let b = (step / 2) % 2 == 0;
            step += 1;

            let c = a || b;
            let d = a && b;

            let input = [bit(a), bit(b)];
            let expected = [bit(c), bit(d)];
            round_loss += trainer.train_sample(&mut network, &input, &expected)?;
        }

        if round % 50 == 0 {
            println!("round {round:4}: mean loss = {:.6}", round_loss / 4.0);
        }
    }

    println!("\n a b -> OR   AND");
    for (a, b) in [(false, false), (false, true), (true, false), (true, true)] {
        network.set_inputs(&[bit(a), bit(b)])?;
        network.evaluate()?;
        let out = network.output_values();
        println!(
            " {} {} -> {:.3} {:.3}   (want {} {})",
            bit(a),
            bit(b),
            out[0],
            out[1],
            bit(a || b),
            bit(a && b)
        );
    }

    Ok(())
}

fn bit(flag: bool) -> f32 {
    if flag {
        1.0
    } else {
        0.0
    }
}
