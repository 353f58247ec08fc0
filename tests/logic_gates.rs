//! End-to-end check of the original demo scenario: a [2, 3, 2] network
//! learning OR and AND from two boolean inputs via repeated online steps.

use lattice_nn::{Network, SquaredError, Trainer};

fn bit(flag: bool) -> f32 {
    if flag {
        1.0
    } else {
        0.0
    }
}

const COMBOS: [(bool, bool); 4] = [(false, false), (false, true), (true, false), (true, true)];

fn demo_network(seed: u64) -> Network {
    let mut network = Network::new(2);
    network.append_layers(3, 1);
    network.append_layers(2, 1);
    network.randomize(1.0, 0.5, seed);
    network
}

/// Mean squared error of the OR/AND predictions over all four boolean
/// input combinations, without training.
fn mean_error(network: &mut Network) -> f32 {
    let mut total = 0.0;
    for (a, b) in COMBOS {
        network.set_inputs(&[bit(a), bit(b)]).unwrap();
        network.evaluate().unwrap();
        let expected = [bit(a || b), bit(a && b)];
        total += SquaredError::loss(&network.output_values(), &expected);
    }
    total / COMBOS.len() as f32
}

#[test]
fn topology_matches_demo_setup() {
    let network = demo_network(0);
    let widths: Vec<usize> = network.layers().iter().map(|l| l.len()).collect();
    assert_eq!(widths, vec![2, 3, 2]);
    for node in network.layers()[1].nodes() {
        assert_eq!(node.weights().len(), 2);
    }
    for node in network.layers()[2].nodes() {
        assert_eq!(node.weights().len(), 3);
    }
}

#[test]
fn repeated_training_drives_error_down() {
    // A convergence trend over seeds, not an exact numeric target.
    let mut improved = 0;
    for seed in [7, 42, 1234] {
        let mut network = demo_network(seed);
        let trainer = Trainer::default();

        let before = mean_error(&mut network);

        let samples: Vec<(Vec<f32>, Vec<f32>)> = COMBOS
            .iter()
            .map(|&(a, b)| {
                (
                    vec![bit(a), bit(b)],
                    vec![bit(a || b), bit(a && b)],
                )
            })
            .collect();

        for _ in 0..500 {
            trainer.train_set(&mut network, &samples).unwrap();
        }

        let after = mean_error(&mut network);
        if after < before {
            improved += 1;
        }
    }
    assert!(improved >= 2, "error improved for only {improved}/3 seeds");
}

#[test]
fn input_layer_survives_hundreds_of_training_steps() {
    let mut network = demo_network(5);
    let trainer = Trainer::default();

    for step in 0..200u32 {
        let a = step % 2 == 0;
        let b = (step / 2) % 2 == 0;
        trainer
            .train_sample(
                &mut network,
                &[bit(a), bit(b)],
                &[bit(a || b), bit(a && b)],
            )
            .unwrap();
    }

    for node in network.input_layer().nodes() {
        assert!(node.weights().is_empty());
        assert_eq!(node.bias(), 0.0);
        // effective value still bypasses activation
        assert_eq!(node.effective_value(true), node.raw_value());
    }
}
