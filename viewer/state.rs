use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use lattice_nn::{Network, NetworkSnapshot, Result, Trainer};

/// How many recent per-tick losses the state retains for the loss chart.
const LOSS_HISTORY: usize = 240;

/// Everything the viewer tracks between ticks: the live network, the
/// trainer driving it, and a rolling loss history.
///
/// A simulation thread mutates this behind a mutex; request handlers only
/// ever lock it long enough to copy a [`StatePayload`] out, so readers
/// always observe the state between completed ticks, never mid-update.
pub struct ViewerState {
    network: Network,
    trainer: Trainer,
    tick: u64,
    losses: VecDeque<f32>,
}

impl ViewerState {
    /// Builds the demo network from the original setup: 2 inputs, one
    /// hidden layer of 3, 2 outputs, seeded from the wall clock.
    pub fn new() -> ViewerState {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut network = Network::new(2);
        network.append_layers(3, 1);
        network.append_layers(2, 1);
        network.randomize(1.0, 0.5, seed);

        ViewerState {
            network,
            trainer: Trainer::default(),
            tick: 0,
            losses: VecDeque::with_capacity(LOSS_HISTORY),
        }
    }

    /// One simulation tick: present the next boolean pair, train on the
    /// OR/AND targets, then re-evaluate so the displayed values reflect
    /// the freshly updated parameters.
    pub fn tick(&mut self) -> Result<()> {
        let a = self.tick % 2 == 0;
        let b = (self.tick / 2) % 2 == 0;
        let c = a || b;
        let d = a && b;

        let input = [bit(a), bit(b)];
        let expected = [bit(c), bit(d)];

        let loss = self.trainer.train_sample(&mut self.network, &input, &expected)?;
        self.network.evaluate()?;

        if self.losses.len() == LOSS_HISTORY {
            self.losses.pop_front();
        }
        self.losses.push_back(loss);
        self.tick += 1;
        Ok(())
    }

    pub fn payload(&self) -> StatePayload {
        StatePayload {
            tick: self.tick,
            losses: self.losses.iter().copied().collect(),
            network: self.network.snapshot(),
        }
    }
}

/// JSON body served at `GET /state`.
#[derive(Serialize)]
pub struct StatePayload {
    pub tick: u64,
    pub losses: Vec<f32>,
    pub network: NetworkSnapshot,
}

fn bit(flag: bool) -> f32 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Shared state type passed to every handler.
pub type SharedState = Arc<Mutex<ViewerState>>;
