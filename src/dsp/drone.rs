//! Driven string model ("drone").

/*
Physical Model
==============

A string is approximated by a short chain of particles joined by springs:

    [0] ──spring── [1] ──spring── [2]
    input          free           fixed (never updated, stays at 0)

Particle 0 is pinned to the live input sample, so the input drags one end
of the string around. Interior particles feel a spring force pulling them
towards the midpoint of their neighbours, and a damping force opposing
their velocity:

    springForce  = ((pos[i-1] + pos[i+1]) / 2 - pos[i]) * tension
    dampingForce = -vel[i] * damping
    accel        = (springForce + dampingForce) / inertia
    newVel[i]    = vel[i] + accel * dt              dt = 1 / sample_rate
    newPos[i]    = pos[i] + newVel[i] * dt

This is semi-implicit Euler. Two particle buffers are kept: one holds the
current state, the other receives the next state, and a parity index flips
once per input sample to swap their roles. No copying, no allocation.

Stability
---------

The integrator is only stable while the step is small compared to the
string's natural time constants. With the reference constants
(tension 0.5, damping 10, inertia 0.001) at 48 kHz the string is heavily
overdamped and settles smoothly. Raising the tension far enough that
sqrt(tension / inertia) * dt approaches 2 makes the simulation blow up to
infinity within a few hundred samples. That is a property of the model,
not something the drone guards against at run time; pick constants that
have been tested.
*/

const CHAIN_LEN: usize = 3;
const OUTPUT_TAP: usize = 1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct Particle {
    position: f32,
    velocity: f32,
}

/// Physical constants of the string.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroneParams {
    pub tension: f32,
    pub damping: f32,
    pub inertia: f32,
}

impl Default for DroneParams {
    fn default() -> Self {
        Self {
            tension: 0.5,
            damping: 10.0,
            inertia: 0.001,
        }
    }
}

pub struct Drone {
    params: DroneParams,
    sample_period: f32,
    buffers: [[Particle; CHAIN_LEN]; 2],
    current: usize,
}

impl Drone {
    /// String with the reference constants.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_params(sample_rate, DroneParams::default())
    }

    pub fn with_params(sample_rate: f32, params: DroneParams) -> Self {
        Self {
            params,
            sample_period: 1.0 / sample_rate,
            buffers: [[Particle::default(); CHAIN_LEN]; 2],
            current: 0,
        }
    }

    pub fn params(&self) -> DroneParams {
        self.params
    }

    /// Drive the string with one input sample and read the output tap.
    #[inline]
    pub fn next_sample(&mut self, input: f32) -> f32 {
        self.buffers[self.current][0].position = input;
        self.evaluate();
        self.current ^= 1;
        self.buffers[self.current][OUTPUT_TAP].position
    }

    fn evaluate(&mut self) {
        let DroneParams {
            tension,
            damping,
            inertia,
        } = self.params;
        let dt = self.sample_period;

        let (first, second) = self.buffers.split_at_mut(1);
        let (now, next) = if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        };

        for i in 1..CHAIN_LEN - 1 {
            let spring_force =
                ((now[i - 1].position + now[i + 1].position) / 2.0 - now[i].position) * tension;
            let damping_force = -now[i].velocity * damping;
            let acceleration = (spring_force + damping_force) / inertia;

            next[i].velocity = now[i].velocity + acceleration * dt;
            next[i].position = now[i].position + next[i].velocity * dt;
        }
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.buffers = [[Particle::default(); CHAIN_LEN]; 2];
        self.current = 0;
    }
}
