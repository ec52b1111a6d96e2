//! Samplers and example functions for exercising the linprobe testers.

mod distributions;
mod functions;

pub use distributions::{GaussianSampler, UniformSampler};
pub use functions::{
    CorruptedLinear, CountingOracle, MatrixMap, NoisyLinear, ScalingMap, SquareMap, StretchedTanh,
};
