#![deny(missing_docs)]
//! Distribution-free additivity and linearity testers.
//!
//! Both testers decide, from a bounded number of oracle queries, whether a
//! black-box function `f: R^d -> R^m` is (close to) additive or linear
//! under a caller-chosen input distribution, with a one-sided statistical
//! guarantee: exactly additive/linear functions are accepted up to
//! floating-tolerance effects, and functions eps-far from every linear
//! function are rejected with probability at least `confidence`. Nothing is
//! promised for the boundary region in between.
//!
//! The caller's [`Sampler`](linprobe_core::Sampler) supplies only the test
//! points; the reconstruction queries inside the testers draw from their
//! own standard normal stream, seeded through [`TestOptions`].

mod additivity;
mod contract;
mod linearity;
mod options;

pub use additivity::{
    additivity_tester, exact_additivity_check, point_query_additive, squeeze_factor, QueryVerdict,
};
pub use contract::ShapeContract;
pub use linearity::{linearity_tester, OddSymmetrized};
pub use options::TestOptions;
