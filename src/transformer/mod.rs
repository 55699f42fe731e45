//! 단상 변압기 시험 해석 모듈 모음.

pub mod efficiency;
pub mod inputs;
pub mod open_circuit;
pub mod referral;
pub mod regulation;
pub mod short_circuit;
pub mod solver;

pub use efficiency::{solve_efficiency, EfficiencyResult};
pub use inputs::{
    OpenCircuitTest, RawTestInputs, ShortCircuitTest, TestInputs, ValidationError,
};
pub use open_circuit::{solve_open_circuit, OpenCircuitError, OpenCircuitSolution};
pub use referral::{refer_to_secondary, EquivalentCircuit};
pub use regulation::{
    solve_regulation, PowerFactorCase, RegulationCase, RegulationError, RegulationResult,
};
pub use short_circuit::{solve_short_circuit, ShortCircuitError, ShortCircuitSolution};
pub use solver::{solve, SolveError, SolveWarning, TransformerAnalysis};
