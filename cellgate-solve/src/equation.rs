mod evaluate;

pub mod bisection;

pub use evaluate::{EquationProblem, EvalError, Evaluation, evaluate};
