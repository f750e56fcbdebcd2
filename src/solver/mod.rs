pub mod policy;
pub mod states;
pub mod value_iteration;

mod solver_test;
