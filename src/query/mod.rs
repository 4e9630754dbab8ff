// Submodules for separation of concerns
mod eval;
mod plan;

pub mod compile;
pub mod exec;

// Public API re-exports
pub use compile::{
    compile_advanced, compile_city_skills, compile_company, compile_country_skills,
    compile_distribution, compile_experience, compile_identifier, compile_skills_check,
};
pub use eval::{eval_predicate, matches};
pub use plan::{DerivedStage, ExecOptions, Order, Predicate, QueryPlan};

pub(crate) use plan::MAX_SET_VALUES;
