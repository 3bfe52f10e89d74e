mod parser;
mod reader;
#[cfg(test)]
mod tests;
mod validator;

pub use reader::load_source;
pub use validator::{
    clean_and_validate, RejectionCounts, ValidationOptions, ValidationOutcome, ValidationReport,
};
