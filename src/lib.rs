pub use crate::errors::{
    print_error, ChibaGenError, ErrorCategory, ErrorKind, ErrorReporting, InputContext,
    SourceContext,
};

pub mod cli;
pub mod errors;
pub mod fields;
pub mod generator;
