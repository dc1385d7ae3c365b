//! # Algo-Lab-Bench
//!
//! Best-of-R wall-clock timing of textbook algorithms over fixed input-size
//! domains, with CSV, LaTeX and PNG reports for each lab.

pub mod cli;
pub mod config;
pub mod error;
pub mod fibonacci;
pub mod registry;
pub mod sorting;
pub mod utils;

pub use error::{Error, Result};

/// Re-export tui from utils for convenience
pub use utils::tui;

/// Re-export the measurement pass from utils::runner
pub use utils::runner::{run_all, run_all_with};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::registry::{build_registry, Lab, LabRegistry};
    pub use crate::utils::export::Exporter;
    pub use crate::utils::runner::{ResultCollection, ResultSet, TimingSample};
    pub use crate::utils::timer::{measure, TimingConfig};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_labs_registry_verify() {
        let registry = build_registry();
        let labs = registry.all();

        println!("Verifying {} labs...", labs.len());

        for lab in labs {
            println!("Verifying lab: {}", lab.name());
            match lab.verify() {
                Ok(_) => println!("  ✅ Lab '{}' passed verification", lab.name()),
                Err(e) => panic!("  ❌ Lab '{}' failed verification: {}", lab.name(), e),
            }
        }
    }
}
