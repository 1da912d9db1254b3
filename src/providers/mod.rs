pub mod fixer;

pub use fixer::FixerClient;
