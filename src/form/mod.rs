pub mod state;

pub use state::{reduce, Effect, FormField, FormState, Intent};
