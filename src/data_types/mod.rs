pub mod aggregate;
pub mod axis;
pub mod episode;
pub mod plot_configs;
pub mod state;

// Re-export everything for compatibility
pub use aggregate::*;
pub use axis::*;
pub use episode::*;
pub use plot_configs::*;
pub use state::*;
