//! Application bootstrap and shutdown
//!
//! ```text
//! 1. Configuration loading   (ConfigService / AppConfig)
//!    ↓
//! 2. Repository construction (in-memory or relational)
//!    ↓
//! 3. Application::builder()  (explicit wiring into the controller)
//!    ↓
//! 4. Server start
//!    ↓
//! [Running...]
//!    ↓
//! 5. Shutdown signal (SIGTERM/SIGINT), in-flight requests drain
//! ```

mod application;
mod shutdown;

pub use application::{Application, ApplicationBuilder};
pub use shutdown::shutdown_signal;
