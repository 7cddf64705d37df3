//! # Chuffed bridge
//! Runs the [Chuffed](https://github.com/chuffed/chuffed) constraint programming solver on
//! FlatZinc problems and reports the outcome as a tagged result: `ok` with the solver's output, or
//! `error` with a reason.
//!
//! There are two ways to reach the solver:
//! * [`OutOfProcessBridge`] writes the payload to a scratch file and runs the `chuffed`
//!   executable on it. This is what the host bindings use.
//! * [`driver::InProcessDriver`] drives a solver linked into the process through the
//!   [`driver::EmbeddedSolver`] trait. With the `embedded-chuffed` feature, the `chuffed-driver`
//!   binary does this for Chuffed itself, reading FlatZinc from stdin.
//!
//! Both paths share the rules in [`classifier`].
//!
//! ```no_run
//! # use chuffed_bridge::OutOfProcessBridge;
//! # use chuffed_bridge::FlatZincPayload;
//! # use chuffed_bridge::OptionsBlob;
//! # use chuffed_bridge::TaggedResult;
//! let bridge = OutOfProcessBridge::default();
//! let payload = FlatZincPayload::new("var 1..3: x :: output_var;\nconstraint int_eq(x, 2);\nsolve satisfy;\n");
//!
//! match bridge.solve(&payload, &OptionsBlob::default()) {
//!     Ok(TaggedResult::Ok(output)) => println!("{}", String::from_utf8_lossy(&output)),
//!     Ok(TaggedResult::Error(output)) => eprintln!("{}", String::from_utf8_lossy(&output)),
//!     Err(e) => eprintln!("{}", e.reason()),
//! }
//! ```

mod bridge;
pub mod classifier;
pub mod driver;
mod error;
mod handle;
mod options;
mod payload;
pub mod process;
mod result;
mod scratch;

pub use bridge::OutOfProcessBridge;
pub use error::BridgeError;
pub use error::BridgeResult;
pub use handle::SolverHandle;
pub use options::*;
pub use payload::FlatZincPayload;
pub use payload::OptionsBlob;
pub use result::Tag;
pub use result::TaggedResult;
pub use scratch::ScratchFile;
