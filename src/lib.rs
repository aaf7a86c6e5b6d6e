//! Unit-aware 2D vector algebra.
//!
//! A [`Unit`] is a length in `px`, `rem`, `vh` or `vw`, stored in pixels. A
//! [`Vector`] is a pair of `Unit`s. Relative units are resolved against an
//! [`Environment`] (root font size and viewport size) when a value is built,
//! and all arithmetic happens in the pixel basis.
//!
//! ```
//! use unitvec::{Metrics, Unit, UnitKind, Vector};
//!
//! let env = Metrics::default().with_root_font_size(16.0);
//! let gap = Unit::parse("10rem", &env)?;
//! assert_eq!(gap.value(), 160.0);
//! assert_eq!(gap.to_rem(&env), "10rem");
//!
//! let v = Vector::from_values(3.0, 4.0, UnitKind::Px, &env);
//! assert_eq!(v.magnitude().value(), 5.0);
//! # Ok::<(), unitvec::UnitError>(())
//! ```

pub mod defaults;
pub mod env;
pub mod errors;
pub mod log;
mod parse;
pub mod types;
pub mod unit;
pub mod vector;

pub use env::{Environment, LiveMetrics, Metrics};
pub use errors::{NumericError, UnitError};
pub use types::{Angle, UnitKind};
pub use unit::Unit;
pub use vector::Vector;
