//! Core library for couteau
//!
//! This crate implements the **Functional Core** of the couteau toolbox,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The couteau project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`couteau_core`** (this crate): the lookup state machine, the error taxonomy and
//!   every per-tool transformation, with zero I/O
//! - **`couteau`**: HTTP fetching, the async lookup controller and the CLI (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: the same payload always maps to the same result
//! - **No side effects**: no I/O, no clocks, no global state
//! - **Testable**: every mapper is exercised with fixture JSON, no mocking required
//!
//! # Module Organization
//!
//! - [`lookup`]: `LookupState` and the `LookupMachine` that decides which outcomes are visible
//! - [`tool`]: the `Tool` trait tying a validator, a URL builder and a response mapper together
//! - [`error`]: `ErrorKind` (what the presentation layer sees) and `MappingError`
//! - [`gender`], [`age`], [`universities`], [`weather`], [`pokemon`], [`news`]: one module per
//!   remote API, each holding its raw response shapes, its typed result and its mapper
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use couteau_core::gender::GenderTool;
//! use couteau_core::tool::Tool;
//!
//! let tool = GenderTool::default();
//! let name = tool.validate("  Maria ")?;
//! assert_eq!(tool.build_url(&name), "https://api.genderize.io/?name=Maria");
//!
//! let payload = serde_json::json!({
//!     "name": "Maria", "gender": "female", "probability": 0.98, "count": 1200
//! });
//! let result = tool.map(&payload)?;
//! assert_eq!(result.gender.as_str(), "female");
//! ```

pub mod age;
pub mod error;
pub mod gender;
pub mod lookup;
pub mod news;
pub mod pokemon;
pub mod tool;
pub mod universities;
pub mod weather;

pub use error::{ErrorKind, MappingError};
pub use lookup::{LookupMachine, LookupState, RequestId};
pub use tool::Tool;
