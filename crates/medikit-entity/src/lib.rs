//! Generic entity access for hospital administration consoles
//!
//! This crate provides the typed CRUD surface shared by every module screen
//! (admission, clinical, billing, inventory):
//! - An [`OperationResult`] envelope mirroring the remote store's responses
//! - The [`BaseDto`] contract every serviced entity satisfies (active flag,
//!   notes, tenant attribution)
//! - A structured, validated [`FilterExpr`] predicate for server-side lookups
//! - [`EntityService`], a per-entity REST client bound to a module base URL
//!   and an explicit [`SessionContext`]

pub mod dto;
pub mod error;
pub mod filter;
pub mod result;
pub mod service;
pub mod session;
pub mod settings;

pub use dto::{BaseDto, NEW_ENTITY_ID, YesNo};
pub use error::{EntityError, EntityResult};
pub use filter::{Filter, FilterExpr, FilterOperator, FilterValue};
pub use result::OperationResult;
pub use service::EntityService;
pub use session::{CompanyRef, SessionContext};
pub use settings::{ApiModule, ApiSettings};
