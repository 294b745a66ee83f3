//! grubdash - dishes and orders over a fail-fast validation pipeline.
//!
//! Every mutating operation is a [`Pipeline`]: an ordered list of
//! validation steps that must all pass before the terminal handler may
//! touch the [`Store`]. [`Service`] registers the pipelines by name and
//! serializes their execution; the optional `http` feature exposes them
//! as a REST API.

pub mod config;
pub mod dishes;
mod error;
mod ids;
pub mod orders;
pub mod pipeline;
pub mod service;
mod store;
pub mod telemetry;

#[cfg(feature = "http")]
pub mod http;

pub use config::{Config, ConfigError, Seed};
pub use dishes::Dish;
pub use error::{HandlerError, StoreError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use orders::{LineItem, Order, OrderStatus};
pub use pipeline::{Context, Pipeline, Request, Response, Step};
pub use service::Service;
pub use store::{InMemoryStore, Resource, Store};
