//! pipeline - Fail-fast chains of validation steps ending in a handler.
//!
//! A [`Pipeline`] is an ordered list of [`Step`]s followed by a terminal
//! handler. Steps run in order against a per-request [`Context`]; each
//! either returns `Ok(())` (possibly after attaching data to the context)
//! or an error that ends the run. The first error wins and no later step
//! or handler runs. When every step passes, the handler owns producing the
//! [`Response`].
//!
//! ## Example
//!
//! ```ignore
//! use grubdash::pipeline::{self, Pipeline, Response};
//!
//! let read = Pipeline::builder("dishes.read")
//!     .step(pipeline::exists())
//!     .handle(|ctx| Response::ok(ctx.resolved()?));
//!
//! let response = read.run(Context::new(request, store, ids))?;
//! ```

mod context;
mod request;
mod steps;

use std::borrow::Cow;

use tracing::{debug, trace};

use crate::error::HandlerError;

pub use context::Context;
pub use request::{Request, Response};
pub use steps::{
    body_data_has, body_data_is_text, exists, id_matches, is_truthy, positive_integer,
    IntegerFault,
};

type CheckFn<C> = dyn Fn(&mut C) -> Result<(), HandlerError> + Send + Sync;
type HandlerFn<C> = dyn Fn(C) -> Result<Response, HandlerError> + Send + Sync;

/// A single gate in a pipeline.
pub struct Step<C> {
    name: Cow<'static, str>,
    gate: Box<CheckFn<C>>,
}

impl<C> Step<C> {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, check: F) -> Self
    where
        F: Fn(&mut C) -> Result<(), HandlerError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            gate: Box::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run this step alone against `ctx`.
    pub fn check(&self, ctx: &mut C) -> Result<(), HandlerError> {
        (self.gate)(ctx)
    }
}

/// An ordered sequence of steps terminated by a handler.
pub struct Pipeline<C> {
    name: String,
    steps: Vec<Step<C>>,
    handler: Box<HandlerFn<C>>,
}

impl<C> Pipeline<C> {
    /// Start building a pipeline with the given operation name.
    pub fn builder(name: impl Into<String>) -> PipelineBuilder<C> {
        PipelineBuilder {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Step names in execution order.
    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(Step::name).collect()
    }

    /// Run every step in order, stopping at the first failure, then the handler.
    pub fn run(&self, mut ctx: C) -> Result<Response, HandlerError> {
        for step in &self.steps {
            if let Err(err) = step.check(&mut ctx) {
                debug!(
                    pipeline = %self.name,
                    step = %step.name,
                    status = err.status_code(),
                    error = %err,
                    "step rejected request"
                );
                return Err(err);
            }
            trace!(pipeline = %self.name, step = %step.name, "step passed");
        }
        (self.handler)(ctx)
    }
}

/// Builder for [`Pipeline`]; a pipeline only exists once its handler is set.
pub struct PipelineBuilder<C> {
    name: String,
    steps: Vec<Step<C>>,
}

impl<C> PipelineBuilder<C> {
    /// Append a step. Uses builder pattern - returns `self` for chaining.
    pub fn step(mut self, step: Step<C>) -> Self {
        self.steps.push(step);
        self
    }

    /// Set the terminal handler and finish the pipeline.
    pub fn handle<F>(self, handler: F) -> Pipeline<C>
    where
        F: Fn(C) -> Result<Response, HandlerError> + Send + Sync + 'static,
    {
        Pipeline {
            name: self.name,
            steps: self.steps,
            handler: Box::new(handler),
        }
    }
}
