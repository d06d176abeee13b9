//! Request interceptors and their composition.
//!
//! # Data Flow
//! ```text
//! Chain::new()
//!     .then(A)        ← outermost: sees the request first, the response last
//!     .then(B)
//!     .wrap(router)   → A(B(router))
//! ```
//!
//! # Design Decisions
//! - An interceptor is an object with one async `handle(request, next)` method;
//!   it may work before `next`, after it, both, or return without calling it
//! - Chains are composed once, while the route table is built
//! - Each stage becomes an `axum::middleware::from_fn_with_state` layer, so a
//!   chain applied to a router also covers that router's fallback

pub mod access_log;
pub mod server_header;

use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};

pub use access_log::{AccessEntry, AccessLog};
pub use server_header::ServerHeader;

/// A single stage in a request pipeline.
pub trait Interceptor: Send + Sync + 'static {
    /// Process `request`, delegating to the rest of the chain through `next`.
    fn handle(&self, request: Request, next: Next) -> impl Future<Output = Response> + Send;
}

async fn intercept<I: Interceptor>(
    State(interceptor): State<Arc<I>>,
    request: Request,
    next: Next,
) -> Response {
    interceptor.handle(request, next).await
}

type Stage<S> = Box<dyn FnOnce(Router<S>) -> Router<S>>;

/// An ordered list of interceptors, first entry outermost.
pub struct Chain<S = ()> {
    stages: Vec<Stage<S>>,
}

impl<S> Chain<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append an interceptor that runs inside every stage added so far.
    pub fn then<I: Interceptor>(mut self, interceptor: I) -> Self {
        let interceptor = Arc::new(interceptor);
        self.stages.push(Box::new(move |router: Router<S>| {
            router.layer(middleware::from_fn_with_state(interceptor, intercept::<I>))
        }));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Wrap every route (and the fallback) registered on `router`.
    pub fn wrap(self, router: Router<S>) -> Router<S> {
        // axum layers added later sit further out, so apply innermost first.
        self.stages
            .into_iter()
            .rev()
            .fold(router, |router, stage| stage(router))
    }
}

impl<S> Default for Chain<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
