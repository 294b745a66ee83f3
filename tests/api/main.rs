//! API integration tests: every operation driven through `Service::dispatch`.

mod dishes;

#[cfg(feature = "http")]
mod http;
