//! Todo Web Client
//!
//! Leptos frontend for a per-user todo list served by an external REST API.
//!
//! - workflow: auth and todo state machines, independent of the DOM
//! - api: REST bindings behind the `AuthApi` / `TodoApi` ports
//! - session / storage: the signed-in identity and where it is persisted
//! - app / components: Leptos views mirroring the workflows through the store

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod logger;
pub mod models;
pub mod session;
pub mod storage;
pub mod store;
pub mod workflow;

#[cfg(test)]
mod testing;
