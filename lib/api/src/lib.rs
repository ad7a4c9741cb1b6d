//! # outfitx API
//!
//! REST layer for the outfitx outfit recommender. Exposes the two core
//! operations over HTTP: outfit generation and single-slot alternatives,
//! plus a catalog info endpoint.

pub mod rest;

pub use rest::RestApi;
