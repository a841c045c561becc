//! Core components of the `ecopulse-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EpClient`] and its builder.
//! - The primary [`EpError`] type.
//! - Shared data models like [`Company`] and [`EsgScore`].
//! - Internal networking and the live/synthetic fallback discipline.

/// The main client (`EpClient`), builder, and configuration.
pub mod client;
/// The primary error type (`EpError`) for the crate.
pub mod error;
/// Shared data models returned by the data operations.
pub mod models;

pub(crate) mod fallback;
pub(crate) mod net;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::EpClient`
pub use client::{CacheMode, DataMode, EpClient, EpClientBuilder, LatencyProfile};
pub use error::EpError;
pub use models::{
    Company, CompanyDetails, CompanySearchMeta, EsgScore, HistoricalDataPoint, Momentum,
    PipelineStatus, RiskLevel, SupplyChainData, Trend, TrendingIdea, WatchlistPipeline,
};
