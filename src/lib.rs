//! Core library functions for the cast network analyzer

pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod report;

pub use anyhow::{Result, anyhow};
pub use error::{GraphError, GraphResult};
pub use graph::{BipartiteGraph, CollaborationGraph, Distance, Graph, VertexHandle, VertexKind};
