//! Typed client for the Temperature Conversion API.

pub mod client;

pub use client::{
    ApiErrorBody, ContextResponse, Conversion, Direction, SdkError, TemperatureClient,
};
