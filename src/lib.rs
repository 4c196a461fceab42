//! Client for NASA's Mars rover photo API.
//!
//! `MarsRoverClient` builds the request URLs, fetches bytes through an
//! injected [`DataLoader`] and decodes them into the [`domain`] types.
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod loader;
pub mod utils;

pub use clients::MarsRoverClient;
pub use config::AppConfig;
pub use domain::{Camera, MarsPhotoReference, MarsRover, RoverStatus, SolDescription};
pub use errors::{ClientError, ClientResult, LoaderError, LoaderResult};
pub use loader::{DataLoader, HttpLoader, MockLoader};
