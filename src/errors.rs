//! Error types for the gateway-caching crate
//!
//! Resolving settings never fails; errors only come from loading a descriptor.

use descriptor::DescriptorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CachingSettingsError {
    #[error("Descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),
}
