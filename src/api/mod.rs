mod registry;
mod registry_config;
mod request;

pub use registry::ChartRegistry;
pub use registry_config::ChartRegistryConfig;
pub use request::ChartCreationRequest;
