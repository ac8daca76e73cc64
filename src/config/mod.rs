//! Configuration schema, loading, and field validation.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    describe_yaml_error, load_config, parse_config, save_config, template_path,
    DEFAULT_CONFIG_FILE, TEMPLATE_FILE,
};
pub use schema::{
    MigrationConfig, PEER_ADDRESSES_KEY, PEER_ADDRESS_PLACEHOLDER, SECRET_SENTINEL,
};
pub use validator::{
    validate_azure_region, validate_ip_address, validate_numeric, validate_protocol,
    validate_replication_schedule, validate_service_level, validate_uuid, Validation, Validator,
};
