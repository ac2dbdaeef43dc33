//! Per-kind entry points used by the host framework
//!
//! Every kind of configurable object (provider, resource, data source, ...)
//! gets its own request/response envelope and adapter trait. The adapters
//! are blanket-implemented for every [`ConfigValidator`] and simply forward
//! to [`ConfigValidator::validate`].

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use kit::types::config::ConfigReader;
use kit::types::diagnostics::Diagnostics;

use super::ConfigValidator;

macro_rules! define_config_validator_kind {
    ($kind:literal => {
        trait: $trait_name:ident,
        method: $method:ident,
        request: $request:ident,
        response: $response:ident,
    }) => {
        #[doc = concat!("Configuration handed over for ", $kind, " validation.")]
        pub struct $request<'a> {
            pub config: &'a dyn ConfigReader,
        }

        impl<'a> $request<'a> {
            pub fn new(config: &'a dyn ConfigReader) -> Self {
                Self { config }
            }
        }

        #[doc = concat!("Diagnostics collected while validating ", $kind, " configuration.")]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $response {
            pub diagnostics: Diagnostics,
        }

        pub trait $trait_name {
            fn $method(&self, req: &$request<'_>, resp: &mut $response);
        }

        impl<T: ConfigValidator + ?Sized> $trait_name for T {
            fn $method(&self, req: &$request<'_>, resp: &mut $response) {
                resp.diagnostics.append(self.validate(req.config));
            }
        }
    };
}

define_config_validator_kind!("provider" => {
    trait: ProviderConfigValidator,
    method: validate_provider,
    request: ValidateProviderConfigRequest,
    response: ValidateProviderConfigResponse,
});

define_config_validator_kind!("managed resource" => {
    trait: ResourceConfigValidator,
    method: validate_resource,
    request: ValidateResourceConfigRequest,
    response: ValidateResourceConfigResponse,
});

define_config_validator_kind!("data source" => {
    trait: DataSourceConfigValidator,
    method: validate_data_source,
    request: ValidateDataSourceConfigRequest,
    response: ValidateDataSourceConfigResponse,
});

define_config_validator_kind!("ephemeral resource" => {
    trait: EphemeralResourceConfigValidator,
    method: validate_ephemeral_resource,
    request: ValidateEphemeralResourceConfigRequest,
    response: ValidateEphemeralResourceConfigResponse,
});

define_config_validator_kind!("list resource" => {
    trait: ListResourceConfigValidator,
    method: validate_list_resource,
    request: ValidateListResourceConfigRequest,
    response: ValidateListResourceConfigResponse,
});

define_config_validator_kind!("action" => {
    trait: ActionConfigValidator,
    method: validate_action,
    request: ValidateActionConfigRequest,
    response: ValidateActionConfigResponse,
});

/// The kinds of configurable objects a provider exposes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ResourceKind {
    Provider,
    Resource,
    DataSource,
    EphemeralResource,
    ListResource,
    Action,
}

impl ResourceKind {
    /// Run `validator` through the adapter of this kind.
    pub fn validate(&self, validator: &dyn ConfigValidator, config: &dyn ConfigReader) -> Diagnostics {
        match self {
            ResourceKind::Provider => {
                let mut resp = ValidateProviderConfigResponse::default();
                validator.validate_provider(&ValidateProviderConfigRequest::new(config), &mut resp);
                resp.diagnostics
            }
            ResourceKind::Resource => {
                let mut resp = ValidateResourceConfigResponse::default();
                validator.validate_resource(&ValidateResourceConfigRequest::new(config), &mut resp);
                resp.diagnostics
            }
            ResourceKind::DataSource => {
                let mut resp = ValidateDataSourceConfigResponse::default();
                validator
                    .validate_data_source(&ValidateDataSourceConfigRequest::new(config), &mut resp);
                resp.diagnostics
            }
            ResourceKind::EphemeralResource => {
                let mut resp = ValidateEphemeralResourceConfigResponse::default();
                validator.validate_ephemeral_resource(
                    &ValidateEphemeralResourceConfigRequest::new(config),
                    &mut resp,
                );
                resp.diagnostics
            }
            ResourceKind::ListResource => {
                let mut resp = ValidateListResourceConfigResponse::default();
                validator
                    .validate_list_resource(&ValidateListResourceConfigRequest::new(config), &mut resp);
                resp.diagnostics
            }
            ResourceKind::Action => {
                let mut resp = ValidateActionConfigResponse::default();
                validator.validate_action(&ValidateActionConfigRequest::new(config), &mut resp);
                resp.diagnostics
            }
        }
    }
}
