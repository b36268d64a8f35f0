use super::{ServiceEnvironmentInput, outcome};
use crate::client::RailwayClient;
use crate::errors::RailwayError;
use crate::graphql::Variables;
use crate::operations::{mutations, queries};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Join a domain and its suffix, when both are known
fn full_domain(domain: Option<&str>, suffix: Option<&str>) -> Option<String> {
    match (domain, suffix) {
        (Some(domain), Some(suffix)) if !domain.is_empty() && !suffix.is_empty() => {
            Some(format!("{domain}.{suffix}"))
        }
        (domain, _) => domain.map(str::to_string),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceDomainNode {
    id: Option<String>,
    domain: Option<String>,
    suffix: Option<String>,
    created_at: Option<String>,
}

/// A Railway-provided domain
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDomain {
    pub id: Option<String>,
    pub domain: Option<String>,
    pub suffix: Option<String>,
    pub full_domain: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateServiceDomainData {
    service_domain_create: Option<ServiceDomainNode>,
}

pub async fn generate_domain(
    client: &RailwayClient,
    input: ServiceEnvironmentInput,
) -> Result<ServiceDomain, RailwayError> {
    let variables = Variables::new()
        .with("serviceId", input.service_id)
        .with("environmentId", input.environment_id);

    let data: CreateServiceDomainData =
        mutations::CREATE_SERVICE_DOMAIN.fetch(client, variables).await?;
    let node = data.service_domain_create.unwrap_or_default();

    Ok(ServiceDomain {
        full_domain: full_domain(node.domain.as_deref(), node.suffix.as_deref()),
        id: node.id,
        domain: node.domain,
        suffix: node.suffix,
    })
}

/// Input for the create_custom_domain tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCustomDomainInput {
    /// The Railway service ID
    pub service_id: String,
    /// The Railway environment ID
    pub environment_id: String,
    /// The domain to attach, e.g. "api.example.com"
    pub domain: String,
}

/// A user-owned domain attached to a service
#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CustomDomain {
    pub id: Option<String>,
    pub domain: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateCustomDomainData {
    custom_domain_create: Option<CustomDomain>,
}

pub async fn create_custom_domain(
    client: &RailwayClient,
    input: CreateCustomDomainInput,
) -> Result<CustomDomain, RailwayError> {
    let variables = Variables::new()
        .with("serviceId", input.service_id)
        .with("environmentId", input.environment_id)
        .with("domain", input.domain);

    let data: CreateCustomDomainData =
        mutations::CREATE_CUSTOM_DOMAIN.fetch(client, variables).await?;

    Ok(data.custom_domain_create.unwrap_or_default())
}

/// Input for the delete_service_domain tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteServiceDomainInput {
    /// The ID of the Railway-provided domain
    pub domain_id: String,
}

/// The outcome of deleting a domain
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedDomain {
    pub success: bool,
    pub domain_id: String,
    pub message: &'static str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteServiceDomainData {
    service_domain_delete: Option<bool>,
}

pub async fn delete_service_domain(
    client: &RailwayClient,
    input: DeleteServiceDomainInput,
) -> Result<DeletedDomain, RailwayError> {
    let data: DeleteServiceDomainData = mutations::DELETE_SERVICE_DOMAIN
        .fetch(client, Variables::new().with("id", input.domain_id.as_str()))
        .await?;
    let success = data.service_domain_delete.unwrap_or(false);

    Ok(DeletedDomain {
        success,
        domain_id: input.domain_id,
        message: outcome(
            success,
            "Domain deleted successfully",
            "Failed to delete domain",
        ),
    })
}

/// Input for the list_domains tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListDomainsInput {
    /// The Railway project ID
    pub project_id: String,
    /// The Railway environment ID
    pub environment_id: String,
    /// The Railway service ID
    pub service_id: String,
}

/// A DNS record required by a custom domain
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    pub hostlabel: Option<String>,
    pub required_value: Option<String>,
    pub current_value: Option<String>,
    pub status: Option<String>,
}

/// A Railway-provided domain, as listed
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedServiceDomain {
    pub id: Option<String>,
    pub domain: Option<String>,
    pub suffix: Option<String>,
    pub full_domain: Option<String>,
    pub created_at: Option<String>,
}

/// A custom domain with the DNS records it still needs
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedCustomDomain {
    pub id: Option<String>,
    pub domain: Option<String>,
    pub created_at: Option<String>,
    pub dns_records: Vec<DnsRecord>,
}

/// Every domain of a service
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Domains {
    pub service_domains: Vec<ListedServiceDomain>,
    pub custom_domains: Vec<ListedCustomDomain>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomDomainNode {
    id: Option<String>,
    domain: Option<String>,
    status: Option<CustomDomainStatus>,
    created_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomDomainStatus {
    dns_records: Option<Vec<DnsRecord>>,
}

#[derive(Deserialize)]
struct ListDomainsData {
    domains: Option<DomainsNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DomainsNode {
    service_domains: Option<Vec<ServiceDomainNode>>,
    custom_domains: Option<Vec<CustomDomainNode>>,
}

pub async fn list_domains(
    client: &RailwayClient,
    input: ListDomainsInput,
) -> Result<Domains, RailwayError> {
    let variables = Variables::new()
        .with("projectId", input.project_id)
        .with("environmentId", input.environment_id)
        .with("serviceId", input.service_id);

    let data: ListDomainsData = queries::LIST_DOMAINS.fetch(client, variables).await?;
    let Some(domains) = data.domains else {
        return Ok(Domains::default());
    };

    Ok(Domains {
        service_domains: domains
            .service_domains
            .unwrap_or_default()
            .into_iter()
            .map(|node| ListedServiceDomain {
                full_domain: full_domain(node.domain.as_deref(), node.suffix.as_deref()),
                id: node.id,
                domain: node.domain,
                suffix: node.suffix,
                created_at: node.created_at,
            })
            .collect(),
        custom_domains: domains
            .custom_domains
            .unwrap_or_default()
            .into_iter()
            .map(|node| ListedCustomDomain {
                id: node.id,
                domain: node.domain,
                created_at: node.created_at,
                dns_records: node
                    .status
                    .and_then(|status| status.dns_records)
                    .unwrap_or_default(),
            })
            .collect(),
    })
}
