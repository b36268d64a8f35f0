use super::Operation;

pub const CREATE_PROJECT: Operation = Operation::mutation(
    "CreateProject",
    r#"mutation CreateProject($name: String!, $description: String, $defaultEnvironmentName: String) {
  projectCreate(
    input: {
      name: $name
      description: $description
      defaultEnvironmentName: $defaultEnvironmentName
    }
  ) {
    id
    name
    description
    createdAt
    environments {
      edges {
        node {
          id
          name
        }
      }
    }
  }
}"#,
);

pub const DELETE_PROJECT: Operation = Operation::mutation(
    "DeleteProject",
    r#"mutation DeleteProject($projectId: String!) {
  projectDelete(id: $projectId)
}"#,
);

pub const CREATE_SERVICE: Operation = Operation::mutation(
    "CreateService",
    r#"mutation CreateService($projectId: String!, $name: String!) {
  serviceCreate(input: { projectId: $projectId, name: $name }) {
    id
    name
    createdAt
  }
}"#,
);

pub const DELETE_SERVICE: Operation = Operation::mutation(
    "DeleteService",
    r#"mutation DeleteService($serviceId: String!) {
  serviceDelete(id: $serviceId)
}"#,
);

pub const CREATE_ENVIRONMENT: Operation = Operation::mutation(
    "CreateEnvironment",
    r#"mutation CreateEnvironment($projectId: String!, $name: String!) {
  environmentCreate(input: { projectId: $projectId, name: $name }) {
    id
    name
    createdAt
  }
}"#,
);

pub const DELETE_ENVIRONMENT: Operation = Operation::mutation(
    "DeleteEnvironment",
    r#"mutation DeleteEnvironment($environmentId: String!) {
  environmentDelete(id: $environmentId)
}"#,
);

pub const DEPLOY_SERVICE: Operation = Operation::mutation(
    "DeployService",
    r#"mutation DeployService($serviceId: String!, $environmentId: String!) {
  serviceInstanceDeploy(serviceId: $serviceId, environmentId: $environmentId)
}"#,
);

pub const REDEPLOY: Operation = Operation::mutation(
    "Redeploy",
    r#"mutation Redeploy($deploymentId: String!) {
  deploymentRedeploy(id: $deploymentId) {
    id
    status
    createdAt
  }
}"#,
);

pub const CANCEL_DEPLOYMENT: Operation = Operation::mutation(
    "CancelDeployment",
    r#"mutation CancelDeployment($deploymentId: String!) {
  deploymentCancel(id: $deploymentId)
}"#,
);

pub const RESTART_DEPLOYMENT: Operation = Operation::mutation(
    "RestartDeployment",
    r#"mutation RestartDeployment($deploymentId: String!) {
  deploymentRestart(id: $deploymentId)
}"#,
);

pub const SET_VARIABLES: Operation = Operation::mutation(
    "SetVariables",
    r#"mutation SetVariables($projectId: String!, $environmentId: String!, $serviceId: String, $variables: EnvironmentVariables!) {
  variableCollectionUpsert(
    input: {
      projectId: $projectId
      environmentId: $environmentId
      serviceId: $serviceId
      variables: $variables
    }
  )
}"#,
);

pub const DELETE_VARIABLE: Operation = Operation::mutation(
    "DeleteVariable",
    r#"mutation DeleteVariable($projectId: String!, $environmentId: String!, $serviceId: String, $name: String!) {
  variableDelete(
    input: {
      projectId: $projectId
      environmentId: $environmentId
      serviceId: $serviceId
      name: $name
    }
  )
}"#,
);

pub const CREATE_SERVICE_DOMAIN: Operation = Operation::mutation(
    "CreateServiceDomain",
    r#"mutation CreateServiceDomain($serviceId: String!, $environmentId: String!) {
  serviceDomainCreate(
    input: { serviceId: $serviceId, environmentId: $environmentId }
  ) {
    id
    domain
    suffix
  }
}"#,
);

pub const DELETE_SERVICE_DOMAIN: Operation = Operation::mutation(
    "DeleteServiceDomain",
    r#"mutation DeleteServiceDomain($id: String!) {
  serviceDomainDelete(id: $id)
}"#,
);

pub const CREATE_CUSTOM_DOMAIN: Operation = Operation::mutation(
    "CreateCustomDomain",
    r#"mutation CreateCustomDomain($serviceId: String!, $environmentId: String!, $domain: String!) {
  customDomainCreate(
    input: {
      serviceId: $serviceId
      environmentId: $environmentId
      domain: $domain
    }
  ) {
    id
    domain
  }
}"#,
);

pub const DEPLOY_TEMPLATE: Operation = Operation::mutation(
    "DeployTemplate",
    r#"mutation DeployTemplate($projectId: String!, $environmentId: String!, $templateCode: String!, $services: [TemplateServiceInput!]) {
  templateDeploy(
    input: {
      projectId: $projectId
      environmentId: $environmentId
      templateCode: $templateCode
      services: $services
    }
  ) {
    projectId
    workflowId
  }
}"#,
);

pub(super) const ALL: [&Operation; 16] = [
    &CREATE_PROJECT,
    &DELETE_PROJECT,
    &CREATE_SERVICE,
    &DELETE_SERVICE,
    &CREATE_ENVIRONMENT,
    &DELETE_ENVIRONMENT,
    &DEPLOY_SERVICE,
    &REDEPLOY,
    &CANCEL_DEPLOYMENT,
    &RESTART_DEPLOYMENT,
    &SET_VARIABLES,
    &DELETE_VARIABLE,
    &CREATE_SERVICE_DOMAIN,
    &DELETE_SERVICE_DOMAIN,
    &CREATE_CUSTOM_DOMAIN,
    &DEPLOY_TEMPLATE,
];
