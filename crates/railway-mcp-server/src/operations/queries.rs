use super::Operation;

pub const ME: Operation = Operation::query(
    "Me",
    r#"query Me {
  me {
    id
    name
    email
  }
}"#,
);

pub const LIST_PROJECTS: Operation = Operation::query(
    "ListProjects",
    r#"query ListProjects {
  me {
    projects {
      edges {
        node {
          id
          name
          description
          createdAt
          updatedAt
          environments {
            edges {
              node {
                id
                name
              }
            }
          }
          services {
            edges {
              node {
                id
                name
              }
            }
          }
        }
      }
    }
  }
}"#,
);

pub const GET_PROJECT: Operation = Operation::query(
    "GetProject",
    r#"query GetProject($projectId: String!) {
  project(id: $projectId) {
    id
    name
    description
    createdAt
    updatedAt
    environments {
      edges {
        node {
          id
          name
        }
      }
    }
    services {
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

pub const LIST_SERVICES: Operation = Operation::query(
    "ListServices",
    r#"query ListServices($projectId: String!) {
  project(id: $projectId) {
    services {
      edges {
        node {
          id
          name
          icon
          createdAt
          updatedAt
        }
      }
    }
  }
}"#,
);

pub const GET_SERVICE: Operation = Operation::query(
    "GetService",
    r#"query GetService($serviceId: String!) {
  service(id: $serviceId) {
    id
    name
    icon
    createdAt
    updatedAt
    projectId
  }
}"#,
);

pub const LIST_ENVIRONMENTS: Operation = Operation::query(
    "ListEnvironments",
    r#"query ListEnvironments($projectId: String!) {
  project(id: $projectId) {
    environments {
      edges {
        node {
          id
          name
          createdAt
          updatedAt
        }
      }
    }
  }
}"#,
);

pub const LIST_DEPLOYMENTS: Operation = Operation::query(
    "ListDeployments",
    r#"query ListDeployments($serviceId: String!, $environmentId: String!, $first: Int) {
  deployments(
    input: { serviceId: $serviceId, environmentId: $environmentId }
    first: $first
  ) {
    edges {
      node {
        id
        status
        createdAt
        updatedAt
        staticUrl
        meta
      }
    }
  }
}"#,
);

pub const GET_DEPLOYMENT: Operation = Operation::query(
    "GetDeployment",
    r#"query GetDeployment($deploymentId: String!) {
  deployment(id: $deploymentId) {
    id
    status
    createdAt
    updatedAt
    staticUrl
    meta
  }
}"#,
);

pub const LIST_VARIABLES: Operation = Operation::query(
    "ListVariables",
    r#"query ListVariables($projectId: String!, $environmentId: String!, $serviceId: String) {
  variables(
    projectId: $projectId
    environmentId: $environmentId
    serviceId: $serviceId
  )
}"#,
);

pub const GET_BUILD_LOGS: Operation = Operation::query(
    "GetBuildLogs",
    r#"query GetBuildLogs($deploymentId: String!, $limit: Int) {
  buildLogs(deploymentId: $deploymentId, limit: $limit) {
    message
    timestamp
    severity
  }
}"#,
);

pub const GET_DEPLOYMENT_LOGS: Operation = Operation::query(
    "GetDeploymentLogs",
    r#"query GetDeploymentLogs($deploymentId: String!, $limit: Int) {
  deploymentLogs(deploymentId: $deploymentId, limit: $limit) {
    message
    timestamp
    severity
  }
}"#,
);

pub const LIST_DOMAINS: Operation = Operation::query(
    "ListDomains",
    r#"query ListDomains($projectId: String!, $environmentId: String!, $serviceId: String!) {
  domains(
    projectId: $projectId
    environmentId: $environmentId
    serviceId: $serviceId
  ) {
    serviceDomains {
      id
      domain
      suffix
      createdAt
    }
    customDomains {
      id
      domain
      status {
        dnsRecords {
          hostlabel
          requiredValue
          currentValue
          status
        }
      }
      createdAt
    }
  }
}"#,
);

pub const LIST_TEMPLATES: Operation = Operation::query(
    "ListTemplates",
    r#"query ListTemplates($first: Int) {
  templates(first: $first) {
    edges {
      node {
        id
        code
        name
        description
        category
        health
        activeProjects
      }
    }
  }
}"#,
);

pub const GET_TEMPLATE: Operation = Operation::query(
    "GetTemplate",
    r#"query GetTemplate($code: String!) {
  template(code: $code) {
    id
    code
    name
    description
    category
    health
    activeProjects
    services {
      name
      icon
    }
  }
}"#,
);

pub(super) const ALL: [&Operation; 14] = [
    &ME,
    &LIST_PROJECTS,
    &GET_PROJECT,
    &LIST_SERVICES,
    &GET_SERVICE,
    &LIST_ENVIRONMENTS,
    &LIST_DEPLOYMENTS,
    &GET_DEPLOYMENT,
    &LIST_VARIABLES,
    &GET_BUILD_LOGS,
    &GET_DEPLOYMENT_LOGS,
    &LIST_DOMAINS,
    &LIST_TEMPLATES,
    &GET_TEMPLATE,
];

