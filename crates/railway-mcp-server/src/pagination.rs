//! Relay-style connections returned by the Railway API

use serde::Deserialize;

/// A paged collection of `T`, shaped as `{ edges: [{ node: T }] }`
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Option::default")]
    edges: Option<Vec<Edge<T>>>,
}

#[derive(Debug, Deserialize)]
struct Edge<T> {
    #[serde(default = "Option::default")]
    node: Option<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: None }
    }
}

impl<T: Default> Connection<T> {
    /// Unwrap the nodes of every edge, in order
    ///
    /// An edge without a node yields `T::default()` so that the number of
    /// entries always matches what the API returned.
    pub fn into_nodes(self) -> Vec<T> {
        self.edges
            .unwrap_or_default()
            .into_iter()
            .map(|edge| edge.node.unwrap_or_default())
            .collect()
    }
}

/// Flatten an optional connection, treating a missing or null one as empty
pub fn nodes<T: Default>(connection: Option<Connection<T>>) -> Vec<T> {
    connection.map(Connection::into_nodes).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Node {
        id: Option<String>,
    }

    fn node(id: &str) -> Node {
        Node {
            id: Some(id.to_string()),
        }
    }

    #[test]
    fn it_preserves_edge_order() {
        let connection: Connection<Node> = serde_json::from_value(json!({
            "edges": [
                { "node": { "id": "c" } },
                { "node": { "id": "a" } },
                { "node": { "id": "b" } }
            ]
        }))
        .unwrap();

        assert_eq!(connection.into_nodes(), vec![node("c"), node("a"), node("b")]);
    }

    #[test]
    fn null_edges_are_empty() {
        let connection: Connection<Node> =
            serde_json::from_value(json!({ "edges": null })).unwrap();

        assert!(connection.into_nodes().is_empty());
    }

    #[test]
    fn missing_nodes_keep_their_slot() {
        let connection: Connection<Node> =
            serde_json::from_value(json!({ "edges": [{}, { "node": { "id": "a" } }] })).unwrap();

        assert_eq!(connection.into_nodes(), vec![Node::default(), node("a")]);
    }

    #[test]
    fn missing_connections_are_empty() {
        assert!(nodes::<Node>(None).is_empty());
    }
}
