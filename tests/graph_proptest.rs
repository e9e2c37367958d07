use proptest::prelude::*;
use std::collections::BTreeMap;
use waygraph::{metric, Edge, EdgeId, Graph, NodeId};

#[derive(Debug, Clone)]
enum Operation {
    AddNode(i16),
    AddDirected(usize, usize, u8),
    AddUndirected(usize, usize, u8),
    Remove(usize),
    RemoveRange(i16, i16),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<i16>().prop_map(Operation::AddNode),
        3 => (any::<usize>(), any::<usize>(), any::<u8>())
            .prop_map(|(a, b, c)| Operation::AddDirected(a, b, c)),
        2 => (any::<usize>(), any::<usize>(), any::<u8>())
            .prop_map(|(a, b, c)| Operation::AddUndirected(a, b, c)),
        2 => any::<usize>().prop_map(Operation::Remove),
        1 => (any::<i16>(), any::<i16>()).prop_map(|(lo, hi)| Operation::RemoveRange(lo, hi)),
    ]
}

/// Picks an id that was handed out at some point, live or not.
fn pick(issued: &[NodeId], raw: usize) -> Option<NodeId> {
    if issued.is_empty() {
        None
    } else {
        Some(issued[raw % issued.len()])
    }
}

proptest! {
    #[test]
    fn test_graph_stays_consistent(ops in proptest::collection::vec(operation(), 1..120)) {
        let mut graph = Graph::new();
        let mut issued_nodes: Vec<NodeId> = Vec::new();
        // Every value ever stored at an id; ids must never be reassigned.
        let mut payload_of: BTreeMap<NodeId, i16> = BTreeMap::new();
        let mut edge_record: BTreeMap<EdgeId, Edge> = BTreeMap::new();

        for op in ops {
            match op {
                Operation::AddNode(value) => {
                    let id = graph.add_node(value);
                    prop_assert!(!payload_of.contains_key(&id), "node id {} reissued", id);
                    payload_of.insert(id, value);
                    issued_nodes.push(id);
                }
                Operation::AddDirected(a, b, cost) => {
                    let (Some(a), Some(b)) = (pick(&issued_nodes, a), pick(&issued_nodes, b)) else {
                        continue;
                    };
                    let live = graph.contains_node(a) && graph.contains_node(b);
                    match graph.add_directed_edge(a, b, f32::from(cost)) {
                        Ok(id) => {
                            prop_assert!(live);
                            prop_assert!(!edge_record.contains_key(&id), "edge id {} reissued", id);
                            edge_record.insert(id, graph.get_edge_data(id).unwrap());
                        }
                        Err(_) => {
                            prop_assert!(!live);
                        }
                    }
                }
                Operation::AddUndirected(a, b, cost) => {
                    let (Some(a), Some(b)) = (pick(&issued_nodes, a), pick(&issued_nodes, b)) else {
                        continue;
                    };
                    let edges_before = graph.edge_count();
                    match graph.add_edge(a, b, f32::from(cost)) {
                        Ok((ab, ba)) => {
                            let forward = graph.get_edge_data(ab).unwrap();
                            let backward = graph.get_edge_data(ba).unwrap();
                            prop_assert_eq!((forward.source, forward.destination), (a, b));
                            prop_assert_eq!((backward.source, backward.destination), (b, a));
                            prop_assert_eq!(forward.cost, backward.cost);
                            prop_assert!(graph.get_node_edges(a).unwrap().contains(&ab));
                            prop_assert!(graph.get_node_edges(b).unwrap().contains(&ba));
                            prop_assert_eq!(graph.edge_count(), edges_before + 2);
                            edge_record.insert(ab, forward);
                            edge_record.insert(ba, backward);
                        }
                        Err(_) => {
                            prop_assert_eq!(graph.edge_count(), edges_before);
                        }
                    }
                }
                Operation::Remove(raw) => {
                    let Some(id) = pick(&issued_nodes, raw) else { continue };
                    let was_live = graph.contains_node(id);
                    let result = graph.remove_node(id);
                    prop_assert_eq!(result.is_ok(), was_live);
                    if let Ok(value) = result {
                        prop_assert_eq!(Some(&value), payload_of.get(&id));
                    }
                    prop_assert!(graph.edges().all(|e| !e.touches(id)));
                }
                Operation::RemoveRange(lo, hi) => {
                    let removed = graph.remove_between(&lo, &hi);
                    for id in &removed {
                        let value = payload_of[id];
                        prop_assert!(lo < value && value < hi);
                    }
                    for (_, &value) in graph.nodes() {
                        prop_assert!(!(lo < value && value < hi));
                    }
                }
            }

            prop_assert_eq!(graph.check_invariants(), Ok(()));

            // Surviving ids still name what they named when issued.
            for (id, value) in graph.nodes() {
                prop_assert_eq!(Some(value), payload_of.get(&id));
            }
            for edge in graph.edges() {
                prop_assert_eq!(Some(edge), edge_record.get(&edge.id));
            }
        }
    }

    #[test]
    fn test_find_node_returns_closest_within_range(
        values in proptest::collection::vec(-1000_i32..1000, 0..40),
        query in -1000_i32..1000,
        range in 0_u16..500,
    ) {
        let mut graph = Graph::new();
        for &v in &values {
            graph.add_node(v);
        }
        let range = f32::from(range);

        let found = graph.find_node(&query, metric::absolute_difference, range);

        let best = graph
            .nodes()
            .map(|(id, v)| (id, metric::absolute_difference(v, &query)))
            .filter(|&(_, d)| d <= range)
            .fold(None, |best: Option<(NodeId, f32)>, (id, d)| match best {
                Some((_, best_d)) if best_d <= d => best,
                _ => Some((id, d)),
            });

        prop_assert_eq!(found, best.map(|(id, _)| id));
        if let Some(id) = found {
            let d = metric::absolute_difference(graph.node_data(id).unwrap(), &query);
            prop_assert!(d <= range);
            for (_, v) in graph.nodes() {
                prop_assert!(metric::absolute_difference(v, &query) >= d);
            }
        }
    }
}
