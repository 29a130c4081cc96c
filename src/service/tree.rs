//! Flattening a finished [`crate::tableau::Tableau`] into the nested
//! [`TreeNode`]/[`NodeView`] shape the prove API serializes (spec §6).

use std::collections::BTreeMap;

use crate::tableau::{BranchId, NodeId, Tableau};
use crate::writer::{self, RenderSet};

use super::types::{NodeView, TreeNode};

pub fn build(tableau: &Tableau, render_set: RenderSet) -> TreeNode {
    let mut children_of: BTreeMap<BranchId, Vec<BranchId>> = BTreeMap::new();
    for branch in tableau.branches() {
        if let Some(origin) = branch.origin() {
            children_of.entry(origin).or_default().push(branch.id());
        }
    }

    let model_index: BTreeMap<BranchId, usize> =
        tableau.open_branches().enumerate().map(|(i, b)| (b.id(), i)).collect();

    let mut counter = 0u32;
    build_node(tableau, tableau.root(), &children_of, &model_index, render_set, &mut counter)
}

fn common_prefix_len(parent: &[NodeId], child: &[NodeId]) -> usize {
    parent.iter().zip(child.iter()).take_while(|(a, b)| a == b).count()
}

fn build_node(
    tableau: &Tableau,
    id: BranchId,
    children_of: &BTreeMap<BranchId, Vec<BranchId>>,
    model_index: &BTreeMap<BranchId, usize>,
    render_set: RenderSet,
    counter: &mut u32,
) -> TreeNode {
    let branch = tableau.branch(id);
    let left = *counter;
    *counter += 1;

    let segment_start = match branch.origin() {
        Some(parent) => common_prefix_len(tableau.branch(parent).nodes(), branch.nodes()),
        None => 0,
    };
    let node_segment: Vec<NodeView> =
        branch.nodes()[segment_start..].iter().map(|&n| node_view(tableau, branch.id(), n, render_set)).collect();
    let step = node_segment.first().map(|nv| nv.step).unwrap_or(0);

    let no_children = Vec::new();
    let child_ids = children_of.get(&id).unwrap_or(&no_children);
    let children: Vec<TreeNode> =
        child_ids.iter().map(|&c| build_node(tableau, c, children_of, model_index, render_set, counter)).collect();

    let has_open = !branch.closed() || children.iter().any(|c| c.has_open);
    let has_closed = branch.closed() || children.iter().any(|c| c.has_closed);
    let right = *counter;
    *counter += 1;

    TreeNode {
        id: id.0,
        step,
        depth: depth_of(tableau, id),
        left,
        right,
        width: right - left,
        has_open,
        has_closed,
        closed: branch.closed(),
        leaf: children.is_empty(),
        closed_step: branch.closed_step(),
        model_id: model_index.get(&id).copied(),
        node_segment,
        children,
    }
}

fn depth_of(tableau: &Tableau, id: BranchId) -> u32 {
    let mut depth = 0;
    let mut current = tableau.branch(id).origin();
    while let Some(parent) = current {
        depth += 1;
        current = tableau.branch(parent).origin();
    }
    depth
}

fn node_view(tableau: &Tableau, branch: BranchId, id: NodeId, render_set: RenderSet) -> NodeView {
    let node = tableau.node(id);
    let stats = tableau.branch(branch).stats(id);
    NodeView {
        id: id.0,
        step: stats.step_added,
        ticked: stats.ticked,
        tick_step: stats.step_ticked,
        sentence: node.sentence.as_ref().map(|s| writer::write(s, render_set)),
        world: node.world,
        designation: node.designated,
        access: match (node.world1, node.world2) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        },
        flag: node.flag.map(|f| format!("{f:?}").to_lowercase()),
        ellipsis: node.ellipsis,
    }
}
