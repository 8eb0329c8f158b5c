use std::collections::HashMap;

/// Label -> occurrence count, restricted to labels meeting the threshold.
pub type FrequencyTable = HashMap<String, usize>;

/// A vertex of the FP-tree, stored in the owning tree's arena.
///
/// `parent` and `link` are arena indices and never own anything; `link`
/// points to the next node elsewhere in the tree carrying the same label.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<String>,
    pub count: usize,
    pub parent: Option<usize>,
    pub link: Option<usize>,
    /// Child indices in creation order.
    pub children: Vec<usize>,
}

/// Ends of one label's same-label node chain.
///
/// `head` is the first node created with the label. `tail` only speeds up
/// appends; the chain is always walked from `head` through `link`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderEntry {
    pub head: Option<usize>,
    pub tail: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub frequent: FrequencyTable,
    pub header_table: HashMap<String, HeaderEntry>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root(item: Option<String>, count: usize) -> Self {
        Self {
            item,
            count,
            parent: None,
            link: None,
            children: Vec::new(),
        }
    }

    pub fn new_item(item: &str, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item.to_string()),
            count,
            parent: Some(parent),
            link: None,
            children: Vec::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl FPTree {
    /// A tree holding only its root, with no frequent items.
    pub fn with_root(
        item: Option<String>,
        count: usize,
        frequent: FrequencyTable,
        header_table: HashMap<String, HeaderEntry>,
    ) -> Self {
        Self {
            nodes: vec![FPNode::new_root(item, count)],
            frequent,
            header_table,
            root_index: 0,
        }
    }

    pub fn root(&self) -> &FPNode {
        &self.nodes[self.root_index]
    }

    /// Label the tree is conditioned on; `None` for the top-level tree.
    pub fn root_item(&self) -> Option<&str> {
        self.root().item.as_deref()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Linear scan of `node`'s children for one labelled `label`.
    pub fn find_child(&self, node: usize, label: &str) -> Option<usize> {
        self.nodes[node]
            .children
            .iter()
            .copied()
            .find(|&child| self.nodes[child].item.as_deref() == Some(label))
    }

    /// Create a child of `node` and return its index. Header chains are
    /// maintained by the caller.
    pub fn add_child(&mut self, node: usize, label: &str, count: usize) -> usize {
        let index = self.nodes.len();
        self.nodes.push(FPNode::new_item(label, count, node));
        self.nodes[node].children.push(index);
        index
    }
}
