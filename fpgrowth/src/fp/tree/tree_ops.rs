use super::tree::FPTree;

impl FPTree {
    /// Insert one frequency-sorted item list below the root, adding `weight`
    /// to every node on its path.
    pub fn insert_path<S: AsRef<str>>(&mut self, items: &[S], weight: usize) {
        let mut current_index = self.root_index;

        for item in items {
            let item = item.as_ref();

            if let Some(child_index) = self.find_child(current_index, item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
            } else {
                let new_index = self.add_child(current_index, item, weight);
                self.link_node(item, new_index);
                current_index = new_index;
            }
        }
    }

    /// Append `node` to the end of `label`'s header chain.
    fn link_node(&mut self, label: &str, node: usize) {
        let entry = self.header_table.entry(label.to_string()).or_default();

        match entry.tail {
            Some(tail) => self.nodes[tail].link = Some(node),
            None => entry.head = Some(node),
        }
        entry.tail = Some(node);
    }

    /// Every node labelled `label`, following the header chain.
    pub fn node_chain(&self, label: &str) -> impl Iterator<Item = usize> + '_ {
        let head = self.header_table.get(label).and_then(|entry| entry.head);
        std::iter::successors(head, move |&idx| self.nodes[idx].link)
    }

    /// Total count of `label` over all of its nodes.
    pub fn item_support(&self, label: &str) -> usize {
        self.node_chain(label).map(|idx| self.nodes[idx].count).sum()
    }

    /// Conditional pattern base of `label`: for every node carrying it, the
    /// labels of its ancestors (nearest first, root excluded) and the node's
    /// count.
    pub fn get_prefix_paths(&self, label: &str) -> Vec<(Vec<String>, usize)> {
        self.node_chain(label)
            .map(|idx| {
                let mut path = Vec::new();
                let mut current = self.nodes[idx].parent;

                while let Some(i) = current {
                    let node = &self.nodes[i];
                    if node.is_root() {
                        break;
                    }
                    if let Some(item) = &node.item {
                        path.push(item.clone());
                    }
                    current = node.parent;
                }

                (path, self.nodes[idx].count)
            })
            .collect()
    }

    /// True when no node from `node` downwards has more than one child.
    pub fn has_single_path(&self, node: usize) -> bool {
        let mut current_index = node;

        loop {
            match self.nodes[current_index].children.as_slice() {
                [] => return true,
                [only] => current_index = *only,
                _ => return false,
            }
        }
    }

    /// Labels and counts along the chain below `node`, following the first
    /// child at each step.
    pub fn single_path(&self, node: usize) -> Vec<(String, usize)> {
        let mut path = Vec::new();
        let mut current_index = node;

        while let Some(&child_index) = self.nodes[current_index].children.first() {
            let child = &self.nodes[child_index];
            if let Some(item) = &child.item {
                path.push((item.clone(), child.count));
            }
            current_index = child_index;
        }
        path
    }
}
