//! Tree Utilities
//!
//! Helpers for rendering items with sub-items.

use crate::models::{Item, ItemId};
use std::collections::HashMap;

fn children_map(items: &[Item]) -> HashMap<Option<ItemId>, Vec<&Item>> {
    let mut map: HashMap<Option<ItemId>, Vec<&Item>> = HashMap::new();
    for item in items {
        map.entry(item.parent_item_id).or_default().push(item);
    }
    // Siblings render in creation order
    for children in map.values_mut() {
        children.sort_by_key(|i| i.id);
    }
    map
}

/// Render items as indented tree using recursive DFS
/// Returns (Item, depth) pairs in display order.
/// Items whose parent is missing are unreachable and left out.
pub fn flatten_tree(items: &[Item]) -> Vec<(Item, usize)> {
    fn collect(
        parent_id: Option<ItemId>,
        depth: usize,
        children_map: &HashMap<Option<ItemId>, Vec<&Item>>,
        result: &mut Vec<(Item, usize)>,
    ) {
        if let Some(children) = children_map.get(&parent_id) {
            for item in children {
                result.push(((*item).clone(), depth));
                collect(Some(item.id), depth + 1, children_map, result);
            }
        }
    }

    let map = children_map(items);
    let mut result = Vec::new();
    collect(None, 0, &map, &mut result);
    result
}

/// Ids of `root` and every item nested below it
pub fn subtree_ids(items: &[Item], root: ItemId) -> Vec<ItemId> {
    let map = children_map(items);
    let mut result = vec![root];
    let mut i = 0;
    while i < result.len() {
        if let Some(children) = map.get(&Some(result[i])) {
            result.extend(children.iter().map(|c| c.id));
        }
        i += 1;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: ItemId, parent_item_id: Option<ItemId>) -> Item {
        Item {
            id,
            content: format!("Item {}", id),
            url: None,
            checked: false,
            parent_item_id,
        }
    }

    #[test]
    fn test_flatten_tree() {
        let items = vec![
            make_item(1, None),    // Root 1
            make_item(5, Some(3)), // Child of 3 (grandchild of 1)
            make_item(2, None),    // Root 2
            make_item(4, Some(1)), // Child of 1
            make_item(3, Some(1)), // Child of 1
        ];

        let tree = flatten_tree(&items);

        // Should be: 1 (depth 0), 3 (depth 1), 5 (depth 2), 4 (depth 1), 2 (depth 0)
        assert_eq!(tree.len(), 5);
        assert_eq!(tree[0].0.id, 1); assert_eq!(tree[0].1, 0);
        assert_eq!(tree[1].0.id, 3); assert_eq!(tree[1].1, 1);
        assert_eq!(tree[2].0.id, 5); assert_eq!(tree[2].1, 2);
        assert_eq!(tree[3].0.id, 4); assert_eq!(tree[3].1, 1);
        assert_eq!(tree[4].0.id, 2); assert_eq!(tree[4].1, 0);
    }

    #[test]
    fn test_orphans_are_hidden() {
        let items = vec![make_item(1, None), make_item(2, Some(99))];
        let tree = flatten_tree(&items);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].0.id, 1);
    }

    #[test]
    fn test_subtree_ids() {
        let items = vec![
            make_item(1, None),
            make_item(2, Some(1)),
            make_item(3, Some(2)),
            make_item(4, None),
        ];
        let mut ids = subtree_ids(&items, 1);
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(subtree_ids(&items, 4), vec![4]);
    }
}
