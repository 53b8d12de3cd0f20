//! Pre-order tree queries over elements.
//!
//! Queries visit the starting node first, then each child subtree in order.

use super::Element;

/// First node matching `pred`.
pub fn find_first<'a>(
    el: &'a dyn Element,
    pred: &dyn Fn(&dyn Element) -> bool,
) -> Option<&'a dyn Element> {
    if pred(el) {
        return Some(el);
    }
    el.children()
        .iter()
        .find_map(|child| find_first(child.as_ref(), pred))
}

/// First node matching `pred`, mutably.
pub fn find_first_mut<'a>(
    el: &'a mut dyn Element,
    pred: &dyn Fn(&dyn Element) -> bool,
) -> Option<&'a mut dyn Element> {
    if pred(&*el) {
        return Some(el);
    }
    for child in el.children_mut() {
        if let Some(found) = find_first_mut(child.as_mut(), pred) {
            return Some(found);
        }
    }
    None
}

/// Every node matching `pred`.
pub fn collect_matching<'a>(
    el: &'a dyn Element,
    pred: &dyn Fn(&dyn Element) -> bool,
) -> Vec<&'a dyn Element> {
    let mut found = Vec::new();
    collect_into(el, pred, &mut found);
    found
}

fn collect_into<'a>(
    el: &'a dyn Element,
    pred: &dyn Fn(&dyn Element) -> bool,
    found: &mut Vec<&'a dyn Element>,
) {
    if pred(el) {
        found.push(el);
    }
    for child in el.children() {
        collect_into(child.as_ref(), pred, found);
    }
}
