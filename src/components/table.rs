//! Data tables with head, body, and foot sections.

use html5ever::local_name;

use crate::element::{BaseElement, Element, ElementExt, Tag};
use crate::els;

/// A `<table>` whose sections are created on first use and kept in
/// `thead`, `tbody`, `tfoot` order whatever order rows are added in.
pub struct Table {
    base: BaseElement,
}

impl Table {
    pub fn new() -> Self {
        Self {
            base: BaseElement::new(local_name!("table"), "<table{{.Attributes}}>{{.Content}}</table>"),
        }
    }

    /// Append a header row of `<th>` cells.
    pub fn append_head(&mut self, columns: &[&str]) -> &mut Self {
        self.append_row_to(local_name!("thead"), columns, els::th_text)
    }

    /// Append a body row of `<td>` cells.
    pub fn append_row(&mut self, data: &[&str]) -> &mut Self {
        self.append_row_to(local_name!("tbody"), data, els::td_text)
    }

    /// Append a footer row of `<td>` cells.
    pub fn append_foot(&mut self, data: &[&str]) -> &mut Self {
        self.append_row_to(local_name!("tfoot"), data, els::td_text)
    }

    fn append_row_to(
        &mut self,
        section: Tag,
        cells: &[&str],
        cell: fn(&str) -> els::Container,
    ) -> &mut Self {
        let row = cells
            .iter()
            .fold(els::tr(), |row, text| row.with_child(cell(text)));
        self.section_mut(section).append(row.boxed());
        self
    }

    fn section_mut(&mut self, tag: Tag) -> &mut dyn Element {
        let children = &mut self.base.children;
        let index = match children.iter().position(|c| c.tag() == &tag) {
            Some(index) => index,
            None => {
                let rank = section_rank(&tag);
                let at = children
                    .iter()
                    .filter(|c| section_rank(c.tag()) < rank)
                    .count();
                children.insert(at, els::Container::new(tag).boxed());
                at
            }
        };
        children[index].as_mut()
    }
}

fn section_rank(tag: &Tag) -> u8 {
    if *tag == local_name!("thead") {
        0
    } else if *tag == local_name!("tbody") {
        1
    } else if *tag == local_name!("tfoot") {
        2
    } else {
        3
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Element for Table {
    fn base(&self) -> &BaseElement {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseElement {
        &mut self.base
    }
}
