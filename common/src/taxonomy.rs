//! Two-level category -> sub-item lookup tables and the rules for storing picks.


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyCategory {
    pub name: &'static str,
    pub sub_items: &'static [&'static str],
}

/// Ordered mapping from a top-level category to its ordered sub-items.
///
/// Tables are static; every dimension points at one of the constants in
/// [`crate::taxonomy_tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Taxonomy {
    categories: &'static [TaxonomyCategory],
}

impl Taxonomy {
    pub const fn new(categories: &'static [TaxonomyCategory]) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &'static [TaxonomyCategory] {
        self.categories
    }

    pub fn category_names(&self) -> impl Iterator<Item = &'static str> {
        self.categories.iter().map(|c| c.name)
    }

    pub fn sub_items(&self, category: &str) -> Option<&'static [&'static str]> {
        self.categories.iter().find(|c| c.name == category).map(|c| c.sub_items)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.name == category)
    }

    pub fn contains_sub_item(&self, sub_item: &str) -> bool {
        self.categories.iter().any(|c| c.sub_items.contains(&sub_item))
    }

    /// Categories whose sub-item list holds `sub_item`, in table order.
    pub fn categories_containing<'a>(&self, sub_item: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.categories
            .iter()
            .filter(move |c| c.sub_items.contains(&sub_item))
            .map(|c| c.name)
    }
}


/// How a tapped sub-item is turned into the value kept in the selection set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubItemRule {
    /// The sub-item label is stored as-is.
    Plain,
    /// A sub-item with this label stands for the whole active category, so the
    /// category name is stored instead of the label.
    WholeCategoryAlias(&'static str),
}

impl SubItemRule {
    pub fn stored_value(&self, active_category: &str, sub_item: &str) -> String {
        match self {
            SubItemRule::WholeCategoryAlias(alias) if *alias == sub_item => active_category.to_string(),
            _ => sub_item.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TABLE: &[TaxonomyCategory] = &[
        TaxonomyCategory { name: "a", sub_items: &["x", "y"] },
        TaxonomyCategory { name: "b", sub_items: &["y", "z"] },
    ];

    #[test]
    fn lookups_follow_table_order() {
        let taxonomy = Taxonomy::new(TABLE);
        assert_eq!(taxonomy.category_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(taxonomy.sub_items("b"), Some(&["y", "z"][..]));
        assert_eq!(taxonomy.sub_items("c"), None);
        assert_eq!(taxonomy.categories_containing("y").collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(taxonomy.contains_sub_item("z"));
        assert!(!taxonomy.contains_sub_item("w"));
    }

    #[test]
    fn whole_category_alias_stores_category_name() {
        let rule = SubItemRule::WholeCategoryAlias("전체");
        assert_eq!(rule.stored_value("서울", "전체"), "서울");
        assert_eq!(rule.stored_value("서울", "강남구"), "강남구");
        assert_eq!(SubItemRule::Plain.stored_value("서울", "전체"), "전체");
    }
}
