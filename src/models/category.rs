use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const CATEGORY_TYPE_PRODUCT: &str = "product";
pub const CATEGORY_TYPE_SERVICE: &str = "service";
pub const CATEGORY_TYPE_TENDER: &str = "tender";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ItemCategory {
    pub id: String,
    pub category: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub category_type: String,
    pub parent_id: Option<String>,
}

/// A top-level category together with its direct children.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTree {
    #[serde(flatten)]
    pub category: ItemCategory,
    pub subcategories: Vec<ItemCategory>,
}

impl ItemCategory {
    pub fn is_browsable_root(&self) -> bool {
        self.parent_id.is_none()
            && (self.category_type == CATEGORY_TYPE_PRODUCT
                || self.category_type == CATEGORY_TYPE_SERVICE)
    }
}

/// Nests subcategories under their product/service roots, keeping input order.
pub fn build_category_tree(rows: Vec<ItemCategory>) -> Vec<CategoryTree> {
    let (subcategories, roots): (Vec<_>, Vec<_>) =
        rows.into_iter().partition(|c| c.parent_id.is_some());

    roots
        .into_iter()
        .filter(ItemCategory::is_browsable_root)
        .map(|category| {
            let children = subcategories
                .iter()
                .filter(|s| s.parent_id.as_deref() == Some(category.id.as_str()))
                .cloned()
                .collect();
            CategoryTree {
                category,
                subcategories: children,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str, kind: &str, parent: Option<&str>) -> ItemCategory {
        ItemCategory {
            id: id.into(),
            category: id.to_uppercase(),
            category_type: kind.into(),
            parent_id: parent.map(Into::into),
        }
    }

    #[test]
    fn nests_children_and_drops_tender_roots() {
        let tree = build_category_tree(vec![
            cat("cement", "product", None),
            cat("opc", "product", Some("cement")),
            cat("rental", "service", None),
            cat("works", "tender", None),
        ]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].category.id, "cement");
        assert_eq!(tree[0].subcategories.len(), 1);
        assert!(tree[1].subcategories.is_empty());
    }
}
