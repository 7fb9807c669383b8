use crate::listing::{CategoryGroup, Listing};
use crate::models::{Category, Item};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: i64,
    pub description: String,
    pub priority: i64,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            description: category.description,
            priority: category.priority,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub quantity: f64,
    pub price: f64,
    pub done: bool,
    pub category_id: i64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            quantity: item.quantity,
            price: item.price,
            done: item.done,
            category_id: item.category_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub category: CategoryResponse,
    pub items: Vec<ItemResponse>,
}

impl From<CategoryGroup> for GroupResponse {
    fn from(group: CategoryGroup) -> Self {
        Self {
            category: CategoryResponse::from(group.category),
            items: group.items.into_iter().map(ItemResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub groups: Vec<GroupResponse>,
    pub total: f64,
    /// Total with two decimals and thousands separators
    pub total_display: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        let total_display = listing.formatted_total();
        Self {
            groups: listing.groups.into_iter().map(GroupResponse::from).collect(),
            total: listing.total,
            total_display,
        }
    }
}
