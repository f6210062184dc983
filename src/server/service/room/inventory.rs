//! Per-room inventory of the standard furniture and AV items.

use crate::server::{
    data::equipment::EquipmentRepository,
    error::AppError,
    model::room::{EquipmentType, Inventory, InventoryItem, InventoryUpdate, StatusCounts},
};

use super::RoomService;

/// Items every room inventory reports, in display order.
pub const INVENTORY_ITEMS: [&str; 9] = [
    "Camera",
    "Microphone",
    "Screen",
    "Projector",
    "Chair",
    "Table",
    "Whiteboard",
    "Marker",
    "Eraser",
];

/// The inventory item an equipment type counts towards: the first item whose name the
/// type's name contains, ignoring case.
pub fn classify(equipment_name: &str) -> Option<&'static str> {
    let name = equipment_name.to_lowercase();

    INVENTORY_ITEMS
        .iter()
        .copied()
        .find(|item| name.contains(&item.to_lowercase()))
}

/// The canonical spelling of an inventory item name, ignoring case and surrounding
/// whitespace.
pub fn canonical_item(name: &str) -> Option<&'static str> {
    let name = name.trim();

    INVENTORY_ITEMS
        .iter()
        .copied()
        .find(|item| item.eq_ignore_ascii_case(name))
}

/// Picks the equipment type that stands for an inventory item: an exact name match
/// wins, otherwise the first type that `classify` counts towards the item. Updates thus
/// land on a type that `inventory` reports under the same item.
fn type_for_item<'t>(types: &'t [EquipmentType], item: &str) -> Option<&'t EquipmentType> {
    types
        .iter()
        .find(|t| t.name.eq_ignore_ascii_case(item))
        .or_else(|| types.iter().find(|t| classify(&t.name) == Some(item)))
}

impl RoomService<'_> {
    /// Gets a room's inventory with quantities per equipment status for every item.
    pub async fn inventory(&self, room_id: i32) -> Result<Inventory, AppError> {
        let room = self.load(room_id).await?;
        let equipment = EquipmentRepository::new(self.db)
            .get_for_room(room_id)
            .await?;

        let mut counts = [StatusCounts::default(); INVENTORY_ITEMS.len()];
        for row in equipment {
            if let Some(idx) = classify(&row.name)
                .and_then(|item| INVENTORY_ITEMS.iter().position(|i| *i == item))
            {
                counts[idx].add(row.status, row.quantity);
            }
        }

        Ok(Inventory {
            room_id: room.id,
            room_name: room.name,
            items: INVENTORY_ITEMS
                .iter()
                .zip(counts)
                .map(|(item, counts)| InventoryItem {
                    item: item.to_string(),
                    counts,
                })
                .collect(),
        })
    }

    /// Sets quantity and status of inventory items in a room.
    ///
    /// Equipment types missing for an item are created under the item's canonical name.
    /// The room's row for each type is updated, or inserted when absent.
    ///
    /// # Arguments
    /// - `room_id` - Room from the request path
    /// - `body_room_id` - Room named in the request body, if any
    /// - `updates` - Items to set
    ///
    /// # Returns
    /// - `Ok(Inventory)` - The room's inventory after the update
    /// - `Err(AppError::BadRequest)` - Body room differs from the path, an item name is
    ///   not a standard inventory item, or a quantity is negative
    /// - `Err(AppError::NotFound)` - Unknown room
    pub async fn update_inventory(
        &self,
        room_id: i32,
        body_room_id: Option<i32>,
        updates: Vec<InventoryUpdate>,
    ) -> Result<Inventory, AppError> {
        if body_room_id.is_some_and(|id| id != room_id) {
            return Err(AppError::BadRequest(
                "Room in body does not match room in path".to_string(),
            ));
        }
        self.load(room_id).await?;

        let mut resolved = Vec::with_capacity(updates.len());
        for update in updates {
            let Some(item) = canonical_item(&update.item) else {
                return Err(AppError::BadRequest(format!(
                    "'{}' is not an inventory item",
                    update.item
                )));
            };
            if update.quantity < 0 {
                return Err(AppError::BadRequest(
                    "Quantity must not be negative".to_string(),
                ));
            }
            resolved.push((item, update));
        }

        let repo = EquipmentRepository::new(self.db);
        let mut types = repo.get_types().await?;

        for (item, update) in resolved {
            let type_id = match type_for_item(&types, item) {
                Some(t) => t.id,
                None => {
                    let created = repo.create_type(item).await?;
                    tracing::debug!(item, type_id = created.id, "Created equipment type");
                    let id = created.id;
                    types.push(created);
                    id
                }
            };

            repo.upsert_room_item(room_id, type_id, update.quantity, update.status)
                .await?;
        }

        tracing::info!(room_id, "Room inventory updated");

        self.inventory(room_id).await
    }
}
