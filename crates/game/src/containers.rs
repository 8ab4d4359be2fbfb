//! # Item Placement
//!
//! Putting items on the ground and into containers, and listing container
//! contents. Each operation returns the frame to send to clients that can
//! see the change.

use crate::entity::{Item, ItemKind, Placement};
use crate::error::{GameError, Result};
use crate::world::World;
use bytes::{Bytes, BytesMut};
use shard_core::{Graphic, Point2D, Point3D, Serial};
use shard_protocol::{
    build_full_items_container, build_item_in_container, build_send_object, ItemSnapshot,
    ObjectSnapshot,
};

impl World {
    /// Put an item on the ground
    ///
    /// Takes the item out of whatever held it before. While on the ground
    /// the item takes part in movement resolution.
    ///
    /// # Returns
    /// SendObject frame showing the item
    pub fn place_item_on_ground(&self, serial: Serial, location: Point3D) -> Result<Bytes> {
        let item = {
            let _placement = self.placement.lock();
            self.relocate(serial, Placement::Ground, location)?
        };
        tracing::debug!("Item {} placed on ground at {}", serial, location);

        let mut buf = BytesMut::with_capacity(shard_protocol::SEND_OBJECT_LEN as usize);
        build_send_object(&mut buf, &ObjectSnapshot::item(&item));
        Ok(buf.freeze())
    }

    /// Create a new item directly inside a container
    ///
    /// # Arguments
    /// * `container` - Serial of the container item
    /// * `graphic` - Art id of the new item
    /// * `amount` - Stack size
    /// * `position` - Where the item shows up in the container gump
    ///
    /// # Returns
    /// The new item's serial and the ItemInContainer frame
    pub fn create_item_in_container(
        &self,
        container: Serial,
        graphic: Graphic,
        amount: u16,
        position: Point2D,
    ) -> Result<(Serial, Bytes)> {
        let placement = self.placement.lock();
        let holder = self.container_item(container)?;
        self.check_capacity(container)?;

        let serial = self.serials.next_item();
        let mut item = Item::new(serial, graphic, ItemKind::Plain);
        item.amount = amount;
        item.location = position.with_z(0);
        item.placement = Placement::Container(container);

        let snapshot = ItemSnapshot::of(&item);
        self.items.insert(serial, item);
        self.link(serial, Placement::Container(container), position.with_z(0));
        drop(placement);
        tracing::debug!("Created item {} x{} in container {}", serial, amount, container);

        let mut buf = BytesMut::with_capacity(shard_protocol::ITEM_IN_CONTAINER_LEN as usize);
        build_item_in_container(&mut buf, &snapshot, &holder);
        Ok((serial, buf.freeze()))
    }

    /// Move an existing item into a container
    ///
    /// # Returns
    /// The ItemInContainer frame
    pub fn add_item_to_container(
        &self,
        serial: Serial,
        container: Serial,
        position: Point2D,
    ) -> Result<Bytes> {
        let placement = self.placement.lock();
        let holder = self.container_item(container)?;
        if serial == container || self.is_inside(container, serial) {
            return Err(GameError::ContainerCycle { item: serial, container });
        }

        let already_inside = self
            .item(serial)
            .ok_or(GameError::UnknownObject(serial))?
            .container()
            == Some(container);
        if !already_inside {
            self.check_capacity(container)?;
        }

        let item = self.relocate(serial, Placement::Container(container), position.with_z(0))?;
        drop(placement);
        tracing::debug!("Item {} moved into container {}", serial, container);

        let mut buf = BytesMut::with_capacity(shard_protocol::ITEM_IN_CONTAINER_LEN as usize);
        build_item_in_container(&mut buf, &ItemSnapshot::of(&item), &holder);
        Ok(buf.freeze())
    }

    /// List a container for a client opening it
    ///
    /// # Returns
    /// The FullItemsContainer frame, items in insertion order
    ///
    /// # Errors
    /// `GameError::Shard` wrapping a protocol error if the listing does not
    /// fit one frame
    pub fn open_container(&self, container: Serial) -> Result<Bytes> {
        let holder = self.container_item(container)?;
        let items = self.container_contents(container)?;
        let snapshots: Vec<ItemSnapshot> = items.iter().map(ItemSnapshot::of).collect();

        let mut buf = BytesMut::new();
        build_full_items_container(&mut buf, &snapshots, &holder)?;
        tracing::debug!("Opened container {} ({} items)", container, snapshots.len());
        Ok(buf.freeze())
    }

    /// Copies of the items in a container, in insertion order
    pub fn container_contents(&self, container: Serial) -> Result<Vec<Item>> {
        self.container_item(container)?;

        let serials = self
            .contents
            .get(&container)
            .map(|list| list.clone())
            .unwrap_or_default();
        Ok(serials.into_iter().filter_map(|serial| self.item(serial)).collect())
    }

    fn container_item(&self, serial: Serial) -> Result<Item> {
        let item = self.item(serial).ok_or(GameError::UnknownObject(serial))?;
        if !item.is_container() {
            return Err(GameError::NotAContainer(serial));
        }
        Ok(item)
    }

    fn check_capacity(&self, container: Serial) -> Result<()> {
        let held = self.contents.get(&container).map_or(0, |list| list.len());
        if held >= self.max_container_items {
            tracing::debug!("Container {} is full ({} items)", container, held);
            return Err(GameError::ContainerFull(container));
        }
        Ok(())
    }

    /// Whether `inner` sits somewhere inside `outer`
    fn is_inside(&self, inner: Serial, outer: Serial) -> bool {
        let mut current = self.item(inner).and_then(|item| item.container());
        while let Some(parent) = current {
            if parent == outer {
                return true;
            }
            current = self.item(parent).and_then(|item| item.container());
        }
        false
    }
}
