//! # World State
//!
//! Holds every live item and mobile plus the terrain and statics they move
//! through.
//!
//! # Thread Safety
//! Collections are `DashMap`s and each mobile sits behind its own `Mutex`,
//! so moves and item changes from different connections can run in
//! parallel. No method holds a guard on one map while waiting on another
//! map's write lock in the opposite order.
//!
//! Changes to where items are (ground, container, removal) take the
//! placement lock for their whole check-then-write sequence, so capacity and
//! containment checks still hold when the change lands. Movement never takes
//! it.

use crate::entity::{Item, ItemKind, Mobile, Placement};
use crate::error::{GameError, Result};
use dashmap::DashMap;
use parking_lot::Mutex;
use shard_config::ServerConfig;
use shard_core::{Graphic, Point2D, Point3D, Serial, SerialGenerator, ShardError};
use shard_world::{StaticInstance, StaticTile, StaticsIndex, StaticsService, TerrainMap};
use std::sync::Arc;

/// The live world
pub struct World {
    name: String,
    pub(crate) terrain: Arc<TerrainMap>,
    pub(crate) statics: Arc<StaticsIndex>,
    pub(crate) serials: SerialGenerator,

    /// All items, wherever they are
    pub(crate) items: DashMap<Serial, Item>,

    /// All mobiles
    pub(crate) mobiles: DashMap<Serial, Arc<Mutex<Mobile>>>,

    /// Items lying on each map cell, in drop order
    pub(crate) ground: DashMap<Point2D, Vec<Serial>>,

    /// Items inside each container, in insertion order
    pub(crate) contents: DashMap<Serial, Vec<Serial>>,

    /// Serializes placement changes
    pub(crate) placement: Mutex<()>,

    pub(crate) debug_move: bool,
    pub(crate) max_container_items: usize,
}

impl World {
    /// Create an empty world
    ///
    /// # Arguments
    /// * `config` - Server options
    /// * `terrain` - Ground of the map, sized as `mapwidth` x `mapheight`
    /// * `statics` - Fixed objects placed on the map
    ///
    /// # Errors
    /// `ShardError::Config` if the terrain does not have the configured size
    pub fn new(
        config: &ServerConfig,
        terrain: Arc<TerrainMap>,
        statics: Arc<StaticsIndex>,
    ) -> Result<Self> {
        if terrain.width() != config.map_width || terrain.height() != config.map_height {
            return Err(ShardError::Config(format!(
                "Terrain is {}x{} but the map is configured as {}x{}",
                terrain.width(),
                terrain.height(),
                config.map_width,
                config.map_height
            ))
            .into());
        }

        tracing::debug!(
            "Creating world '{}': map={}x{}, statics={}",
            config.name,
            terrain.width(),
            terrain.height(),
            statics.len()
        );

        Ok(Self {
            name: config.name.clone(),
            terrain,
            statics,
            serials: SerialGenerator::new(),
            items: DashMap::new(),
            mobiles: DashMap::new(),
            ground: DashMap::new(),
            contents: DashMap::new(),
            placement: Mutex::new(()),
            debug_move: config.debug_move,
            max_container_items: config.max_container_items,
        })
    }

    /// Shard name from the server options
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn terrain(&self) -> &Arc<TerrainMap> {
        &self.terrain
    }

    /// Statics plus ground items, as movement sees them
    pub fn view(&self) -> WorldView<'_> {
        WorldView { world: self }
    }

    /// Add a mobile to the world
    ///
    /// # Returns
    /// The new mobile's serial
    pub fn spawn_mobile(&self, name: &str, graphic: Graphic, location: Point3D) -> Serial {
        let serial = self.serials.next_mobile();
        tracing::debug!("Spawning mobile {} '{}' at {}", serial, name, location);

        let mobile = Mobile::new(serial, name, graphic, location);
        self.mobiles.insert(serial, Arc::new(Mutex::new(mobile)));
        serial
    }

    /// Get a mobile handle by serial
    pub fn mobile(&self, serial: Serial) -> Option<Arc<Mutex<Mobile>>> {
        self.mobiles.get(&serial).map(|entry| entry.clone())
    }

    pub fn remove_mobile(&self, serial: Serial) -> Result<()> {
        self.mobiles
            .remove(&serial)
            .ok_or(GameError::UnknownObject(serial))?;
        self.serials.release(serial);
        tracing::debug!("Removed mobile {}", serial);
        Ok(())
    }

    /// Create an item in limbo
    ///
    /// The item is invisible until it is placed on the ground or in a
    /// container.
    pub fn create_item(&self, graphic: Graphic, kind: ItemKind) -> Serial {
        let serial = self.serials.next_item();
        self.items.insert(serial, Item::new(serial, graphic, kind));
        tracing::debug!("Created item {} (graphic 0x{:04X}, {:?})", serial, graphic.get(), kind);
        serial
    }

    /// Get a copy of an item
    pub fn item(&self, serial: Serial) -> Option<Item> {
        self.items.get(&serial).map(|entry| entry.clone())
    }

    /// Change the stack size of an item
    pub fn set_amount(&self, serial: Serial, amount: u16) -> Result<()> {
        let mut item = self
            .items
            .get_mut(&serial)
            .ok_or(GameError::UnknownObject(serial))?;
        item.amount = amount;
        Ok(())
    }

    /// Delete an item, and everything inside it if it is a container
    pub fn remove_item(&self, serial: Serial) -> Result<Item> {
        let _placement = self.placement.lock();
        let (_, item) = self
            .items
            .remove(&serial)
            .ok_or(GameError::UnknownObject(serial))?;
        self.unlink(serial, item.placement, item.location);

        self.forget_contents(serial);

        self.serials.release(serial);
        tracing::debug!("Removed item {}", serial);
        Ok(item)
    }

    /// Drop everything inside `container`, recursively
    fn forget_contents(&self, container: Serial) {
        if let Some((_, inner)) = self.contents.remove(&container) {
            for child in inner {
                if self.items.remove(&child).is_some() {
                    self.forget_contents(child);
                    self.serials.release(child);
                }
            }
        }
    }

    /// Serials of the items lying on a cell, in drop order
    pub fn items_on_ground(&self, at: Point2D) -> Vec<Serial> {
        self.ground.get(&at).map(|list| list.clone()).unwrap_or_default()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn mobile_count(&self) -> usize {
        self.mobiles.len()
    }

    /// Move an item to a new placement and location
    ///
    /// Callers hold the placement lock.
    ///
    /// # Returns
    /// A copy of the item after the change
    pub(crate) fn relocate(&self, serial: Serial, placement: Placement, location: Point3D) -> Result<Item> {
        let mut entry = self
            .items
            .get_mut(&serial)
            .ok_or(GameError::UnknownObject(serial))?;

        let previous = (entry.placement, entry.location);
        entry.placement = placement;
        entry.location = location;
        let item = entry.clone();

        self.unlink(serial, previous.0, previous.1);
        self.link(serial, placement, location);
        drop(entry);

        Ok(item)
    }

    pub(crate) fn link(&self, serial: Serial, placement: Placement, location: Point3D) {
        match placement {
            Placement::Limbo => {}
            Placement::Ground => self.ground.entry(location.xy()).or_default().push(serial),
            Placement::Container(container) => {
                self.contents.entry(container).or_default().push(serial)
            }
        }
    }

    fn unlink(&self, serial: Serial, placement: Placement, location: Point3D) {
        match placement {
            Placement::Limbo => {}
            Placement::Ground => {
                let at = location.xy();
                if let Some(mut list) = self.ground.get_mut(&at) {
                    list.retain(|s| *s != serial);
                }
                self.ground.remove_if(&at, |_, list| list.is_empty());
            }
            Placement::Container(container) => {
                if let Some(mut list) = self.contents.get_mut(&container) {
                    list.retain(|s| *s != serial);
                }
            }
        }
    }
}

/// Read-only statics view that also sees items on the ground
///
/// Instances come back as the fixed statics of the cell first, then the
/// ground items in drop order. A ground item's graphic is its static type id.
pub struct WorldView<'a> {
    world: &'a World,
}

impl StaticsService for WorldView<'_> {
    fn instances_at(&self, at: Point2D) -> Vec<StaticInstance> {
        let mut instances = self.world.statics.instances_at(at);

        let dropped = self.world.items_on_ground(at);
        for serial in dropped {
            if let Some(item) = self.world.items.get(&serial) {
                if item.is_on_ground() {
                    instances.push(StaticInstance::new(item.graphic.get(), item.location));
                }
            }
        }

        instances
    }

    fn descriptor_of(&self, type_id: u16) -> shard_world::Result<&StaticTile> {
        self.world.statics.descriptor_of(type_id)
    }
}
