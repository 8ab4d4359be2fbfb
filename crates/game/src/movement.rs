//! # Movement Handling
//!
//! Applies walk requests to mobiles. The step is resolved against the
//! terrain and everything standing on it, then written back while the
//! mobile's lock is held so two requests for the same mobile can never
//! both start from the old position.

use crate::error::{GameError, Result};
use crate::world::World;
use bytes::{Bytes, BytesMut};
use shard_core::{Direction, Serial};
use shard_protocol::{build_send_object, ObjectSnapshot};
use shard_world::{ElevationResolver, Resolution};

/// Result of one walk request
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub resolution: Resolution,

    /// SendObject frame with the mobile's state after the request
    ///
    /// Always present: a blocked step still turns the mobile, and the
    /// frame puts the client back in sync with the real position.
    pub packet: Bytes,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        !self.resolution.is_blocked()
    }
}

impl World {
    /// Walk a mobile one tile
    ///
    /// The mobile turns to face `dir` whether or not the step succeeds.
    ///
    /// # Errors
    /// - `GameError::UnknownObject` if no mobile has this serial
    /// - `GameError::World` if the world data around the mobile is broken
    pub fn move_mobile(&self, serial: Serial, dir: Direction) -> Result<MoveOutcome> {
        let handle = self.mobile(serial).ok_or(GameError::UnknownObject(serial))?;
        let mut mobile = handle.lock();

        let view = self.view();
        let resolver = ElevationResolver::new(self.terrain.as_ref(), &view);

        let resolution = if self.debug_move {
            let (resolution, trace) = resolver.resolve_traced(mobile.location, dir)?;
            for event in trace.events() {
                tracing::debug!("move {} {:?}: {}", serial, dir, event);
            }
            resolution
        } else {
            resolver.resolve(mobile.location, dir)?
        };

        mobile.facing = dir;
        match resolution {
            Resolution::Walkable(dest) => {
                tracing::trace!("Mobile {} moved {} -> {}", serial, mobile.location, dest);
                mobile.location = dest;
            }
            Resolution::Blocked(reason) => {
                tracing::debug!("Mobile {} blocked at {}: {:?}", serial, mobile.location, reason);
            }
        }

        let mut buf = BytesMut::with_capacity(shard_protocol::SEND_OBJECT_LEN as usize);
        build_send_object(&mut buf, &ObjectSnapshot::mobile(&*mobile));

        Ok(MoveOutcome {
            resolution,
            packet: buf.freeze(),
        })
    }
}
