use bytemuck::{Pod, Zeroable};

/// What a render instance depicts. Stored as `f32` in [`RenderInstance::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ShapeKind {
    Obstacle = 0,
    Hazard = 1,
    Pickup = 2,
    Goal = 3,
    Actor = 4,
}

impl ShapeKind {
    pub fn as_f32(self) -> f32 {
        self as u32 as f32
    }
}

/// Bits in [`RenderInstance::flags`].
pub mod flags {
    /// Pickup already consumed.
    pub const COLLECTED: u32 = 1 << 0;
    /// Actor standing on something.
    pub const GROUNDED: u32 = 1 << 1;
    /// Actor carrying the other one.
    pub const HOLDING: u32 = 1 << 2;
    /// Actor being carried.
    pub const HELD: u32 = 1 << 3;
}

/// One rectangle for the external renderer: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Top-left corner in world space.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Cosmetic tilt in radians, around the rectangle center.
    pub rotation: f32,
    /// A [`ShapeKind`] discriminant.
    pub kind: f32,
    /// A combination of [`flags`] bits.
    pub flags: f32,
    /// 0xRRGGBB, exact in an f32 mantissa. Zero means "renderer default".
    pub rgb: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn pack_rgb(rgb: [u8; 3]) -> f32 {
        (((rgb[0] as u32) << 16) | ((rgb[1] as u32) << 8) | rgb[2] as u32) as f32
    }
}

/// Flat instance list for one frame. Static level geometry comes first,
/// actors start at `actor_split`.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
    pub actor_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
            actor_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.actor_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn mark_actor_split(&mut self) {
        self.actor_split = self.instances.len() as u32;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), RenderInstance::STRIDE_BYTES);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn buffer_views_as_floats() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance { x: 1.0, rgb: 2.0, ..Default::default() });
        buf.push(RenderInstance::default());
        assert_eq!(buf.instance_count(), 2);
        let floats = buf.as_floats();
        assert_eq!(floats.len(), 16);
        assert_eq!(floats[0], 1.0);
        assert_eq!(floats[7], 2.0);
    }

    #[test]
    fn rgb_packing_is_exact() {
        assert_eq!(RenderInstance::pack_rgb([255, 255, 255]), 16_777_215.0);
        assert_eq!(RenderInstance::pack_rgb([80, 80, 255]) as u32, 0x5050ff);
    }
}
