// File: crates/chart-core/src/scale.rs
// Summary: Category (band) and value (linear) scale transforms.

/// Value coordinate (e.g., tickets sold).
pub type Value = f64;

/// Maps a value domain onto a pixel range. The range may run in either
/// direction (vertical value axes map `vmin` to the bottom pixel).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub from_px: f32,
    pub to_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new_linear(from_px: f32, to_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { from_px, to_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }
    /// Half the domain width; finite even when `vmax - vmin` overflows.
    #[inline]
    fn half_span(&self) -> Value { self.vmax / 2.0 - self.vmin / 2.0 }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let t = (v / 2.0 - self.vmin / 2.0) / self.half_span();
        self.from_px + t as f32 * (self.to_px - self.from_px)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let extent = self.to_px - self.from_px;
        if extent.abs() < f32::EPSILON { return self.vmin; }
        let t = ((px - self.from_px) / extent) as f64;
        self.vmin * (1.0 - t) + self.vmax * t
    }
    /// Pixel of the zero line, clamped into the domain.
    pub fn baseline_px(&self) -> f32 {
        self.to_px(0.0f64.clamp(self.vmin.min(self.vmax), self.vmax.max(self.vmin)))
    }
}

/// Splits a pixel range into `count` equal bands with a padding fraction
/// around each one.
#[derive(Clone, Copy, Debug)]
pub struct BandScale {
    pub start_px: f32,
    pub end_px: f32,
    pub count: usize,
    /// Fraction of each step left empty, split evenly on both sides.
    pub padding: f32,
}

impl BandScale {
    pub fn new(start_px: f32, end_px: f32, count: usize, padding: f32) -> Self {
        Self { start_px, end_px, count, padding: padding.clamp(0.0, 0.95) }
    }
    /// Distance between consecutive band starts.
    #[inline]
    pub fn step(&self) -> f32 {
        (self.end_px - self.start_px) / self.count.max(1) as f32
    }
    #[inline]
    pub fn bandwidth(&self) -> f32 { self.step() * (1.0 - self.padding) }
    /// Start pixel of band `index`.
    #[inline]
    pub fn band_start(&self, index: usize) -> f32 {
        self.start_px + self.step() * (index as f32 + self.padding * 0.5)
    }
    #[inline]
    pub fn center(&self, index: usize) -> f32 {
        self.start_px + self.step() * (index as f32 + 0.5)
    }
}
