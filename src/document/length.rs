use serde::{Deserialize, Serialize};

/// English Metric Units per centimeter (914400 EMU per inch).
pub const EMU_PER_CM: f64 = 360_000.0;

/// English Metric Units per typographic point.
pub const EMU_PER_PT: f64 = 12_700.0;

/// A linear measurement stored in English Metric Units.
///
/// Word-processing formats express margins, indents and font sizes as EMU (or
/// units trivially convertible to EMU), so the document model stores the raw
/// integer and converts to centimeters or points on demand. Serialized as the
/// bare EMU value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Length(i64);

impl Length {
    #[must_use]
    pub const fn from_emu(emu: i64) -> Self {
        Self(emu)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Values stay far below i64 range
    pub fn from_cm(cm: f64) -> Self {
        Self((cm * EMU_PER_CM).round() as i64)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_pt(pt: f64) -> Self {
        Self((pt * EMU_PER_PT).round() as i64)
    }

    #[must_use]
    pub const fn emu(self) -> i64 {
        self.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn cm(self) -> f64 {
        self.0 as f64 / EMU_PER_CM
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pt(self) -> f64 {
        self.0 as f64 / EMU_PER_PT
    }
}

#[cfg(test)]
#[path = "length_tests.rs"]
mod tests;
