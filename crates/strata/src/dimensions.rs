//! Node-kind to box-size dispatch.
//!
//! A total lookup: every [`NodeKind`] resolves to a box, with an explicit fallback for
//! kinds the table has no entry for. No failure mode.

use rustc_hash::FxHashMap;

use crate::model::{NodeKind, Size};

/// Box used for any kind without a configured entry.
pub const FALLBACK_SIZE: Size = Size {
    width: 180.0,
    height: 80.0,
};

#[derive(Debug, Clone)]
pub struct DimensionTable {
    entries: FxHashMap<NodeKind, Size>,
    fallback: Size,
}

impl Default for DimensionTable {
    fn default() -> Self {
        let mut entries = FxHashMap::default();
        entries.insert(
            NodeKind::Agent,
            Size {
                width: 220.0,
                height: 110.0,
            },
        );
        entries.insert(
            NodeKind::Task,
            Size {
                width: 200.0,
                height: 90.0,
            },
        );
        entries.insert(
            NodeKind::Tool,
            Size {
                width: 170.0,
                height: 70.0,
            },
        );
        entries.insert(
            NodeKind::Artifact,
            Size {
                width: 160.0,
                height: 70.0,
            },
        );
        entries.insert(
            NodeKind::Annotation,
            Size {
                width: 140.0,
                height: 50.0,
            },
        );
        Self {
            entries,
            fallback: FALLBACK_SIZE,
        }
    }
}

impl DimensionTable {
    /// A table with no per-kind entries; every kind resolves to the fallback.
    pub fn uniform(fallback: Size) -> Self {
        Self {
            entries: FxHashMap::default(),
            fallback,
        }
    }

    pub fn resolve(&self, kind: NodeKind) -> Size {
        self.entries.get(&kind).copied().unwrap_or(self.fallback)
    }

    pub fn set(&mut self, kind: NodeKind, size: Size) -> &mut Self {
        self.entries.insert(kind, size);
        self
    }

    pub fn set_fallback(&mut self, size: Size) -> &mut Self {
        self.fallback = size;
        self
    }

    pub fn fallback(&self) -> Size {
        self.fallback
    }
}
