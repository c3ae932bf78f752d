use crate::{LayoutConfig, LayoutError, PositionedElement};
use quire_style::StyleRegistry;
use quire_types::{Rect, Size};
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::ops::Range;

// --- State Definitions (Type-Safe) ---

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    /// First row not yet placed.
    pub row_index: usize,
}

/// Where a split block resumes on the next page.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeState {
    Table(TableState),
}

impl NodeState {
    pub fn as_table(&self) -> Result<&TableState, LayoutError> {
        match self {
            NodeState::Table(s) => Ok(s),
        }
    }
}

// --- Environment ---

/// Read-only data shared across one layout pass.
pub struct LayoutEnvironment<'a> {
    pub styles: &'a StyleRegistry,
    pub config: &'a LayoutConfig,
    /// Scratch cache for node measurements (wrapped lines, table grids),
    /// keyed by a hash of the node and the available width.
    pub cache: &'a RefCell<HashMap<u64, Box<dyn Any>>>,
}

impl<'a> LayoutEnvironment<'a> {
    /// Returns the cached value for `key`, computing and storing it on a miss.
    pub fn cached<T, F>(&self, key: u64, compute: F) -> Result<T, LayoutError>
    where
        T: Clone + 'static,
        F: FnOnce() -> Result<T, LayoutError>,
    {
        if let Some(hit) = self
            .cache
            .borrow()
            .get(&key)
            .and_then(|v| v.downcast_ref::<T>())
        {
            return Ok(hit.clone());
        }
        let value = compute()?;
        self.cache.borrow_mut().insert(key, Box::new(value.clone()));
        Ok(value)
    }
}

// --- Fragments ---

/// The slice of a block placed on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub height: f32,
    /// Table rows covered by this fragment; `None` for atomic content.
    pub rows: Option<Range<usize>>,
    /// Resume point for the remainder, `None` once the block is complete.
    pub next: Option<NodeState>,
}

impl Fragment {
    pub fn whole(height: f32) -> Self {
        Self {
            height,
            rows: None,
            next: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Fit {
    Placed(Fragment),
    /// Nothing fits in the available height; `required` is the height of the
    /// smallest unit that could be placed (whole block or next row).
    Deferred { required: f32 },
}

pub trait LayoutNode: Debug + Sync {
    /// Full size of the node at `width`. Height depends on width through
    /// text wrapping.
    fn measure(&self, env: &LayoutEnvironment, width: f32) -> Result<Size, LayoutError>;

    /// Plans the next fragment starting from `state` (`None` = from the start)
    /// into `available` points of height.
    fn plan(
        &self,
        env: &LayoutEnvironment,
        width: f32,
        state: Option<&NodeState>,
        available: f32,
    ) -> Result<Fit, LayoutError> {
        debug_assert!(state.is_none(), "atomic nodes never resume");
        plan_whole(self, env, width, available)
    }

    /// Emits drawing elements for `rows` (or the whole node) into `frame`.
    fn paint(
        &self,
        env: &LayoutEnvironment,
        frame: Rect,
        rows: Option<Range<usize>>,
        out: &mut Vec<PositionedElement>,
    ) -> Result<(), LayoutError>;

    /// Whether the node can be split across pages.
    fn is_splittable(&self) -> bool {
        false
    }

    /// Extra space above the node, dropped at the top of a page.
    fn space_before(&self, _env: &LayoutEnvironment) -> Result<f32, LayoutError> {
        Ok(0.0)
    }

    fn space_after(&self, _env: &LayoutEnvironment) -> Result<f32, LayoutError> {
        Ok(0.0)
    }
}

/// Places a node whole or not at all.
pub fn plan_whole<N: LayoutNode + ?Sized>(
    node: &N,
    env: &LayoutEnvironment,
    width: f32,
    available: f32,
) -> Result<Fit, LayoutError> {
    let height = node.measure(env, width)?.height;
    if crate::algorithms::pagination::fits(height, available) {
        Ok(Fit::Placed(Fragment::whole(height)))
    } else {
        Ok(Fit::Deferred { required: height })
    }
}
