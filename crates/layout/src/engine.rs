use crate::interface::{Fit, LayoutEnvironment, LayoutNode, NodeState};
use crate::nodes::Block;
use crate::page::{Page, PageGeometry, Placement};
use crate::validate::validate;
use crate::{LayoutConfig, LayoutError};
use quire_style::StyleRegistry;
use quire_types::Rect;
use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Flows blocks onto fixed-size pages.
///
/// One engine serves one document build: it owns the (read-only) style
/// registry and a measurement cache reused across pagination runs.
pub struct LayoutEngine {
    styles: Arc<StyleRegistry>,
    config: LayoutConfig,
    cache: RefCell<HashMap<u64, Box<dyn Any>>>,
}

impl LayoutEngine {
    pub fn new(styles: Arc<StyleRegistry>, config: LayoutConfig) -> Self {
        Self {
            styles,
            config,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn styles(&self) -> &StyleRegistry {
        &self.styles
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn environment(&self) -> LayoutEnvironment<'_> {
        LayoutEnvironment {
            styles: &self.styles,
            config: &self.config,
            cache: &self.cache,
        }
    }

    /// Full size of `block` laid out at `width`.
    ///
    /// Each call starts from an empty measurement cache.
    pub fn measure(&self, block: &Block, width: f32) -> Result<quire_types::Size, LayoutError> {
        self.reset_cache();
        block.measure(&self.environment(), width)
    }

    // Table layouts are keyed by address, and a block measured earlier may
    // have been dropped and its address reused. Entries never outlive the
    // call that borrows the blocks they describe.
    fn reset_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    /// Validates `blocks` and returns a lazy page iterator over them.
    pub fn paginate<'a>(
        &'a self,
        blocks: &'a [Block],
        geometry: &PageGeometry,
    ) -> Result<Paginator<'a>, LayoutError> {
        geometry.validate()?;
        validate(blocks, &self.styles)?;
        if self.config.max_pages == 0 {
            return Err(LayoutError::PageLimitExceeded(0));
        }
        if !(self.config.block_spacing.is_finite() && self.config.block_spacing >= 0.0) {
            return Err(LayoutError::InvalidBlock(format!(
                "block spacing must be non-negative, got {}",
                self.config.block_spacing
            )));
        }
        self.reset_cache();

        Ok(Paginator {
            engine: self,
            blocks,
            content: geometry.content_rect(),
            index: 0,
            state: None,
            page_count: 0,
            finished: false,
        })
    }

    /// Lays out the whole document eagerly.
    pub fn paginate_all(
        &self,
        blocks: &[Block],
        geometry: &PageGeometry,
    ) -> Result<Vec<Page>, LayoutError> {
        self.paginate(blocks, geometry)?.collect()
    }
}

/// Convenience wrapper: builds an engine and returns every page.
pub fn paginate(
    blocks: &[Block],
    geometry: &PageGeometry,
    styles: Arc<StyleRegistry>,
    config: LayoutConfig,
) -> Result<Vec<Page>, LayoutError> {
    LayoutEngine::new(styles, config).paginate_all(blocks, geometry)
}

/// Yields pages one at a time. After an error the iterator is exhausted.
pub struct Paginator<'a> {
    engine: &'a LayoutEngine,
    blocks: &'a [Block],
    content: Rect,
    /// Next block to place.
    index: usize,
    /// Resume point inside `blocks[index]` when it was split.
    state: Option<NodeState>,
    page_count: usize,
    finished: bool,
}

impl<'a> Paginator<'a> {
    fn fill_page(&mut self, page: &mut Page) -> Result<(), LayoutError> {
        let env = self.engine.environment();
        let width = self.content.width;
        let mut y = 0.0f32;

        while let Some(block) = self.blocks.get(self.index) {
            if block.is_page_break() {
                self.index += 1;
                log::trace!("Page break after block {}", self.index - 1);
                return Ok(());
            }

            let gap = if y > 0.0 && self.state.is_none() {
                block.space_before(&env)?
            } else {
                0.0
            };
            let available = self.content.height - y - gap;

            match block.plan(&env, width, self.state.as_ref(), available)? {
                Fit::Placed(fragment) => {
                    let top = y + gap;
                    let frame = Rect::new(
                        self.content.x,
                        self.content.y + top,
                        width,
                        fragment.height,
                    );
                    block.paint(&env, frame, fragment.rows.clone(), &mut page.elements)?;
                    log::trace!(
                        "Placed {} {} at y={:.2} (h={:.2}) on page {}",
                        block.kind(),
                        self.index,
                        top,
                        fragment.height,
                        page.number
                    );
                    page.placements.push(Placement {
                        block_index: self.index,
                        y: top,
                        height: fragment.height,
                        rows: fragment.rows,
                    });

                    if fragment.next.is_some() {
                        // The remainder continues on the next page.
                        self.state = fragment.next;
                        return Ok(());
                    }
                    y = top
                        + fragment.height
                        + self.engine.config.block_spacing
                        + block.space_after(&env)?;
                    self.state = None;
                    self.index += 1;
                }
                Fit::Deferred { required } => {
                    if page.is_empty() {
                        return Err(LayoutError::ContentTooLarge {
                            height: required,
                            available: self.content.height,
                        });
                    }
                    return Ok(());
                }
            }
        }

        self.finished = true;
        Ok(())
    }
}

impl<'a> Iterator for Paginator<'a> {
    type Item = Result<Page, LayoutError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        self.page_count += 1;
        if self.page_count > self.engine.config.max_pages {
            self.finished = true;
            log::warn!(
                "Page limit of {} exceeded at block {}",
                self.engine.config.max_pages,
                self.index
            );
            return Some(Err(LayoutError::PageLimitExceeded(
                self.engine.config.max_pages,
            )));
        }

        let mut page = Page::new(self.page_count, self.content);
        match self.fill_page(&mut page) {
            Ok(()) => {
                log::debug!(
                    "Closed page {} with {} placements ({:.2}pt used)",
                    page.number,
                    page.placements.len(),
                    page.used_height()
                );
                Some(Ok(page))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
