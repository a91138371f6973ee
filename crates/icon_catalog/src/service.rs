//! Icon registry service contracts and adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use crate::types::IconGroup;

/// Object-safe boxed future used by [`IconCatalog`] async methods.
pub type CatalogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

type RefreshLoader = Rc<dyn Fn() -> Result<Vec<IconGroup>, String>>;

/// Host registry of categorized icons.
pub trait IconCatalog {
    /// Returns a snapshot of the current icon groups in display order.
    fn groups(&self) -> Vec<IconGroup>;

    /// Whether [`IconCatalog::refresh`] is backed by a real reload.
    ///
    /// Controls only offer a refresh action when this returns `true`.
    fn supports_refresh(&self) -> bool {
        false
    }

    /// Reloads the icon groups from the backing source.
    fn refresh<'a>(&'a self) -> CatalogFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Registry adapter for hosts without an icon library.
pub struct NoopIconCatalog;

impl IconCatalog for NoopIconCatalog {
    fn groups(&self) -> Vec<IconGroup> {
        Vec::new()
    }
}

#[derive(Clone, Default)]
/// In-memory registry with an optional synchronous reload source.
pub struct MemoryIconCatalog {
    groups: Rc<RefCell<Vec<IconGroup>>>,
    loader: Option<RefreshLoader>,
}

impl std::fmt::Debug for MemoryIconCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryIconCatalog")
            .field("groups", &self.groups.borrow().len())
            .field("refreshable", &self.loader.is_some())
            .finish()
    }
}

impl MemoryIconCatalog {
    /// Creates a registry seeded with `groups`.
    pub fn new(groups: Vec<IconGroup>) -> Self {
        Self {
            groups: Rc::new(RefCell::new(groups)),
            loader: None,
        }
    }

    /// Attaches a reload source; subsequent refreshes replace all groups with its output.
    pub fn with_refresh(
        mut self,
        loader: impl Fn() -> Result<Vec<IconGroup>, String> + 'static,
    ) -> Self {
        self.loader = Some(Rc::new(loader));
        self
    }

    /// Replaces all groups.
    pub fn replace(&self, groups: Vec<IconGroup>) {
        *self.groups.borrow_mut() = groups;
    }
}

impl IconCatalog for MemoryIconCatalog {
    fn groups(&self) -> Vec<IconGroup> {
        self.groups.borrow().clone()
    }

    fn supports_refresh(&self) -> bool {
        self.loader.is_some()
    }

    fn refresh<'a>(&'a self) -> CatalogFuture<'a, Result<(), String>> {
        Box::pin(async move {
            let Some(loader) = self.loader.as_ref() else {
                return Ok(());
            };
            let groups = (**loader)()?;
            self.replace(groups);
            Ok(())
        })
    }
}
