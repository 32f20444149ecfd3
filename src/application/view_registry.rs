// View registry - resolves tab identifiers to the tenant's embedded views
use crate::application::invoice_view::InvoiceLifecycleView;
use crate::application::property_view::PropertyOccupancyView;
use crate::application::view_output::ViewOutput;
use crate::domain::custom_data::CustomData;
use crate::domain::dashboard::ConfigSchema;
use std::collections::HashMap;
use std::fmt;

/// Every view this tenant package knows how to build.
///
/// The key of each kind is both its tab id and the feature flag that gates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    PropertyManagement,
    InvoiceProcessing,
}

impl ViewKind {
    pub const ALL: [ViewKind; 2] = [ViewKind::PropertyManagement, ViewKind::InvoiceProcessing];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "propertyManagement" => Some(ViewKind::PropertyManagement),
            "invoiceProcessing" => Some(ViewKind::InvoiceProcessing),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            ViewKind::PropertyManagement => "propertyManagement",
            ViewKind::InvoiceProcessing => "invoiceProcessing",
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A view instance owned by the host for the lifetime of its mount.
#[derive(Debug, Clone)]
pub enum MountedView {
    Property(PropertyOccupancyView),
    Invoice(InvoiceLifecycleView),
}

impl MountedView {
    pub fn kind(&self) -> ViewKind {
        match self {
            MountedView::Property(_) => ViewKind::PropertyManagement,
            MountedView::Invoice(_) => ViewKind::InvoiceProcessing,
        }
    }

    pub fn render(&self, config: &ConfigSchema, data: &CustomData) -> ViewOutput {
        match self {
            MountedView::Property(view) => view.render(config),
            MountedView::Invoice(view) => view.render(config, data),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ViewFactory {
    kind: ViewKind,
    mount: fn(&ConfigSchema) -> MountedView,
}

impl ViewFactory {
    pub fn new(kind: ViewKind, mount: fn(&ConfigSchema) -> MountedView) -> Self {
        Self { kind, mount }
    }

    /// The built-in factory for `kind`.
    pub fn builtin(kind: ViewKind) -> Self {
        match kind {
            ViewKind::PropertyManagement => Self::new(kind, |config| {
                MountedView::Property(PropertyOccupancyView::mount(config))
            }),
            ViewKind::InvoiceProcessing => Self::new(kind, |config| {
                MountedView::Invoice(InvoiceLifecycleView::mount(config))
            }),
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn mount(&self, config: &ConfigSchema) -> MountedView {
        (self.mount)(config)
    }
}

impl fmt::Debug for ViewFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewFactory").field("kind", &self.kind).finish()
    }
}

impl PartialEq for ViewFactory {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

/// Lookup table from tab id to view factory, built once at startup.
///
/// A tab may be declared without a registered view; resolving it yields `None`
/// and the host shows a placeholder instead.
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    factories: HashMap<ViewKind, ViewFactory>,
}

impl ViewRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry with every built-in view.
    pub fn standard() -> Self {
        ViewKind::ALL
            .into_iter()
            .fold(Self::empty(), |registry, kind| registry.register(ViewFactory::builtin(kind)))
    }

    pub fn register(mut self, factory: ViewFactory) -> Self {
        self.factories.insert(factory.kind(), factory);
        self
    }

    pub fn resolve(&self, key: &str) -> Option<ViewFactory> {
        ViewKind::from_key(key).and_then(|kind| self.factories.get(&kind).copied())
    }
}
