pub mod bar;
pub mod column;
pub mod segment;

pub use bar::{render_bar, render_bar_with};
pub use column::render_column;
pub use segment::{RenderedSegment, Spark, Style};

use crate::core::{
    color::{SchemeRef, SchemeRegistry},
    config::{BarOptions, ColumnOptions},
    error::SparkError,
    item::Item,
};

/// Resolves scheme descriptors against one registry, then renders.
///
/// Every call resolves a fresh scheme, so rotation always starts at the
/// first color and repeated calls with equal inputs produce equal output.
#[derive(Clone, Copy, Debug)]
pub struct Renderer<'r> {
    registry: &'r SchemeRegistry,
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new(SchemeRegistry::shared())
    }
}

impl<'r> Renderer<'r> {
    #[must_use]
    pub fn new(registry: &'r SchemeRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &'r SchemeRegistry {
        self.registry
    }

    pub fn column(
        &self,
        items: &[Item],
        scheme: SchemeRef<'_>,
        options: &ColumnOptions,
    ) -> Result<Spark, SparkError> {
        let mut colors = self.registry.resolve(scheme)?;
        render_column(items, &mut colors, options)
    }

    pub fn bar(
        &self,
        items: &[Item],
        width: usize,
        scheme: SchemeRef<'_>,
    ) -> Result<Spark, SparkError> {
        self.bar_with(items, width, scheme, &BarOptions::default())
    }

    pub fn bar_with(
        &self,
        items: &[Item],
        width: usize,
        scheme: SchemeRef<'_>,
        options: &BarOptions,
    ) -> Result<Spark, SparkError> {
        let mut colors = self.registry.resolve(scheme)?;
        render_bar_with(items, width, &mut colors, options)
    }
}
