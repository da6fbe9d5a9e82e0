//! Presentation renderer
//!
//! A [`Page`] owns the display surface: one column container per table
//! column, or the Terminal Error panel, plus the light/dark presentation
//! mode. Loads go through the [`Surface`] trait so the fetch orchestrator
//! does not depend on how the page is drawn.

pub mod html;

use serde::Deserialize;
use tracing::debug;

use crate::core::format::{format_cell, Fragment};
use crate::core::table::Table;

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    #[default]
    Dark,
    Light,
}

impl PresentationMode {
    pub fn toggled(self) -> Self {
        match self {
            PresentationMode::Dark => PresentationMode::Light,
            PresentationMode::Light => PresentationMode::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == PresentationMode::Light
    }

    /// Body class applied in this mode
    pub fn body_class(self) -> Option<&'static str> {
        match self {
            PresentationMode::Dark => None,
            PresentationMode::Light => Some("light-theme"),
        }
    }
}

/// Page rendering options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Initial presentation mode
    pub mode: PresentationMode,
    /// Document title
    pub title: String,
    /// Emit a complete HTML document instead of only the content region
    pub full_document: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            mode: PresentationMode::Dark,
            title: "Sheet".to_string(),
            full_document: true,
        }
    }
}

impl RenderOptions {
    /// Full document starting in light mode
    pub fn light() -> Self {
        Self {
            mode: PresentationMode::Light,
            ..Default::default()
        }
    }

    /// Content region only, for embedding in an existing page
    pub fn fragment() -> Self {
        Self {
            full_document: false,
            ..Default::default()
        }
    }
}

/// Column container holding the fragments of one source column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    fragments: Vec<Fragment>,
}

impl Column {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// What the display surface currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PageContent {
    #[default]
    Empty,
    Columns(Vec<Column>),
    Error,
}

/// Target of a load: receives either a table or an error
pub trait Surface {
    /// Clear the surface and lay out the table
    fn populate(&mut self, table: &Table);

    /// Clear the surface and show the Terminal Error panel
    fn show_error(&mut self);
}

/// The rendered page
#[derive(Debug, Clone, Default)]
pub struct Page {
    options: RenderOptions,
    mode: PresentationMode,
    content: PageContent,
    error_displays: usize,
}

impl Page {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            mode: options.mode,
            options,
            content: PageContent::Empty,
            error_displays: 0,
        }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    /// Flip between light and dark; nothing else changes
    pub fn toggle_mode(&mut self) -> PresentationMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    /// Column containers, empty unless a table is shown
    pub fn columns(&self) -> &[Column] {
        match &self.content {
            PageContent::Columns(columns) => columns,
            _ => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        self.content == PageContent::Error
    }

    /// How many times the Terminal Error panel has been shown
    pub fn error_displays(&self) -> usize {
        self.error_displays
    }

    pub fn clear(&mut self) {
        self.content = PageContent::Empty;
    }

    /// Only the content region
    pub fn content_html(&self) -> String {
        html::content_region(&self.content)
    }

    /// Render according to the page options
    pub fn to_html(&self) -> String {
        if self.options.full_document {
            html::document(&self.options.title, self.mode, &self.content)
        } else {
            self.content_html()
        }
    }
}

impl Surface for Page {
    fn populate(&mut self, table: &Table) {
        self.clear();
        let mut columns: Vec<Column> = (0..table.column_count()).map(|_| Column::new()).collect();
        for (index, text) in table.placed_cells() {
            if let Some(column) = columns.get_mut(index) {
                column.push(format_cell(text));
            }
        }
        debug!(
            columns = columns.len(),
            fragments = columns.iter().map(Column::len).sum::<usize>(),
            "page populated"
        );
        self.content = PageContent::Columns(columns);
    }

    fn show_error(&mut self) {
        self.content = PageContent::Error;
        self.error_displays += 1;
    }
}
