use crate::layout::{GridLayout, calculate_grid, create_grid_layout};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Page size and grid configuration for a composition
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    pub page_size: PageSize,
    /// Page capacity before a new page is started
    pub images_per_page: usize,
    /// Column count; rows are derived from this and `images_per_page`
    pub columns: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            images_per_page: 4,
            columns: 2,
        }
    }
}

impl LayoutOptions {
    /// Options whose column count comes from the balanced grid for `images_per_page`
    pub fn balanced(page_size: PageSize, images_per_page: usize) -> Self {
        Self {
            page_size,
            images_per_page,
            columns: calculate_grid(images_per_page).cols,
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GridError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GridError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.images_per_page == 0 {
            return Err(GridError::Config(
                "Images per page must be at least 1".to_string(),
            ));
        }

        if self.columns == 0 {
            return Err(GridError::Config("Columns must be at least 1".to_string()));
        }

        Ok(())
    }

    /// Cell geometry for these options
    pub fn grid_layout(&self) -> GridLayout {
        create_grid_layout(self.page_size, self.images_per_page, self.columns)
    }
}
