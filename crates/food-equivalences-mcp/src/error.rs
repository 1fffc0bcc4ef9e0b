use food_equivalences::CatalogError;
use mcp_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("catalog integrity error: {0}")]
    Catalog(#[from] CatalogError),
}
