use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Pagination query parameters accepted by `index` and `search`.
///
/// Two formats are supported:
/// - **Standard REST:** `page` (1-based) and `per_page`, for example `page=2&per_page=25`
/// - **React Admin:** `range` as a JSON array of inclusive indices, for example `[0,9]`
///
/// When neither is given the first page of the model's default size is returned.
/// Search parameters are read separately, so unknown keys are ignored here.
#[derive(Clone, Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Page number (1-based).
    #[param(example = 1)]
    pub page: Option<u64>,
    /// Number of items per page.
    #[param(example = 10)]
    pub per_page: Option<u64>,
    /// Range in the format "[start, end]".
    #[param(example = "[0,9]")]
    pub range: Option<String>,
}
