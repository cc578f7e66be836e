pub mod api;
pub mod config;
pub mod detail;
pub mod error;
pub mod http;
pub mod normalize;
pub mod pages;
pub mod search;
pub mod state;
pub mod types;

pub use api::{RecipesApi, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET, DEFAULT_SIMILAR_LIMIT};
pub use config::{ClientConfig, SearchMode, DEFAULT_BASE_URL};
pub use detail::DetailAggregator;
pub use error::{ApiError, FetchError};
pub use http::{ApiHttpClient, HttpClient, MockClient, MockResponse};
pub use normalize::normalize;
pub use pages::{DashboardPage, DetailPage, SearchPage};
pub use search::{ClientSideFilterStrategy, RemoteMatchStrategy, SearchResolver, SearchStrategy};
pub use state::{LoadState, RequestToken, ViewStateController};
pub use types::{
    Difficulty, Recipe, RecipeId, RecipePage, SearchOutcome, Step, StepBlock, WriteAck,
};
