pub mod config;
pub mod cuisines;
pub mod logger;
pub mod model;
pub mod normalize;
pub mod postcode;
pub mod raw;
pub mod source;

pub use config::{load_app_config, load_app_config_from_env, AppConfig, ConfigError};
pub use logger::{Logger, TracingLogger};
pub use model::{Address, Restaurant};
pub use normalize::normalize_restaurant;
pub use postcode::{canonicalize_postcode, validate_postcode, PostcodeValidation};
pub use raw::{RawAddress, RawCuisine, RawRating, RawRestaurant, RestaurantsResponse};
pub use source::{FetchError, RestaurantSource};
