pub mod entity_set;
pub mod personnel;
pub mod route;
pub mod schedule;
pub mod search;
pub mod stop;

pub use entity_set::EntitySet;
pub use personnel::Personnel;
pub use route::Route;
pub use schedule::Schedule;
pub use search::{RouteCriteria, RouteFilter};
pub use stop::Stop;
